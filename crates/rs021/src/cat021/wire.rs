//! Bit-level primitives shared by every item codec.
//!
//! ASTERIX fields are big-endian, MSB-first bit fields whose width rarely
//! matches a native integer type. Items store the raw (unsigned) wire value
//! and go through these helpers for two's-complement interpretation and
//! LSB scaling, so no layout-dependent bit-field struct ever exists.

use deku::ctx::{BitSize, Endian};
use deku::no_std_io::{Read, Seek, Write};
use deku::prelude::*;
use deku::reader::Reader;
use deku::writer::Writer;

/// Scale factor of 24-bit WGS-84 coordinates: 180 / 2²³ degrees.
pub const LSB_LATLON_24: f64 = 180.0 / (1u32 << 23) as f64;

/// Scale factor of 32-bit high-resolution WGS-84 coordinates: 180 / 2³⁰.
pub const LSB_LATLON_32: f64 = 180.0 / (1u32 << 30) as f64;

/// Sign-extend a `bits`-wide two's-complement raw value into an `i32`.
pub fn sign_extend(raw: u32, bits: u32) -> i32 {
    debug_assert!(bits >= 1 && bits <= 32);
    let shift = 32 - bits;
    ((raw << shift) as i32) >> shift
}

/// Truncate an `i32` to its `bits`-wide two's-complement representation.
///
/// Values outside the representable range wrap, as on the wire; callers
/// that want saturation clamp first (see [`unscale_signed`]).
pub fn truncate(value: i32, bits: u32) -> u32 {
    debug_assert!(bits >= 1 && bits <= 32);
    (value as u32) & mask(bits)
}

fn mask(bits: u32) -> u32 {
    if bits == 32 {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

/// Physical value of an unsigned raw field: `raw * lsb`.
pub fn scale_unsigned(raw: u32, lsb: f64) -> f64 {
    raw as f64 * lsb
}

/// Physical value of a `bits`-wide two's-complement raw field.
pub fn scale_signed(raw: u32, bits: u32, lsb: f64) -> f64 {
    sign_extend(raw, bits) as f64 * lsb
}

/// Raw value for a physical quantity in an unsigned `bits`-wide field:
/// `round(value / lsb)`, clamped to `0..=2^bits - 1`.
pub fn unscale_unsigned(value: f64, lsb: f64, bits: u32) -> u32 {
    let n = (value / lsb).round();
    let max = mask(bits) as f64;
    n.clamp(0.0, max) as u32
}

/// Raw value for a physical quantity in a signed `bits`-wide field:
/// `round(value / lsb)`, clamped to the two's-complement range of the
/// field, then truncated to `bits`.
pub fn unscale_signed(value: f64, lsb: f64, bits: u32) -> u32 {
    let n = (value / lsb).round();
    let min = -((1i64 << (bits - 1)) as f64);
    let max = ((1i64 << (bits - 1)) - 1) as f64;
    truncate(n.clamp(min, max) as i32, bits)
}

/// Read the chain of FX-extended 7-bit payload octets that follows a
/// subfield whose own FX bit was set.
///
/// Each octet carries 7 payload bits (MSB-first) and a trailing FX bit;
/// the chain ends on FX=0 or after `max` octets, whichever comes first.
pub fn read_fx_chain<R: Read + Seek>(
    reader: &mut Reader<R>,
    first_fx: u8,
    max: usize,
) -> Result<Vec<u8>, DekuError> {
    let mut octets = Vec::new();
    let mut fx = first_fx;
    while fx == 1 {
        if octets.len() == max {
            return Err(DekuError::Assertion(
                format!("FX chain longer than {max} extension octets").into(),
            ));
        }
        let payload =
            u8::from_reader_with_ctx(reader, (Endian::Big, BitSize(7)))?;
        fx = u8::from_reader_with_ctx(reader, (Endian::Big, BitSize(1)))?;
        octets.push(payload);
    }
    Ok(octets)
}

/// Mirror of [`read_fx_chain`]: emit each 7-bit payload with FX=1 on all
/// but the last octet.
pub fn write_fx_chain<W: Write + Seek>(
    writer: &mut Writer<W>,
    octets: &[u8],
) -> Result<(), DekuError> {
    for (i, payload) in octets.iter().enumerate() {
        let fx = u8::from(i + 1 < octets.len());
        (payload & 0x7f).to_writer(writer, (Endian::Big, BitSize(7)))?;
        fx.to_writer(writer, (Endian::Big, BitSize(1)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0x7fffff, 24), 8_388_607);
        assert_eq!(sign_extend(0x800000, 24), -8_388_608);
        assert_eq!(sign_extend(0xffffff, 24), -1);
        assert_eq!(sign_extend(0x3ff, 10), -1);
        assert_eq!(sign_extend(0x200, 10), -512);
        assert_eq!(sign_extend(0x1ff, 10), 511);
    }

    #[test]
    fn test_truncate_roundtrip() {
        for value in [-8_388_608, -1, 0, 1, 8_388_607] {
            assert_eq!(sign_extend(truncate(value, 24), 24), value);
        }
        // out of range wraps
        assert_eq!(truncate(8_388_608, 24), 0x800000);
    }

    #[test]
    fn test_unscale_clamps() {
        // 16-bit signed, LSB 6.25 ft (geometric height)
        assert_eq!(unscale_signed(1237.5, 6.25, 16), 198);
        assert_eq!(
            sign_extend(unscale_signed(-1e9, 6.25, 16), 16),
            i16::MIN as i32
        );
        assert_eq!(
            sign_extend(unscale_signed(1e9, 6.25, 16), 16),
            i16::MAX as i32
        );
        // unsigned clamp at zero
        assert_eq!(unscale_unsigned(-4.0, 0.5, 8), 0);
        assert_eq!(unscale_unsigned(1e9, 0.5, 8), 255);
    }
}
