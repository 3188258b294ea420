use deku::ctx::{BitSize, Endian};
use deku::no_std_io::{Read, Seek, Write};
use deku::prelude::*;
use deku::reader::Reader;
use deku::writer::Writer;
use serde::Serialize;
use std::fmt;
use tracing::trace;

/**
 * ## Target Identification (I021/170)
 *
 * Callsign or registration downlinked from the aircraft: eight
 * characters packed into six octets, six bits each, using the restricted
 * IA-5 subset {A–Z, 0–9, space}. Shorter identifications are space
 * padded on the right; the stored string keeps the padding so encoding
 * reproduces the wire bytes exactly.
 */
#[derive(Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Clone)]
pub struct TargetIdentification {
    /// The eight-character identification, space padded
    #[deku(
        reader = "read_ident(deku::reader)",
        writer = "write_ident(deku::writer, ident)"
    )]
    pub ident: String,
}

impl TargetIdentification {
    /// Space-pads or truncates to eight characters.
    pub fn new(ident: &str) -> Self {
        Self {
            ident: format!("{ident: <8.8}"),
        }
    }

    /// The identification without trailing padding.
    pub fn trimmed(&self) -> &str {
        self.ident.trim_end_matches(' ')
    }
}

/// Character lookup for the 6-bit IA-5 subset: A–Z at 0x01–0x1a, space at
/// 0x20, digits at 0x30–0x39. Invalid codes decode to `#`.
const CHAR_LOOKUP: &[u8; 64] =
    b"#ABCDEFGHIJKLMNOPQRSTUVWXYZ##### ###############0123456789######";

fn char_to_code(c: u8) -> u8 {
    match c {
        b'A'..=b'Z' => c - b'A' + 1,
        b'0'..=b'9' => c,
        b' ' => 0x20,
        _ => 0,
    }
}

fn read_ident<R: Read + Seek>(
    reader: &mut Reader<R>,
) -> Result<String, DekuError> {
    let mut ident = String::with_capacity(8);
    for _ in 0..8 {
        let code = u8::from_reader_with_ctx(reader, (Endian::Big, BitSize(6)))?;
        ident.push(CHAR_LOOKUP[code as usize] as char);
    }
    trace!("reading target identification {}", ident);
    Ok(ident)
}

fn write_ident<W: Write + Seek>(
    writer: &mut Writer<W>,
    ident: &str,
) -> Result<(), DekuError> {
    for i in 0..8 {
        let c = ident.as_bytes().get(i).copied().unwrap_or(b' ');
        char_to_code(c).to_writer(writer, (Endian::Big, BitSize(6)))?;
    }
    Ok(())
}

impl fmt::Display for TargetIdentification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Callsign:      {}", self.trimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlit::hex;

    #[test]
    fn test_kl1523() {
        let item = TargetIdentification::new("KL1523");
        assert_eq!(item.ident, "KL1523  ");
        let bytes = item.to_bytes().unwrap();
        assert_eq!(bytes, hex!("2ccc75cb3820").to_vec());
        let (_, decoded) =
            TargetIdentification::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(decoded.ident, "KL1523  ");
        assert_eq!(decoded.trimmed(), "KL1523");
    }

    #[test]
    fn test_invalid_char_sentinel() {
        // code 0x1f is unassigned and decodes to '#'
        let bytes = hex!("7df820820820");
        let (_, decoded) =
            TargetIdentification::from_bytes((&bytes, 0)).unwrap();
        assert!(decoded.ident.starts_with('#'));
    }
}
