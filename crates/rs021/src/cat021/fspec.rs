//! FSPEC presence bitmap.
//!
//! A record's FSPEC is a chain of 1 to 7 octets. Each octet carries seven
//! presence bits, MSB-first, mapped to consecutive Field Reference Numbers
//! (FRN 1 sits in the MSB of octet 1), plus a trailing FX bit: octet *k+1*
//! exists iff octet *k*'s FX bit is set, and the last octet's FX is clear.

use super::Error;
use tracing::trace;

/// Highest Field Reference Number in the category 021 UAP (FRN 48 is the
/// Reserved Expansion Field, FRN 49 the Special Purpose Field).
pub const MAX_FRN: u8 = 49;

/// Maximum number of FSPEC octets for category 021: ceil(49 / 7).
pub const MAX_OCTETS: usize = 7;

/// The set of items present in one record, indexed by FRN.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    frns: u64,
}

impl FieldSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the item at `frn` (1-based) as present.
    pub fn set(&mut self, frn: u8) {
        debug_assert!(frn >= 1 && frn <= MAX_FRN);
        self.frns |= 1 << (frn - 1);
    }

    pub fn is_set(&self, frn: u8) -> bool {
        debug_assert!(frn >= 1 && frn <= MAX_FRN);
        self.frns & (1 << (frn - 1)) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.frns == 0
    }

    /// FRNs present, in canonical (ascending) order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=MAX_FRN).filter(|&frn| self.is_set(frn))
    }

    /// Decode an FSPEC from the start of `input`, returning the bitmap and
    /// the number of octets consumed.
    pub fn read(input: &[u8]) -> Result<(Self, usize), Error> {
        let mut fspec = Self::new();
        let mut consumed = 0;
        loop {
            let octet = *input.get(consumed).ok_or(Error::TruncatedMessage {
                expected: consumed + 1,
                actual: input.len(),
            })?;
            for bit in 0..7u8 {
                if octet & (0x80 >> bit) != 0 {
                    fspec.set(consumed as u8 * 7 + bit + 1);
                }
            }
            consumed += 1;
            if octet & 0x01 == 0 {
                break;
            }
            if consumed == MAX_OCTETS {
                return Err(Error::FspecTooLong);
            }
        }
        trace!("FSPEC: {} octets, FRNs {:?}", consumed, fspec.iter().collect::<Vec<_>>());
        Ok((fspec, consumed))
    }

    /// Number of octets the encoded form occupies: enough to reach the
    /// highest set FRN, never zero for a non-empty set.
    pub fn octet_count(&self) -> usize {
        match self.iter().last() {
            Some(max) => (max as usize).div_ceil(7),
            None => 0,
        }
    }

    /// Encode as the minimum number of octets, FX set on every octet but
    /// the last. An empty set encodes to nothing; the record assembler
    /// rejects that case before calling here.
    pub fn to_bytes(&self) -> Vec<u8> {
        let count = self.octet_count();
        let mut octets = vec![0u8; count];
        for frn in self.iter() {
            let idx = (frn - 1) as usize / 7;
            let bit = (frn - 1) % 7;
            octets[idx] |= 0x80 >> bit;
        }
        for octet in octets.iter_mut().take(count.saturating_sub(1)) {
            *octet |= 0x01;
        }
        octets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_octet() {
        let mut fspec = FieldSpec::new();
        fspec.set(1);
        fspec.set(4);
        assert_eq!(fspec.to_bytes(), vec![0x90]);
        let (decoded, consumed) = FieldSpec::read(&[0x90, 0xff]).unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(decoded, fspec);
    }

    #[test]
    fn test_fx_chaining() {
        let mut fspec = FieldSpec::new();
        fspec.set(1);
        fspec.set(8); // first bit of octet 2
        assert_eq!(fspec.to_bytes(), vec![0x81, 0x80]);
        let (decoded, consumed) = FieldSpec::read(&[0x81, 0x80]).unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(decoded, fspec);
    }

    #[test]
    fn test_octet_count_invariant() {
        for frn in 1..=MAX_FRN {
            let mut fspec = FieldSpec::new();
            fspec.set(frn);
            let expected = (frn as usize).div_ceil(7);
            assert_eq!(fspec.octet_count(), expected);
            let bytes = fspec.to_bytes();
            assert_eq!(bytes.len(), expected);
            let (decoded, consumed) = FieldSpec::read(&bytes).unwrap();
            assert_eq!(consumed, expected);
            assert_eq!(decoded, fspec);
        }
    }

    #[test]
    fn test_full_uap_roundtrip() {
        let mut fspec = FieldSpec::new();
        for frn in 1..=42 {
            fspec.set(frn);
        }
        fspec.set(48);
        fspec.set(49);
        let bytes = fspec.to_bytes();
        assert_eq!(bytes.len(), 7);
        let (decoded, _) = FieldSpec::read(&bytes).unwrap();
        assert_eq!(decoded, fspec);
    }

    #[test]
    fn test_eighth_octet_rejected() {
        // FX set on all seven octets asks for an eighth, past the UAP
        assert!(matches!(
            FieldSpec::read(&[0x01; 8]),
            Err(Error::FspecTooLong)
        ));
        assert!(matches!(
            FieldSpec::read(&[0x01; 7]),
            Err(Error::FspecTooLong)
        ));
    }

    #[test]
    fn test_seventh_octet_terminates() {
        // A full-length chain ending with FX clear is fine
        let bytes = [0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x04];
        let (fspec, consumed) = FieldSpec::read(&bytes).unwrap();
        assert_eq!(consumed, 7);
        assert_eq!(fspec.iter().collect::<Vec<_>>(), vec![48]);
    }

    #[test]
    fn test_truncated_chain() {
        // FX set but no following octet
        assert!(FieldSpec::read(&[0x81]).is_err());
        assert!(FieldSpec::read(&[]).is_err());
    }
}
