use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/**
 * ## MOPS Version (I021/210)
 *
 * One octet: | spare | VNS | VN (3) | LTT (3) |.
 *
 * VN: 0 = DO-260/ED-102, 1 = DO-260A, 2 = DO-260B/ED-102A.
 * LTT (link technology type): 2 = 1090 ES.
 */
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct MopsVersion {
    #[deku(bits = "1")]
    pub spare: u8,
    /// Version not supported by the ground system
    #[deku(bits = "1")]
    pub vns: bool,
    /// MOPS version number
    #[deku(bits = "3")]
    pub vn: u8,
    /// Link technology type
    #[deku(bits = "3")]
    pub ltt: u8,
}

impl fmt::Display for MopsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version = match self.vn {
            0 => "DO-260/ED-102",
            1 => "DO-260A",
            2 => "DO-260B/ED-102A",
            _ => "unknown",
        };
        writeln!(f, "  MOPS version:  {} (LTT={})", version, self.ltt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_do260b_es() {
        // spare=0 VNS=0 VN=2 LTT=2 -> 0b0_0_010_010 = 0x12
        let (_, item) = MopsVersion::from_bytes((&[0x12], 0)).unwrap();
        assert!(!item.vns);
        assert_eq!(item.vn, 2);
        assert_eq!(item.ltt, 2);
        assert_eq!(item.to_bytes().unwrap(), vec![0x12]);
    }
}
