use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/**
 * ## ACAS Resolution Advisory Report (I021/260)
 *
 * Seven octets carrying the currently active RA, the verbatim content of
 * BDS register 3,0: | MB type (8) = 0x30 | ARA (14) | RAC (4) | RAT |
 * MTE | TTI (2) | TID (26) |.
 */
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct AcasResolutionAdvisory {
    /// BDS register number, 0x30 for an RA report
    pub mb_type: u8,
    /// Active resolution advisories
    #[deku(bits = "14", endian = "big")]
    pub ara: u16,
    /// Resolution advisory complements record
    #[deku(bits = "4")]
    pub rac: u8,
    /// RA terminated
    #[deku(bits = "1")]
    pub rat: bool,
    /// Multiple threat encounter
    #[deku(bits = "1")]
    pub mte: bool,
    /// Threat type indicator
    #[deku(bits = "2")]
    pub tti: u8,
    /// Threat identity data
    #[deku(bits = "26", endian = "big")]
    pub tid: u32,
}

impl fmt::Display for AcasResolutionAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  ACAS RA:       ARA={:#06x} RAC={:#x} TTI={}{}{}",
            self.ara,
            self.rac,
            self.tti,
            if self.rat { " (terminated)" } else { "" },
            if self.mte { " (multiple threats)" } else { "" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlit::hex;

    #[test]
    fn test_roundtrip() {
        let item = AcasResolutionAdvisory {
            mb_type: 0x30,
            ara: 0x2800, // climb RA
            rac: 0,
            rat: false,
            mte: false,
            tti: 1,
            tid: 0x3c660d,
        };
        let bytes = item.to_bytes().unwrap();
        assert_eq!(bytes.len(), 7);
        assert_eq!(bytes[0], 0x30);
        assert_eq!(bytes[1], 0xa0);
        let (_, decoded) =
            AcasResolutionAdvisory::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(decoded, item);
    }

    #[test]
    fn test_decode() {
        // 0x30 | ARA=0x2800 | RAC=0 RAT=0 MTE=0 TTI=1 | TID=0, one byte over
        let bytes = hex!("30a0000400000000");
        let (rest, item) =
            AcasResolutionAdvisory::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(rest.0.len(), 1);
        assert_eq!(item.mb_type, 0x30);
        assert_eq!(item.ara, 0x2800);
        assert_eq!(item.tti, 1);
        assert_eq!(item.tid, 0);
    }
}
