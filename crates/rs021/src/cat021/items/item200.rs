use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/**
 * ## Target Status (I021/200)
 *
 * One octet: | ICF | LNAV | ME | PS (3) | SS (2) |.
 *
 * Priority status: 0 none, 1 general emergency, 2 lifeguard/medical,
 * 3 minimum fuel, 4 no communications, 5 unlawful interference,
 * 6 "downed aircraft".
 */
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct TargetStatus {
    /// Intent change flag
    #[deku(bits = "1")]
    pub icf: bool,
    /// LNAV mode engaged (inverted logic on the wire: 0 = engaged)
    #[deku(bits = "1")]
    pub lnav: bool,
    /// Military emergency
    #[deku(bits = "1")]
    pub me: bool,
    /// Priority status
    #[deku(bits = "3")]
    pub ps: u8,
    /// Surveillance status
    #[deku(bits = "2")]
    pub ss: u8,
}

impl TargetStatus {
    pub fn priority_description(&self) -> &'static str {
        match self.ps {
            0 => "no emergency",
            1 => "general emergency",
            2 => "lifeguard/medical",
            3 => "minimum fuel",
            4 => "no communications",
            5 => "unlawful interference",
            6 => "downed aircraft",
            _ => "unassigned",
        }
    }
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Target status: {} (SS={})",
            self.priority_description(),
            self.ss
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_emergency() {
        // ICF=0 LNAV=0 ME=0 PS=1 SS=0 -> 0b000_001_00 = 0x04
        let (_, item) = TargetStatus::from_bytes((&[0x04], 0)).unwrap();
        assert_eq!(item.ps, 1);
        assert_eq!(item.priority_description(), "general emergency");
        assert_eq!(item.to_bytes().unwrap(), vec![0x04]);
    }

    #[test]
    fn test_flags() {
        let item = TargetStatus {
            icf: true,
            lnav: false,
            me: false,
            ps: 0,
            ss: 2,
        };
        assert_eq!(item.to_bytes().unwrap(), vec![0x82]);
    }
}
