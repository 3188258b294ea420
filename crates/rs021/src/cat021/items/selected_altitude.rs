use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

const LSB: f64 = 25.0; // ft
const BITS: u32 = 13;

/**
 * ## Selected Altitude (I021/146)
 *
 * Two octets: | SAS | Source (2) | altitude (13) |, two's complement,
 * LSB = 25 ft. Source: 0 unknown, 1 aircraft altitude, 2 FCU/MCP
 * selected altitude, 3 FMS selected altitude.
 */
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct SelectedAltitude {
    /// Source availability
    #[deku(bits = "1")]
    pub sas: bool,
    /// Source of the selected altitude
    #[deku(bits = "2")]
    pub source: u8,
    /// Raw altitude (two's complement, LSB = 25 ft)
    #[deku(bits = "13", endian = "big")]
    pub altitude: u16,
}

impl SelectedAltitude {
    pub fn feet(&self) -> f64 {
        wire::scale_signed(self.altitude as u32, BITS, LSB)
    }

    pub fn set_feet(&mut self, feet: f64) {
        self.altitude = wire::unscale_signed(feet, LSB, BITS) as u16;
    }
}

impl fmt::Display for SelectedAltitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            1 => " (aircraft altitude)",
            2 => " (FCU/MCP)",
            3 => " (FMS)",
            _ => "",
        };
        writeln!(f, "  Selected alt:  {:.0} ft{}", self.feet(), source)
    }
}

/**
 * ## Final State Selected Altitude (I021/148)
 *
 * Two octets: | MV | AH | AM | altitude (13) |, two's complement,
 * LSB = 25 ft. MV: manage vertical mode active, AH: altitude hold,
 * AM: approach mode.
 */
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct FinalStateSelectedAltitude {
    /// Manage vertical mode active
    #[deku(bits = "1")]
    pub mv: bool,
    /// Altitude hold active
    #[deku(bits = "1")]
    pub ah: bool,
    /// Approach mode active
    #[deku(bits = "1")]
    pub am: bool,
    /// Raw altitude (two's complement, LSB = 25 ft)
    #[deku(bits = "13", endian = "big")]
    pub altitude: u16,
}

impl FinalStateSelectedAltitude {
    pub fn feet(&self) -> f64 {
        wire::scale_signed(self.altitude as u32, BITS, LSB)
    }

    pub fn set_feet(&mut self, feet: f64) {
        self.altitude = wire::unscale_signed(feet, LSB, BITS) as u16;
    }
}

impl fmt::Display for FinalStateSelectedAltitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  FSS altitude:  {:.0} ft", self.feet())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlit::hex;

    #[test]
    fn test_fcu_selected() {
        // SAS=1, source=2 (FCU/MCP), 17000 ft = 680 * 25
        let mut item = SelectedAltitude {
            sas: true,
            source: 2,
            altitude: 0,
        };
        item.set_feet(17000.0);
        assert_eq!(item.altitude, 680);
        assert_eq!(item.to_bytes().unwrap(), hex!("c2a8").to_vec());
        let (_, decoded) =
            SelectedAltitude::from_bytes((&hex!("c2a8"), 0)).unwrap();
        assert_eq!(decoded.feet(), 17000.0);
    }

    #[test]
    fn test_negative_altitude() {
        let mut item = FinalStateSelectedAltitude::default();
        item.set_feet(-1300.0);
        assert_eq!(item.feet(), -1300.0);
        let bytes = item.to_bytes().unwrap();
        let (_, decoded) =
            FinalStateSelectedAltitude::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(decoded, item);
    }
}
