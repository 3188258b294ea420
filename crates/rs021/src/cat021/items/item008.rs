use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/**
 * ## Aircraft Operational Status (I021/008)
 *
 * One octet: | RA | TC (2) | TS | ARV | CDTI/A | not-TCAS | SA |
 */
#[derive(
    Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct AircraftOperationalStatus {
    /// TCAS resolution advisory active
    #[deku(bits = "1")]
    pub ra: bool,
    /// Target trajectory change report capability
    #[deku(bits = "2")]
    pub tc: u8,
    /// Target state report capability
    #[deku(bits = "1")]
    pub ts: bool,
    /// Air-referenced velocity report capability
    #[deku(bits = "1")]
    pub arv: bool,
    /// Cockpit display of traffic information airborne
    #[deku(bits = "1")]
    pub cdti_a: bool,
    /// TCAS system NOT operational
    #[deku(bits = "1")]
    pub not_tcas: bool,
    /// Single antenna
    #[deku(bits = "1")]
    pub sa: bool,
}

impl fmt::Display for AircraftOperationalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Op status:     TCAS {}{}",
            if self.not_tcas { "off" } else { "on" },
            if self.ra { ", RA active" } else { "" }
        )
    }
}
