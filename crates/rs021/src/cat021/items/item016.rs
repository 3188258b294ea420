use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

/// ## Service Management (I021/016)
///
/// Identification of services offered by the ground station: one octet
/// holding the report period, LSB = 0.5 s.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct ServiceManagement {
    /// Report period, raw (LSB = 0.5 s)
    pub rp: u8,
}

impl ServiceManagement {
    const LSB: f64 = 0.5;

    /// Report period in seconds.
    pub fn period_s(&self) -> f64 {
        wire::scale_unsigned(self.rp as u32, Self::LSB)
    }

    pub fn set_period_s(&mut self, seconds: f64) {
        self.rp = wire::unscale_unsigned(seconds, Self::LSB, 8) as u8;
    }
}

impl fmt::Display for ServiceManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Report period: {:.1} s", self.period_s())
    }
}
