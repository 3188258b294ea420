use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

/// ## Magnetic Heading (I021/152)
///
/// Two octets, LSB = 360/2¹⁶ °.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct MagneticHeading {
    /// Raw heading (LSB = 360/2¹⁶ °)
    #[deku(endian = "big")]
    pub heading: u16,
}

impl MagneticHeading {
    const LSB: f64 = 360.0 / 65536.0;

    pub fn degrees(&self) -> f64 {
        wire::scale_unsigned(self.heading as u32, Self::LSB)
    }

    pub fn set_degrees(&mut self, degrees: f64) {
        self.heading =
            wire::unscale_unsigned(degrees.rem_euclid(360.0), Self::LSB, 16)
                as u16;
    }
}

impl fmt::Display for MagneticHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Heading:       {:.1}° (magnetic)", self.degrees())
    }
}
