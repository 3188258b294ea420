use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

/// ## Roll Angle (I021/230)
///
/// Two octets, two's complement, LSB = 0.01°, positive for right wing
/// down.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct RollAngle {
    /// Raw roll angle (two's complement, LSB = 0.01°)
    #[deku(endian = "big")]
    pub ra: i16,
}

impl RollAngle {
    const LSB: f64 = 0.01;

    pub fn degrees(&self) -> f64 {
        self.ra as f64 * Self::LSB
    }

    /// Clamped to [-180°, +180°].
    pub fn set_degrees(&mut self, degrees: f64) {
        let clamped = degrees.clamp(-180.0, 180.0);
        self.ra =
            wire::sign_extend(wire::unscale_signed(clamped, Self::LSB, 16), 16)
                as i16;
    }
}

impl fmt::Display for RollAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Roll angle:    {:.2}°", self.degrees())
    }
}
