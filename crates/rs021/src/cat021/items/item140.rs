use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

/// ## Geometric Height (I021/140)
///
/// Minimum height from a plane tangent to the earth's ellipsoid: two
/// octets, two's complement, LSB = 6.25 ft.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct GeometricHeight {
    /// Raw height (two's complement, LSB = 6.25 ft)
    #[deku(endian = "big")]
    pub height: i16,
}

impl GeometricHeight {
    const LSB: f64 = 6.25;

    pub fn feet(&self) -> f64 {
        self.height as f64 * Self::LSB
    }

    /// Out-of-range values are clamped to the two's-complement range of
    /// the field (±204 793.75 ft).
    pub fn set_feet(&mut self, feet: f64) {
        self.height =
            wire::sign_extend(wire::unscale_signed(feet, Self::LSB, 16), 16)
                as i16;
    }

    pub fn from_feet(feet: f64) -> Self {
        let mut item = Self::default();
        item.set_feet(feet);
        item
    }
}

impl fmt::Display for GeometricHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Geom height:   {} ft", self.feet())
    }
}
