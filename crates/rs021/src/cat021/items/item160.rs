use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

/**
 * ## Airborne Ground Vector (I021/160)
 *
 * Four octets: | RE | ground speed (15) | track angle (16) |.
 * Ground speed LSB = 2⁻¹⁴ NM/s, track angle LSB = 360/2¹⁶ °.
 */
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct AirborneGroundVector {
    /// Range exceeded indicator
    #[deku(bits = "1")]
    pub re: bool,
    /// Raw ground speed (LSB = 2⁻¹⁴ NM/s)
    #[deku(bits = "15", endian = "big")]
    pub ground_speed: u16,
    /// Raw track angle (LSB = 360/2¹⁶ °)
    #[deku(endian = "big")]
    pub track_angle: u16,
}

impl AirborneGroundVector {
    const LSB_GS: f64 = 1.0 / (1u32 << 14) as f64; // NM/s
    const LSB_TA: f64 = 360.0 / 65536.0;

    pub fn ground_speed_knots(&self) -> f64 {
        wire::scale_unsigned(self.ground_speed as u32, Self::LSB_GS) * 3600.0
    }

    pub fn set_ground_speed_knots(&mut self, knots: f64) {
        self.ground_speed =
            wire::unscale_unsigned(knots / 3600.0, Self::LSB_GS, 15) as u16;
    }

    pub fn track_angle_deg(&self) -> f64 {
        wire::scale_unsigned(self.track_angle as u32, Self::LSB_TA)
    }

    pub fn set_track_angle_deg(&mut self, degrees: f64) {
        self.track_angle =
            wire::unscale_unsigned(degrees.rem_euclid(360.0), Self::LSB_TA, 16)
                as u16;
    }
}

impl fmt::Display for AirborneGroundVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Ground vector: {:.0} kt / {:.1}°",
            self.ground_speed_knots(),
            self.track_angle_deg()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_roundtrip() {
        let mut item = AirborneGroundVector::default();
        item.set_ground_speed_knots(420.0);
        item.set_track_angle_deg(275.5);
        let bytes = item.to_bytes().unwrap();
        assert_eq!(bytes.len(), 4);
        let (_, decoded) =
            AirborneGroundVector::from_bytes((&bytes, 0)).unwrap();
        assert_relative_eq!(
            decoded.ground_speed_knots(),
            420.0,
            epsilon = 0.2
        );
        assert_relative_eq!(decoded.track_angle_deg(), 275.5, epsilon = 1e-2);
    }
}
