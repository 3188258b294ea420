use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

/// ## Track Angle Rate (I021/165)
///
/// Two octets: | spare (6) | TAR (10) |, two's complement,
/// LSB = 1/32 °/s.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct TrackAngleRate {
    #[deku(bits = "6")]
    #[serde(skip)]
    spare: u8,
    /// Raw rate of turn (two's complement, LSB = 1/32 °/s)
    #[deku(bits = "10", endian = "big")]
    pub tar: u16,
}

impl TrackAngleRate {
    const LSB: f64 = 1.0 / 32.0;

    /// Rate of turn in degrees per second, positive clockwise.
    pub fn degrees_per_second(&self) -> f64 {
        wire::scale_signed(self.tar as u32, 10, Self::LSB)
    }

    pub fn set_degrees_per_second(&mut self, rate: f64) {
        self.tar = wire::unscale_signed(rate, Self::LSB, 10) as u16;
    }
}

impl fmt::Display for TrackAngleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Turn rate:     {:.2}°/s", self.degrees_per_second())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_rate() {
        let mut item = TrackAngleRate::default();
        item.set_degrees_per_second(-2.5);
        assert_eq!(item.tar, 0x3b0); // -80 in 10-bit two's complement
        let bytes = item.to_bytes().unwrap();
        let (_, decoded) = TrackAngleRate::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(decoded.degrees_per_second(), -2.5);
    }

    #[test]
    fn test_most_negative() {
        let item = TrackAngleRate {
            spare: 0,
            tar: 0x200,
        };
        assert_eq!(item.degrees_per_second(), -16.0);
        let bytes = item.to_bytes().unwrap();
        let (_, decoded) = TrackAngleRate::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(decoded, item);
    }
}
