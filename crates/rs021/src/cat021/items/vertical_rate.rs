use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

const LSB: f64 = 6.25; // ft/min
const BITS: u32 = 15;

/// ## Barometric Vertical Rate (I021/155)
///
/// Two octets: | RE (range exceeded) | rate (15) |, two's complement,
/// LSB = 6.25 ft/min.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct BarometricVerticalRate {
    /// Range exceeded indicator
    #[deku(bits = "1")]
    pub re: bool,
    /// Raw rate (two's complement, LSB = 6.25 ft/min)
    #[deku(bits = "15", endian = "big")]
    pub rate: u16,
}

impl BarometricVerticalRate {
    pub fn feet_per_minute(&self) -> f64 {
        wire::scale_signed(self.rate as u32, BITS, LSB)
    }

    pub fn set_feet_per_minute(&mut self, rate: f64) {
        self.rate = wire::unscale_signed(rate, LSB, BITS) as u16;
    }
}

impl fmt::Display for BarometricVerticalRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Baro rate:     {:.0} ft/min",
            self.feet_per_minute()
        )
    }
}

/// ## Geometric Vertical Rate (I021/157)
///
/// Same layout as I021/155, derived from the geometric height.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct GeometricVerticalRate {
    /// Range exceeded indicator
    #[deku(bits = "1")]
    pub re: bool,
    /// Raw rate (two's complement, LSB = 6.25 ft/min)
    #[deku(bits = "15", endian = "big")]
    pub rate: u16,
}

impl GeometricVerticalRate {
    pub fn feet_per_minute(&self) -> f64 {
        wire::scale_signed(self.rate as u32, BITS, LSB)
    }

    pub fn set_feet_per_minute(&mut self, rate: f64) {
        self.rate = wire::unscale_signed(rate, LSB, BITS) as u16;
    }
}

impl fmt::Display for GeometricVerticalRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Geom rate:     {:.0} ft/min",
            self.feet_per_minute()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descent() {
        let mut item = BarometricVerticalRate::default();
        item.set_feet_per_minute(-1500.0);
        assert_eq!(item.rate, 0x7f10); // -240 in 15-bit two's complement
        let bytes = item.to_bytes().unwrap();
        let (_, decoded) =
            BarometricVerticalRate::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(decoded.feet_per_minute(), -1500.0);
    }

    #[test]
    fn test_most_negative() {
        let item = GeometricVerticalRate {
            re: false,
            rate: 0x4000,
        };
        assert_eq!(item.feet_per_minute(), -102400.0);
        let bytes = item.to_bytes().unwrap();
        let (_, decoded) =
            GeometricVerticalRate::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(decoded, item);
    }
}
