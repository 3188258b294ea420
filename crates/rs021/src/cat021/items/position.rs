use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

/**
 * ## Position in WGS-84 co-ordinates (I021/130)
 *
 * Six octets: latitude then longitude, each a 24-bit two's-complement
 * value with LSB = 180/2²³ ° (about 2.4 m at the equator).
 */
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct Position {
    /// Latitude, raw (two's complement, LSB = 180/2²³ °)
    #[deku(bits = "24", endian = "big")]
    pub latitude: u32,
    /// Longitude, raw (two's complement, LSB = 180/2²³ °)
    #[deku(bits = "24", endian = "big")]
    pub longitude: u32,
}

impl Position {
    pub fn latitude_deg(&self) -> f64 {
        wire::scale_signed(self.latitude, 24, wire::LSB_LATLON_24)
    }

    pub fn set_latitude_deg(&mut self, degrees: f64) {
        self.latitude = wire::unscale_signed(degrees, wire::LSB_LATLON_24, 24);
    }

    pub fn longitude_deg(&self) -> f64 {
        wire::scale_signed(self.longitude, 24, wire::LSB_LATLON_24)
    }

    pub fn set_longitude_deg(&mut self, degrees: f64) {
        self.longitude = wire::unscale_signed(degrees, wire::LSB_LATLON_24, 24);
    }

    pub fn new(latitude: f64, longitude: f64) -> Self {
        let mut position = Self::default();
        position.set_latitude_deg(latitude);
        position.set_longitude_deg(longitude);
        position
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Position:      {:.5}° {:.5}°",
            self.latitude_deg(),
            self.longitude_deg()
        )
    }
}

/**
 * ## Position in WGS-84 co-ordinates, high resolution (I021/131)
 *
 * Eight octets: latitude then longitude, each a 32-bit two's-complement
 * value with LSB = 180/2³⁰ ° (about 1.9 cm at the equator).
 */
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct HighResolutionPosition {
    /// Latitude, raw (LSB = 180/2³⁰ °)
    #[deku(endian = "big")]
    pub latitude: i32,
    /// Longitude, raw (LSB = 180/2³⁰ °)
    #[deku(endian = "big")]
    pub longitude: i32,
}

impl HighResolutionPosition {
    pub fn latitude_deg(&self) -> f64 {
        self.latitude as f64 * wire::LSB_LATLON_32
    }

    pub fn set_latitude_deg(&mut self, degrees: f64) {
        self.latitude = wire::sign_extend(
            wire::unscale_signed(degrees, wire::LSB_LATLON_32, 32),
            32,
        );
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude as f64 * wire::LSB_LATLON_32
    }

    pub fn set_longitude_deg(&mut self, degrees: f64) {
        self.longitude = wire::sign_extend(
            wire::unscale_signed(degrees, wire::LSB_LATLON_32, 32),
            32,
        );
    }
}

impl fmt::Display for HighResolutionPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Position:      {:.7}° {:.7}° (high resolution)",
            self.latitude_deg(),
            self.longitude_deg()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_roundtrip_signed() {
        let position = Position::new(43.60444, -1.44249);
        let bytes = position.to_bytes().unwrap();
        assert_eq!(bytes.len(), 6);
        let (_, decoded) = Position::from_bytes((&bytes, 0)).unwrap();
        assert_relative_eq!(decoded.latitude_deg(), 43.60444, epsilon = 1e-4);
        assert_relative_eq!(decoded.longitude_deg(), -1.44249, epsilon = 1e-4);
    }

    #[test]
    fn test_most_negative() {
        let item = Position {
            latitude: 0x800000,
            longitude: 0x800000,
        };
        assert_relative_eq!(item.latitude_deg(), -180.0);
        let bytes = item.to_bytes().unwrap();
        let (_, decoded) = Position::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(decoded, item);
    }

    #[test]
    fn test_high_resolution() {
        let mut item = HighResolutionPosition::default();
        item.set_latitude_deg(-48.876);
        item.set_longitude_deg(123.456);
        let bytes = item.to_bytes().unwrap();
        assert_eq!(bytes.len(), 8);
        let (_, decoded) =
            HighResolutionPosition::from_bytes((&bytes, 0)).unwrap();
        assert_relative_eq!(decoded.latitude_deg(), -48.876, epsilon = 1e-7);
        assert_relative_eq!(decoded.longitude_deg(), 123.456, epsilon = 1e-7);
    }
}
