use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

/// ## Flight Level (I021/145)
///
/// Flight level from barometric measurements, not QNH corrected: two
/// octets, two's complement, LSB = 1/4 FL (25 ft).
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct FlightLevel {
    /// Raw flight level (two's complement, LSB = 1/4 FL)
    #[deku(endian = "big")]
    pub fl: i16,
}

impl FlightLevel {
    const LSB: f64 = 0.25;

    pub fn flight_level(&self) -> f64 {
        self.fl as f64 * Self::LSB
    }

    pub fn set_flight_level(&mut self, fl: f64) {
        self.fl =
            wire::sign_extend(wire::unscale_signed(fl, Self::LSB, 16), 16)
                as i16;
    }

    /// Barometric altitude in feet (1 FL = 100 ft).
    pub fn feet(&self) -> f64 {
        self.flight_level() * 100.0
    }
}

impl fmt::Display for FlightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Flight level:  FL{}", self.flight_level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlit::hex;

    #[test]
    fn test_fl_350() {
        let bytes = hex!("0578");
        let (_, item) = FlightLevel::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(item.flight_level(), 350.0);
        assert_eq!(item.feet(), 35000.0);
        assert_eq!(item.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_negative_fl() {
        let mut item = FlightLevel::default();
        item.set_flight_level(-10.0);
        assert_eq!(item.fl, -40);
        let (_, decoded) =
            FlightLevel::from_bytes((&item.to_bytes().unwrap(), 0)).unwrap();
        assert_eq!(decoded.flight_level(), -10.0);
    }
}
