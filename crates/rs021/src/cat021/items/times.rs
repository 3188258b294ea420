use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

/**
 * ## Time of day items (I021/071, 072, 073, 075, 077)
 *
 * Absolute time stamps expressed as UTC time elapsed since last midnight:
 * three octets, LSB = 1/128 s. The same layout serves
 *
 * - I021/071 Time of Applicability for Position
 * - I021/072 Time of Applicability for Velocity
 * - I021/073 Time of Message Reception for Position
 * - I021/075 Time of Message Reception for Velocity
 * - I021/077 Time of ASTERIX Report Transmission
 */
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct TimeOfDay {
    /// Raw time, LSB = 1/128 s
    #[deku(bits = "24", endian = "big")]
    pub time: u32,
}

impl TimeOfDay {
    const LSB: f64 = 1.0 / 128.0;

    /// Seconds since last midnight.
    pub fn seconds(&self) -> f64 {
        wire::scale_unsigned(self.time, Self::LSB)
    }

    pub fn set_seconds(&mut self, seconds: f64) {
        self.time = wire::unscale_unsigned(seconds, Self::LSB, 24);
    }

    pub fn from_seconds(seconds: f64) -> Self {
        let mut time = Self::default();
        time.set_seconds(seconds);
        time
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.seconds();
        write!(
            f,
            "{:02}:{:02}:{:06.3}",
            (s / 3600.0) as u32,
            ((s % 3600.0) / 60.0) as u32,
            s % 60.0
        )
    }
}

/**
 * ## High precision time items (I021/074, 076)
 *
 * Fractional part of the time of message reception in GPS time:
 * | FSI (2) | fraction (30) |, LSB = 2⁻³⁰ s. FSI states whether the whole
 * second is the rounded time of day, one above, or one below.
 */
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct HighPrecisionTime {
    /// Full second indication (0: as I021/073, 1: +1 s, 2: -1 s)
    #[deku(bits = "2")]
    pub fsi: u8,
    /// Fractional part of the second, LSB = 2⁻³⁰ s
    #[deku(bits = "30", endian = "big")]
    pub fraction: u32,
}

impl HighPrecisionTime {
    const LSB: f64 = 1.0 / (1u32 << 30) as f64;

    /// Fractional part of the second, in seconds.
    pub fn fraction_s(&self) -> f64 {
        wire::scale_unsigned(self.fraction, Self::LSB)
    }

    pub fn set_fraction_s(&mut self, seconds: f64) {
        self.fraction = wire::unscale_unsigned(seconds, Self::LSB, 30);
    }
}

impl fmt::Display for HighPrecisionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{:.9} s (FSI {})", self.fraction_s(), self.fsi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hexlit::hex;

    #[test]
    fn test_time_of_day() {
        // 10:30:00 UTC = 37800 s = 4838400 / 128
        let bytes = hex!("49d400");
        let (_, time) = TimeOfDay::from_bytes((&bytes, 0)).unwrap();
        assert_relative_eq!(time.seconds(), 37800.0);
        assert_eq!(format!("{time}"), "10:30:00.000");
        assert_eq!(TimeOfDay::from_seconds(37800.0), time);
        assert_eq!(time.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_high_precision() {
        let mut time = HighPrecisionTime::default();
        time.set_fraction_s(0.5);
        assert_eq!(time.fraction, 1 << 29);
        let bytes = time.to_bytes().unwrap();
        assert_eq!(bytes.len(), 4);
        let (_, decoded) = HighPrecisionTime::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(decoded, time);
    }
}
