use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

/**
 * ## Air Speed (I021/150)
 *
 * Two octets: | IM | speed (15) |.
 *
 * IM = 0: indicated air speed, LSB = 2⁻¹⁴ NM/s;
 * IM = 1: Mach number, LSB = 0.001.
 */
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct AirSpeed {
    /// Speed coding: false = IAS, true = Mach
    #[deku(bits = "1")]
    pub im: bool,
    /// Raw speed (IAS LSB = 2⁻¹⁴ NM/s, Mach LSB = 0.001)
    #[deku(bits = "15", endian = "big")]
    pub speed: u16,
}

impl AirSpeed {
    const LSB_IAS: f64 = 1.0 / (1u32 << 14) as f64; // NM/s
    const LSB_MACH: f64 = 0.001;

    /// Indicated air speed in knots; `None` when the item carries Mach.
    pub fn ias_knots(&self) -> Option<f64> {
        (!self.im).then(|| {
            wire::scale_unsigned(self.speed as u32, Self::LSB_IAS) * 3600.0
        })
    }

    /// Mach number; `None` when the item carries IAS.
    pub fn mach(&self) -> Option<f64> {
        self.im
            .then(|| wire::scale_unsigned(self.speed as u32, Self::LSB_MACH))
    }

    pub fn from_ias_knots(knots: f64) -> Self {
        Self {
            im: false,
            speed: wire::unscale_unsigned(knots / 3600.0, Self::LSB_IAS, 15)
                as u16,
        }
    }

    pub fn from_mach(mach: f64) -> Self {
        Self {
            im: true,
            speed: wire::unscale_unsigned(mach, Self::LSB_MACH, 15) as u16,
        }
    }
}

impl fmt::Display for AirSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.ias_knots(), self.mach()) {
            (Some(ias), _) => writeln!(f, "  IAS:           {ias:.0} kt"),
            (_, Some(mach)) => writeln!(f, "  Mach:          {mach:.3}"),
            _ => unreachable!(),
        }
    }
}

/// ## True Air Speed (I021/151)
///
/// Two octets: | RE (range exceeded) | TAS (15) |, LSB = 1 kt.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct TrueAirSpeed {
    /// Range exceeded indicator
    #[deku(bits = "1")]
    pub re: bool,
    /// True air speed in knots
    #[deku(bits = "15", endian = "big")]
    pub tas: u16,
}

impl fmt::Display for TrueAirSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  TAS:           {} kt", self.tas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hexlit::hex;

    #[test]
    fn test_ias() {
        let item = AirSpeed::from_ias_knots(450.0);
        assert!(!item.im);
        assert_relative_eq!(item.ias_knots().unwrap(), 450.0, epsilon = 0.2);
        assert_eq!(item.mach(), None);
        let bytes = item.to_bytes().unwrap();
        let (_, decoded) = AirSpeed::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(decoded, item);
    }

    #[test]
    fn test_mach() {
        let item = AirSpeed::from_mach(0.84);
        assert_eq!(item.speed, 840);
        assert_eq!(item.to_bytes().unwrap(), hex!("8348").to_vec());
    }

    #[test]
    fn test_tas() {
        let bytes = hex!("01c2");
        let (_, item) = TrueAirSpeed::from_bytes((&bytes, 0)).unwrap();
        assert!(!item.re);
        assert_eq!(item.tas, 450);
        assert_eq!(item.to_bytes().unwrap(), bytes);
    }
}
