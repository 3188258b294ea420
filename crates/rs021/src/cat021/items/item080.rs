use deku::prelude::*;
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// ## Target Address (I021/080)
///
/// The 24-bit ICAO aircraft address, unique per airframe, printed and
/// serialized as six hex digits.
#[derive(
    Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, DekuRead, DekuWrite,
    Copy, Clone,
)]
pub struct TargetAddress(#[deku(bits = "24", endian = "big")] pub u32);

impl fmt::Display for TargetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06x}", self.0)
    }
}

impl Serialize for TargetAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:06x}", self.0))
    }
}

impl core::str::FromStr for TargetAddress {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let num = u32::from_str_radix(s, 16)?;
        Ok(Self(num))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlit::hex;

    #[test]
    fn test_roundtrip() {
        let bytes = hex!("406b90");
        let (_, addr) = TargetAddress::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(format!("{addr}"), "406b90");
        assert_eq!(addr.to_bytes().unwrap(), bytes);
    }
}
