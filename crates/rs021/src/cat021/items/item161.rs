use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/// ## Track Number (I021/161)
///
/// Two octets: | spare (4) | track number (12) |. An integer uniquely
/// identifying the track at the serving ground station.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct TrackNumber {
    #[deku(bits = "4")]
    #[serde(skip)]
    spare: u8,
    #[deku(bits = "12", endian = "big")]
    pub track: u16,
}

impl TrackNumber {
    pub fn new(track: u16) -> Self {
        Self {
            spare: 0,
            track: track & 0x0fff,
        }
    }
}

impl fmt::Display for TrackNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Track number:  {}", self.track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlit::hex;

    #[test]
    fn test_roundtrip() {
        let item = TrackNumber::new(0x0234);
        assert_eq!(item.to_bytes().unwrap(), hex!("0234").to_vec());
        let (_, decoded) = TrackNumber::from_bytes((&hex!("0234"), 0)).unwrap();
        assert_eq!(decoded.track, 0x234);
    }
}
