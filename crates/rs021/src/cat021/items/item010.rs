use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/**
 * ## Data Source Identification (I021/010)
 *
 * Identification of the ground station from which the report is received.
 *
 * Two octets: System Area Code (SAC) then System Identification Code
 * (SIC). SAC/SIC allocation is managed by EUROCONTROL; the pair is unique
 * per sensor.
 */
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct DataSourceIdentification {
    /// System Area Code
    pub sac: u8,
    /// System Identification Code
    pub sic: u8,
}

impl fmt::Display for DataSourceIdentification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Data source:   SAC {} / SIC {}", self.sac, self.sic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlit::hex;

    #[test]
    fn test_roundtrip() {
        let bytes = hex!("0229");
        let (_, item) =
            DataSourceIdentification::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(item.sac, 2);
        assert_eq!(item.sic, 0x29);
        assert_eq!(item.to_bytes().unwrap(), bytes);
    }
}
