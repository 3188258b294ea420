use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/**
 * ## Quality Indicators (I021/090)
 *
 * ADS-B quality indicators as transmitted by the aircraft. Extensible:
 *
 * Primary: | NUCr or NACv (3) | NUCp or NIC (4) | FX |
 * Ext 1:   | NICbaro | SIL (2) | NACp (4) | FX |
 * Ext 2:   | spare (2) | SILsup | SDA (2) | GVA (2) | FX |
 * Ext 3:   | PIC (4) | spare (3) | FX |
 */
#[derive(
    Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct QualityIndicators {
    /// Navigation uncertainty category for velocity (NUCr or NACv)
    #[deku(bits = "3")]
    pub nucr_nacv: u8,
    /// Navigation uncertainty category for position (NUCp or NIC)
    #[deku(bits = "4")]
    pub nucp_nic: u8,
    #[deku(bits = "1", update = "self.ext1.is_some() as u8")]
    #[serde(skip)]
    pub fx: u8,
    #[deku(cond = "*fx == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext1: Option<QualityIndicatorsExt1>,
}

#[derive(
    Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct QualityIndicatorsExt1 {
    /// Barometric altitude integrity code
    #[deku(bits = "1")]
    pub nic_baro: bool,
    /// Surveillance integrity level
    #[deku(bits = "2")]
    pub sil: u8,
    /// Navigation accuracy category for position
    #[deku(bits = "4")]
    pub nacp: u8,
    #[deku(bits = "1", update = "self.ext2.is_some() as u8")]
    #[serde(skip)]
    pub fx: u8,
    #[deku(cond = "*fx == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext2: Option<QualityIndicatorsExt2>,
}

#[derive(
    Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct QualityIndicatorsExt2 {
    #[deku(bits = "2")]
    #[serde(skip)]
    pub spare: u8,
    /// SIL supplement (per flight hour / per sample)
    #[deku(bits = "1")]
    pub sil_supplement: bool,
    /// System design assurance
    #[deku(bits = "2")]
    pub sda: u8,
    /// Geometric vertical accuracy
    #[deku(bits = "2")]
    pub gva: u8,
    #[deku(bits = "1", update = "self.ext3.is_some() as u8")]
    #[serde(skip)]
    pub fx: u8,
    #[deku(cond = "*fx == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext3: Option<QualityIndicatorsExt3>,
}

#[derive(
    Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct QualityIndicatorsExt3 {
    /// Position integrity category
    #[deku(bits = "4")]
    pub pic: u8,
    #[deku(bits = "3")]
    #[serde(skip)]
    pub spare: u8,
    #[deku(bits = "1", update = "0")]
    #[serde(skip)]
    pub fx: u8,
}

impl QualityIndicators {
    /// Refresh the FX chain before encoding.
    pub fn update(&mut self) -> Result<(), DekuError> {
        if let Some(ext1) = &mut self.ext1 {
            if let Some(ext2) = &mut ext1.ext2 {
                DekuUpdate::update(ext2)?;
            }
            DekuUpdate::update(ext1)?;
        }
        DekuUpdate::update(self)
    }
}

impl fmt::Display for QualityIndicators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  Quality:       NIC {}", self.nucp_nic)?;
        if let Some(ext1) = &self.ext1 {
            write!(f, " NACp {} SIL {}", ext1.nacp, ext1.sil)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlit::hex;

    #[test]
    fn test_chain_depth() {
        // primary only
        let (_, item) = QualityIndicators::from_bytes((&hex!("0a"), 0)).unwrap();
        assert_eq!(item.nucp_nic, 5);
        assert!(item.ext1.is_none());

        // full chain
        let bytes = hex!("0bab0760");
        let (_, item) = QualityIndicators::from_bytes((&bytes, 0)).unwrap();
        let ext1 = item.ext1.unwrap();
        assert_eq!(ext1.nacp, 5);
        let ext2 = ext1.ext2.unwrap();
        assert_eq!(ext2.gva, 3);
        let ext3 = ext2.ext3.unwrap();
        assert_eq!(ext3.pic, 6);
        assert_eq!(item.to_bytes().unwrap(), bytes);
    }
}
