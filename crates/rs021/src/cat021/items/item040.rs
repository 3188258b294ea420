use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/**
 * ## Target Report Descriptor (I021/040)
 *
 * Type and characteristics of the data as transmitted by a system.
 * Extensible item: a primary octet followed by up to two extension
 * octets, each present only if the previous octet's FX bit is set.
 *
 * Primary: | ATP (3) | ARC (2) | RC (1) | RAB (1) | FX |
 *
 * - ATP: address type (0: 24-bit ICAO address, 1: duplicate address,
 *   2: surface vehicle address, 3: anonymous address, 4-7: reserved)
 * - ARC: altitude reporting capability (0: 25 ft, 1: 100 ft, 2: unknown)
 * - RC: range check passed, CPR validation pending
 * - RAB: report from field-monitor (fixed transponder)
 */
#[derive(
    Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct TargetReportDescriptor {
    /// Address type
    #[deku(bits = "3")]
    pub atp: u8,
    /// Altitude reporting capability
    #[deku(bits = "2")]
    pub arc: u8,
    /// Range check
    #[deku(bits = "1")]
    pub rc: bool,
    /// Report type (field monitor)
    #[deku(bits = "1")]
    pub rab: bool,
    #[deku(bits = "1", update = "self.ext1.is_some() as u8")]
    #[serde(skip)]
    pub fx: u8,
    #[deku(cond = "*fx == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext1: Option<TargetReportDescriptorExt1>,
}

/// First extension: | DCR | GBS | SIM | TST | SAA | CL (2) | FX |
#[derive(
    Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct TargetReportDescriptorExt1 {
    /// Differential correction
    #[deku(bits = "1")]
    pub dcr: bool,
    /// Ground bit set
    #[deku(bits = "1")]
    pub gbs: bool,
    /// Simulated target report
    #[deku(bits = "1")]
    pub sim: bool,
    /// Test target
    #[deku(bits = "1")]
    pub tst: bool,
    /// Selected altitude available
    #[deku(bits = "1")]
    pub saa: bool,
    /// Confidence level
    #[deku(bits = "2")]
    pub cl: u8,
    #[deku(bits = "1", update = "self.ext2.is_some() as u8")]
    #[serde(skip)]
    pub fx: u8,
    #[deku(cond = "*fx == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext2: Option<TargetReportDescriptorExt2>,
}

/// Second extension: | spare | IPC | NOGO | CPR | LDPJ | RCF | spare | FX |
#[derive(
    Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct TargetReportDescriptorExt2 {
    #[deku(bits = "1")]
    #[serde(skip)]
    pub spare1: u8,
    /// Independent position check failed
    #[deku(bits = "1")]
    pub ipc: bool,
    /// NOGO bit set
    #[deku(bits = "1")]
    pub nogo: bool,
    /// CPR validation failed
    #[deku(bits = "1")]
    pub cpr: bool,
    /// Local decoding position jump detected
    #[deku(bits = "1")]
    pub ldpj: bool,
    /// Range check failed
    #[deku(bits = "1")]
    pub rcf: bool,
    #[deku(bits = "1")]
    #[serde(skip)]
    pub spare2: u8,
    #[deku(bits = "1", update = "0")]
    #[serde(skip)]
    pub fx: u8,
}

impl TargetReportDescriptor {
    /// Refresh the FX chain before encoding.
    pub fn update(&mut self) -> Result<(), DekuError> {
        if let Some(ext1) = &mut self.ext1 {
            DekuUpdate::update(ext1)?;
        }
        DekuUpdate::update(self)
    }
}

impl fmt::Display for TargetReportDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let atp = match self.atp {
            0 => "24-bit ICAO address",
            1 => "duplicate address",
            2 => "surface vehicle address",
            3 => "anonymous address",
            _ => "reserved",
        };
        writeln!(f, "  Report:        {atp}")?;
        if let Some(ext1) = &self.ext1 {
            if ext1.gbs {
                writeln!(f, "  Ground bit:    set")?;
            }
            if ext1.sim {
                writeln!(f, "  Simulated:     yes")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlit::hex;

    #[test]
    fn test_primary_only() {
        let bytes = hex!("20");
        let ((rest, _), item) =
            TargetReportDescriptor::from_bytes((&bytes, 0)).unwrap();
        assert!(rest.is_empty());
        assert_eq!(item.atp, 1);
        assert_eq!(item.ext1, None);
        assert_eq!(item.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_two_extensions() {
        // FX set on primary and first extension, RCF in the second
        let bytes = hex!("214104");
        let (_, item) =
            TargetReportDescriptor::from_bytes((&bytes, 0)).unwrap();
        let ext1 = item.ext1.unwrap();
        assert!(ext1.gbs);
        let ext2 = ext1.ext2.unwrap();
        assert!(ext2.rcf);
        assert_eq!(ext2.spare2, 0);
        assert_eq!(item.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_update_sets_fx() {
        let mut item = TargetReportDescriptor {
            ext1: Some(TargetReportDescriptorExt1 {
                gbs: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        item.update().unwrap();
        assert_eq!(item.to_bytes().unwrap(), hex!("0140").to_vec());
    }
}
