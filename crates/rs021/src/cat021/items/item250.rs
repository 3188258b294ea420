use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/**
 * ## Mode S MB Data (I021/250)
 *
 * BDS register data as extracted from the aircraft transponder: a
 * repetition factor followed by REP eight-byte sub-records, each holding
 * 56 bits of register content plus the BDS1/BDS2 address nibbles.
 */
#[derive(Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Clone)]
pub struct ModeSMBData {
    #[deku(update = "self.registers.len()")]
    #[serde(skip)]
    pub rep: u8,
    #[deku(count = "rep")]
    pub registers: Vec<BdsRegister>,
}

/// One Comm-B register: | MB data (56) | BDS1 (4) | BDS2 (4) |
#[derive(
    Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct BdsRegister {
    /// 56-bit register content, opaque at this level
    pub data: [u8; 7],
    /// Comm-B Data Selector, first digit
    #[deku(bits = "4")]
    pub bds1: u8,
    /// Comm-B Data Selector, second digit
    #[deku(bits = "4")]
    pub bds2: u8,
}

impl ModeSMBData {
    pub fn update(&mut self) -> Result<(), DekuError> {
        DekuUpdate::update(self)
    }
}

impl fmt::Display for ModeSMBData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for register in &self.registers {
            writeln!(
                f,
                "  BDS {:x},{:x}:       {}",
                register.bds1,
                register.bds2,
                register
                    .data
                    .iter()
                    .map(|b| format!("{b:02x}"))
                    .collect::<String>()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlit::hex;

    #[test]
    fn test_rep_consumes_stride() {
        let bytes = hex!("0280e5a9dcd87c3560ffd08338e57c0040aa");
        let ((rest, _), item) = ModeSMBData::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(item.registers.len(), 2);
        assert_eq!(item.registers[0].bds1, 6);
        assert_eq!(item.registers[0].bds2, 0);
        assert_eq!(item.registers[1].bds1, 4);
        assert_eq!(item.to_bytes().unwrap(), bytes[..17].to_vec());
    }

    #[test]
    fn test_empty_rep() {
        let ((rest, _), item) = ModeSMBData::from_bytes((&[0x00], 0)).unwrap();
        assert!(rest.is_empty());
        assert!(item.registers.is_empty());
        assert_eq!(item.to_bytes().unwrap(), vec![0x00]);
    }

    #[test]
    fn test_update_rep() {
        let mut item = ModeSMBData {
            rep: 0,
            registers: vec![BdsRegister {
                data: [0; 7],
                bds1: 4,
                bds2: 4,
            }],
        };
        item.update().unwrap();
        assert_eq!(item.rep, 1);
        assert_eq!(item.to_bytes().unwrap().len(), 9);
    }
}
