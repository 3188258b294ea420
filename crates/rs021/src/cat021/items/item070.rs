use deku::prelude::*;
use serde::ser::{Serialize, Serializer};
use std::fmt;

/**
 * ## Mode 3/A Code (I021/070)
 *
 * Mode 3/A code converted into octal representation.
 *
 * Two octets: | spare (4) | A4 A2 A1 | B4 B2 B1 | C4 C2 C1 | D4 D2 D1 |
 *
 * The twelve code bits are four octal digits, so the raw field value read
 * as a binary number *is* the squawk when printed in octal.
 */
#[derive(Debug, Default, PartialEq, Eq, DekuRead, DekuWrite, Copy, Clone)]
pub struct Mode3ACode {
    #[deku(bits = "4")]
    spare: u8,
    /// The four octal digits, packed 3 bits each
    #[deku(bits = "12", endian = "big")]
    pub code: u16,
}

impl Mode3ACode {
    /// Raw 12-bit code; input wider than 12 bits is masked, the documented
    /// clamp policy for this setter.
    pub fn set_code(&mut self, code: u16) {
        self.code = code & 0x0fff;
    }

    /// Build from four octal digits given as e.g. `0o1234`.
    pub fn from_squawk(code: u16) -> Self {
        let mut item = Self::default();
        item.set_code(code);
        item
    }
}

impl fmt::Display for Mode3ACode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Mode 3/A:      {:04o}", self.code)
    }
}

impl Serialize for Mode3ACode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:04o}", self.code))
    }
}
