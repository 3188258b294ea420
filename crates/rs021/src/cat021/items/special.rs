use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/**
 * ## Special Purpose Field (SP)
 *
 * One length octet (counting itself) followed by opaque,
 * application-defined bytes. Content is carried verbatim.
 */
#[derive(Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Clone)]
pub struct SpecialPurpose {
    /// Total field length in bytes, including this octet
    #[deku(update = "self.data.len() + 1")]
    #[serde(skip)]
    pub len: u8,
    #[deku(count = "len.saturating_sub(1)")]
    pub data: Vec<u8>,
}

impl SpecialPurpose {
    /// Longest payload the one-byte length counter can describe.
    pub const MAX_DATA: usize = 254;

    /// Builds the field from an opaque payload. The length octet counts
    /// itself, so at most [`Self::MAX_DATA`] bytes fit; a longer payload
    /// is truncated.
    pub fn new(mut data: Vec<u8>) -> Self {
        data.truncate(Self::MAX_DATA);
        Self {
            len: data.len() as u8 + 1,
            data,
        }
    }

    pub fn update(&mut self) -> Result<(), DekuError> {
        DekuUpdate::update(self)
    }
}

impl fmt::Display for SpecialPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  SP field:     ")?;
        for byte in &self.data {
            write!(f, " {byte:02x}")?;
        }
        writeln!(f)
    }
}
