use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/// ## Receiver ID (I021/400)
///
/// One octet designating the receiver unit that produced the report.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct ReceiverId(pub u8);

impl fmt::Display for ReceiverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Receiver:      {}", self.0)
    }
}
