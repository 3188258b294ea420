use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/// ## Service Identification (I021/015)
///
/// One octet identifying the service provided to one or more users; the
/// value is allocated by the system itself.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct ServiceIdentification(pub u8);

impl fmt::Display for ServiceIdentification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Service id:    {}", self.0)
    }
}
