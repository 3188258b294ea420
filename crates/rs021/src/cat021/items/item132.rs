use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/// ## Message Amplitude (I021/132)
///
/// Amplitude of the received ADS-B message: one octet, two's complement,
/// LSB = 1 dBm.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct MessageAmplitude {
    /// Amplitude in dBm
    pub mam: i8,
}

impl fmt::Display for MessageAmplitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Amplitude:     {} dBm", self.mam)
    }
}
