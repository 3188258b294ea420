use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

/**
 * ## Met Information (I021/220)
 *
 * Compound item: a presence octet | WS | WD | TMP | TRB | spare (3) | FX |
 * followed by the present subfields in that order. The trailing FX bit is
 * always 0, no extension octet is defined.
 */
#[derive(Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Clone)]
pub struct MetInformation {
    /// Wind speed subfield present
    #[deku(bits = "1", update = "self.wind_speed.is_some() as u8")]
    #[serde(skip)]
    pub ws: u8,
    /// Wind direction subfield present
    #[deku(bits = "1", update = "self.wind_direction.is_some() as u8")]
    #[serde(skip)]
    pub wd: u8,
    /// Temperature subfield present
    #[deku(bits = "1", update = "self.temperature.is_some() as u8")]
    #[serde(skip)]
    pub tmp: u8,
    /// Turbulence subfield present
    #[deku(bits = "1", update = "self.turbulence.is_some() as u8")]
    #[serde(skip)]
    pub trb: u8,
    #[deku(bits = "3")]
    #[serde(skip)]
    pub spare: u8,
    #[deku(bits = "1", update = "0")]
    #[serde(skip)]
    pub fx: u8,
    /// Wind speed in knots
    #[deku(cond = "*ws == 1", endian = "big")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<u16>,
    /// Wind direction in degrees
    #[deku(cond = "*wd == 1", endian = "big")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<u16>,
    /// Raw temperature (two's complement, LSB = 0.25 °C)
    #[deku(cond = "*tmp == 1", endian = "big")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i16>,
    /// Turbulence index (0..=15)
    #[deku(cond = "*trb == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbulence: Option<u8>,
}

impl MetInformation {
    const LSB_TMP: f64 = 0.25; // °C

    pub fn temperature_celsius(&self) -> Option<f64> {
        self.temperature.map(|t| t as f64 * Self::LSB_TMP)
    }

    pub fn set_temperature_celsius(&mut self, celsius: f64) {
        self.temperature = Some(wire::unscale_signed(celsius, Self::LSB_TMP, 16) as i16);
    }

    /// Refreshes the presence bits from the populated subfields.
    pub fn update(&mut self) -> Result<(), DekuError> {
        DekuUpdate::update(self)
    }
}

impl fmt::Display for MetInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  Met:          ")?;
        if let Some(ws) = self.wind_speed {
            write!(f, " wind {ws} kt")?;
        }
        if let Some(wd) = self.wind_direction {
            write!(f, " from {wd}°")?;
        }
        if let Some(tmp) = self.temperature_celsius() {
            write!(f, " {tmp:.2} °C")?;
        }
        if let Some(trb) = self.turbulence {
            write!(f, " turbulence {trb}")?;
        }
        writeln!(f)
    }
}
