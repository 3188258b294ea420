use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/**
 * ## Emitter Category (I021/020)
 *
 * Characteristics of the originating ADS-B unit, one octet.
 *
 * | ECAT | Meaning                                        |
 * | ---- | ---------------------------------------------- |
 * | 0    | No ADS-B emitter category information          |
 * | 1    | Light aircraft (< 15 500 lbs)                  |
 * | 2    | Small aircraft (15 500 to 75 000 lbs)          |
 * | 3    | Medium aircraft (75 000 to 300 000 lbs)        |
 * | 4    | High vortex large                              |
 * | 5    | Heavy aircraft (> 300 000 lbs)                 |
 * | 6    | Highly manoeuvrable, high speed                |
 * | 10   | Rotocraft                                      |
 * | 11   | Glider / sailplane                             |
 * | 12   | Lighter-than-air                               |
 * | 13   | Unmanned aerial vehicle                        |
 * | 14   | Space / transatmospheric vehicle               |
 * | 15   | Ultralight / hang-glider / paraglider          |
 * | 16   | Parachutist / skydiver                         |
 * | 20   | Surface emergency vehicle                      |
 * | 21   | Surface service vehicle                        |
 * | 22   | Fixed ground or tethered obstruction           |
 * | 23   | Cluster obstacle                               |
 * | 24   | Line obstacle                                  |
 */
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct EmitterCategory(pub u8);

impl EmitterCategory {
    pub fn description(&self) -> &'static str {
        match self.0 {
            0 => "No ADS-B emitter category information",
            1 => "Light aircraft",
            2 => "Small aircraft",
            3 => "Medium aircraft",
            4 => "High vortex large",
            5 => "Heavy aircraft",
            6 => "Highly manoeuvrable, high speed",
            10 => "Rotocraft",
            11 => "Glider / sailplane",
            12 => "Lighter-than-air",
            13 => "Unmanned aerial vehicle",
            14 => "Space / transatmospheric vehicle",
            15 => "Ultralight / hang-glider / paraglider",
            16 => "Parachutist / skydiver",
            20 => "Surface emergency vehicle",
            21 => "Surface service vehicle",
            22 => "Fixed ground or tethered obstruction",
            23 => "Cluster obstacle",
            24 => "Line obstacle",
            _ => "Reserved",
        }
    }
}

impl fmt::Display for EmitterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Emitter:       {}", self.description())
    }
}
