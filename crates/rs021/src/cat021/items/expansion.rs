use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

/// Longest STA extension chain accepted before the decode is rejected.
pub const MAX_STA_EXTENSIONS: usize = 5;

/**
 * ## Reserved Expansion Field (RE)
 *
 * Self-describing item: one length octet (counting itself), one presence
 * octet | BPS | SELH | NAV | GAO | SGV | STA | TNH | MES |, then the
 * present subfields in that order. The length octet must equal the bytes
 * actually occupied; [`ReservedExpansion::update`] recomputes it together
 * with the presence bits whenever subfield presence changed.
 */
#[derive(Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Clone)]
pub struct ReservedExpansion {
    /// Total field length in bytes, including this octet
    #[deku(update = "self.byte_len()")]
    #[serde(skip)]
    pub len: u8,
    #[deku(bits = "1", update = "self.bps.is_some() as u8")]
    #[serde(skip)]
    pub bps_bit: u8,
    #[deku(bits = "1", update = "self.selh.is_some() as u8")]
    #[serde(skip)]
    pub selh_bit: u8,
    #[deku(bits = "1", update = "self.nav.is_some() as u8")]
    #[serde(skip)]
    pub nav_bit: u8,
    #[deku(bits = "1", update = "self.gao.is_some() as u8")]
    #[serde(skip)]
    pub gao_bit: u8,
    #[deku(bits = "1", update = "self.sgv.is_some() as u8")]
    #[serde(skip)]
    pub sgv_bit: u8,
    #[deku(bits = "1", update = "self.sta.is_some() as u8")]
    #[serde(skip)]
    pub sta_bit: u8,
    #[deku(bits = "1", update = "self.tnh.is_some() as u8")]
    #[serde(skip)]
    pub tnh_bit: u8,
    #[deku(bits = "1", update = "self.mes.is_some() as u8")]
    #[serde(skip)]
    pub mes_bit: u8,
    /// Barometric pressure setting
    #[deku(cond = "*bps_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bps: Option<BarometricPressureSetting>,
    /// Selected heading
    #[deku(cond = "*selh_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selh: Option<SelectedHeading>,
    /// Navigation mode flags
    #[deku(cond = "*nav_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav: Option<NavigationMode>,
    /// GPS antenna offset, opaque encoding
    #[deku(cond = "*gao_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gao: Option<u8>,
    /// Surface ground vector
    #[deku(cond = "*sgv_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sgv: Option<SurfaceGroundVector>,
    /// Aircraft status
    #[deku(cond = "*sta_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sta: Option<AircraftStatus>,
    /// True north heading
    #[deku(cond = "*tnh_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tnh: Option<TrueNorthHeading>,
    /// Military extended squitter
    #[deku(cond = "*mes_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mes: Option<MilitaryExtendedSquitter>,
}

impl ReservedExpansion {
    /// Bytes occupied on the wire: LEN + presence octet + subfields.
    pub fn byte_len(&self) -> u8 {
        let mut len = 2u8;
        if self.bps.is_some() {
            len += 2;
        }
        if self.selh.is_some() {
            len += 2;
        }
        if self.nav.is_some() {
            len += 1;
        }
        if self.gao.is_some() {
            len += 1;
        }
        if let Some(sgv) = &self.sgv {
            len += sgv.byte_len();
        }
        if let Some(sta) = &self.sta {
            len += sta.byte_len();
        }
        if self.tnh.is_some() {
            len += 2;
        }
        if let Some(mes) = &self.mes {
            len += mes.byte_len();
        }
        len
    }

    /// Refreshes the presence bits, inner FX bits and the length octet.
    pub fn update(&mut self) -> Result<(), DekuError> {
        if let Some(sgv) = self.sgv.as_mut() {
            sgv.update()?;
        }
        if let Some(sta) = self.sta.as_mut() {
            DekuUpdate::update(sta)?;
        }
        if let Some(mes) = self.mes.as_mut() {
            DekuUpdate::update(mes)?;
        }
        DekuUpdate::update(self)
    }
}

/// BPS: | spare (4) | pressure (12) |, LSB = 0.1 hPa.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct BarometricPressureSetting {
    #[deku(bits = "4")]
    #[serde(skip)]
    pub spare: u8,
    /// Raw pressure (LSB = 0.1 hPa)
    #[deku(bits = "12", endian = "big")]
    pub bps: u16,
}

impl BarometricPressureSetting {
    const LSB: f64 = 0.1; // hPa

    pub fn hectopascals(&self) -> f64 {
        wire::scale_unsigned(self.bps as u32, Self::LSB)
    }

    pub fn set_hectopascals(&mut self, hpa: f64) {
        self.bps = wire::unscale_unsigned(hpa, Self::LSB, 12) as u16;
    }
}

/// SELH: | spare (2) | HRD | Stat | heading (12) |, LSB = 360/2¹² °.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct SelectedHeading {
    #[deku(bits = "2")]
    #[serde(skip)]
    pub spare: u8,
    /// Heading reference: false = true north, true = magnetic north
    #[deku(bits = "1")]
    pub hrd: bool,
    /// Heading data valid
    #[deku(bits = "1")]
    pub stat: bool,
    /// Raw heading (LSB = 360/2¹² °)
    #[deku(bits = "12", endian = "big")]
    pub heading: u16,
}

impl SelectedHeading {
    const LSB: f64 = 360.0 / 4096.0;

    pub fn degrees(&self) -> f64 {
        wire::scale_unsigned(self.heading as u32, Self::LSB)
    }

    pub fn set_degrees(&mut self, degrees: f64) {
        self.heading =
            wire::unscale_unsigned(degrees.rem_euclid(360.0), Self::LSB, 12)
                as u16;
    }
}

/// NAV: | AP | VN | AH | AM | spare (4) |.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct NavigationMode {
    /// Autopilot engaged
    #[deku(bits = "1")]
    pub ap: bool,
    /// VNAV active
    #[deku(bits = "1")]
    pub vn: bool,
    /// Altitude hold engaged
    #[deku(bits = "1")]
    pub ah: bool,
    /// Approach mode active
    #[deku(bits = "1")]
    pub am: bool,
    #[deku(bits = "4")]
    #[serde(skip)]
    pub spare: u8,
}

/// SGV: | STP | HTS | HTT | HRD | ground speed (11) | FX |,
/// speed LSB = 2⁻¹⁴ NM/s; extension | heading (7) | FX |.
#[derive(Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Clone)]
pub struct SurfaceGroundVector {
    /// Aircraft stopped
    #[deku(bits = "1")]
    pub stp: bool,
    /// Heading/track status
    #[deku(bits = "1")]
    pub hts: bool,
    /// Heading/track type: false = heading, true = track
    #[deku(bits = "1")]
    pub htt: bool,
    /// Reference: false = true north, true = magnetic north
    #[deku(bits = "1")]
    pub hrd: bool,
    /// Raw ground speed (LSB = 2⁻¹⁴ NM/s)
    #[deku(bits = "11", endian = "big")]
    pub ground_speed: u16,
    #[deku(bits = "1", update = "self.ext.is_some() as u8")]
    #[serde(skip)]
    pub fx: u8,
    #[deku(cond = "*fx == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<SurfaceGroundVectorExt>,
}

#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct SurfaceGroundVectorExt {
    /// Raw heading (LSB = 360/2⁷ °)
    #[deku(bits = "7")]
    pub heading: u8,
    #[deku(bits = "1", update = "0")]
    #[serde(skip)]
    pub fx: u8,
}

impl SurfaceGroundVector {
    const LSB_GS: f64 = 1.0 / (1u32 << 14) as f64; // NM/s

    pub fn ground_speed_knots(&self) -> f64 {
        wire::scale_unsigned(self.ground_speed as u32, Self::LSB_GS) * 3600.0
    }

    pub fn set_ground_speed_knots(&mut self, knots: f64) {
        self.ground_speed =
            wire::unscale_unsigned(knots / 3600.0, Self::LSB_GS, 11) as u16;
    }

    fn byte_len(&self) -> u8 {
        2 + self.ext.is_some() as u8
    }

    pub fn update(&mut self) -> Result<(), DekuError> {
        if let Some(ext) = self.ext.as_mut() {
            DekuUpdate::update(ext)?;
        }
        DekuUpdate::update(self)
    }
}

/// STA: | ES | UAT | spare (5) | FX | plus chained 7-bit extension
/// octets. The extension content is not assigned yet and is carried
/// opaque, bounded to [`MAX_STA_EXTENSIONS`] octets.
#[derive(Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Clone)]
pub struct AircraftStatus {
    /// 1090 ES IN capable
    #[deku(bits = "1")]
    pub es: bool,
    /// UAT IN capable
    #[deku(bits = "1")]
    pub uat: bool,
    #[deku(bits = "5")]
    #[serde(skip)]
    pub spare: u8,
    #[deku(bits = "1", update = "!self.extensions.is_empty() as u8")]
    #[serde(skip)]
    pub fx: u8,
    /// Unassigned extension payloads, 7 bits per octet
    #[deku(
        reader = "wire::read_fx_chain(deku::reader, *fx, MAX_STA_EXTENSIONS)",
        writer = "wire::write_fx_chain(deku::writer, extensions)"
    )]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<u8>,
}

impl AircraftStatus {
    fn byte_len(&self) -> u8 {
        1 + self.extensions.len() as u8
    }
}

/// TNH: 16-bit true north heading, LSB = 360/2¹⁶ °.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct TrueNorthHeading {
    /// Raw heading (LSB = 360/2¹⁶ °)
    #[deku(endian = "big")]
    pub heading: u16,
}

impl TrueNorthHeading {
    const LSB: f64 = 360.0 / 65536.0;

    pub fn degrees(&self) -> f64 {
        wire::scale_unsigned(self.heading as u32, Self::LSB)
    }

    pub fn set_degrees(&mut self, degrees: f64) {
        self.heading =
            wire::unscale_unsigned(degrees.rem_euclid(360.0), Self::LSB, 16)
                as u16;
    }
}

/// MES: presence octet | SUM | PMN | GA | EM1 | TOS | XP | spare | FX |
/// (FX always 0) over six military subfields.
#[derive(Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Clone)]
pub struct MilitaryExtendedSquitter {
    #[deku(bits = "1", update = "self.sum.is_some() as u8")]
    #[serde(skip)]
    pub sum_bit: u8,
    #[deku(bits = "1", update = "self.pmn.is_some() as u8")]
    #[serde(skip)]
    pub pmn_bit: u8,
    #[deku(bits = "1", update = "self.ga.is_some() as u8")]
    #[serde(skip)]
    pub ga_bit: u8,
    #[deku(bits = "1", update = "self.em1.is_some() as u8")]
    #[serde(skip)]
    pub em1_bit: u8,
    #[deku(bits = "1", update = "self.tos.is_some() as u8")]
    #[serde(skip)]
    pub tos_bit: u8,
    #[deku(bits = "1", update = "self.xp.is_some() as u8")]
    #[serde(skip)]
    pub xp_bit: u8,
    #[deku(bits = "1")]
    #[serde(skip)]
    pub spare: u8,
    #[deku(bits = "1", update = "0")]
    #[serde(skip)]
    pub fx: u8,
    /// Mode 5 summary
    #[deku(cond = "*sum_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<Mode5Summary>,
    /// Mode 5 PIN / national origin
    #[deku(cond = "*pmn_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmn: Option<Mode5PinNationalOrigin>,
    /// Mode 5 GNSS-derived altitude
    #[deku(cond = "*ga_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ga: Option<Mode5GnssAltitude>,
    /// Extended Mode 1 code
    #[deku(cond = "*em1_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub em1: Option<ExtendedMode1Code>,
    /// Time offset for PIN, GA and EM1 (two's complement, LSB = 1/128 s)
    #[deku(cond = "*tos_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tos: Option<i8>,
    /// X pulse presence
    #[deku(cond = "*xp_bit == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp: Option<XPulse>,
}

impl MilitaryExtendedSquitter {
    fn byte_len(&self) -> u8 {
        1 + self.sum.is_some() as u8
            + 4 * self.pmn.is_some() as u8
            + 2 * self.ga.is_some() as u8
            + 2 * self.em1.is_some() as u8
            + self.tos.is_some() as u8
            + self.xp.is_some() as u8
    }
}

/// SUM: | M5 | ID | DA | M1 | M2 | M3 | MC | PO |.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct Mode5Summary {
    /// Mode 5 interrogation
    #[deku(bits = "1")]
    pub m5: bool,
    /// Authenticated Mode 5 ID reply
    #[deku(bits = "1")]
    pub id: bool,
    /// Authenticated Mode 5 data reply
    #[deku(bits = "1")]
    pub da: bool,
    /// Mode 1 reply
    #[deku(bits = "1")]
    pub m1: bool,
    /// Mode 2 reply
    #[deku(bits = "1")]
    pub m2: bool,
    /// Mode 3/A reply
    #[deku(bits = "1")]
    pub m3: bool,
    /// Mode C reply
    #[deku(bits = "1")]
    pub mc: bool,
    /// P/O pulse
    #[deku(bits = "1")]
    pub po: bool,
}

/// PMN: | spare (2) | PIN (14) | spare (11) | NO (5) |.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct Mode5PinNationalOrigin {
    #[deku(bits = "2")]
    #[serde(skip)]
    pub spare1: u8,
    /// Platform identification number
    #[deku(bits = "14", endian = "big")]
    pub pin: u16,
    #[deku(bits = "11", endian = "big")]
    #[serde(skip)]
    pub spare2: u16,
    /// National origin
    #[deku(bits = "5")]
    pub no: u8,
}

/// GA: | spare (2) | RES | altitude (13) |, two's complement, LSB = 25 ft.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct Mode5GnssAltitude {
    #[deku(bits = "2")]
    #[serde(skip)]
    pub spare: u8,
    /// Altitude resolution: true = 25 ft, false = 100 ft
    #[deku(bits = "1")]
    pub res: bool,
    /// Raw altitude (two's complement, LSB = 25 ft)
    #[deku(bits = "13", endian = "big")]
    pub altitude: u16,
}

impl Mode5GnssAltitude {
    const LSB: f64 = 25.0; // ft

    pub fn feet(&self) -> f64 {
        wire::scale_signed(self.altitude as u32, 13, Self::LSB)
    }

    pub fn set_feet(&mut self, feet: f64) {
        self.altitude = wire::unscale_signed(feet, Self::LSB, 13) as u16;
    }
}

/// EM1: | spare (4) | code (12) |, four octal digits.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct ExtendedMode1Code {
    #[deku(bits = "4")]
    #[serde(skip)]
    pub spare: u8,
    /// Extended Mode 1 code, four 3-bit octal digits
    #[deku(bits = "12", endian = "big")]
    pub code: u16,
}

/// XP: | spare (2) | XP | X5 | XC | X3 | X2 | X1 |.
#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct XPulse {
    #[deku(bits = "2")]
    #[serde(skip)]
    pub spare: u8,
    /// X pulse set in Mode 5 reply
    #[deku(bits = "1")]
    pub xp: bool,
    /// X pulse set in Mode 5 PIN reply
    #[deku(bits = "1")]
    pub x5: bool,
    /// X pulse set in Mode C reply
    #[deku(bits = "1")]
    pub xc: bool,
    /// X pulse set in Mode 3/A reply
    #[deku(bits = "1")]
    pub x3: bool,
    /// X pulse set in Mode 2 reply
    #[deku(bits = "1")]
    pub x2: bool,
    /// X pulse set in Mode 1 reply
    #[deku(bits = "1")]
    pub x1: bool,
}

impl fmt::Display for ReservedExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  RE field:     ")?;
        if let Some(bps) = &self.bps {
            write!(f, " BPS={:.1} hPa", bps.hectopascals())?;
        }
        if let Some(selh) = &self.selh {
            write!(f, " SELH={:.1}°", selh.degrees())?;
        }
        if self.nav.is_some() {
            write!(f, " NAV")?;
        }
        if let Some(gao) = self.gao {
            write!(f, " GAO={gao:#04x}")?;
        }
        if let Some(sgv) = &self.sgv {
            write!(f, " SGV={:.0} kt", sgv.ground_speed_knots())?;
        }
        if self.sta.is_some() {
            write!(f, " STA")?;
        }
        if let Some(tnh) = &self.tnh {
            write!(f, " TNH={:.1}°", tnh.degrees())?;
        }
        if self.mes.is_some() {
            write!(f, " MES")?;
        }
        writeln!(f)
    }
}
