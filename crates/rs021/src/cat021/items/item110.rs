use deku::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::cat021::wire;

/// Upper bound on trajectory intent points accepted in one item, checked
/// on both decode and encode.
pub const MAX_TRAJECTORY_POINTS: u8 = 10;

/**
 * ## Trajectory Intent (I021/110)
 *
 * Reports of the next way-, turn- or descent-points programmed in the
 * FMS. Compound item: a primary octet with two subfield presence bits,
 *
 * | TIS | TID | spare (5) | FX |
 *
 * followed by the Trajectory Intent Status subfield (one octet) and the
 * Trajectory Intent Data subfield (REP octet + REP fifteen-byte points),
 * each present only if its bit is set.
 */
#[derive(Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Clone)]
pub struct TrajectoryIntent {
    #[deku(bits = "1", update = "self.status.is_some() as u8")]
    #[serde(skip)]
    pub tis: u8,
    #[deku(bits = "1", update = "self.data.is_some() as u8")]
    #[serde(skip)]
    pub tid: u8,
    #[deku(bits = "5")]
    #[serde(skip)]
    pub spare: u8,
    #[deku(bits = "1", update = "0")]
    #[serde(skip)]
    pub fx: u8,
    /// Trajectory Intent Status (TIS)
    #[deku(cond = "*tis == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TrajectoryIntentStatus>,
    /// Trajectory Intent Data (TID)
    #[deku(cond = "*tid == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<TrajectoryIntentData>,
}

/// TIS subfield: | NAV | NVB | spare (5) | FX |
#[derive(
    Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct TrajectoryIntentStatus {
    /// Trajectory intent data is NOT available
    #[deku(bits = "1")]
    pub nav: bool,
    /// Trajectory intent data is NOT valid
    #[deku(bits = "1")]
    pub nvb: bool,
    #[deku(bits = "5")]
    #[serde(skip)]
    pub spare: u8,
    #[deku(bits = "1", update = "0")]
    #[serde(skip)]
    pub fx: u8,
}

/// TID subfield: a repetition factor followed by that many points.
#[derive(Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Clone)]
pub struct TrajectoryIntentData {
    #[deku(
        update = "self.points.len()",
        assert = "*rep <= MAX_TRAJECTORY_POINTS"
    )]
    #[serde(skip)]
    pub rep: u8,
    #[deku(count = "rep")]
    pub points: Vec<TrajectoryIntentPoint>,
}

/**
 * One trajectory intent point, fifteen bytes:
 *
 * | TCA | NC | TCP# (6) | ALT (16) | LAT (24) | LON (24) |
 * | PT (4) | TD (2) | TRA | TOA | TOV (24) | TTR (16) |
 *
 * ALT is two's complement, LSB = 10 ft; LAT/LON are two's complement,
 * LSB = 180/2²³ °; TOV LSB = 1 s; TTR LSB = 0.01 NM.
 */
#[derive(
    Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct TrajectoryIntentPoint {
    /// TCP number availability
    #[deku(bits = "1")]
    pub tca: bool,
    /// TCP compliance
    #[deku(bits = "1")]
    pub nc: bool,
    /// Trajectory change point number
    #[deku(bits = "6")]
    pub tcp_number: u8,
    /// Altitude, raw (two's complement, LSB = 10 ft)
    #[deku(endian = "big")]
    pub altitude: i16,
    /// Latitude, raw 24-bit two's complement (LSB = 180/2²³ °)
    #[deku(bits = "24", endian = "big")]
    pub latitude: u32,
    /// Longitude, raw 24-bit two's complement (LSB = 180/2²³ °)
    #[deku(bits = "24", endian = "big")]
    pub longitude: u32,
    /// Point type (0: unknown, 1: fly-by, 2: fly-over, ...)
    #[deku(bits = "4")]
    pub point_type: u8,
    /// Turn direction (0: n/a, 1: left, 2: right, 3: no turn)
    #[deku(bits = "2")]
    pub td: u8,
    /// Turn radius availability
    #[deku(bits = "1")]
    pub tra: bool,
    /// Time over point availability
    #[deku(bits = "1")]
    pub toa: bool,
    /// Time over point, raw (LSB = 1 s)
    #[deku(bits = "24", endian = "big")]
    pub tov: u32,
    /// Turn radius, raw (LSB = 0.01 NM)
    #[deku(endian = "big")]
    pub ttr: u16,
}

impl TrajectoryIntentPoint {
    pub fn altitude_ft(&self) -> f64 {
        self.altitude as f64 * 10.0
    }

    pub fn set_altitude_ft(&mut self, feet: f64) {
        self.altitude =
            wire::sign_extend(wire::unscale_signed(feet, 10.0, 16), 16) as i16;
    }

    pub fn latitude_deg(&self) -> f64 {
        wire::scale_signed(self.latitude, 24, wire::LSB_LATLON_24)
    }

    pub fn set_latitude_deg(&mut self, degrees: f64) {
        self.latitude = wire::unscale_signed(degrees, wire::LSB_LATLON_24, 24);
    }

    pub fn longitude_deg(&self) -> f64 {
        wire::scale_signed(self.longitude, 24, wire::LSB_LATLON_24)
    }

    pub fn set_longitude_deg(&mut self, degrees: f64) {
        self.longitude = wire::unscale_signed(degrees, wire::LSB_LATLON_24, 24);
    }

    /// Time over point in seconds since midnight.
    pub fn time_over_point_s(&self) -> u32 {
        self.tov
    }

    pub fn turn_radius_nm(&self) -> f64 {
        wire::scale_unsigned(self.ttr as u32, 0.01)
    }

    pub fn set_turn_radius_nm(&mut self, nm: f64) {
        self.ttr = wire::unscale_unsigned(nm, 0.01, 16) as u16;
    }
}

impl TrajectoryIntent {
    /// Refresh presence bits and the repetition factor before encoding.
    pub fn update(&mut self) -> Result<(), DekuError> {
        if let Some(data) = &mut self.data {
            DekuUpdate::update(data)?;
        }
        DekuUpdate::update(self)
    }
}

impl fmt::Display for TrajectoryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = &self.status {
            writeln!(
                f,
                "  Trajectory:    available: {} valid: {}",
                !status.nav, !status.nvb
            )?;
        }
        if let Some(data) = &self.data {
            for point in &data.points {
                writeln!(
                    f,
                    "  TCP {:>2}:        {:.5}°/{:.5}° {} ft",
                    point.tcp_number,
                    point.latitude_deg(),
                    point.longitude_deg(),
                    point.altitude_ft(),
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hexlit::hex;

    #[test]
    fn test_empty_rep() {
        // TID present, REP = 0: exactly two bytes consumed
        let bytes = hex!("400020");
        let ((rest, _), item) =
            TrajectoryIntent::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(rest.len(), 1);
        let data = item.data.unwrap();
        assert_eq!(data.rep, 0);
        assert!(data.points.is_empty());
    }

    #[test]
    fn test_rep_consumes_stride() {
        let mut point = TrajectoryIntentPoint {
            tca: true,
            tcp_number: 3,
            point_type: 1,
            td: 2,
            ..Default::default()
        };
        point.set_altitude_ft(-1250.0);
        point.set_latitude_deg(43.60444);
        point.set_longitude_deg(-1.44249);
        point.set_turn_radius_nm(2.5);

        let mut item = TrajectoryIntent {
            status: Some(TrajectoryIntentStatus::default()),
            data: Some(TrajectoryIntentData {
                rep: 0,
                points: vec![point, point],
            }),
            ..Default::default()
        };
        item.update().unwrap();
        let bytes = item.to_bytes().unwrap();
        // presence octet + TIS + REP + 2 * 15
        assert_eq!(bytes.len(), 1 + 1 + 1 + 2 * 15);

        let ((rest, _), decoded) =
            TrajectoryIntent::from_bytes((&bytes, 0)).unwrap();
        assert!(rest.is_empty());
        assert_eq!(decoded, item);
        let point = &decoded.data.unwrap().points[0];
        assert_eq!(point.altitude_ft(), -1250.0);
        assert_relative_eq!(point.latitude_deg(), 43.60444, epsilon = 1e-4);
        assert_relative_eq!(point.longitude_deg(), -1.44249, epsilon = 1e-4);
        assert_relative_eq!(point.turn_radius_nm(), 2.5);
    }

    #[test]
    fn test_rep_bound() {
        // REP = 11 exceeds the documented maximum of 10
        let mut bytes = vec![0x40, 0x0b];
        bytes.extend(vec![0u8; 11 * 15]);
        assert!(TrajectoryIntent::from_bytes((&bytes, 0)).is_err());
    }
}
