//! Decoding and encoding of ASTERIX category 021 (ADS-B target reports).
//!
//! A data block is | CAT = 21 | LEN (u16, big-endian, counting the header) |
//! followed by one record: an FSPEC presence bitmap and the present data
//! items, contiguous and in the canonical UAP order. [`Cat21::from_bytes`]
//! walks that layout; [`Cat21::to_bytes`] rebuilds it, recomputing FSPEC,
//! every FX/REP/LEN counter and the block length.

use deku::prelude::*;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::debug;

pub mod fspec;
pub mod items;
pub mod wire;

use fspec::FieldSpec;
use items::airspeed::{AirSpeed, TrueAirSpeed};
use items::expansion::ReservedExpansion;
use items::item008::AircraftOperationalStatus;
use items::item010::DataSourceIdentification;
use items::item015::ServiceIdentification;
use items::item016::ServiceManagement;
use items::item020::EmitterCategory;
use items::item040::TargetReportDescriptor;
use items::item070::Mode3ACode;
use items::item080::TargetAddress;
use items::item090::QualityIndicators;
use items::item110::TrajectoryIntent;
use items::item132::MessageAmplitude;
use items::item140::GeometricHeight;
use items::item145::FlightLevel;
use items::item152::MagneticHeading;
use items::item160::AirborneGroundVector;
use items::item161::TrackNumber;
use items::item165::TrackAngleRate;
use items::item170::TargetIdentification;
use items::item200::TargetStatus;
use items::item210::MopsVersion;
use items::item220::MetInformation;
use items::item230::RollAngle;
use items::item250::ModeSMBData;
use items::item260::AcasResolutionAdvisory;
use items::item271::SurfaceCapabilities;
use items::item295::DataAges;
use items::item400::ReceiverId;
use items::position::{HighResolutionPosition, Position};
use items::selected_altitude::{FinalStateSelectedAltitude, SelectedAltitude};
use items::special::SpecialPurpose;
use items::times::{HighPrecisionTime, TimeOfDay};
use items::vertical_rate::{BarometricVerticalRate, GeometricVerticalRate};

/// Category number carried in the data block header.
pub const CAT: u8 = 21;

#[derive(Error, Debug)]
pub enum Error {
    #[error("category byte is {found}, expected 21")]
    InvalidCategory { found: u8 },

    #[error("buffer holds {actual} bytes, the data block needs {expected}")]
    TruncatedMessage { expected: usize, actual: usize },

    #[error("declared length {declared} does not match {consumed} bytes of content")]
    BadLength { declared: usize, consumed: usize },

    #[error("FSPEC longer than {} octets", fspec::MAX_OCTETS)]
    FspecTooLong,

    #[error("record longer than a data block can carry ({len} bytes)")]
    RecordTooLong { len: usize },

    #[error("a record without any item cannot be encoded")]
    EmptyRecord,

    #[error("FSPEC sets spare FRN {frn}")]
    SpareItem { frn: u8 },

    #[error("item at FRN {frn} (offset {offset}): {source}")]
    Item {
        frn: u8,
        offset: usize,
        source: DekuError,
    },

    #[error(transparent)]
    Deku(#[from] DekuError),
}

/// One category 021 record: every data item of the UAP as an `Option`,
/// in Field Reference Number order.
#[derive(Debug, Default, PartialEq, Clone, Serialize)]
pub struct Cat21 {
    /// I021/010 Data source identification (FRN 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSourceIdentification>,
    /// I021/040 Target report descriptor (FRN 2)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_report: Option<TargetReportDescriptor>,
    /// I021/161 Track number (FRN 3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_number: Option<TrackNumber>,
    /// I021/015 Service identification (FRN 4)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_identification: Option<ServiceIdentification>,
    /// I021/071 Time of applicability for position (FRN 5)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_applicability_position: Option<TimeOfDay>,
    /// I021/130 Position in WGS-84 coordinates (FRN 6)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// I021/131 High-resolution position (FRN 7)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_high_resolution: Option<HighResolutionPosition>,
    /// I021/072 Time of applicability for velocity (FRN 8)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_applicability_velocity: Option<TimeOfDay>,
    /// I021/150 Air speed (FRN 9)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_speed: Option<AirSpeed>,
    /// I021/151 True air speed (FRN 10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_air_speed: Option<TrueAirSpeed>,
    /// I021/080 Target address (FRN 11)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_address: Option<TargetAddress>,
    /// I021/073 Time of message reception for position (FRN 12)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_reception_position: Option<TimeOfDay>,
    /// I021/074 Time of message reception for position, high precision (FRN 13)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_reception_position_high: Option<HighPrecisionTime>,
    /// I021/075 Time of message reception for velocity (FRN 14)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_reception_velocity: Option<TimeOfDay>,
    /// I021/076 Time of message reception for velocity, high precision (FRN 15)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_reception_velocity_high: Option<HighPrecisionTime>,
    /// I021/140 Geometric height (FRN 16)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometric_height: Option<GeometricHeight>,
    /// I021/090 Quality indicators (FRN 17)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_indicators: Option<QualityIndicators>,
    /// I021/210 MOPS version (FRN 18)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mops_version: Option<MopsVersion>,
    /// I021/070 Mode 3/A code (FRN 19)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode3a: Option<Mode3ACode>,
    /// I021/230 Roll angle (FRN 20)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_angle: Option<RollAngle>,
    /// I021/145 Flight level (FRN 21)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_level: Option<FlightLevel>,
    /// I021/152 Magnetic heading (FRN 22)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnetic_heading: Option<MagneticHeading>,
    /// I021/200 Target status (FRN 23)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_status: Option<TargetStatus>,
    /// I021/155 Barometric vertical rate (FRN 24)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barometric_vertical_rate: Option<BarometricVerticalRate>,
    /// I021/157 Geometric vertical rate (FRN 25)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometric_vertical_rate: Option<GeometricVerticalRate>,
    /// I021/160 Airborne ground vector (FRN 26)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_vector: Option<AirborneGroundVector>,
    /// I021/165 Track angle rate (FRN 27)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_angle_rate: Option<TrackAngleRate>,
    /// I021/077 Time of report transmission (FRN 28)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_report_transmission: Option<TimeOfDay>,
    /// I021/170 Target identification (FRN 29)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_identification: Option<TargetIdentification>,
    /// I021/020 Emitter category (FRN 30)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emitter_category: Option<EmitterCategory>,
    /// I021/220 Met information (FRN 31)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub met_information: Option<MetInformation>,
    /// I021/146 Selected altitude (FRN 32)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_altitude: Option<SelectedAltitude>,
    /// I021/148 Final state selected altitude (FRN 33)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_state_selected_altitude: Option<FinalStateSelectedAltitude>,
    /// I021/110 Trajectory intent (FRN 34)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trajectory_intent: Option<TrajectoryIntent>,
    /// I021/016 Service management (FRN 35)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_management: Option<ServiceManagement>,
    /// I021/008 Aircraft operational status (FRN 36)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_status: Option<AircraftOperationalStatus>,
    /// I021/271 Surface capabilities and characteristics (FRN 37)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_capabilities: Option<SurfaceCapabilities>,
    /// I021/132 Message amplitude (FRN 38)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_amplitude: Option<MessageAmplitude>,
    /// I021/250 Mode S MB data (FRN 39)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode_s_mb_data: Option<ModeSMBData>,
    /// I021/260 ACAS resolution advisory report (FRN 40)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acas_resolution_advisory: Option<AcasResolutionAdvisory>,
    /// I021/400 Receiver ID (FRN 41)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<ReceiverId>,
    /// I021/295 Data ages (FRN 42)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_ages: Option<DataAges>,
    /// Reserved expansion field (FRN 48)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_expansion: Option<ReservedExpansion>,
    /// Special purpose field (FRN 49)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_purpose: Option<SpecialPurpose>,
}

/// Decode one item at `frn`, wrapping any codec failure with its position
/// in the data block.
fn read_one<'a, T>(
    rest: (&'a [u8], usize),
    frn: u8,
    declared: usize,
) -> Result<((&'a [u8], usize), T), Error>
where
    T: DekuContainerRead<'a>,
{
    let offset = declared - rest.0.len();
    T::from_bytes(rest).map_err(|source| Error::Item {
        frn,
        offset,
        source,
    })
}

impl Cat21 {
    /// Decode one data block from the front of `input`.
    ///
    /// Returns the record and the number of bytes consumed (the declared
    /// block length); trailing bytes are left for the caller. All reads
    /// are bounded by the declared length, and the record must fill it
    /// exactly.
    pub fn from_bytes(input: &[u8]) -> Result<(Self, usize), Error> {
        if input.len() < 3 {
            return Err(Error::TruncatedMessage {
                expected: 3,
                actual: input.len(),
            });
        }
        if input[0] != CAT {
            return Err(Error::InvalidCategory { found: input[0] });
        }
        let declared = u16::from_be_bytes([input[1], input[2]]) as usize;
        if declared < 4 {
            return Err(Error::BadLength {
                declared,
                consumed: input.len().min(declared),
            });
        }
        if input.len() < declared {
            return Err(Error::TruncatedMessage {
                expected: declared,
                actual: input.len(),
            });
        }
        let body = &input[..declared];
        let (fspec, fspec_len) = FieldSpec::read(&body[3..])?;
        debug!("decoding a {declared}-byte data block, FSPEC {fspec_len} octets");

        let mut record = Cat21::default();
        let mut rest: (&[u8], usize) = (&body[3 + fspec_len..], 0);

        macro_rules! item {
            ($frn:expr, $field:ident) => {{
                let (r, value) = read_one(rest, $frn, declared)?;
                rest = r;
                record.$field = Some(value);
            }};
        }

        for frn in fspec.iter() {
            match frn {
                1 => item!(1, data_source),
                2 => item!(2, target_report),
                3 => item!(3, track_number),
                4 => item!(4, service_identification),
                5 => item!(5, time_applicability_position),
                6 => item!(6, position),
                7 => item!(7, position_high_resolution),
                8 => item!(8, time_applicability_velocity),
                9 => item!(9, air_speed),
                10 => item!(10, true_air_speed),
                11 => item!(11, target_address),
                12 => item!(12, time_reception_position),
                13 => item!(13, time_reception_position_high),
                14 => item!(14, time_reception_velocity),
                15 => item!(15, time_reception_velocity_high),
                16 => item!(16, geometric_height),
                17 => item!(17, quality_indicators),
                18 => item!(18, mops_version),
                19 => item!(19, mode3a),
                20 => item!(20, roll_angle),
                21 => item!(21, flight_level),
                22 => item!(22, magnetic_heading),
                23 => item!(23, target_status),
                24 => item!(24, barometric_vertical_rate),
                25 => item!(25, geometric_vertical_rate),
                26 => item!(26, ground_vector),
                27 => item!(27, track_angle_rate),
                28 => item!(28, time_report_transmission),
                29 => item!(29, target_identification),
                30 => item!(30, emitter_category),
                31 => item!(31, met_information),
                32 => item!(32, selected_altitude),
                33 => item!(33, final_state_selected_altitude),
                34 => item!(34, trajectory_intent),
                35 => item!(35, service_management),
                36 => item!(36, operational_status),
                37 => item!(37, surface_capabilities),
                38 => item!(38, message_amplitude),
                39 => item!(39, mode_s_mb_data),
                40 => item!(40, acas_resolution_advisory),
                41 => item!(41, receiver_id),
                42 => item!(42, data_ages),
                48 => {
                    // the RE length octet must match the decoded occupancy
                    let offset = declared - rest.0.len();
                    let (r, value) =
                        read_one::<ReservedExpansion>(rest, 48, declared)?;
                    if value.len != value.byte_len() {
                        return Err(Error::Item {
                            frn: 48,
                            offset,
                            source: DekuError::Assertion(
                                format!(
                                    "RE length octet {} does not match {} \
                                     occupied bytes",
                                    value.len,
                                    value.byte_len()
                                )
                                .into(),
                            ),
                        });
                    }
                    rest = r;
                    record.reserved_expansion = Some(value);
                }
                49 => item!(49, special_purpose),
                frn => return Err(Error::SpareItem { frn }),
            }
        }

        if !rest.0.is_empty() || rest.1 != 0 {
            return Err(Error::BadLength {
                declared,
                consumed: declared - rest.0.len(),
            });
        }
        Ok((record, declared))
    }

    /// Encode the record as one data block.
    ///
    /// The FSPEC is rebuilt from the populated fields, every FX, REP and
    /// LEN counter inside the items is refreshed first, and the block
    /// length is computed last. A record without any item is an error.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut fspec = FieldSpec::new();
        let mut payload = Vec::new();

        // plain items are emitted as stored
        macro_rules! item {
            ($frn:expr, $field:ident) => {
                if let Some(value) = &self.$field {
                    fspec.set($frn);
                    payload.extend(value.to_bytes()?);
                }
            };
            // items with internal counters get them refreshed on a copy
            ($frn:expr, $field:ident, update) => {
                if let Some(value) = &self.$field {
                    fspec.set($frn);
                    let mut value = value.clone();
                    value.update()?;
                    payload.extend(value.to_bytes()?);
                }
            };
        }

        item!(1, data_source);
        item!(2, target_report, update);
        item!(3, track_number);
        item!(4, service_identification);
        item!(5, time_applicability_position);
        item!(6, position);
        item!(7, position_high_resolution);
        item!(8, time_applicability_velocity);
        item!(9, air_speed);
        item!(10, true_air_speed);
        item!(11, target_address);
        item!(12, time_reception_position);
        item!(13, time_reception_position_high);
        item!(14, time_reception_velocity);
        item!(15, time_reception_velocity_high);
        item!(16, geometric_height);
        item!(17, quality_indicators, update);
        item!(18, mops_version);
        item!(19, mode3a);
        item!(20, roll_angle);
        item!(21, flight_level);
        item!(22, magnetic_heading);
        item!(23, target_status);
        item!(24, barometric_vertical_rate);
        item!(25, geometric_vertical_rate);
        item!(26, ground_vector);
        item!(27, track_angle_rate);
        item!(28, time_report_transmission);
        item!(29, target_identification);
        item!(30, emitter_category);
        item!(31, met_information, update);
        item!(32, selected_altitude);
        item!(33, final_state_selected_altitude);
        item!(34, trajectory_intent, update);
        item!(35, service_management);
        item!(36, operational_status);
        item!(37, surface_capabilities, update);
        item!(38, message_amplitude);
        item!(39, mode_s_mb_data, update);
        item!(40, acas_resolution_advisory);
        item!(41, receiver_id);
        item!(42, data_ages, update);
        item!(48, reserved_expansion, update);
        item!(49, special_purpose, update);

        if fspec.is_empty() {
            return Err(Error::EmptyRecord);
        }
        let fspec_bytes = fspec.to_bytes();
        let total = 3 + fspec_bytes.len() + payload.len();
        let len = u16::try_from(total)
            .map_err(|_| Error::RecordTooLong { len: total })?;

        let mut out = Vec::with_capacity(total);
        out.push(CAT);
        out.extend(len.to_be_bytes());
        out.extend(fspec_bytes);
        out.extend(payload);
        Ok(out)
    }
}

impl fmt::Display for Cat21 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CAT021 target report")?;
        macro_rules! show {
            ($field:ident) => {
                if let Some(value) = &self.$field {
                    write!(f, "{value}")?;
                }
            };
        }
        macro_rules! time {
            ($field:ident, $label:literal) => {
                if let Some(value) = &self.$field {
                    writeln!(f, "  {} {value}", $label)?;
                }
            };
        }
        show!(data_source);
        show!(target_report);
        show!(track_number);
        show!(service_identification);
        time!(time_applicability_position, "ToA position: ");
        show!(position);
        show!(position_high_resolution);
        time!(time_applicability_velocity, "ToA velocity: ");
        show!(air_speed);
        show!(true_air_speed);
        if let Some(addr) = &self.target_address {
            writeln!(f, "  ICAO address:  {addr}")?;
        }
        time!(time_reception_position, "ToMR position:");
        time!(time_reception_position_high, "ToMR position:");
        time!(time_reception_velocity, "ToMR velocity:");
        time!(time_reception_velocity_high, "ToMR velocity:");
        show!(geometric_height);
        show!(quality_indicators);
        show!(mops_version);
        show!(mode3a);
        show!(roll_angle);
        show!(flight_level);
        show!(magnetic_heading);
        show!(target_status);
        show!(barometric_vertical_rate);
        show!(geometric_vertical_rate);
        show!(ground_vector);
        show!(track_angle_rate);
        time!(time_report_transmission, "ToRT:         ");
        show!(target_identification);
        show!(emitter_category);
        show!(met_information);
        show!(selected_altitude);
        show!(final_state_selected_altitude);
        show!(trajectory_intent);
        show!(service_management);
        show!(operational_status);
        show!(surface_capabilities);
        show!(message_amplitude);
        show!(mode_s_mb_data);
        show!(acas_resolution_advisory);
        show!(receiver_id);
        show!(data_ages);
        show!(reserved_expansion);
        show!(special_purpose);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlit::hex;

    #[test]
    fn test_minimal_block() {
        // CAT 21, LEN 7, FSPEC 0x90 (FRN 1 and 4), SAC/SIC 02/29, SID 0x41
        let bytes = hex!("15000790022941");
        let (record, consumed) = Cat21::from_bytes(&bytes).unwrap();
        assert_eq!(consumed, 7);
        let ds = record.data_source.unwrap();
        assert_eq!((ds.sac, ds.sic), (0x02, 0x29));
        assert_eq!(record.service_identification.unwrap().0, 0x41);
        assert_eq!(record.target_report, None);
    }

    #[test]
    fn test_roundtrip_minimal() {
        let record = Cat21 {
            data_source: Some(DataSourceIdentification {
                sac: 0x02,
                sic: 0x29,
            }),
            service_identification: Some(ServiceIdentification(0x41)),
            ..Default::default()
        };
        let bytes = record.to_bytes().unwrap();
        assert_eq!(bytes, hex!("15000790022941").to_vec());
        let (decoded, _) = Cat21::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_wrong_category() {
        let err = Cat21::from_bytes(&hex!("3000049002")).unwrap_err();
        assert!(matches!(err, Error::InvalidCategory { found: 0x30 }));
    }

    #[test]
    fn test_truncated_header() {
        let err = Cat21::from_bytes(&[0x15, 0x00]).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedMessage {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_buffer_shorter_than_len() {
        let err = Cat21::from_bytes(&hex!("1500079002")).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedMessage {
                expected: 7,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_len_longer_than_content() {
        // LEN declares 8 bytes but the items only fill 7
        let err = Cat21::from_bytes(&hex!("150008900229410a")).unwrap_err();
        assert!(matches!(
            err,
            Error::BadLength {
                declared: 8,
                consumed: 7
            }
        ));
    }

    #[test]
    fn test_spare_frn_rejected() {
        // second FSPEC octet would be needed for FRN 43 (spare): FSPEC
        // 01 80 sets FRN 8... use the 7th octet instead: six FX octets
        // then 0x80 = FRN 43.
        let mut block = vec![0x15, 0x00, 0x0a];
        block.extend([0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x80]);
        let err = Cat21::from_bytes(&block).unwrap_err();
        assert!(matches!(err, Error::SpareItem { frn: 43 }));
    }

    #[test]
    fn test_empty_record_rejected() {
        let record = Cat21::default();
        assert!(matches!(record.to_bytes(), Err(Error::EmptyRecord)));
    }

    #[test]
    fn test_item_error_is_positioned() {
        // FRN 29 (target identification) present but only 2 payload bytes
        let mut block = vec![0x15, 0x00, 0x08];
        block.extend([0x01, 0x01, 0x01, 0x01, 0x80]); // FSPEC: FRN 29
        // LEN = 3 + 5 + 0 -> declare 10 with 2 bytes of payload
        block[2] = 10;
        block.extend([0x2c, 0xcc]);
        let err = Cat21::from_bytes(&block).unwrap_err();
        match err {
            Error::Item { frn: 29, offset, .. } => assert_eq!(offset, 8),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_expansion_len_mismatch_rejected() {
        // FSPEC reaches FRN 48; the RE declares 5 bytes but only carries
        // BPS, which occupies 4
        let mut block = vec![0x15, 0x00, 0x0e];
        block.extend([0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x04]);
        block.extend(hex!("05800853"));
        let err = Cat21::from_bytes(&block).unwrap_err();
        match err {
            Error::Item { frn: 48, offset, .. } => assert_eq!(offset, 10),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_oversized_special_purpose_rejected() {
        // a payload past the u8 length counter cannot be encoded; the
        // per-item counters keep any record far below the u16 block limit
        let record = Cat21 {
            special_purpose: Some(SpecialPurpose {
                len: 0,
                data: vec![0; 300],
            }),
            ..Default::default()
        };
        assert!(record.to_bytes().is_err());
    }

    #[test]
    fn test_json_output() {
        let record = Cat21 {
            data_source: Some(DataSourceIdentification {
                sac: 0x14,
                sic: 0x81,
            }),
            target_address: Some(TargetAddress(0x3c660d)),
            mode3a: Some(Mode3ACode::from_squawk(0o1000)),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["target_address"], "3c660d");
        assert_eq!(json["mode3a"], "1000");
        assert_eq!(json["data_source"]["sac"], 0x14);
        // absent items are skipped entirely
        assert!(json.get("position").is_none());
    }

    #[test]
    fn test_full_roundtrip() {
        use items::item110::{TrajectoryIntent, TrajectoryIntentData};
        use items::item170::TargetIdentification;

        let mut record = Cat21 {
            data_source: Some(DataSourceIdentification {
                sac: 0x14,
                sic: 0x81,
            }),
            target_address: Some(TargetAddress(0x3c660d)),
            target_identification: Some(TargetIdentification::new("KL1523")),
            position: Some(Position::new(48.35, 11.78)),
            flight_level: Some(FlightLevel { fl: 1400 }), // FL350
            mode3a: Some(Mode3ACode::from_squawk(0o1000)),
            trajectory_intent: Some(TrajectoryIntent {
                data: Some(TrajectoryIntentData::default()),
                ..Default::default()
            }),
            special_purpose: Some(SpecialPurpose::new(vec![0xaa, 0xbb])),
            ..Default::default()
        };
        let bytes = record.to_bytes().unwrap();
        assert_eq!(bytes[0], CAT);
        let declared = u16::from_be_bytes([bytes[1], bytes[2]]) as usize;
        assert_eq!(declared, bytes.len());

        let (decoded, consumed) = Cat21::from_bytes(&bytes).unwrap();
        assert_eq!(consumed, bytes.len());
        // encoding refreshed the FX/REP counters on the stored copy
        if let Some(ti) = record.trajectory_intent.as_mut() {
            ti.update().unwrap();
        }
        assert_eq!(
            decoded.target_identification.as_ref().unwrap().trimmed(),
            "KL1523"
        );
        assert_eq!(decoded.flight_level.unwrap().fl, 1400);
        assert_eq!(decoded.trajectory_intent, record.trajectory_intent);
        assert_eq!(decoded.special_purpose, record.special_purpose);

        // trailing bytes after the block are left untouched
        let mut stream = bytes.clone();
        stream.extend([0x15, 0x00]);
        let (_, consumed) = Cat21::from_bytes(&stream).unwrap();
        assert_eq!(consumed, bytes.len());
    }
}
