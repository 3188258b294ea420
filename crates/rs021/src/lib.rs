#![doc = include_str!("../readme.md")]

pub mod cat021;

pub use cat021::{Cat21, Error, CAT};

pub mod prelude {
    pub use crate::cat021::fspec::FieldSpec;
    pub use crate::cat021::items::airspeed::{AirSpeed, TrueAirSpeed};
    pub use crate::cat021::items::expansion::ReservedExpansion;
    pub use crate::cat021::items::item010::DataSourceIdentification;
    pub use crate::cat021::items::item040::TargetReportDescriptor;
    pub use crate::cat021::items::item070::Mode3ACode;
    pub use crate::cat021::items::item080::TargetAddress;
    pub use crate::cat021::items::item090::QualityIndicators;
    pub use crate::cat021::items::item110::TrajectoryIntent;
    pub use crate::cat021::items::item170::TargetIdentification;
    pub use crate::cat021::items::item250::ModeSMBData;
    pub use crate::cat021::items::position::{
        HighResolutionPosition, Position,
    };
    pub use crate::cat021::items::special::SpecialPurpose;
    pub use crate::cat021::items::times::{HighPrecisionTime, TimeOfDay};
    pub use crate::cat021::{Cat21, Error, CAT};
    pub use deku::prelude::*;
}
