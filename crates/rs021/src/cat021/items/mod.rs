//! One module per data item of the category 021 UAP, in the order of the
//! standard. Each item derives both deku directions and stores the raw
//! wire fields; physical-unit accessors live on the item itself.

pub mod airspeed;
pub mod expansion;
pub mod item008;
pub mod item010;
pub mod item015;
pub mod item016;
pub mod item020;
pub mod item040;
pub mod item070;
pub mod item080;
pub mod item090;
pub mod item110;
pub mod item132;
pub mod item140;
pub mod item145;
pub mod item152;
pub mod item160;
pub mod item161;
pub mod item165;
pub mod item170;
pub mod item200;
pub mod item210;
pub mod item220;
pub mod item230;
pub mod item250;
pub mod item260;
pub mod item271;
pub mod item295;
pub mod item400;
pub mod position;
pub mod selected_altitude;
pub mod special;
pub mod times;
pub mod vertical_rate;
