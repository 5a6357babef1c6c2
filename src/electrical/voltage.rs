//! Voltage compatibility between equipment and the supply.
//!
//! Nominal voltages are grouped into families that can be plugged into each
//! other. Anything outside the known ranges lands in one shared
//! `OutOfRange` bucket, so two different out-of-range ratings (say 500 V and
//! 600 V) compare as compatible with each other. That matches the existing
//! behaviour of the planner and is intentionally left as is.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;

use crate::domain::VoltageRating;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum VoltageFamily {
    /// 110/127 V
    #[strum(serialize = "127V")]
    V127,
    /// 220/240 V
    #[strum(serialize = "220V")]
    V220,
    /// 380/440 V
    #[strum(serialize = "380V")]
    V380,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "family", rename_all = "camelCase")]
pub enum VoltageBucket {
    /// Bivolt/auto-ranging gear, or a rating that cannot be read
    Universal,
    Known(VoltageFamily),
    OutOfRange,
}

impl VoltageBucket {
    /// Legacy numeric code: 0 universal, 1..=3 families, -1 out of range
    pub fn code(&self) -> i8 {
        match self {
            VoltageBucket::Universal => 0,
            VoltageBucket::Known(VoltageFamily::V127) => 1,
            VoltageBucket::Known(VoltageFamily::V220) => 2,
            VoltageBucket::Known(VoltageFamily::V380) => 3,
            VoltageBucket::OutOfRange => -1,
        }
    }
}

impl fmt::Display for VoltageBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoltageBucket::Universal => write!(f, "universal"),
            VoltageBucket::Known(family) => write!(f, "{}", family),
            VoltageBucket::OutOfRange => write!(f, "out of range"),
        }
    }
}

const UNIVERSAL_MARKERS: [&str; 3] = ["bi", "auto", "uni"];

pub fn voltage_bucket(voltage: &VoltageRating) -> VoltageBucket {
    let text = voltage.to_string().to_lowercase();
    if UNIVERSAL_MARKERS.iter().any(|marker| text.contains(marker)) {
        return VoltageBucket::Universal;
    }

    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return VoltageBucket::Universal;
    }

    match digits.parse::<u64>() {
        Ok(90..=140) => VoltageBucket::Known(VoltageFamily::V127),
        Ok(200..=250) => VoltageBucket::Known(VoltageFamily::V220),
        Ok(340..=480) => VoltageBucket::Known(VoltageFamily::V380),
        // too many digits for u64 is still a number, just not one we know
        _ => VoltageBucket::OutOfRange,
    }
}

/// Whether equipment rated `equipment` may be connected to a `system` supply.
pub fn is_compatible(system: &VoltageRating, equipment: &VoltageRating) -> bool {
    let equipment_bucket = voltage_bucket(equipment);
    equipment_bucket == VoltageBucket::Universal || equipment_bucket == voltage_bucket(system)
}
