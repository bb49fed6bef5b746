//! Village and highlight classification for lifts
//!
//! Total lookup functions over the static membership lists in
//! [`crate::constants`]. A lift absent from every village list classifies as
//! Unknown; the highlight lists are checked in feeder-first order.

use crate::constants::{
    CANYONS_VILLAGE_LIFTS, FEEDER_LIFTS, MOUNTAIN_VILLAGE_LIFTS, UPPER_MOUNTAIN_LIFTS,
};
use serde::{Deserialize, Serialize};

/// Named sub-area grouping of lifts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Village {
    MountainVillage,
    CanyonsVillage,
    Unknown,
}

impl Village {
    /// Look up the village for a lift name
    pub fn for_lift(lift_name: &str) -> Self {
        if MOUNTAIN_VILLAGE_LIFTS.contains(&lift_name) {
            Self::MountainVillage
        } else if CANYONS_VILLAGE_LIFTS.contains(&lift_name) {
            Self::CanyonsVillage
        } else {
            Self::Unknown
        }
    }

    /// Display label for the dashboard
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MountainVillage => "Mountain Village",
            Self::CanyonsVillage => "Canyons Village",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Village {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Row-highlight class for important lifts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    /// Out-of-base feeder lift
    Feeder,
    /// Upper-mountain lift
    UpperMountain,
    /// No highlighting
    None,
}

impl Highlight {
    /// Look up the highlight class for a lift name, feeder list first
    pub fn for_lift(lift_name: &str) -> Self {
        if FEEDER_LIFTS.contains(&lift_name) {
            Self::Feeder
        } else if UPPER_MOUNTAIN_LIFTS.contains(&lift_name) {
            Self::UpperMountain
        } else {
            Self::None
        }
    }

    /// CSS class name emitted on highlighted table rows
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Feeder => "feeder-lift",
            Self::UpperMountain => "upper-mountain-lift",
            Self::None => "",
        }
    }
}
