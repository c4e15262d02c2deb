//! Route leg model and travel modes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Travel mode for a route leg.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// Car or taxi
    #[default]
    Driving,

    /// On foot
    Walking,

    /// Bicycle
    Cycling,
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "driving" => Ok(TravelMode::Driving),
            "walking" => Ok(TravelMode::Walking),
            "cycling" => Ok(TravelMode::Cycling),
            _ => Err(format!("Invalid travel mode: {s}")),
        }
    }
}

impl TravelMode {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Cycling => "cycling",
        }
    }
}

/// A memoized travel segment between two destinations under a travel mode.
///
/// The key is directed: the leg A→B is distinct from B→A and the two are
/// never assumed equal. Exactly one row exists per (from, to, mode) key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteLeg {
    /// Origin destination ID
    pub from_id: u64,

    /// Target destination ID
    pub to_id: u64,

    /// Travel mode the leg was computed for
    pub mode: TravelMode,

    /// Travel distance in whole meters (rounded up)
    pub distance_meters: i64,

    /// Travel duration in whole seconds (rounded up)
    pub duration_seconds: i64,

    /// Human-readable distance, e.g. "850m" or "1.2km"
    pub distance_text: String,

    /// Human-readable duration, e.g. "45p" or "3h 15p"
    pub duration_text: String,
}
