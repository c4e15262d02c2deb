//! Destination catalog records.
//!
//! Destinations are owned by the catalog and immutable from the engine's
//! point of view; the engine only reads them when scoring and packing.

use std::collections::BTreeMap;
use std::str::FromStr;

use jiff::civil::Time;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Availability state of a catalog destination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DestinationState {
    /// Open for visits
    #[default]
    Open,

    /// Temporarily closed; fatal when referenced by a commit or check-in
    Closed,

    /// Removed from the catalog; skipped gracefully during check-in
    Deactivated,
}

impl FromStr for DestinationState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(DestinationState::Open),
            "closed" => Ok(DestinationState::Closed),
            "deactivated" => Ok(DestinationState::Deactivated),
            _ => Err(format!("Invalid destination state: {s}")),
        }
    }
}

impl DestinationState {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationState::Open => "open",
            DestinationState::Closed => "closed",
            DestinationState::Deactivated => "deactivated",
        }
    }
}

/// How often travelers with a given personality tag planned and actually
/// visited a destination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AffinityStat {
    /// Times the destination was placed into a plan
    pub plan_count: u64,

    /// Times the destination was actually visited
    pub visit_count: u64,
}

impl AffinityStat {
    /// Weighted signal strength: actual visits count double.
    pub fn signal(&self) -> u64 {
        self.plan_count + 2 * self.visit_count
    }
}

/// A time-of-day range during which visiting the destination is preferred.
///
/// A packing clock falling inside the window boosts the destination's
/// priority by the window's own plan/visit signal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    /// Window start (inclusive)
    pub starts_at: Time,

    /// Window end (exclusive)
    pub ends_at: Time,

    /// Times a plan placed a visit inside this window
    pub plan_count: u64,

    /// Times a traveler actually visited inside this window
    pub visit_count: u64,
}

impl TimeWindow {
    /// Whether a clock time falls inside the window.
    pub fn contains(&self, clock: Time) -> bool {
        self.starts_at <= clock && clock < self.ends_at
    }

    /// Weighted signal strength of the window.
    pub fn signal(&self) -> u64 {
        self.plan_count + 2 * self.visit_count
    }
}

/// A read-only attraction or lodging record from the destination catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    /// Unique identifier within the catalog
    pub id: u64,

    /// Display name
    pub name: String,

    /// City the destination belongs to
    pub city: String,

    /// Lower bound of the price range
    pub lowest_price: i64,

    /// Upper bound of the price range
    pub highest_price: i64,

    /// Daily opening time
    pub opens_at: Time,

    /// Daily closing time
    pub closes_at: Time,

    /// Estimated visit duration in minutes
    pub visit_minutes: i64,

    /// Average rating on a 0–5 scale (0 = unrated)
    pub rating: f64,

    /// Page view count
    pub view_count: u64,

    /// When the destination entered the catalog
    pub created_at: Timestamp,

    /// Category tags; the tag `"lodging"` marks lodging destinations
    #[serde(default)]
    pub categories: Vec<String>,

    /// Availability state
    #[serde(default)]
    pub state: DestinationState,

    /// Latitude for routing
    pub latitude: f64,

    /// Longitude for routing
    pub longitude: f64,

    /// Personality-tag affinity counters
    #[serde(default)]
    pub affinities: BTreeMap<String, AffinityStat>,

    /// Preferred visiting windows with their own signal counters
    #[serde(default)]
    pub recommended_windows: Vec<TimeWindow>,
}

impl Destination {
    /// Whether the destination carries the lodging category tag.
    pub fn is_lodging(&self) -> bool {
        self.categories.iter().any(|c| c == "lodging")
    }

    /// Representative cost used in budget arithmetic: the price-range
    /// midpoint, rounded up.
    pub fn midpoint_cost(&self) -> i64 {
        (self.lowest_price + self.highest_price + 1).div_euclid(2)
    }

    /// Whether a clock time falls inside the opening hours.
    pub fn is_open_at(&self, clock: Time) -> bool {
        self.opens_at <= clock && clock < self.closes_at
    }

    /// Whether the destination carries any affinity for the given tags.
    pub fn matches_personality(&self, tags: &[String]) -> bool {
        tags.iter().any(|t| self.affinities.contains_key(t))
    }
}
