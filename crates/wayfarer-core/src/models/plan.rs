//! Plan model definition and related functionality.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{PlanStatus, PlanStop};

/// A complete travel plan with metadata and stops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Identifier of the traveler who owns the plan
    pub traveler: String,

    /// Name of the plan
    pub name: String,

    /// First day of the trip
    pub from_date: Date,

    /// Last day of the trip (inclusive); never earlier than `from_date`
    pub to_date: Date,

    /// Selected lodging destination, if any
    pub lodging_id: Option<u64>,

    /// Lodging the traveler actually stayed at, recorded on completion
    pub actual_lodging_id: Option<u64>,

    /// Estimated trip cost (lodging plus planned attraction midpoints)
    pub estimated_cost: i64,

    /// Reconciled cost of the trip as actually traveled
    pub actual_cost: Option<i64>,

    /// Whether the plan is visible to other travelers
    #[serde(default)]
    pub is_public: bool,

    /// Lifecycle status
    #[serde(default)]
    pub status: PlanStatus,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    /// Associated stops, ordered by (date, from_time)
    #[serde(default)]
    pub stops: Vec<PlanStop>,
}

impl Plan {
    /// Number of calendar days in the trip, inclusive of both endpoints.
    pub fn trip_days(&self) -> i64 {
        i64::from((self.to_date - self.from_date).get_days()) + 1
    }

    /// The stops that belong to the planned itinerary (as opposed to
    /// actual-visit records accumulated during travel).
    pub fn planned_stops(&self) -> impl Iterator<Item = &PlanStop> {
        self.stops.iter().filter(|s| s.is_planned)
    }

    /// The actual-visit records accumulated via check-ins.
    pub fn actual_stops(&self) -> impl Iterator<Item = &PlanStop> {
        self.stops.iter().filter(|s| !s.is_planned)
    }
}
