//! Typed construction requests for persisted entities.
//!
//! Every path that creates a plan or stop row goes through these explicit
//! field sets, so planned stops, actual-visit records and smart variants
//! are all built by the same constructor instead of ad hoc partial copies.

use jiff::civil::{Date, Time};

use super::{Destination, PlanStatus, RouteLeg, StopStatus, TravelMode};

/// Field set for inserting a plan row.
#[derive(Debug, Clone)]
pub struct NewPlan {
    pub traveler: String,
    pub name: String,
    pub from_date: Date,
    pub to_date: Date,
    pub lodging_id: Option<u64>,
    pub estimated_cost: i64,
    pub is_public: bool,
    pub status: PlanStatus,
}

/// Field set for inserting a stop row.
#[derive(Debug, Clone)]
pub struct NewStop {
    pub destination_id: u64,
    pub destination_name: String,
    pub date: Date,
    pub from_time: Time,
    pub to_time: Time,
    pub distance_from_prev: i64,
    pub duration_from_prev: i64,
    pub travel_mode: TravelMode,
    pub is_planned: bool,
    pub status: StopStatus,
}

impl NewStop {
    /// An actual-visit record as produced by check-in and completion. The
    /// first visit of a day passes no leg and gets zero distance/duration.
    pub fn actual_visit(
        destination: &Destination,
        date: Date,
        from_time: Time,
        to_time: Time,
        leg: Option<&RouteLeg>,
        travel_mode: TravelMode,
    ) -> Self {
        Self {
            destination_id: destination.id,
            destination_name: destination.name.clone(),
            date,
            from_time,
            to_time,
            distance_from_prev: leg.map_or(0, |l| l.distance_meters),
            duration_from_prev: leg.map_or(0, |l| l.duration_seconds),
            travel_mode,
            is_planned: false,
            status: StopStatus::CheckedIn,
        }
    }
}
