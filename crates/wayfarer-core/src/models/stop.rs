//! Plan stop model definition.

use jiff::civil::{Date, Time};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{StopStatus, TravelMode};

/// One visit entry within a plan, either originally planned or recorded as
/// an actual visit during the trip.
///
/// Within one (plan, date), planned stops never overlap in
/// `[from_time, to_time)` and are ordered by `from_time`. The first stop of
/// a day carries zero distance/duration from previous.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanStop {
    /// Unique identifier for the stop
    pub id: u64,

    /// ID of the parent plan
    pub plan_id: u64,

    /// Referenced catalog destination
    pub destination_id: u64,

    /// Destination name, denormalized for display and error context
    pub destination_name: String,

    /// Calendar day of the visit
    pub date: Date,

    /// Visit start time
    pub from_time: Time,

    /// Visit end time
    pub to_time: Time,

    /// Travel distance from the previous stop in meters
    pub distance_from_prev: i64,

    /// Travel duration from the previous stop in seconds
    pub duration_from_prev: i64,

    /// Travel mode used to reach this stop
    pub travel_mode: TravelMode,

    /// True for originally-planned stops, false for actual-visit records
    pub is_planned: bool,

    /// Current status of the stop
    pub status: StopStatus,

    /// Timestamp when the stop was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the stop was last updated (UTC)
    pub updated_at: Timestamp,
}
