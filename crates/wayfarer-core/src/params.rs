//! Parameter structures for Wayfarer operations
//!
//! Shared parameter structures used across interfaces (CLI and any future
//! transport) without framework-specific derives. Interface layers wrap
//! these with their own argument types and convert via `From`/`Into`,
//! keeping the core free of CLI concerns.
//!
//! Dates and times arrive as strings (`YYYY-MM-DD`, `HH:MM`) and are parsed
//! inside the engine so that malformed values surface as uniform
//! `InvalidInput` errors regardless of the calling interface.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::{PlanStatus, TravelMode};

/// Reference to a plan owned by a traveler.
///
/// Used for operations like show, save, commit, activate and delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanRef {
    /// Identifier of the calling traveler
    pub traveler: String,
    /// The ID of the plan to operate on
    pub id: u64,
}

/// Parameters for generating a batch of smart plans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlans {
    /// Identifier of the calling traveler
    pub traveler: String,
    /// City to plan the trip in
    pub city: String,
    /// First day of the trip (YYYY-MM-DD); must be after today
    pub from_date: String,
    /// Last day of the trip (YYYY-MM-DD); at most 4 days total
    pub to_date: String,
    /// Total money budget for the whole trip
    pub total_budget: i64,
    /// Daily lodging budget cap
    pub lodging_budget: i64,
    /// Clock time each day's itinerary starts (HH:MM)
    #[serde(default = "default_day_start")]
    pub day_start: String,
    /// Clock time each day's itinerary ends (HH:MM)
    #[serde(default = "default_day_end")]
    pub day_end: String,
    /// Personality tags the attraction pool must match
    #[serde(default)]
    pub personalities: Vec<String>,
    /// Travel mode used for inter-stop legs
    #[serde(default)]
    pub travel_mode: TravelMode,
}

fn default_day_start() -> String {
    "08:00".into()
}

fn default_day_end() -> String {
    "21:00".into()
}

impl Default for GeneratePlans {
    fn default() -> Self {
        Self {
            traveler: String::new(),
            city: String::new(),
            from_date: String::new(),
            to_date: String::new(),
            total_budget: 0,
            lodging_budget: 0,
            day_start: default_day_start(),
            day_end: default_day_end(),
            personalities: Vec::new(),
            travel_mode: TravelMode::default(),
        }
    }
}

/// Parameters for creating an empty manual draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDraft {
    /// Identifier of the calling traveler
    pub traveler: String,
    /// Name of the plan
    pub name: String,
    /// First day of the trip (YYYY-MM-DD)
    pub from_date: String,
    /// Last day of the trip (YYYY-MM-DD)
    pub to_date: String,
}

/// Parameters for adding a planned stop to a draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddStop {
    /// Identifier of the calling traveler
    pub traveler: String,
    /// The draft to add the stop to
    pub plan_id: u64,
    /// Catalog destination to visit
    pub destination_id: u64,
    /// Calendar day of the visit (YYYY-MM-DD)
    pub date: String,
    /// Visit start time (HH:MM)
    pub from_time: String,
    /// Visit end time (HH:MM)
    pub to_time: String,
    /// Travel mode used to reach the stop
    #[serde(default)]
    pub travel_mode: TravelMode,
}

/// Parameters for listing a traveler's plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Identifier of the calling traveler
    pub traveler: String,
    /// Optional status to narrow the listing to
    pub status: Option<PlanStatus>,
}

/// One actual visit submitted with a check-in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitDetail {
    /// Catalog destination that was visited
    pub destination_id: u64,
    /// Visit start time (HH:MM)
    pub from_time: String,
    /// Visit end time (HH:MM)
    pub to_time: String,
}

/// Parameters for checking in one trip day's actual visits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Checkin {
    /// Identifier of the calling traveler
    pub traveler: String,
    /// The plan being traveled
    pub plan_id: u64,
    /// Calendar day being checked in (YYYY-MM-DD); must be today
    pub date: String,
    /// Visits in the order they happened
    pub visits: Vec<VisitDetail>,
    /// Travel mode used between the visits
    #[serde(default)]
    pub travel_mode: TravelMode,
}

/// Actual visits for one calendar day, submitted with trip completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayVisits {
    /// Calendar day the visits belong to (YYYY-MM-DD)
    pub date: String,
    /// Visits in the order they happened
    pub visits: Vec<VisitDetail>,
}

/// Parameters for completing a trip and reconciling planned vs. actual.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteTrip {
    /// Identifier of the calling traveler
    pub traveler: String,
    /// The plan being completed
    pub plan_id: u64,
    /// Actual visits for every trip day not already checked in
    pub days: Vec<DayVisits>,
    /// Lodging the traveler actually stayed at; defaults to the planned one
    pub actual_lodging_id: Option<u64>,
    /// Travel mode used between the visits
    #[serde(default)]
    pub travel_mode: TravelMode,
}

/// Parse a `YYYY-MM-DD` date string, mapping failures to `InvalidInput`.
pub(crate) fn parse_date(field: &str, value: &str) -> Result<Date> {
    value.parse::<Date>().map_err(|e| {
        EngineError::invalid_input(field, format!("'{value}' is not a valid date: {e}"))
    })
}

/// Parse an `HH:MM` time string, mapping failures to `InvalidInput`.
pub(crate) fn parse_time(field: &str, value: &str) -> Result<Time> {
    value.parse::<Time>().map_err(|e| {
        EngineError::invalid_input(field, format!("'{value}' is not a valid time of day: {e}"))
    })
}
