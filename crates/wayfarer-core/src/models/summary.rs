//! Plan summary types and functionality.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Plan, PlanStatus, StopStatus};

/// Summary information about a plan with stop statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Owning traveler
    pub traveler: String,
    /// Name of the plan
    pub name: String,
    /// First day of the trip
    pub from_date: Date,
    /// Last day of the trip
    pub to_date: Date,
    /// Estimated trip cost
    pub estimated_cost: i64,
    /// Reconciled actual cost, if the trip completed
    pub actual_cost: Option<i64>,
    /// Plan status
    pub status: PlanStatus,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Total number of planned stops
    pub planned_stops: u32,
    /// Number of planned stops checked in
    pub checked_stops: u32,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let planned_stops = plan.planned_stops().count() as u32;
        let checked_stops = plan
            .planned_stops()
            .filter(|stop| stop.status == StopStatus::CheckedIn)
            .count() as u32;

        Self {
            id: plan.id,
            traveler: plan.traveler.clone(),
            name: plan.name.clone(),
            from_date: plan.from_date,
            to_date: plan.to_date,
            estimated_cost: plan.estimated_cost,
            actual_cost: plan.actual_cost,
            status: plan.status,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
            planned_stops,
            checked_stops,
        }
    }
}
