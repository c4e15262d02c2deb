//! Filter types for querying plans.

use super::PlanStatus;

/// Filter options for querying plans.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Restrict to plans owned by this traveler
    pub traveler: Option<String>,

    /// Filter by plan name (case-insensitive partial match)
    pub name_contains: Option<String>,

    /// Filter by lifecycle status; None matches every status
    pub status: Option<PlanStatus>,
}

impl PlanFilter {
    /// Filter for one traveler's plans, optionally narrowed to a status.
    pub fn for_traveler(traveler: impl Into<String>, status: Option<PlanStatus>) -> Self {
        Self {
            traveler: Some(traveler.into()),
            status,
            ..Default::default()
        }
    }
}

impl From<&crate::params::ListPlans> for PlanFilter {
    fn from(params: &crate::params::ListPlans) -> Self {
        Self {
            traveler: Some(params.traveler.clone()),
            status: params.status,
            ..Default::default()
        }
    }
}
