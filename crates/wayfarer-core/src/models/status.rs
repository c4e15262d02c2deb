//! Status enumerations for plans and stops.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan lifecycle statuses.
///
/// A plan starts as `Draft` (manual) or `Smart` (auto-generated, disposable).
/// Saving a smart plan makes it a draft; committing a draft makes it
/// `Planned`; an explicit activation makes it `Activated`; completing the
/// trip makes it `Completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Editable plan owned by the traveler
    #[default]
    Draft,

    /// Auto-generated candidate itinerary; at most one batch per traveler
    Smart,

    /// Committed plan with an immutable planned stop set
    Planned,

    /// Travel is underway; check-ins record actual visits
    Activated,

    /// Trip finished and reconciled against the planned stops
    Completed,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(PlanStatus::Draft),
            "smart" => Ok(PlanStatus::Smart),
            "planned" => Ok(PlanStatus::Planned),
            "activated" => Ok(PlanStatus::Activated),
            "completed" => Ok(PlanStatus::Completed),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Draft => "draft",
            PlanStatus::Smart => "smart",
            PlanStatus::Planned => "planned",
            PlanStatus::Activated => "activated",
            PlanStatus::Completed => "completed",
        }
    }
}

/// Type-safe enumeration of stop statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StopStatus {
    /// Stop added to a draft, not yet committed
    #[default]
    New,

    /// Stop committed as part of the planned itinerary
    Planned,

    /// Stop visited (or actual visit recorded during the trip)
    CheckedIn,

    /// Planned stop the traveler never visited
    Skipped,
}

impl FromStr for StopStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(StopStatus::New),
            "planned" => Ok(StopStatus::Planned),
            "checkedin" | "checked_in" | "checked-in" => Ok(StopStatus::CheckedIn),
            "skipped" => Ok(StopStatus::Skipped),
            _ => Err(format!("Invalid stop status: {s}")),
        }
    }
}

impl StopStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StopStatus::New => "new",
            StopStatus::Planned => "planned",
            StopStatus::CheckedIn => "checkedin",
            StopStatus::Skipped => "skipped",
        }
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            StopStatus::New => "○ New",
            StopStatus::Planned => "◆ Planned",
            StopStatus::CheckedIn => "✓ Checked in",
            StopStatus::Skipped => "✗ Skipped",
        }
    }
}
