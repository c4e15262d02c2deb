//! Display implementations for domain models.
//!
//! Separated from the model definitions to keep data structures and
//! presentation apart. All implementations emit markdown.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Plan, PlanStatus, PlanStop, PlanSummary, StopStatus, TravelMode};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status.as_str())?;
        writeln!(f, "- Dates: {} to {}", self.from_date, self.to_date)?;
        writeln!(f, "- Estimated cost: {}", self.estimated_cost)?;
        if let Some(actual) = self.actual_cost {
            writeln!(f, "- Actual cost: {actual}")?;
        }
        if let Some(lodging) = self.lodging_id {
            writeln!(f, "- Lodging: destination {lodging}")?;
        }
        if let Some(actual_lodging) = self.actual_lodging_id {
            writeln!(f, "- Actual lodging: destination {actual_lodging}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        let planned: Vec<_> = self.planned_stops().collect();
        if planned.is_empty() {
            writeln!(f, "\nNo stops in this plan.")?;
        } else {
            writeln!(f, "\n## Itinerary")?;
            writeln!(f)?;
            let mut current_date = None;
            for stop in planned {
                if current_date != Some(stop.date) {
                    writeln!(f, "### {}", stop.date)?;
                    writeln!(f)?;
                    current_date = Some(stop.date);
                }
                write!(f, "{stop}")?;
            }
        }

        let actual: Vec<_> = self.actual_stops().collect();
        if !actual.is_empty() {
            writeln!(f, "\n## Actual visits")?;
            writeln!(f)?;
            let mut current_date = None;
            for stop in actual {
                if current_date != Some(stop.date) {
                    writeln!(f, "### {}", stop.date)?;
                    writeln!(f)?;
                    current_date = Some(stop.date);
                }
                write!(f, "{stop}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} to {}: **{}** ({})",
            self.from_time,
            self.to_time,
            self.destination_name,
            self.status.with_icon()
        )?;
        if self.duration_from_prev > 0 {
            writeln!(
                f,
                "  - travel: {}m, {}s by {}",
                self.distance_from_prev, self.duration_from_prev, self.travel_mode
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.planned_stops > 0 {
            format!(" [{}/{}]", self.checked_stops, self.planned_stops)
        } else {
            String::new()
        };
        writeln!(
            f,
            "- **{}. {}** ({}){} — {} to {}, est. {}",
            self.id,
            self.name,
            self.status.as_str(),
            progress,
            self.from_date,
            self.to_date,
            self.estimated_cost
        )
    }
}
