//! Collection wrapper types for formatting lists.

use std::fmt;

use crate::models::PlanSummary;

/// Newtype wrapper that formats a slice of plan summaries as a markdown
/// list, with an empty-state message.
pub struct PlanSummaries<'a>(pub &'a [PlanSummary]);

impl<'a> fmt::Display for PlanSummaries<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")?;
            return Ok(());
        }

        writeln!(f, "# Plans")?;
        writeln!(f)?;
        for summary in self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::Timestamp;

    use super::*;
    use crate::models::PlanStatus;

    #[test]
    fn test_empty_listing() {
        let output = format!("{}", PlanSummaries(&[]));
        assert!(output.contains("No plans found."));
    }

    #[test]
    fn test_listing_shows_progress() {
        let summary = PlanSummary {
            id: 3,
            traveler: "traveler-1".to_string(),
            name: "Hanoi getaway".to_string(),
            from_date: date(2026, 9, 1),
            to_date: date(2026, 9, 3),
            estimated_cost: 740,
            actual_cost: None,
            status: PlanStatus::Planned,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            planned_stops: 6,
            checked_stops: 2,
        };
        let output = format!("{}", PlanSummaries(std::slice::from_ref(&summary)));
        assert!(output.contains("Hanoi getaway"));
        assert!(output.contains("[2/6]"));
        assert!(output.contains("est. 740"));
    }
}
