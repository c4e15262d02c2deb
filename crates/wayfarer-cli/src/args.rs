//! Command-line argument definitions using clap
//!
//! Implements the parameter wrapper pattern: each command defines a
//! clap-specific argument struct that converts into the corresponding core
//! parameter type via `From`, keeping the core free of CLI concerns.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args as ClapArgs, Parser, Subcommand};
use wayfarer_core::{
    AddStop, Checkin, CreateDraft, GeneratePlans, ListPlans, PlanStatus, TravelMode, VisitDetail,
};

/// Wayfarer: travel itinerary planning from the command line
///
/// Generates candidate itineraries for a city under a money and time
/// budget, then carries the chosen plan through commit, activation,
/// day-by-day check-ins and final reconciliation.
#[derive(Parser)]
#[command(version, about, name = "wf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/wayfarer/wayfarer.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the destination catalog JSON file
    #[arg(long, global = true, default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Wayfarer CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a batch of candidate itineraries
    #[command(alias = "gen")]
    Generate(GenerateArgs),
    /// List plans
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show a plan with its stops
    Show(PlanArgs),
    /// Create an empty manual draft
    New(NewArgs),
    /// Add a stop to a draft
    AddStop(AddStopArgs),
    /// Save a generated plan as your draft
    Save(PlanArgs),
    /// Commit a draft into a planned trip
    Commit(PlanArgs),
    /// Mark a planned trip as underway
    Activate(PlanArgs),
    /// Record today's actual visits
    Checkin(CheckinArgs),
    /// Finish a trip and reconcile planned vs. actual visits
    Complete(CompleteArgs),
    /// Delete a draft
    Delete(PlanArgs),
}

/// Generate candidate itineraries for a city
#[derive(ClapArgs)]
pub struct GenerateArgs {
    /// Traveler identifier
    #[arg(short, long)]
    pub traveler: String,
    /// City to plan the trip in
    pub city: String,
    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub from: String,
    /// Last day of the trip (YYYY-MM-DD), at most 4 days total
    #[arg(long)]
    pub to: String,
    /// Total trip budget
    #[arg(long)]
    pub budget: i64,
    /// Daily lodging budget cap
    #[arg(long)]
    pub lodging_budget: i64,
    /// Day start time (HH:MM)
    #[arg(long, default_value = "08:00")]
    pub day_start: String,
    /// Day end time (HH:MM)
    #[arg(long, default_value = "21:00")]
    pub day_end: String,
    /// Personality tags to match, repeatable
    #[arg(short, long = "personality")]
    pub personalities: Vec<String>,
    /// Travel mode between stops
    #[arg(long, default_value = "driving")]
    pub mode: String,
}

impl TryFrom<GenerateArgs> for GeneratePlans {
    type Error = anyhow::Error;

    fn try_from(val: GenerateArgs) -> Result<Self, Self::Error> {
        Ok(GeneratePlans {
            traveler: val.traveler,
            city: val.city,
            from_date: val.from,
            to_date: val.to,
            total_budget: val.budget,
            lodging_budget: val.lodging_budget,
            day_start: val.day_start,
            day_end: val.day_end,
            personalities: val.personalities,
            travel_mode: parse_mode(&val.mode)?,
        })
    }
}

/// List a traveler's plans
#[derive(ClapArgs)]
pub struct ListArgs {
    /// Traveler identifier
    #[arg(short, long)]
    pub traveler: String,
    /// Narrow to one status (draft, smart, planned, activated, completed)
    #[arg(long)]
    pub status: Option<String>,
}

impl TryFrom<ListArgs> for ListPlans {
    type Error = anyhow::Error;

    fn try_from(val: ListArgs) -> Result<Self, Self::Error> {
        let status = val
            .status
            .map(|s| {
                PlanStatus::from_str(&s).map_err(|e| anyhow::anyhow!("invalid --status: {e}"))
            })
            .transpose()?;
        Ok(ListPlans {
            traveler: val.traveler,
            status,
        })
    }
}

/// Operate on one plan by ID
#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Traveler identifier
    #[arg(short, long)]
    pub traveler: String,
    /// Plan ID
    pub id: u64,
}

/// Create an empty manual draft
#[derive(ClapArgs)]
pub struct NewArgs {
    /// Traveler identifier
    #[arg(short, long)]
    pub traveler: String,
    /// Name of the plan
    pub name: String,
    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub from: String,
    /// Last day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub to: String,
}

impl From<NewArgs> for CreateDraft {
    fn from(val: NewArgs) -> Self {
        CreateDraft {
            traveler: val.traveler,
            name: val.name,
            from_date: val.from,
            to_date: val.to,
        }
    }
}

/// Add a stop to a draft
#[derive(ClapArgs)]
pub struct AddStopArgs {
    /// Traveler identifier
    #[arg(short, long)]
    pub traveler: String,
    /// Plan ID
    pub id: u64,
    /// Destination ID from the catalog
    #[arg(long)]
    pub destination: u64,
    /// Calendar day of the visit (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Visit start time (HH:MM)
    #[arg(long)]
    pub from: String,
    /// Visit end time (HH:MM)
    #[arg(long)]
    pub to: String,
    /// Travel mode to reach the stop
    #[arg(long, default_value = "driving")]
    pub mode: String,
}

impl TryFrom<AddStopArgs> for AddStop {
    type Error = anyhow::Error;

    fn try_from(val: AddStopArgs) -> Result<Self, Self::Error> {
        Ok(AddStop {
            traveler: val.traveler,
            plan_id: val.id,
            destination_id: val.destination,
            date: val.date,
            from_time: val.from,
            to_time: val.to,
            travel_mode: parse_mode(&val.mode)?,
        })
    }
}

/// Record today's actual visits
#[derive(ClapArgs)]
pub struct CheckinArgs {
    /// Traveler identifier
    #[arg(short, long)]
    pub traveler: String,
    /// Plan ID
    pub id: u64,
    /// Calendar day being checked in (YYYY-MM-DD); must be today
    #[arg(long)]
    pub date: String,
    /// Visits in order, repeatable: DESTINATION@HH:MM-HH:MM
    #[arg(long = "visit")]
    pub visits: Vec<String>,
    /// Travel mode between visits
    #[arg(long, default_value = "driving")]
    pub mode: String,
}

impl TryFrom<CheckinArgs> for Checkin {
    type Error = anyhow::Error;

    fn try_from(val: CheckinArgs) -> Result<Self, Self::Error> {
        let visits = val
            .visits
            .iter()
            .map(|v| parse_visit(v))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Checkin {
            traveler: val.traveler,
            plan_id: val.id,
            date: val.date,
            visits,
            travel_mode: parse_mode(&val.mode)?,
        })
    }
}

/// Finish a trip
#[derive(ClapArgs)]
pub struct CompleteArgs {
    /// Traveler identifier
    #[arg(short, long)]
    pub traveler: String,
    /// Plan ID
    pub id: u64,
    /// JSON file with the remaining days' visits:
    /// [{"date": "...", "visits": [{"destination_id": 1, "from_time": "09:00", "to_time": "10:00"}]}]
    #[arg(long)]
    pub details: PathBuf,
    /// Lodging actually stayed at, when it differs from the plan
    #[arg(long)]
    pub lodging: Option<u64>,
    /// Travel mode between visits
    #[arg(long, default_value = "driving")]
    pub mode: String,
}

/// Parses a `DESTINATION@HH:MM-HH:MM` visit argument.
pub fn parse_visit(raw: &str) -> anyhow::Result<VisitDetail> {
    let (destination, times) = raw
        .split_once('@')
        .ok_or_else(|| anyhow::anyhow!("expected DESTINATION@HH:MM-HH:MM, got '{raw}'"))?;
    let (from_time, to_time) = times
        .split_once('-')
        .ok_or_else(|| anyhow::anyhow!("expected DESTINATION@HH:MM-HH:MM, got '{raw}'"))?;
    let destination_id = destination
        .parse::<u64>()
        .map_err(|_| anyhow::anyhow!("'{destination}' is not a destination ID"))?;
    Ok(VisitDetail {
        destination_id,
        from_time: from_time.to_string(),
        to_time: to_time.to_string(),
    })
}

/// Parses a travel mode argument.
pub fn parse_mode(raw: &str) -> anyhow::Result<TravelMode> {
    TravelMode::from_str(raw).map_err(|e| anyhow::anyhow!("invalid --mode: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_visit() {
        let visit = parse_visit("12@09:30-11:00").expect("valid visit");
        assert_eq!(visit.destination_id, 12);
        assert_eq!(visit.from_time, "09:30");
        assert_eq!(visit.to_time, "11:00");
    }

    #[test]
    fn test_parse_visit_rejects_malformed_input() {
        assert!(parse_visit("12").is_err());
        assert!(parse_visit("12@09:30").is_err());
        assert!(parse_visit("abc@09:30-11:00").is_err());
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("walking").expect("mode"), TravelMode::Walking);
        assert!(parse_mode("teleport").is_err());
    }
}
