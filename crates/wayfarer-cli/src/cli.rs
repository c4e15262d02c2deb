//! Command handlers mapping CLI arguments onto planner operations.
//!
//! This layer converts parsed arguments into core parameter structs, calls
//! the planner, and renders the typed results as markdown. It holds no
//! business logic of its own.

use anyhow::{Context, Result};
use wayfarer_core::{
    CompleteTrip, DayVisits, PlanRef, PlanSummaries, Planner,
};

use crate::args::{
    parse_mode, AddStopArgs, CheckinArgs, CompleteArgs, GenerateArgs, ListArgs, NewArgs, PlanArgs,
};
use crate::renderer::TerminalRenderer;

/// CLI command dispatcher holding the planner and renderer.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let params = args.try_into()?;
        let plans = self
            .planner
            .generate_smart_plans(&params)
            .await
            .context("Failed to generate itineraries")?;

        self.renderer
            .render(&format!("Generated {} candidate plan(s).\n\n", plans.len()))?;
        for plan in &plans {
            self.renderer.render(&plan.to_string())?;
        }
        Ok(())
    }

    pub async fn list(&self, args: ListArgs) -> Result<()> {
        let params = args.try_into()?;
        let summaries = self
            .planner
            .list_plans(&params)
            .await
            .context("Failed to list plans")?;
        self.renderer
            .render(&PlanSummaries(&summaries).to_string())
    }

    pub async fn show(&self, args: PlanArgs) -> Result<()> {
        let plan = self
            .planner
            .get_plan(&plan_ref(&args))
            .await
            .context("Failed to load plan")?;
        match plan {
            Some(plan) => self.renderer.render(&plan.to_string()),
            None => self
                .renderer
                .render(&format!("Plan {} not found.\n", args.id)),
        }
    }

    pub async fn new_draft(&self, args: NewArgs) -> Result<()> {
        let plan = self
            .planner
            .create_draft(&args.into())
            .await
            .context("Failed to create draft")?;
        self.renderer
            .render(&format!("Created draft {}.\n\n{plan}", plan.id))
    }

    pub async fn add_stop(&self, args: AddStopArgs) -> Result<()> {
        let params = args.try_into()?;
        let plan = self
            .planner
            .add_stop(&params)
            .await
            .context("Failed to add stop")?;
        self.renderer.render(&plan.to_string())
    }

    pub async fn save(&self, args: PlanArgs) -> Result<()> {
        let plan = self
            .planner
            .save_smart_plan(&plan_ref(&args))
            .await
            .context("Failed to save plan")?;
        self.renderer
            .render(&format!("Saved plan {} as '{}'.\n", plan.id, plan.name))
    }

    pub async fn commit(&self, args: PlanArgs) -> Result<()> {
        let plan = self
            .planner
            .commit_draft(&plan_ref(&args))
            .await
            .context("Failed to commit draft")?;
        self.renderer.render(&format!(
            "Committed plan {}: {} to {}.\n",
            plan.id, plan.from_date, plan.to_date
        ))
    }

    pub async fn activate(&self, args: PlanArgs) -> Result<()> {
        let plan = self
            .planner
            .activate_plan(&plan_ref(&args))
            .await
            .context("Failed to activate plan")?;
        self.renderer
            .render(&format!("Plan {} is now traveling.\n", plan.id))
    }

    pub async fn checkin(&self, args: CheckinArgs) -> Result<()> {
        let params = args.try_into()?;
        let plan = self
            .planner
            .checkin(&params)
            .await
            .context("Failed to check in")?;
        self.renderer.render(&plan.to_string())
    }

    pub async fn complete(&self, args: CompleteArgs) -> Result<()> {
        let raw = std::fs::read_to_string(&args.details)
            .with_context(|| format!("Failed to read {}", args.details.display()))?;
        let days: Vec<DayVisits> =
            serde_json::from_str(&raw).context("Failed to parse visit details")?;

        let params = CompleteTrip {
            traveler: args.traveler,
            plan_id: args.id,
            days,
            actual_lodging_id: args.lodging,
            travel_mode: parse_mode(&args.mode)?,
        };
        let plan = self
            .planner
            .complete_trip(&params)
            .await
            .context("Failed to complete trip")?;
        self.renderer.render(&plan.to_string())
    }

    pub async fn delete(&self, args: PlanArgs) -> Result<()> {
        let plan = self
            .planner
            .delete_plan(&plan_ref(&args))
            .await
            .context("Failed to delete plan")?;
        self.renderer
            .render(&format!("Deleted draft {} ('{}').\n", plan.id, plan.name))
    }
}

fn plan_ref(args: &PlanArgs) -> PlanRef {
    PlanRef {
        traveler: args.traveler.clone(),
        id: args.id,
    }
}
