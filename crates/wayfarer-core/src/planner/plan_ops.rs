//! Draft editing and plan read operations for the Planner.

use std::sync::Arc;

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{EngineError, Result},
    lifecycle,
    models::{Plan, PlanFilter, PlanSummary},
    params::{AddStop, CreateDraft, ListPlans, PlanRef},
};

impl Planner {
    /// Creates an empty manual draft.
    pub async fn create_draft(&self, params: &CreateDraft) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            lifecycle::create_draft(&mut db, &params)
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Adds a planned stop to a draft, computing the travel leg from the
    /// previous stop of the same day.
    pub async fn add_stop(&self, params: &AddStop) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let catalog = Arc::clone(&self.catalog);
        let routing = Arc::clone(&self.routing);
        let cache = Arc::clone(&self.route_cache);
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            lifecycle::add_stop(&mut db, catalog.as_ref(), routing.as_ref(), &cache, &params)
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a plan with its stops eagerly loaded. Returns `None` for a
    /// missing plan or one owned by another traveler.
    pub async fn get_plan(&self, params: &PlanRef) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let traveler = params.traveler.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            Ok(db
                .get_plan(plan_id)?
                .filter(|plan| plan.traveler == traveler))
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists a traveler's plan summaries, optionally narrowed to a status.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<Vec<PlanSummary>> {
        let db_path = self.db_path.clone();
        let filter = PlanFilter::from(params);

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans(Some(&filter))
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a draft and all its stops. Returns the deleted
    /// plan for confirmation. Committed plans cannot be deleted.
    pub async fn delete_plan(&self, params: &PlanRef) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let traveler = params.traveler.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            lifecycle::delete_plan(&mut db, &traveler, plan_id)
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
