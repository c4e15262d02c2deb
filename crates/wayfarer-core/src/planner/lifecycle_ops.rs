//! Lifecycle transition operations for the Planner.

use std::sync::Arc;

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{EngineError, Result},
    lifecycle,
    models::Plan,
    params::{Checkin, CompleteTrip, PlanRef},
};

impl Planner {
    /// Saves a smart plan as the traveler's draft, stripping the variant
    /// suffix from its name and discarding the sibling smart plans.
    pub async fn save_smart_plan(&self, params: &PlanRef) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let traveler = params.traveler.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            lifecycle::promote_smart_to_draft(&mut db, &traveler, plan_id)
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Commits a draft into an immutable planned itinerary. The trip must
    /// start no earlier than tomorrow and every referenced destination must
    /// still be open.
    pub async fn commit_draft(&self, params: &PlanRef) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let catalog = Arc::clone(&self.catalog);
        let traveler = params.traveler.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            lifecycle::commit_draft(&mut db, catalog.as_ref(), &traveler, plan_id)
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Marks a committed plan as traveling so check-ins are accepted.
    pub async fn activate_plan(&self, params: &PlanRef) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let traveler = params.traveler.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            lifecycle::activate_plan(&mut db, &traveler, plan_id)
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Records the actual visits of one trip day against an activated plan.
    /// Re-running a check-in for the same day replaces its previously
    /// recorded visits.
    pub async fn checkin(&self, params: &Checkin) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let catalog = Arc::clone(&self.catalog);
        let routing = Arc::clone(&self.routing);
        let cache = Arc::clone(&self.route_cache);
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            lifecycle::checkin(&mut db, catalog.as_ref(), routing.as_ref(), &cache, &params)
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Completes an activated trip, reconciling planned stops against the
    /// actual visits and recording the reconciled cost.
    pub async fn complete_trip(&self, params: &CompleteTrip) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let catalog = Arc::clone(&self.catalog);
        let routing = Arc::clone(&self.routing);
        let cache = Arc::clone(&self.route_cache);
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            lifecycle::complete_trip(&mut db, catalog.as_ref(), routing.as_ref(), &cache, &params)
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
