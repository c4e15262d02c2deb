//! Smart-batch generation operations for the Planner.

use std::sync::Arc;

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{EngineError, Result},
    models::Plan,
    packer,
    params::GeneratePlans,
};

impl Planner {
    /// Generates a traveler's batch of smart plans: up to three alternative
    /// itineraries packed from the scored candidate pool, replacing any
    /// prior smart batch in one transaction.
    ///
    /// Validation failures (trip length, budget ratio, past start) surface
    /// as `InvalidInput`; a `RouteUnavailable` is safe to retry as a whole
    /// request.
    pub async fn generate_smart_plans(&self, params: &GeneratePlans) -> Result<Vec<Plan>> {
        let db_path = self.db_path.clone();
        let catalog = Arc::clone(&self.catalog);
        let routing = Arc::clone(&self.routing);
        let cache = Arc::clone(&self.route_cache);
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut rng = rand::rng();
            let ids = packer::generate_batch(
                &mut db,
                catalog.as_ref(),
                routing.as_ref(),
                &cache,
                &params,
                &mut rng,
            )?;

            let mut plans = Vec::with_capacity(ids.len());
            for id in ids {
                plans.push(db.get_plan(id)?.ok_or(EngineError::PlanNotFound { id })?);
            }
            Ok(plans)
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
