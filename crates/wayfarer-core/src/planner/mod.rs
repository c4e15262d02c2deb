//! High-level planner API for generating and managing travel plans.
//!
//! This module provides the main [`Planner`] interface of the Wayfarer
//! engine. The planner coordinates the itinerary packer, the lifecycle
//! state machine, the catalog and routing seams, and the SQLite layer.
//!
//! All operations are async: the synchronous database and provider work
//! runs inside `tokio::task::spawn_blocking`, one logical request per call.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - [`generate_ops`]: Smart-batch generation
//! - [`lifecycle_ops`]: Save/commit/activate/check-in/complete transitions
//! - [`plan_ops`]: Draft editing and plan read queries

use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::route_cache::RouteCache;
use crate::routing::RoutingProvider;

// Module declarations
pub mod builder;
pub mod generate_ops;
pub mod lifecycle_ops;
pub mod plan_ops;

// Re-export the main types
pub use builder::PlannerBuilder;

/// Main planner interface for generating and managing travel plans.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) catalog: Arc<dyn Catalog>,
    pub(crate) routing: Arc<dyn RoutingProvider>,
    pub(crate) route_cache: Arc<RouteCache>,
}

impl Planner {
    /// Creates a new planner over the given database path and seams.
    pub(crate) fn new(
        db_path: PathBuf,
        catalog: Arc<dyn Catalog>,
        routing: Arc<dyn RoutingProvider>,
    ) -> Self {
        Self {
            db_path,
            catalog,
            routing,
            route_cache: Arc::new(RouteCache::new()),
        }
    }
}
