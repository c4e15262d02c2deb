//! Core library for the Wayfarer travel planning application.
//!
//! This crate provides the itinerary auto-planning engine: scored candidate
//! ranking, greedy day-by-day packing under money and time budgets, a
//! memoizing route-distance cache, and the plan lifecycle state machine
//! that reconciles the planned itinerary against what the traveler actually
//! did.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): plans, stops, destinations, route legs
//! - **Seams** ([`catalog`], [`routing`]): read-only destination catalog and
//!   external routing provider, both behind traits
//! - **Engine** ([`scoring`], [`packer`], [`route_cache`], [`lifecycle`]):
//!   the algorithmic core
//! - **Persistence** ([`db`]): SQLite layer with per-operation connections
//!   and transactional multi-step writes
//! - **Facade** ([`planner`]): async API wrapping the synchronous engine in
//!   `tokio::task::spawn_blocking`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wayfarer_core::{params::GeneratePlans, JsonCatalog, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Arc::new(JsonCatalog::from_path("catalog.json")?);
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .with_catalog(catalog)
//!     .build()
//!     .await?;
//!
//! let params = GeneratePlans {
//!     traveler: "traveler-1".to_string(),
//!     city: "Hanoi".to_string(),
//!     from_date: "2027-05-01".to_string(),
//!     to_date: "2027-05-03".to_string(),
//!     total_budget: 1_000,
//!     lodging_budget: 100,
//!     personalities: vec!["culture".to_string()],
//!     ..Default::default()
//! };
//!
//! for plan in planner.generate_smart_plans(&params).await? {
//!     println!("{}", plan);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
mod lifecycle;
pub mod models;
mod packer;
pub mod params;
pub mod planner;
pub mod route_cache;
pub mod routing;
pub mod scoring;

// Re-export commonly used types
pub use catalog::{Catalog, CategoryFilter, JsonCatalog};
pub use db::Database;
pub use display::{LocalDateTime, PlanSummaries};
pub use error::{EngineError, Result};
pub use models::{
    Destination, DestinationState, Plan, PlanFilter, PlanStatus, PlanStop, PlanSummary, RouteLeg,
    StopStatus, TravelMode,
};
pub use params::{
    AddStop, Checkin, CompleteTrip, CreateDraft, DayVisits, GeneratePlans, ListPlans, PlanRef,
    VisitDetail,
};
pub use planner::{Planner, PlannerBuilder};
pub use route_cache::RouteCache;
pub use routing::{Coord, GreatCircleRouter, RouteMetrics, RoutingProvider};
