//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

use super::Planner;
use crate::{
    catalog::Catalog,
    db::Database,
    error::{EngineError, Result},
    routing::{GreatCircleRouter, RoutingProvider},
};

/// Builder for creating and configuring Planner instances.
#[derive(Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    catalog: Option<Arc<dyn Catalog>>,
    routing: Option<Arc<dyn RoutingProvider>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wayfarer/wayfarer.db` or
    /// `~/.local/share/wayfarer/wayfarer.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the destination catalog the engine reads from. Required.
    pub fn with_catalog(mut self, catalog: Arc<dyn Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets the routing provider used for uncached leg lookups.
    ///
    /// Defaults to the offline [`GreatCircleRouter`].
    pub fn with_routing_provider(mut self, routing: Arc<dyn RoutingProvider>) -> Self {
        self.routing = Some(routing);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` if no catalog was provided,
    /// `EngineError::FileSystem` if the database path is invalid, and
    /// `EngineError::Database` if database initialization fails.
    pub async fn build(self) -> Result<Planner> {
        let catalog = self.catalog.ok_or_else(|| EngineError::Configuration {
            message: "a destination catalog is required".into(),
        })?;
        let routing = self
            .routing
            .unwrap_or_else(|| Arc::new(GreatCircleRouter));

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| EngineError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), EngineError>(())
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Planner::new(db_path, catalog, routing))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wayfarer")
            .place_data_file("wayfarer.db")
            .map_err(|e| EngineError::XdgDirectory(e.to_string()))
    }
}
