//! Database operations and SQLite management for plans, stops and the
//! route-leg cache.
//!
//! This module provides the low-level persistence layer of the Wayfarer
//! engine. It handles SQLite connections, schema management, and the
//! specialized query interfaces for plans, stops and cached route legs.

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod leg_queries;
pub mod migrations;
pub mod plan_queries;
pub mod stop_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(Duration::from_secs(5))
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
