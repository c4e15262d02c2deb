//! Error types for the itinerary engine.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Plan not found for the given ID (or not owned by the caller)
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// Destination not found in the catalog
    #[error("Destination with ID {id} not found")]
    DestinationNotFound { id: u64 },
    /// Stop not found for the given ID
    #[error("Stop with ID {id} not found")]
    StopNotFound { id: u64 },
    /// Operation attempted from the wrong lifecycle state
    #[error("Cannot {operation} a plan in status '{status}'")]
    StateConflict { operation: String, status: String },
    /// Destination exists but is closed or deactivated at the moment of use
    #[error("Destination '{name}' is unavailable: {reason}")]
    DestinationUnavailable { name: String, reason: String },
    /// External routing provider failure; safe to retry the whole operation
    #[error("Route lookup failed: {message}")]
    RouteUnavailable { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl EngineError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a state-conflict error for an operation attempted from the
    /// wrong lifecycle state.
    pub fn state_conflict(operation: impl Into<String>, status: crate::models::PlanStatus) -> Self {
        Self::StateConflict {
            operation: operation.into(),
            status: status.as_str().into(),
        }
    }

    /// True for errors that are safe to retry as a whole operation
    /// (idempotent due to upsert/cache semantics).
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            EngineError::RouteUnavailable { .. } | EngineError::Database { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| EngineError::database_error(message, e))
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
