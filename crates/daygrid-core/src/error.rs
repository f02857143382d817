//! Core error types for daygrid-core.
//!
//! Every failure is returned as a value; the core never panics past
//! its boundary and performs no logging of its own. How a conflict or
//! a stale reference is surfaced to the user is the frontend's call.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::event::{TimeInterval, TimeOfDay};

/// Core error type for daygrid-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store mutation errors
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Persistence errors
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by [`DayStore`](crate::DayStore) mutations.
///
/// All of these are recoverable: the store is left untouched and the
/// caller can adjust the event or refresh a stale reference.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The interval collides with an existing event on the same day.
    #[error("'{name}' already occupies {interval} on {day}")]
    Conflict {
        day: NaiveDate,
        name: String,
        interval: TimeInterval,
    },

    /// No event with the given id on the given day.
    #[error("no event '{id}' on {day}")]
    EventNotFound { day: NaiveDate, id: String },

    /// Events must have a non-empty name.
    #[error("event name must not be empty")]
    EmptyName,

    /// The interval covers no time.
    #[error("invalid interval: end ({end}) must be after start ({start})")]
    InvalidInterval { start: TimeOfDay, end: TimeOfDay },
}

/// Persistence errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the database file
    #[error("failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("query failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),

    /// Store could not be encoded for persistence
    #[error("failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),

    /// Failed to resolve or create the data directory
    #[error("failed to access data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
