//! # Daygrid Core Library
//!
//! This library provides the core logic for the Daygrid calendar: a
//! day-keyed event store with scheduling-conflict enforcement, the
//! month-window queries used for rendering and export, free-text
//! search, and JSON/CSV export. Any frontend (the bundled CLI, a GUI)
//! is expected to be a thin layer over this crate.
//!
//! ## Key Components
//!
//! - [`DayStore`]: events grouped by calendar day, with overlap
//!   rejection on every mutation
//! - [`CalendarSession`]: an owned store wired to a persistence
//!   collaborator, flushed after each successful mutation
//! - [`Database`]: SQLite-backed key-value blob storage
//! - [`events_in_month`] / [`grid_days`]: month-window projections
//! - [`search`]: case-insensitive name search over the whole store

pub mod error;
pub mod event;
pub mod export;
pub mod month;
pub mod search;
pub mod session;
pub mod storage;
pub mod store;

pub use error::{CoreError, Result, StorageError, StoreError};
pub use event::{EventCategory, EventRecord, TimeInterval, TimeOfDay};
pub use export::{csv_file_name, json_file_name, to_csv, to_json, MonthEvents};
pub use month::{events_in_month, grid_days, month_bounds};
pub use search::{search, SearchMatch, SearchResults};
pub use session::CalendarSession;
pub use storage::Database;
pub use store::DayStore;
