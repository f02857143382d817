//! Session wiring: an owned store flushed through an injected
//! persistence collaborator.

use chrono::NaiveDate;

use crate::error::Result;
use crate::event::EventRecord;
use crate::storage::Database;
use crate::store::DayStore;

/// A live editing session over the persisted event store.
///
/// Loads the store once at construction and writes it back after
/// every successful mutation; reads serve from the in-memory store.
/// Mutations are synchronous and run to completion, so a read never
/// observes a partially applied change.
pub struct CalendarSession {
    store: DayStore,
    db: Database,
}

impl CalendarSession {
    /// Start a session over the given database, rehydrating the store
    /// from its saved blob (or starting empty).
    pub fn new(db: Database) -> Result<Self> {
        let store = db.load_store()?;
        Ok(Self { store, db })
    }

    /// Read-side view for month queries, search, and export.
    pub fn store(&self) -> &DayStore {
        &self.store
    }

    /// Add an event and flush on success.
    pub fn add(&mut self, day: NaiveDate, event: EventRecord) -> Result<()> {
        self.store.add(day, event)?;
        self.flush()
    }

    /// Replace an event by id and flush on success.
    pub fn edit(&mut self, day: NaiveDate, id: &str, updated: EventRecord) -> Result<()> {
        self.store.edit(day, id, updated)?;
        self.flush()
    }

    /// Remove an event by id and flush on success.
    pub fn remove(&mut self, day: NaiveDate, id: &str) -> Result<EventRecord> {
        let removed = self.store.remove(day, id)?;
        self.flush()?;
        Ok(removed)
    }

    fn flush(&self) -> Result<()> {
        self.db.save_store(&self.store)?;
        Ok(())
    }
}
