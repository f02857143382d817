//! Day-keyed event store with overlap enforcement.
//!
//! The store is the single source of truth for a session. Month
//! queries, search, and export are read-side projections over it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::event::EventRecord;

/// Events grouped by calendar day.
///
/// Invariants, checked on every mutation:
/// - a day present in the map has at least one event; removing the
///   last event removes the day entry
/// - no two events on the same day overlap (half-open semantics, so
///   back-to-back events are fine)
/// - a failed mutation leaves the store exactly as it was
///
/// Within a day, events keep insertion order; they are never sorted
/// by start time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayStore {
    days: BTreeMap<NaiveDate, Vec<EventRecord>>,
}

impl DayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event to a day.
    ///
    /// # Errors
    /// `Conflict` if the interval overlaps an existing event on that
    /// day, `EmptyName`/`InvalidInterval` if the event itself is not
    /// saveable. The store is unchanged on any error.
    pub fn add(&mut self, day: NaiveDate, event: EventRecord) -> Result<(), StoreError> {
        Self::validate(&event)?;
        if let Some(existing) = self
            .days
            .get(&day)
            .and_then(|events| events.iter().find(|e| e.interval.overlaps(&event.interval)))
        {
            return Err(StoreError::Conflict {
                day,
                name: existing.name.clone(),
                interval: existing.interval,
            });
        }
        self.days.entry(day).or_default().push(event);
        Ok(())
    }

    /// Remove the event with the given id from a day.
    ///
    /// Deletes the day entry when its last event goes, so the map
    /// never holds an empty sequence.
    ///
    /// # Errors
    /// `EventNotFound` if the day is absent or the id is unknown on
    /// that day (a stale reference).
    pub fn remove(&mut self, day: NaiveDate, id: &str) -> Result<EventRecord, StoreError> {
        let events = self.days.get_mut(&day).ok_or_else(|| StoreError::EventNotFound {
            day,
            id: id.to_string(),
        })?;
        let slot = events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::EventNotFound {
                day,
                id: id.to_string(),
            })?;
        let removed = events.remove(slot);
        if events.is_empty() {
            self.days.remove(&day);
        }
        Ok(removed)
    }

    /// Replace the event with the given id, keeping its id and slot.
    ///
    /// The no-overlap invariant is re-checked against the day's other
    /// events only, so an edit that merely changes the description
    /// never conflicts with the event it replaces.
    ///
    /// # Errors
    /// Same as [`add`](Self::add), plus `EventNotFound` for a stale
    /// reference. The prior event stays in place on any error.
    pub fn edit(
        &mut self,
        day: NaiveDate,
        id: &str,
        mut updated: EventRecord,
    ) -> Result<(), StoreError> {
        Self::validate(&updated)?;
        let events = self.days.get_mut(&day).ok_or_else(|| StoreError::EventNotFound {
            day,
            id: id.to_string(),
        })?;
        let slot = events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::EventNotFound {
                day,
                id: id.to_string(),
            })?;
        if let Some(existing) = events
            .iter()
            .enumerate()
            .find(|(i, e)| *i != slot && e.interval.overlaps(&updated.interval))
            .map(|(_, e)| e)
        {
            return Err(StoreError::Conflict {
                day,
                name: existing.name.clone(),
                interval: existing.interval,
            });
        }
        updated.id = id.to_string();
        events[slot] = updated;
        Ok(())
    }

    /// Events on a day, in insertion order. Empty if the day is absent.
    pub fn events_on(&self, day: NaiveDate) -> &[EventRecord] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Look up one event by day and id.
    pub fn find(&self, day: NaiveDate, id: &str) -> Option<&EventRecord> {
        self.events_on(day).iter().find(|e| e.id == id)
    }

    /// Iterate over all days and their event sequences.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<EventRecord>)> {
        self.days.iter()
    }

    /// Days that currently hold at least one event.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Total number of events across all days.
    pub fn event_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn validate(event: &EventRecord) -> Result<(), StoreError> {
        if event.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        if event.interval.is_degenerate() {
            return Err(StoreError::InvalidInterval {
                start: event.interval.start,
                end: event.interval.end,
            });
        }
        Ok(())
    }
}
