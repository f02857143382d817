//! Free-text search over the whole store.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::event::EventRecord;
use crate::store::DayStore;

/// One matching event, annotated with the day it sits on.
#[derive(Debug, Clone)]
pub struct SearchMatch {
    pub day: NaiveDate,
    pub event: EventRecord,
}

/// Result of a search: the days holding a match plus every matching
/// event in store iteration order.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub days: BTreeSet<NaiveDate>,
    pub events: Vec<SearchMatch>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Case-insensitive substring match against event names, across the
/// entire store (not just a visible month).
///
/// A blank query returns empty results; the caller treats that as
/// "no filter active", which is distinct from a non-blank query with
/// zero hits.
pub fn search(store: &DayStore, query: &str) -> SearchResults {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResults::default();
    }

    let mut results = SearchResults::default();
    for (day, events) in store.iter() {
        for event in events {
            if event.name.to_lowercase().contains(&needle) {
                results.days.insert(*day);
                results.events.push(SearchMatch {
                    day: *day,
                    event: event.clone(),
                });
            }
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventCategory, TimeInterval};

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn event(name: &str, start: &str, end: &str) -> EventRecord {
        EventRecord::new(
            name,
            TimeInterval::new(start.parse().unwrap(), end.parse().unwrap()),
            EventCategory::Work,
        )
    }

    fn sample_store() -> DayStore {
        let mut store = DayStore::new();
        store.add(day("2024-03-05"), event("Team Sync", "09:00", "10:00")).unwrap();
        store.add(day("2024-03-05"), event("Lunch", "12:00", "13:00")).unwrap();
        store.add(day("2024-03-12"), event("Dentist", "15:00", "16:00")).unwrap();
        store
    }

    #[test]
    fn case_insensitive_substring_on_name() {
        let store = sample_store();
        let results = search(&store, "team");
        assert_eq!(results.days, BTreeSet::from([day("2024-03-05")]));
        assert_eq!(results.events.len(), 1);
        assert_eq!(results.events[0].event.name, "Team Sync");
        assert_eq!(results.events[0].day, day("2024-03-05"));
    }

    #[test]
    fn blank_query_means_no_filter() {
        let store = sample_store();
        assert!(search(&store, "").is_empty());
        assert!(search(&store, "   ").is_empty());
        assert!(search(&store, "").days.is_empty());
    }

    #[test]
    fn no_hits_on_a_real_query() {
        let store = sample_store();
        let results = search(&store, "standup");
        assert!(results.is_empty());
        assert!(results.days.is_empty());
    }

    #[test]
    fn matches_span_multiple_days() {
        let mut store = sample_store();
        store.add(day("2024-04-02"), event("Team Retro", "09:00", "10:00")).unwrap();

        let results = search(&store, "TEAM");
        assert_eq!(results.days.len(), 2);
        assert_eq!(results.events.len(), 2);
        // Store iteration order: day order, then insertion order.
        assert_eq!(results.events[0].event.name, "Team Sync");
        assert_eq!(results.events[1].event.name, "Team Retro");
    }

    #[test]
    fn descriptions_are_not_searched() {
        let mut store = DayStore::new();
        store
            .add(
                day("2024-03-05"),
                event("Planning", "09:00", "10:00").with_description("team goals"),
            )
            .unwrap();
        assert!(search(&store, "team").is_empty());
    }
}
