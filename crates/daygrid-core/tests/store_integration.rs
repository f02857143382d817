//! End-to-end tests over a real database file: session lifecycle,
//! persistence round-trips, and the month/search/export pipeline.

use chrono::NaiveDate;
use daygrid_core::{
    events_in_month, grid_days, search, to_csv, to_json, CalendarSession, CoreError, Database,
    EventCategory, EventRecord, MonthEvents, StoreError, TimeInterval,
};

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

#[test]
fn store_survives_a_session_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daygrid.db");

    let id = {
        let mut session = CalendarSession::new(Database::open_at(&path).unwrap()).unwrap();
        let e = event("Team Sync", "09:00", "10:00").with_description("weekly");
        let id = e.id.clone();
        session.add(day("2024-03-05"), e).unwrap();
        session.add(day("2024-03-06"), event("Dentist", "15:00", "16:00")).unwrap();
        id
    };

    let session = CalendarSession::new(Database::open_at(&path).unwrap()).unwrap();
    assert_eq!(session.store().event_count(), 2);
    let restored = session.store().find(day("2024-03-05"), &id).unwrap();
    assert_eq!(restored.name, "Team Sync");
    assert_eq!(restored.description.as_deref(), Some("weekly"));
}

#[test]
fn failed_mutations_do_not_persist() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daygrid.db");

    {
        let mut session = CalendarSession::new(Database::open_at(&path).unwrap()).unwrap();
        session.add(day("2024-03-05"), event("First", "09:00", "10:00")).unwrap();
        let err = session.add(day("2024-03-05"), event("Clash", "09:30", "10:30")).unwrap_err();
        assert!(matches!(err, CoreError::Store(StoreError::Conflict { .. })));
    }

    let session = CalendarSession::new(Database::open_at(&path).unwrap()).unwrap();
    assert_eq!(session.store().event_count(), 1);
    assert_eq!(session.store().events_on(day("2024-03-05"))[0].name, "First");
}

#[test]
fn garbage_blob_starts_an_empty_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daygrid.db");

    // Write a broken blob directly, the way a corrupted save would.
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE kv (key TEXT PRIMARY KEY, value TEXT NOT NULL);")
            .unwrap();
        conn.execute(
            "INSERT INTO kv (key, value) VALUES ('events', '[1, 2, broken')",
            [],
        )
        .unwrap();
    }

    let mut session = CalendarSession::new(Database::open_at(&path).unwrap()).unwrap();
    assert!(session.store().is_empty());

    // The session remains fully usable afterwards.
    session.add(day("2024-03-05"), event("Fresh start", "09:00", "10:00")).unwrap();
    assert_eq!(session.store().event_count(), 1);
}

#[test]
fn month_search_export_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open_at(&dir.path().join("daygrid.db")).unwrap();
    let mut session = CalendarSession::new(db).unwrap();

    session.add(day("2024-02-29"), event("Leap day", "09:00", "10:00")).unwrap();
    session.add(day("2024-03-05"), event("Team Sync", "09:00", "10:00")).unwrap();
    session.add(day("2024-03-31"), event("Month close", "14:00", "15:00")).unwrap();

    // March window: leap day excluded, the 31st included.
    let march = events_in_month(session.store(), day("2024-03-01"));
    assert_eq!(march.len(), 2);
    assert!(!march.contains_key(&day("2024-02-29")));
    assert!(march.contains_key(&day("2024-03-31")));

    // Search spans the whole store, not the month window.
    let results = search(session.store(), "team");
    assert_eq!(results.days.iter().copied().collect::<Vec<_>>(), [day("2024-03-05")]);
    assert_eq!(results.events.len(), 1);
    assert!(search(session.store(), "").is_empty());

    // Grid for March 2024 (starts on a Friday) pads back to Sunday.
    let grid = grid_days(day("2024-03-01"));
    assert_eq!(grid.len() % 7, 0);
    assert_eq!(grid[0], day("2024-02-25"));

    // Export both shapes from the same slice.
    let csv = to_csv(&march);
    assert!(csv.starts_with("Date,Event Name,Start Time,End Time,Description\n"));
    assert!(csv.contains("2024-03-05,Team Sync,09:00,10:00,"));

    let back: MonthEvents = serde_json::from_str(&to_json(&march).unwrap()).unwrap();
    assert_eq!(back, march);
}
