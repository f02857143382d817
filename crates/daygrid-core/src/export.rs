//! JSON and CSV export of a month window.
//!
//! Both exporters consume the mapping produced by
//! [`events_in_month`](crate::month::events_in_month) and emit rows in
//! its iteration order.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::event::EventRecord;

/// The month slice consumed by the exporters.
pub type MonthEvents = BTreeMap<NaiveDate, Vec<EventRecord>>;

/// Fixed CSV header row.
pub const CSV_HEADER: &str = "Date,Event Name,Start Time,End Time,Description";

/// Pretty-printed JSON of the month mapping.
///
/// Parses back to a structurally equal mapping.
pub fn to_json(events: &MonthEvents) -> serde_json::Result<String> {
    serde_json::to_string_pretty(events)
}

/// Flat CSV of the month mapping: the fixed header plus one row per
/// event. Fields containing the delimiter, quotes, or newlines are
/// RFC 4180-quoted; plain fields are emitted bare.
pub fn to_csv(events: &MonthEvents) -> String {
    let mut out = String::from(CSV_HEADER);
    for (day, list) in events {
        for event in list {
            out.push('\n');
            out.push_str(&format!(
                "{},{},{},{},{}",
                day,
                csv_field(&event.name),
                event.interval.start,
                event.interval.end,
                csv_field(event.description.as_deref().unwrap_or("")),
            ));
        }
    }
    out
}

/// Download name for a month's JSON export, e.g. `events-March-2024.json`.
pub fn json_file_name(anchor: NaiveDate) -> String {
    format!("events-{}.json", anchor.format("%B-%Y"))
}

/// Download name for a month's CSV export, e.g. `events-March-2024.csv`.
pub fn csv_file_name(anchor: NaiveDate) -> String {
    format!("events-{}.csv", anchor.format("%B-%Y"))
}

fn csv_field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
