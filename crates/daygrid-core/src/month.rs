//! Month-window queries: the padded rendering grid and the
//! calendar-month slice of the store.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::event::EventRecord;
use crate::store::DayStore;

/// First and last day of the anchor's calendar month.
pub fn month_bounds(anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = anchor.with_day(1).expect("every month has a day 1");
    let last = first + Months::new(1) - Duration::days(1);
    (first, last)
}

/// Every day of the 7-column grid displaying the anchor's month.
///
/// Runs from the Sunday on or before the 1st through the Saturday on
/// or after the last day, so the result length is always a multiple
/// of 7 and includes leading/trailing days from adjacent months. Pure
/// function of the anchor's year and month (week starts Sunday).
pub fn grid_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    let (first, last) = month_bounds(anchor);
    let lead = i64::from(first.weekday().num_days_from_sunday());
    let tail = 6 - i64::from(last.weekday().num_days_from_sunday());
    let start = first - Duration::days(lead);
    let end = last + Duration::days(tail);
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// The store filtered to days within the anchor's calendar month.
///
/// Bounds are the calendar month, not the padded grid. Read-only; the
/// result owns clones of the matching events.
pub fn events_in_month(store: &DayStore, anchor: NaiveDate) -> BTreeMap<NaiveDate, Vec<EventRecord>> {
    let (first, last) = month_bounds(anchor);
    store
        .iter()
        .filter(|(day, _)| **day >= first && **day <= last)
        .map(|(day, events)| (*day, events.clone()))
        .collect()
}
