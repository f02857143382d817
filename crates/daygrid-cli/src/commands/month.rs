use chrono::{Datelike, Local};
use daygrid_core::{events_in_month, grid_days};

use crate::common;

pub fn run(month: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let session = common::open_session()?;
    let anchor = common::parse_month(month.as_deref())?;
    let today = Local::now().date_naive();

    println!("{}", anchor.format("%B %Y"));
    println!(" Sun  Mon  Tue  Wed  Thu  Fri  Sat");
    for week in grid_days(anchor).chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|day| {
                let count = session.store().events_on(*day).len();
                let mark = if *day == today {
                    '>'
                } else if count > 0 {
                    '*'
                } else {
                    ' '
                };
                if day.month() == anchor.month() {
                    format!("{mark}{:>3}", day.day())
                } else {
                    // Adjacent-month padding days are dimmed to dots.
                    format!("{mark}  .")
                }
            })
            .collect();
        println!("{}", row.join(" "));
    }

    let month_events = events_in_month(session.store(), anchor);
    if !month_events.is_empty() {
        println!();
        for (day, events) in &month_events {
            for event in events {
                common::print_event(*day, event);
            }
        }
    }
    Ok(())
}
