//! Helpers shared by the command modules.

use chrono::{Datelike, Local, NaiveDate};
use daygrid_core::{CalendarSession, Database, EventRecord};

pub fn open_session() -> Result<CalendarSession, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    Ok(CalendarSession::new(db)?)
}

pub fn parse_day(value: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    Ok(NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")?)
}

/// Parse `YYYY-MM` into the first day of that month; defaults to the
/// current local month.
pub fn parse_month(value: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match value {
        Some(v) => Ok(NaiveDate::parse_from_str(&format!("{}-01", v.trim()), "%Y-%m-%d")?),
        None => Local::now()
            .date_naive()
            .with_day(1)
            .ok_or_else(|| "could not resolve the current month".into()),
    }
}

pub fn print_event(day: NaiveDate, event: &EventRecord) {
    println!(
        "{}  {}  {}  {}  [{}]{}",
        event.id,
        day,
        event.interval,
        event.name,
        event.category,
        event
            .description
            .as_deref()
            .map(|d| format!("  {d}"))
            .unwrap_or_default(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_parsing() {
        assert_eq!(parse_month(Some("2024-03")).unwrap(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(parse_month(Some("2024-13")).is_err());
        assert!(parse_month(Some("march")).is_err());
    }

    #[test]
    fn day_parsing() {
        assert_eq!(parse_day("2024-03-05").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!(parse_day("2024-02-30").is_err());
    }
}
