//! Event model: records, categories, and the interval they occupy.

pub mod time;

pub use time::{ParseTimeError, TimeInterval, TimeOfDay};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Category of an event. Display styling is a frontend concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Work,
    Personal,
    Others,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Others => "others",
        }
    }
}

impl Default for EventCategory {
    fn default() -> Self {
        Self::Work
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing an event category name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category '{0}': expected work, personal, or others")]
pub struct ParseCategoryError(pub String);

impl FromStr for EventCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "personal" => Ok(Self::Personal),
            "others" => Ok(Self::Others),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// A single calendar event within one day.
///
/// The `id` is generated at creation and stays stable across edits,
/// so frontends can address events without relying on their position
/// in the day's sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub interval: TimeInterval,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: EventCategory,
}

impl EventRecord {
    /// Create a new event with a fresh id.
    pub fn new(name: impl Into<String>, interval: TimeInterval, category: EventCategory) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            interval,
            description: None,
            category,
        }
    }

    /// Set the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: &str, end: &str) -> TimeInterval {
        TimeInterval::new(start.parse().unwrap(), end.parse().unwrap())
    }

    #[test]
    fn category_parsing() {
        assert_eq!("work".parse::<EventCategory>().unwrap(), EventCategory::Work);
        assert_eq!("Personal".parse::<EventCategory>().unwrap(), EventCategory::Personal);
        assert_eq!("OTHERS".parse::<EventCategory>().unwrap(), EventCategory::Others);
        assert!("misc".parse::<EventCategory>().is_err());
    }

    #[test]
    fn fresh_ids_are_unique() {
        let a = EventRecord::new("Sync", interval("09:00", "10:00"), EventCategory::Work);
        let b = EventRecord::new("Sync", interval("09:00", "10:00"), EventCategory::Work);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn event_serialization() {
        let event = EventRecord::new("Team Sync", interval("09:00", "10:00"), EventCategory::Work)
            .with_description("weekly planning");

        let json = serde_json::to_string(&event).unwrap();
        let decoded: EventRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, event);

        // Interval fields are flattened onto the event itself.
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["start"], "09:00");
        assert_eq!(value["end"], "10:00");
        assert_eq!(value["category"], "work");
    }
}
