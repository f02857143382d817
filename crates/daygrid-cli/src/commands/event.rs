use clap::Subcommand;
use daygrid_core::{EventCategory, EventRecord, TimeInterval, TimeOfDay};

use crate::common;

#[derive(Subcommand)]
pub enum EventAction {
    /// Add an event to a day
    Add {
        /// Day as YYYY-MM-DD
        day: String,
        /// Event name
        name: String,
        /// Start time as HH:MM
        #[arg(long)]
        start: String,
        /// End time as HH:MM
        #[arg(long)]
        end: String,
        /// Free-text description
        #[arg(long)]
        description: Option<String>,
        /// work, personal, or others
        #[arg(long, default_value = "work")]
        category: String,
    },
    /// List events on a day
    List {
        /// Day as YYYY-MM-DD
        day: String,
        /// Print as JSON instead of the table form
        #[arg(long)]
        json: bool,
    },
    /// Edit an event by id, changing only the given fields
    Edit {
        /// Day as YYYY-MM-DD
        day: String,
        /// Event id (shown by `event list`)
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Remove an event by id
    Remove {
        /// Day as YYYY-MM-DD
        day: String,
        /// Event id (shown by `event list`)
        id: String,
    },
}

pub fn run(action: EventAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = common::open_session()?;
    match action {
        EventAction::Add {
            day,
            name,
            start,
            end,
            description,
            category,
        } => {
            let day = common::parse_day(&day)?;
            let interval = TimeInterval::new(start.parse::<TimeOfDay>()?, end.parse::<TimeOfDay>()?);
            let category = category.parse::<EventCategory>()?;
            let mut event = EventRecord::new(name, interval, category);
            if let Some(d) = description {
                event = event.with_description(d);
            }
            let id = event.id.clone();
            session.add(day, event)?;
            println!("added {id}");
        }
        EventAction::List { day, json } => {
            let day = common::parse_day(&day)?;
            let events = session.store().events_on(day);
            if json {
                println!("{}", serde_json::to_string_pretty(events)?);
            } else if events.is_empty() {
                println!("no events on {day}");
            } else {
                for event in events {
                    common::print_event(day, event);
                }
            }
        }
        EventAction::Edit {
            day,
            id,
            name,
            start,
            end,
            description,
            category,
        } => {
            let day = common::parse_day(&day)?;
            let current = session
                .store()
                .find(day, &id)
                .ok_or_else(|| format!("no event '{id}' on {day}"))?
                .clone();

            let interval = TimeInterval::new(
                match start {
                    Some(s) => s.parse::<TimeOfDay>()?,
                    None => current.interval.start,
                },
                match end {
                    Some(e) => e.parse::<TimeOfDay>()?,
                    None => current.interval.end,
                },
            );
            let updated = EventRecord {
                id: current.id,
                name: name.unwrap_or(current.name),
                interval,
                description: description.or(current.description),
                category: match category {
                    Some(c) => c.parse::<EventCategory>()?,
                    None => current.category,
                },
            };
            session.edit(day, &id, updated)?;
            println!("updated {id}");
        }
        EventAction::Remove { day, id } => {
            let day = common::parse_day(&day)?;
            let removed = session.remove(day, &id)?;
            println!("removed '{}' from {day}", removed.name);
        }
    }
    Ok(())
}
