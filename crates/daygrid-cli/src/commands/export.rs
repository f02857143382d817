use std::path::PathBuf;

use clap::Subcommand;
use daygrid_core::{csv_file_name, events_in_month, json_file_name, to_csv, to_json};

use crate::common;

#[derive(Subcommand)]
pub enum ExportAction {
    /// Write the month's events as pretty-printed JSON
    Json {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Write the month's events as CSV
    Csv {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

pub fn run(action: ExportAction) -> Result<(), Box<dyn std::error::Error>> {
    let session = common::open_session()?;
    match action {
        ExportAction::Json { month, out } => {
            let anchor = common::parse_month(month.as_deref())?;
            let events = events_in_month(session.store(), anchor);
            let path = out.join(json_file_name(anchor));
            std::fs::write(&path, to_json(&events)?)?;
            println!("wrote {}", path.display());
        }
        ExportAction::Csv { month, out } => {
            let anchor = common::parse_month(month.as_deref())?;
            let events = events_in_month(session.store(), anchor);
            let path = out.join(csv_file_name(anchor));
            std::fs::write(&path, to_csv(&events))?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}
