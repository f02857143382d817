use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "daygrid", version, about = "Daygrid calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Event management
    Event {
        #[command(subcommand)]
        action: commands::event::EventAction,
    },
    /// Show the month grid with event counts
    Month {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// Search event names across all days
    Search {
        /// Substring to match, case-insensitively
        query: String,
    },
    /// Export a month's events to a file
    Export {
        #[command(subcommand)]
        action: commands::export::ExportAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Event { action } => commands::event::run(action),
        Commands::Month { month } => commands::month::run(month),
        Commands::Search { query } => commands::search::run(&query),
        Commands::Export { action } => commands::export::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
