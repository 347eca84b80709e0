//! Main commands enum.

use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;

use eventreg_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT};

/// Parse an ISO `YYYY-MM-DD` date argument.
fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// Parse an `HH:MM` time argument.
fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long, env = "EVENTREG_HOST", default_value = DEFAULT_HOST)]
        host: String,
        /// Port to listen on
        #[arg(short, long, env = "EVENTREG_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Allow only these CORS origins (repeatable); all origins when omitted
        #[arg(long, env = "EVENTREG_ALLOWED_ORIGINS", value_delimiter = ',')]
        allow_origin: Vec<String>,
    },

    /// Show resolved data paths
    Paths,

    /// List all persons and the events they attend
    Persons,

    /// List all events
    Events,

    /// Create a person
    AddPerson {
        /// Unique name of the person
        name: String,
    },

    /// Create an event
    AddEvent {
        /// Unique name of the event
        name: String,
        /// Day of the event (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
        /// Start time (HH:MM)
        #[arg(long, value_parser = parse_time)]
        start: NaiveTime,
        /// End time (HH:MM)
        #[arg(long, value_parser = parse_time)]
        end: NaiveTime,
    },

    /// Register a person for an event
    Register {
        /// Name of the person
        person: String,
        /// Name of the event
        event: String,
    },
}
