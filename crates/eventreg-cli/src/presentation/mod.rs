//! Plain-text rendering of entities for terminal output.

mod tables;

pub use tables::{format_event_line, format_events, format_persons, print_separator};
