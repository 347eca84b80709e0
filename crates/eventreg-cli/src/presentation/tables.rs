//! Table formatting utilities for CLI output.

use eventreg_core::{Event, Person};

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// One event as `name  date  start-end`.
pub fn format_event_line(event: &Event) -> String {
    format!(
        "{:<24} {} {}-{}",
        event.name,
        event.date.format("%Y-%m-%d"),
        event.start_time.format("%H:%M"),
        event.end_time.format("%H:%M")
    )
}

fn join_or_dash<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        "--".to_string()
    } else {
        names.join(", ")
    }
}

/// Events with the names of their attendees.
pub fn format_events(events: &[(Event, Vec<Person>)]) -> String {
    events
        .iter()
        .map(|(event, attendees)| {
            format!(
                "{:<52} {}",
                format_event_line(event),
                join_or_dash(attendees.iter().map(|p| p.name.as_str()))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Persons with the names of the events they attend.
pub fn format_persons(persons: &[(Person, Vec<Event>)]) -> String {
    persons
        .iter()
        .map(|(person, events)| {
            format!(
                "{:<24} {}",
                person.name,
                join_or_dash(events.iter().map(|e| e.name.as_str()))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
