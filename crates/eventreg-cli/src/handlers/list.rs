//! List command handlers.

use anyhow::Result;

use eventreg_core::{Event, EventRegistrationService, Person};

use crate::bootstrap::CliContext;
use crate::presentation::{format_events, format_persons, print_separator};

/// Every person paired with the events they attend, in creation order.
pub async fn person_rows(service: &EventRegistrationService) -> Result<Vec<(Person, Vec<Event>)>> {
    let persons = service.get_all_persons().await?;
    let mut rows = Vec::with_capacity(persons.len());
    for person in persons {
        let events = service.get_events_attended_by_person(&person).await?;
        rows.push((person, events));
    }
    Ok(rows)
}

/// Every event paired with its attendees, in creation order.
pub async fn event_rows(service: &EventRegistrationService) -> Result<Vec<(Event, Vec<Person>)>> {
    let events = service.get_all_events().await?;
    let mut rows = Vec::with_capacity(events.len());
    for event in events {
        let attendees = service.get_persons_attending_event(&event).await?;
        rows.push((event, attendees));
    }
    Ok(rows)
}

/// List all persons together with the events each attends.
pub async fn persons(ctx: &CliContext) -> Result<()> {
    let rows = person_rows(ctx.service()).await?;

    if rows.is_empty() {
        println!("No persons found.");
        println!("Use 'eventreg add-person <name>' to add one.");
        return Ok(());
    }

    println!("{:<24} Events", "Name");
    print_separator(60);
    println!("{}", format_persons(&rows));
    Ok(())
}

/// List all events together with their attendees.
pub async fn events(ctx: &CliContext) -> Result<()> {
    let rows = event_rows(ctx.service()).await?;

    if rows.is_empty() {
        println!("No events found.");
        return Ok(());
    }

    println!("{:<24} {:<27} Attendees", "Name", "When");
    print_separator(80);
    println!("{}", format_events(&rows));
    Ok(())
}
