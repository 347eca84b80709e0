//! Add command handlers.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};

use crate::bootstrap::CliContext;
use crate::presentation::format_event_line;

/// Create a person.
pub async fn person(ctx: &CliContext, name: &str) -> Result<()> {
    let person = ctx.service().create_person(name).await?;
    println!("Added person '{}'", person.name);
    Ok(())
}

/// Create an event.
pub async fn event(
    ctx: &CliContext,
    name: &str,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<()> {
    let event = ctx.service().create_event(name, date, start, end).await?;
    println!("Added event {}", format_event_line(&event));
    Ok(())
}
