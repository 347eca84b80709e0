//! Row mapping helpers for `SQLite` queries.
//!
//! Dates and times are stored as ISO-8601 text so the database file stays
//! readable with the `sqlite3` shell.

use chrono::{NaiveDate, NaiveTime};
use eventreg_core::{Event, Person, Registration, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for event queries, qualified by the `e` alias.
pub const EVENT_SELECT_COLUMNS: &str =
    "e.id AS id, e.name AS name, e.date AS date, e.start_time AS start_time, e.end_time AS end_time";

/// Shared SELECT column list for person queries, qualified by the `p` alias.
pub const PERSON_SELECT_COLUMNS: &str = "p.id AS id, p.name AS name";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

fn storage(e: impl ToString) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Parse a database row into a `Person`.
pub fn row_to_person(row: &SqliteRow) -> Result<Person, RepositoryError> {
    Ok(Person {
        id: row.try_get("id").map_err(storage)?,
        name: row.try_get("name").map_err(storage)?,
    })
}

/// Parse a database row into an `Event`.
pub fn row_to_event(row: &SqliteRow) -> Result<Event, RepositoryError> {
    let date: String = row.try_get("date").map_err(storage)?;
    let start_time: String = row.try_get("start_time").map_err(storage)?;
    let end_time: String = row.try_get("end_time").map_err(storage)?;

    Ok(Event {
        id: row.try_get("id").map_err(storage)?,
        name: row.try_get("name").map_err(storage)?,
        date: NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(storage)?,
        start_time: NaiveTime::parse_from_str(&start_time, TIME_FORMAT).map_err(storage)?,
        end_time: NaiveTime::parse_from_str(&end_time, TIME_FORMAT).map_err(storage)?,
    })
}

/// Parse a database row into a `Registration`.
pub fn row_to_registration(row: &SqliteRow) -> Result<Registration, RepositoryError> {
    Ok(Registration {
        id: row.try_get("id").map_err(storage)?,
        person_name: row.try_get("person_name").map_err(storage)?,
        event_name: row.try_get("event_name").map_err(storage)?,
    })
}

/// Map `SQLx` errors to `RepositoryError`.
///
/// `what` names the entity being written and ends up in the message.
pub fn map_sqlx_error(e: sqlx::Error, what: &str) -> RepositoryError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return RepositoryError::AlreadyExists(what.to_string());
        }
        if db_err.is_foreign_key_violation() {
            return RepositoryError::Constraint(format!("{what} references a missing entity"));
        }
    }
    RepositoryError::Storage(e.to_string())
}
