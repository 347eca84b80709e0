//! `SQLite` implementation of the `EventRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use eventreg_core::{Event, EventRepository, NewEvent, RepositoryError};

use super::row_mappers::{
    EVENT_SELECT_COLUMNS, format_date, format_time, map_sqlx_error, row_to_event,
};

/// `SQLite` implementation of the `EventRepository` trait.
pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    /// Create a new `SQLite` event repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn list(&self) -> Result<Vec<Event>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {EVENT_SELECT_COLUMNS} FROM events e ORDER BY e.id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_event).collect()
    }

    async fn get_by_name(&self, name: &str) -> Result<Event, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {EVENT_SELECT_COLUMNS} FROM events e WHERE e.name = ?"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        match row {
            Some(row) => row_to_event(&row),
            None => Err(RepositoryError::NotFound(format!("Event '{name}'"))),
        }
    }

    async fn insert(&self, event: &NewEvent) -> Result<Event, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO events (name, date, start_time, end_time) VALUES (?, ?, ?, ?)",
        )
        .bind(&event.name)
        .bind(format_date(event.date))
        .bind(format_time(event.start_time))
        .bind(format_time(event.end_time))
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, &format!("Event '{}'", event.name)))?;

        Ok(Event {
            id: result.last_insert_rowid(),
            name: event.name.clone(),
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
        })
    }
}
