//! `SQLite` implementation of the `RegistrationRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use eventreg_core::{Event, Person, Registration, RegistrationRepository, RepositoryError};

use super::row_mappers::{
    EVENT_SELECT_COLUMNS, PERSON_SELECT_COLUMNS, map_sqlx_error, row_to_event, row_to_person,
    row_to_registration,
};

/// `SQLite` implementation of the `RegistrationRepository` trait.
pub struct SqliteRegistrationRepository {
    pool: SqlitePool,
}

impl SqliteRegistrationRepository {
    /// Create a new `SQLite` registration repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for SqliteRegistrationRepository {
    async fn insert(
        &self,
        person_name: &str,
        event_name: &str,
    ) -> Result<Registration, RepositoryError> {
        let result =
            sqlx::query("INSERT INTO registrations (person_name, event_name) VALUES (?, ?)")
                .bind(person_name)
                .bind(event_name)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    map_sqlx_error(
                        e,
                        &format!("Registration of '{person_name}' for '{event_name}'"),
                    )
                })?;

        Ok(Registration {
            id: result.last_insert_rowid(),
            person_name: person_name.to_string(),
            event_name: event_name.to_string(),
        })
    }

    async fn find(
        &self,
        person_name: &str,
        event_name: &str,
    ) -> Result<Registration, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, person_name, event_name FROM registrations WHERE person_name = ? AND event_name = ?",
        )
        .bind(person_name)
        .bind(event_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        match row {
            Some(row) => row_to_registration(&row),
            None => Err(RepositoryError::NotFound(format!(
                "Registration of '{person_name}' for '{event_name}'"
            ))),
        }
    }

    async fn events_for_person(&self, person_name: &str) -> Result<Vec<Event>, RepositoryError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {EVENT_SELECT_COLUMNS}
            FROM registrations r
            JOIN events e ON e.name = r.event_name
            WHERE r.person_name = ?
            ORDER BY r.id
            "#
        ))
        .bind(person_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_event).collect()
    }

    async fn persons_for_event(&self, event_name: &str) -> Result<Vec<Person>, RepositoryError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {PERSON_SELECT_COLUMNS}
            FROM registrations r
            JOIN persons p ON p.name = r.person_name
            WHERE r.event_name = ?
            ORDER BY r.id
            "#
        ))
        .bind(event_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_person).collect()
    }
}
