//! `SQLite` implementation of the `PersonRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use eventreg_core::{Person, PersonRepository, RepositoryError};

use super::row_mappers::{PERSON_SELECT_COLUMNS, map_sqlx_error, row_to_person};

/// `SQLite` implementation of the `PersonRepository` trait.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// Create a new `SQLite` person repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for SqlitePersonRepository {
    async fn list(&self) -> Result<Vec<Person>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {PERSON_SELECT_COLUMNS} FROM persons p ORDER BY p.id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_person).collect()
    }

    async fn get_by_name(&self, name: &str) -> Result<Person, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {PERSON_SELECT_COLUMNS} FROM persons p WHERE p.name = ?"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        match row {
            Some(row) => row_to_person(&row),
            None => Err(RepositoryError::NotFound(format!("Person '{name}'"))),
        }
    }

    async fn insert(&self, name: &str) -> Result<Person, RepositoryError> {
        let result = sqlx::query("INSERT INTO persons (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, &format!("Person '{name}'")))?;

        Ok(Person::new(result.last_insert_rowid(), name))
    }
}
