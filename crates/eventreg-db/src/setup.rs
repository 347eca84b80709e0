//! Database setup and initialization.
//!
//! Entry points call [`setup_database`] with the resolved database path.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// Creates the parent directory and the database file if they don't exist.
/// Foreign key enforcement is on, which the registrations table relies on.
///
/// # Example
///
/// ```rust,no_run
/// use eventreg_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/var/lib/eventreg/eventreg.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true),
    )
    .await?;

    create_schema(&pool).await?;
    tracing::debug!(path = %db_path.display(), "Database schema ready");

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool is pinned to a single connection that never expires, since each
/// `SQLite` in-memory connection owns its own private database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times as all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS persons (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            date TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS registrations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            person_name TEXT NOT NULL,
            event_name TEXT NOT NULL,
            FOREIGN KEY (person_name) REFERENCES persons(name),
            FOREIGN KEY (event_name) REFERENCES events(name),
            UNIQUE(person_name, event_name)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Lookups by person are covered by the UNIQUE(person_name, event_name) index
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_registrations_event ON registrations(event_name)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
