//! CLI bootstrap - the composition root.
//!
//! Opens the database and builds the `EventRegistrationService` that
//! command handlers use. `serve` does not go through here; the Axum adapter
//! has its own bootstrap.

use std::path::PathBuf;

use anyhow::Result;
use eventreg_core::{EventRegistrationService, database_path};
use eventreg_db::{CoreFactory, setup_database};

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The event registration service.
    pub service: EventRegistrationService,
    /// The database file in use.
    pub database_path: PathBuf,
}

impl CliContext {
    /// Access the service.
    pub fn service(&self) -> &EventRegistrationService {
        &self.service
    }
}

/// Bootstrap the CLI application.
///
/// Uses `database` when given, otherwise the default path in the data root.
pub async fn bootstrap(database: Option<PathBuf>) -> Result<CliContext> {
    let database_path = match database {
        Some(path) => path,
        None => database_path()?,
    };
    tracing::debug!(database_path = %database_path.display(), "CLI bootstrap");

    let pool = setup_database(&database_path).await?;
    Ok(CliContext {
        service: CoreFactory::build_service(pool),
        database_path,
    })
}
