//! Composition utilities for building the service with `SQLite` backends.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use eventreg_core::{EventRegistrationService, Repos};

use crate::repositories::{
    SqliteEventRepository, SqlitePersonRepository, SqliteRegistrationRepository,
};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqlitePersonRepository::new(pool.clone())),
            Arc::new(SqliteEventRepository::new(pool.clone())),
            Arc::new(SqliteRegistrationRepository::new(pool)),
        )
    }

    /// Build a complete `EventRegistrationService` from a pool.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let service = EventRegistrationService::new(repos);
    /// ```
    pub fn build_service(pool: SqlitePool) -> EventRegistrationService {
        EventRegistrationService::new(Self::build_repos(pool))
    }
}
