//! Port definitions (trait abstractions) for persistence.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Lookups by name return `Err(RepositoryError::NotFound)` when absent;
//!   services translate that into `Option`
//! - Listing operations return entities in creation order

pub mod event_repository;
pub mod person_repository;
pub mod registration_repository;

use std::sync::Arc;
use thiserror::Error;

pub use event_repository::EventRepository;
pub use person_repository::PersonRepository;
pub use registration_repository::RegistrationRepository;

/// Container for all repository trait objects.
///
/// Lets adapters wire repositories without coupling to concrete
/// implementations. It lives in `eventreg-core` so that the service can
/// accept it without depending on `eventreg-db`.
#[derive(Clone)]
pub struct Repos {
    /// Person repository.
    pub persons: Arc<dyn PersonRepository>,
    /// Event repository.
    pub events: Arc<dyn EventRepository>,
    /// Registration repository (the person/event join).
    pub registrations: Arc<dyn RegistrationRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        persons: Arc<dyn PersonRepository>,
        events: Arc<dyn EventRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            persons,
            events,
            registrations,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx
/// errors) and gives services a clean interface for storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., foreign key).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Errors returned by core services.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
