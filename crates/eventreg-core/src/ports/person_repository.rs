//! Person repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::Person;

/// Repository for person persistence.
///
/// Persons are identified by name; the repository must guarantee that no
/// two persons share one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// List all persons in creation order.
    async fn list(&self) -> Result<Vec<Person>, RepositoryError>;

    /// Get a person by name.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no person has that name.
    async fn get_by_name(&self, name: &str) -> Result<Person, RepositoryError>;

    /// Insert a new person.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the name is taken.
    async fn insert(&self, name: &str) -> Result<Person, RepositoryError>;
}
