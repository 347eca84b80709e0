//! Event repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Event, NewEvent};

/// Repository for event persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// List all events in creation order.
    async fn list(&self) -> Result<Vec<Event>, RepositoryError>;

    /// Get an event by name.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no event has that name.
    async fn get_by_name(&self, name: &str) -> Result<Event, RepositoryError>;

    /// Insert a new event.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the name is taken.
    async fn insert(&self, event: &NewEvent) -> Result<Event, RepositoryError>;
}
