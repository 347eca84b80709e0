//! Registration repository trait definition.
//!
//! Registrations reference persons and events by name. Implementations are
//! expected to enforce that both sides exist.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Event, Person, Registration};

/// Repository for the person/event join.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Record that `person_name` attends `event_name`.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the pair is already
    /// registered and `Err(RepositoryError::Constraint)` if either side does
    /// not exist.
    async fn insert(
        &self,
        person_name: &str,
        event_name: &str,
    ) -> Result<Registration, RepositoryError>;

    /// Find the registration for a (person, event) pair.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the pair is not registered.
    async fn find(
        &self,
        person_name: &str,
        event_name: &str,
    ) -> Result<Registration, RepositoryError>;

    /// Events attended by a person, in registration order.
    ///
    /// An unknown person attends nothing, so this returns an empty list
    /// rather than `NotFound`.
    async fn events_for_person(&self, person_name: &str) -> Result<Vec<Event>, RepositoryError>;

    /// Persons attending an event, in registration order.
    async fn persons_for_event(&self, event_name: &str) -> Result<Vec<Person>, RepositoryError>;
}
