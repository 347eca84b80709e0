//! Event registration service - owns persons, events and registrations.
//!
//! This is the single authority over persistent state. It validates input,
//! turns repository misses into `Option`, and guards the invariants the
//! storage layer cannot express on its own (start before end, one
//! registration per person and event).

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};

use crate::domain::{Event, NewEvent, Person, Registration};
use crate::ports::{
    CoreError, EventRepository, PersonRepository, RegistrationRepository, Repos, RepositoryError,
};

/// Service for person, event and registration operations.
pub struct EventRegistrationService {
    persons: Arc<dyn PersonRepository>,
    events: Arc<dyn EventRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

/// Turn a repository `NotFound` into `None`, keeping every other error.
fn optional<T>(result: Result<T, RepositoryError>) -> Result<Option<T>, CoreError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(RepositoryError::NotFound(_)) => Ok(None),
        Err(e) => Err(CoreError::from(e)),
    }
}

impl EventRegistrationService {
    /// Create a new service over the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            persons: repos.persons,
            events: repos.events,
            registrations: repos.registrations,
        }
    }

    /// List all persons in creation order.
    pub async fn get_all_persons(&self) -> Result<Vec<Person>, CoreError> {
        self.persons.list().await.map_err(CoreError::from)
    }

    /// Create a person. The name is trimmed before it is stored.
    pub async fn create_person(&self, name: &str) -> Result<Person, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Rejected person with empty name");
            return Err(CoreError::Validation(
                "Person name cannot be empty!".to_string(),
            ));
        }

        let person = self.persons.insert(name).await?;
        debug!(person = %person.name, "Created person");
        Ok(person)
    }

    /// Create an event. The name is trimmed before it is stored.
    ///
    /// All validation problems are reported together in one error.
    pub async fn create_event(
        &self,
        name: &str,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Event, CoreError> {
        let new_event = NewEvent::new(name.trim(), date, start_time, end_time);
        let problems = new_event.problems();
        if !problems.is_empty() {
            let message = problems.join(" ");
            warn!(event = %new_event.name, %message, "Rejected event");
            return Err(CoreError::Validation(message));
        }

        let event = self.events.insert(&new_event).await?;
        debug!(
            event = %event.name,
            date = %event.date,
            start = %event.start_time,
            end = %event.end_time,
            "Created event"
        );
        Ok(event)
    }

    /// List all events in creation order.
    pub async fn get_all_events(&self) -> Result<Vec<Event>, CoreError> {
        self.events.list().await.map_err(CoreError::from)
    }

    /// Get an event by name, trimmed the same way as on creation.
    pub async fn get_event(&self, name: &str) -> Result<Option<Event>, CoreError> {
        optional(self.events.get_by_name(name.trim()).await)
    }

    /// Get a person by name, trimmed the same way as on creation.
    pub async fn get_person(&self, name: &str) -> Result<Option<Person>, CoreError> {
        optional(self.persons.get_by_name(name.trim()).await)
    }

    /// Register a person for an event.
    ///
    /// A second registration of the same pair fails with
    /// `RepositoryError::AlreadyExists`.
    pub async fn register(&self, person: &Person, event: &Event) -> Result<Registration, CoreError> {
        if self.get_registration(person, event).await?.is_some() {
            warn!(person = %person.name, event = %event.name, "Duplicate registration");
            return Err(RepositoryError::AlreadyExists(format!(
                "{} is already registered for {}",
                person.name, event.name
            ))
            .into());
        }

        let registration = self
            .registrations
            .insert(&person.name, &event.name)
            .await?;
        debug!(person = %person.name, event = %event.name, "Registered person for event");
        Ok(registration)
    }

    /// Get the registration linking `person` and `event`, if any.
    pub async fn get_registration(
        &self,
        person: &Person,
        event: &Event,
    ) -> Result<Option<Registration>, CoreError> {
        optional(self.registrations.find(&person.name, &event.name).await)
    }

    /// Events the person is registered for, in registration order.
    pub async fn get_events_attended_by_person(
        &self,
        person: &Person,
    ) -> Result<Vec<Event>, CoreError> {
        self.registrations
            .events_for_person(&person.name)
            .await
            .map_err(CoreError::from)
    }

    /// Persons registered for the event, in registration order.
    pub async fn get_persons_attending_event(
        &self,
        event: &Event,
    ) -> Result<Vec<Person>, CoreError> {
        self.registrations
            .persons_for_event(&event.name)
            .await
            .map_err(CoreError::from)
    }
}
