//! Conversion between domain entities and DTOs.
//!
//! Every entity-to-DTO conversion takes an `Option` and fails with
//! `HttpError::NotFound` when the entity is absent, so a missing entity can
//! never turn into an empty or default DTO.

use eventreg_core::{Event, EventRegistrationService, Person, Registration};

use crate::dto::{EventDto, PersonDto, RegistrationDto};
use crate::error::HttpError;

/// Convert an event, failing if it is absent.
pub fn event_to_dto(event: Option<&Event>) -> Result<EventDto, HttpError> {
    event
        .map(EventDto::from)
        .ok_or_else(|| HttpError::NotFound("There is no such Event!".to_string()))
}

/// Convert a person, failing if it is absent.
///
/// The attended events are fetched from the service on every call.
pub async fn person_to_dto(
    service: &EventRegistrationService,
    person: Option<&Person>,
) -> Result<PersonDto, HttpError> {
    let person =
        person.ok_or_else(|| HttpError::NotFound("There is no such Person!".to_string()))?;

    Ok(PersonDto {
        name: person.name.clone(),
        events: events_for_person(service, person).await?,
    })
}

/// Convert a registration together with the person and event it links.
///
/// Fails with `NotFound` if either side is absent. The registration must
/// reference the supplied person and event.
pub async fn registration_to_dto(
    service: &EventRegistrationService,
    registration: &Registration,
    person: Option<&Person>,
    event: Option<&Event>,
) -> Result<RegistrationDto, HttpError> {
    let event = event_to_dto(event)?;
    let person = person_to_dto(service, person).await?;

    debug_assert!(
        registration.person_name == person.name && registration.event_name == event.name,
        "registration {} links '{}' to '{}'",
        registration.id,
        registration.person_name,
        registration.event_name
    );

    Ok(RegistrationDto { person, event })
}

/// Resolve a person DTO back to the stored person by name.
pub async fn person_from_dto(
    service: &EventRegistrationService,
    dto: &PersonDto,
) -> Result<Option<Person>, HttpError> {
    Ok(service.get_person(&dto.name).await?)
}

/// The events a person attends, converted in the service's order.
pub async fn events_for_person(
    service: &EventRegistrationService,
    person: &Person,
) -> Result<Vec<EventDto>, HttpError> {
    service
        .get_events_attended_by_person(person)
        .await?
        .iter()
        .map(|event| event_to_dto(Some(event)))
        .collect()
}
