//! Registration handlers.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::convert::{events_for_person, person_from_dto, registration_to_dto};
use crate::dto::{EventDto, PersonDto, RegistrationDto};
use crate::error::HttpError;
use crate::state::AppState;

/// Query parameters for a registration, both given by name.
#[derive(Debug, Deserialize)]
pub struct RegisterParams {
    pub person: Option<String>,
    pub event: Option<String>,
}

/// Register a person for an event.
///
/// Both sides are resolved through the service's get-by-name; either one
/// missing is a 404.
pub async fn register(
    State(state): State<AppState>,
    query: Result<Query<RegisterParams>, QueryRejection>,
) -> Result<Json<RegistrationDto>, HttpError> {
    let Query(params) = query?;
    let person_name = params
        .person
        .ok_or_else(|| HttpError::BadRequest("Missing required parameter 'person'".into()))?;
    let event_name = params
        .event
        .ok_or_else(|| HttpError::BadRequest("Missing required parameter 'event'".into()))?;

    let person = state
        .service
        .get_person(&person_name)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("There is no such Person: {person_name}")))?;
    let event = state
        .service
        .get_event(&event_name)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("There is no such Event: {event_name}")))?;

    let registration = state.service.register(&person, &event).await?;
    Ok(Json(
        registration_to_dto(&state.service, &registration, Some(&person), Some(&event)).await?,
    ))
}

/// Events attended by the person named in the path.
///
/// An unknown person attends nothing, so this answers with an empty list
/// rather than 404.
pub async fn events_of_person(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<EventDto>>, HttpError> {
    let Path(name) = path?;
    let dto = PersonDto::named(name);
    let Some(person) = person_from_dto(&state.service, &dto).await? else {
        tracing::debug!(person = %dto.name, "No such person, returning no events");
        return Ok(Json(Vec::new()));
    };

    Ok(Json(events_for_person(&state.service, &person).await?))
}
