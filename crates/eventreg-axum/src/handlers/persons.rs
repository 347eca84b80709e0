//! Person handlers.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};

use crate::convert::person_to_dto;
use crate::dto::PersonDto;
use crate::error::HttpError;
use crate::state::AppState;

/// List all persons with the events each attends.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PersonDto>>, HttpError> {
    let persons = state.service.get_all_persons().await?;

    let mut dtos = Vec::with_capacity(persons.len());
    for person in &persons {
        dtos.push(person_to_dto(&state.service, Some(person)).await?);
    }
    Ok(Json(dtos))
}

/// Create a person named by the path segment.
pub async fn create(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<PersonDto>, HttpError> {
    let Path(name) = path?;
    let person = state.service.create_person(&name).await?;
    Ok(Json(person_to_dto(&state.service, Some(&person)).await?))
}
