//! Event handlers.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::convert::event_to_dto;
use crate::dto::EventDto;
use crate::error::HttpError;
use crate::state::AppState;

/// Query parameters for event creation.
///
/// Fields are optional so that a missing parameter produces the same JSON
/// error body as a malformed one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventParams {
    /// ISO date, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// `HH:mm`.
    pub start_time: Option<String>,
    /// `HH:mm`.
    pub end_time: Option<String>,
}

fn required<'a>(value: Option<&'a str>, param: &str) -> Result<&'a str, HttpError> {
    value.ok_or_else(|| HttpError::BadRequest(format!("Missing required parameter '{param}'")))
}

/// Parse an ISO calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, HttpError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        HttpError::BadRequest(format!("Invalid date '{value}', expected YYYY-MM-DD"))
    })
}

/// Parse a time of day written as `HH:mm`.
pub fn parse_time(value: &str) -> Result<NaiveTime, HttpError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| HttpError::BadRequest(format!("Invalid time '{value}', expected HH:mm")))
}

/// Create an event named by the path segment.
///
/// Date and times are parsed before the service is involved; a malformed
/// value never reaches it.
pub async fn create(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<CreateEventParams>, QueryRejection>,
) -> Result<Json<EventDto>, HttpError> {
    let Path(name) = path?;
    let Query(params) = query?;
    let date = parse_date(required(params.date.as_deref(), "date")?)?;
    let start_time = parse_time(required(params.start_time.as_deref(), "startTime")?)?;
    let end_time = parse_time(required(params.end_time.as_deref(), "endTime")?)?;

    let event = state
        .service
        .create_event(&name, date, start_time, end_time)
        .await?;
    Ok(Json(event_to_dto(Some(&event))?))
}

/// List all events.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<EventDto>>, HttpError> {
    let events = state.service.get_all_events().await?;
    let dtos = events
        .iter()
        .map(|event| event_to_dto(Some(event)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(dtos))
}

/// Get a single event by name.
pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<EventDto>, HttpError> {
    let Path(name) = path?;
    let event = state.service.get_event(&name).await?;
    Ok(Json(event_to_dto(event.as_ref())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_accepts_hours_and_minutes() {
        assert_eq!(
            parse_time("18:30").unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_time_rejects_other_shapes() {
        for bad in ["6pm", "25:00", "18", ""] {
            assert!(
                matches!(parse_time(bad), Err(HttpError::BadRequest(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_date_is_iso_only() {
        assert_eq!(
            parse_date("2024-05-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert!(parse_date("01/05/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }
}
