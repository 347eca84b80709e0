//! Event DTO.

use chrono::{NaiveDate, NaiveTime};
use eventreg_core::Event;
use serde::{Deserialize, Serialize};

/// Event as seen by API clients.
///
/// Serializes as `{"name", "date", "startTime", "endTime"}` with the date in
/// `YYYY-MM-DD` and times in `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl From<&Event> for EventDto {
    fn from(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
        }
    }
}
