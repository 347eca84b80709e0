//! Event domain types.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A persisted event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Storage identifier assigned by the repository.
    pub id: i64,
    /// Unique, non-empty event name.
    pub name: String,
    /// Calendar day the event takes place on.
    pub date: NaiveDate,
    /// Time of day the event starts.
    pub start_time: NaiveTime,
    /// Time of day the event ends.
    pub end_time: NaiveTime,
}

/// An event that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl NewEvent {
    /// Create a new event description.
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            date,
            start_time,
            end_time,
        }
    }

    /// Collect every validation problem with this event.
    ///
    /// An empty vector means the event is acceptable.
    pub fn problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("Event name cannot be empty!");
        }
        if self.end_time <= self.start_time {
            problems.push("Event end time must be after event start time!");
        }
        problems
    }
}
