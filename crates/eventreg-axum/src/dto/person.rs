//! Person DTO.

use serde::{Deserialize, Serialize};

use super::EventDto;

/// Person as seen by API clients, with the events they attend.
///
/// `events` is a projection computed at conversion time; it is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDto {
    pub name: String,
    #[serde(default)]
    pub events: Vec<EventDto>,
}

impl PersonDto {
    /// A DTO carrying only a name, as bound from a path or query parameter.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
        }
    }
}
