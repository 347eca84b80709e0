//! Registration DTO.

use serde::{Deserialize, Serialize};

use super::{EventDto, PersonDto};

/// A registration, embedding both the person and the event it links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDto {
    pub person: PersonDto,
    pub event: EventDto,
}
