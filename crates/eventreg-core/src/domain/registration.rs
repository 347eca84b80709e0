//! Registration domain type.

use serde::{Deserialize, Serialize};

/// The join between exactly one person and exactly one event.
///
/// Carries the names of both sides rather than copies of the entities, so
/// callers that need the full person or event resolve them separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Storage identifier assigned by the repository.
    pub id: i64,
    /// Name of the registered person.
    pub person_name: String,
    /// Name of the event registered for.
    pub event_name: String,
}
