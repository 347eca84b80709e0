//! Person domain type.

use serde::{Deserialize, Serialize};

/// A person who can register for events.
///
/// The name is the identity: it is unique across all persons and never
/// changes once the person has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Storage identifier assigned by the repository.
    pub id: i64,
    /// Unique, non-empty display name.
    pub name: String,
}

impl Person {
    /// Create a person value.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
