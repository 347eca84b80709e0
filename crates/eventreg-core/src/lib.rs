//! Core of the event registration backend.
//!
//! Holds the domain entities (`Person`, `Event`, `Registration`), the
//! repository ports that persistence adapters implement, and the
//! `EventRegistrationService` that owns every business rule. Adapters
//! (HTTP, CLI) depend on this crate; it depends on none of them.

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Event, NewEvent, Person, Registration};
pub use paths::{PathError, ResolvedPaths, data_root, database_path};
pub use ports::{
    CoreError, EventRepository, PersonRepository, RegistrationRepository, Repos, RepositoryError,
};
pub use services::EventRegistrationService;
