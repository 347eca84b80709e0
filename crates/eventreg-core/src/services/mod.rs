//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain rules. They don't know
//! about concrete implementations; adapters inject repositories at their
//! composition root.

mod registration_service;

pub use registration_service::EventRegistrationService;
