//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the JSON shapes clients see. They decouple the domain
//! entities from their external representation; conversion lives in
//! [`crate::convert`].

pub mod event;
pub mod person;
pub mod registration;

pub use event::EventDto;
pub use person::PersonDto;
pub use registration::RegistrationDto;
