//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `person` - People who attend events
//! - `event` - Scheduled events (`Event`, `NewEvent`)
//! - `registration` - The join between one person and one event

mod event;
mod person;
mod registration;

pub use event::{Event, NewEvent};
pub use person::Person;
pub use registration::Registration;
