//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_event_repository;
mod sqlite_person_repository;
mod sqlite_registration_repository;

pub use sqlite_event_repository::SqliteEventRepository;
pub use sqlite_person_repository::SqlitePersonRepository;
pub use sqlite_registration_repository::SqliteRegistrationRepository;
