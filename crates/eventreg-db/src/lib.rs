//! `SQLite` persistence for eventreg.
//!
//! Implements the repository ports from `eventreg-core` on top of an sqlx
//! pool. Uniqueness of person and event names and of each (person, event)
//! registration is enforced by the schema itself.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

pub use factory::CoreFactory;

pub use repositories::{
    SqliteEventRepository, SqlitePersonRepository, SqliteRegistrationRepository,
};

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
