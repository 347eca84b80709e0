//! Command-line interface for the event registration backend.
//!
//! `eventreg serve` runs the HTTP API; the remaining commands drive the same
//! `EventRegistrationService` directly against the local database.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap};
pub use commands::Commands;
pub use parser::Cli;
