//! Axum HTTP adapter for the event registration backend.
//!
//! Handlers extract path and query parameters, call the
//! `EventRegistrationService`, and convert the resulting entities into DTOs
//! through the [`convert`] layer before serializing them as JSON.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod convert;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
