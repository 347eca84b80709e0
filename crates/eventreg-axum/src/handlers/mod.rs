//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for one resource. Handlers are thin:
//! extract parameters, call the service, convert through [`crate::convert`].

pub mod events;
pub mod persons;
pub mod registrations;
