//! Command handlers.
//!
//! Each handler receives the composed context (or its own config for
//! `serve`) and delegates to the service.

pub mod add;
pub mod list;
pub mod paths;
pub mod register;
pub mod serve;
