//! Axum extractors for request handling
//!
//! Custom extractors for sessions and JSON bodies.

mod auth;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser, SessionToken};
pub use validated::{JsonBody, ValidatedJson};
