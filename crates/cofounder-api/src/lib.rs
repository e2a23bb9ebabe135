//! # cofounder-api
//!
//! REST API server built with Axum framework.
//!
//! Every page of the co-founder matching app talks to one endpoint group:
//! sign-in and callback routing, the onboarding wizard, the directory and
//! the profile editor.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
