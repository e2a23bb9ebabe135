//! Route definitions
//!
//! All API routes organized by page and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, directory, health, onboarding, profiles};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(onboarding_routes())
        .merge(directory_routes())
        .merge(profile_routes())
}

/// Sign-in, callback and sign-out
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/authorize", get(auth::authorize))
        .route("/auth/callback", post(auth::callback))
        .route("/auth/logout", post(auth::logout))
}

/// Onboarding wizard
fn onboarding_routes() -> Router<AppState> {
    Router::new()
        .route("/onboarding", get(onboarding::get_wizard))
        .route("/onboarding/options", get(onboarding::get_options))
        .route("/onboarding/submit", post(onboarding::submit))
}

/// Co-founder directory
fn directory_routes() -> Router<AppState> {
    Router::new().route("/directory", get(directory::get_directory))
}

/// Profile editor
fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/profiles/@me",
        get(profiles::get_my_profile).patch(profiles::update_my_profile),
    )
}
