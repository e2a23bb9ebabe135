//! Authentication handlers
//!
//! Sign-in initiation, the OAuth callback decision and sign-out.

use axum::{extract::State, Json};
use cofounder_core::routing::CALLBACK_PATH;
use cofounder_service::{AuthCallbackService, AuthorizeResponse, RouteResponse, SessionService};

use crate::extractors::{AuthUser, SessionToken};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Provider sign-in URL
///
/// GET /auth/authorize
pub async fn authorize(State(state): State<AppState>) -> ApiResult<Json<AuthorizeResponse>> {
    let callback_url = state.config().auth.callback_url(CALLBACK_PATH);
    let service = SessionService::new(state.service_context());
    let response = service.authorize(callback_url)?;
    Ok(Json(response))
}

/// Decide where a freshly signed-in user goes
///
/// POST /auth/callback
pub async fn callback(State(state): State<AppState>, token: SessionToken) -> Json<RouteResponse> {
    let service = AuthCallbackService::new(state.service_context());
    Json(service.handle(token.as_deref()).await)
}

/// End the current session
///
/// POST /auth/logout
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> ApiResult<NoContent> {
    let service = SessionService::new(state.service_context());
    service.sign_out(&auth.access_token).await?;
    Ok(NoContent)
}
