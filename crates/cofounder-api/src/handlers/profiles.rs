//! Profile handlers
//!
//! Endpoints behind the edit-profile page.

use axum::{extract::State, Json};
use cofounder_service::{ProfileFormResponse, ProfileResponse, ProfileService, UpdateProfileRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Current user's profile as form state
///
/// GET /profiles/@me
pub async fn get_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileFormResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.load(&auth.identity).await?;
    Ok(Json(response))
}

/// Update current user's profile
///
/// PATCH /profiles/@me
pub async fn update_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.update(&auth.identity, request).await?;
    Ok(Json(response))
}
