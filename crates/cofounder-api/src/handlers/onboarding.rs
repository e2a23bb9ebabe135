//! Onboarding handlers
//!
//! Wizard snapshot, option catalogs and submission.

use axum::{extract::State, Json};
use cofounder_service::{
    OnboardingService, OptionsResponse, SubmissionResponse, SubmitOnboardingRequest,
    WizardSnapshot,
};

use crate::extractors::{JsonBody, OptionalAuthUser};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Initial wizard state, pre-filled for signed-in users
///
/// GET /onboarding
pub async fn get_wizard(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
) -> Json<WizardSnapshot> {
    let service = OnboardingService::new(state.service_context());
    Json(service.load(auth.identity()).await)
}

/// Option catalogs
///
/// GET /onboarding/options
pub async fn get_options() -> Json<OptionsResponse> {
    Json(OnboardingService::options())
}

/// Submit a completed wizard
///
/// POST /onboarding/submit
pub async fn submit(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    JsonBody(request): JsonBody<SubmitOnboardingRequest>,
) -> ApiResult<Created<Json<SubmissionResponse>>> {
    let service = OnboardingService::new(state.service_context());
    let response = service.submit(auth.identity(), request).await?;
    Ok(Created(Json(response)))
}
