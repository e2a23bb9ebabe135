//! Directory handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use cofounder_service::{DirectoryQuery, DirectoryResponse, DirectoryService};

use crate::extractors::OptionalAuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Filtered co-founder directory, or a redirect when it is not available yet
///
/// GET /directory?q=&founder_type=&location=&sort=
pub async fn get_directory(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    query: Result<Query<DirectoryQuery>, QueryRejection>,
) -> ApiResult<Json<DirectoryResponse>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;
    let filter = query.into_filter()?;

    let service = DirectoryService::new(state.service_context());
    Ok(Json(service.load(auth.identity(), filter).await))
}
