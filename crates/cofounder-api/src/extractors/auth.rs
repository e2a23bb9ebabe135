//! Authentication extractors
//!
//! Read the bearer access token from the Authorization header and resolve it
//! to an identity through the session service.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use cofounder_core::Identity;
use cofounder_service::SessionService;

use crate::response::ApiError;
use crate::state::AppState;

/// Raw bearer token, if the request carries one
#[derive(Debug, Clone, Default)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string());
        Ok(Self(token))
    }
}

/// Signed-in caller; rejects the request when there is no valid session
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub identity: Identity,
    /// Token the identity was resolved from, needed for sign-out
    pub access_token: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let SessionToken(token) = SessionToken::from_request_parts(parts, state).await?;
        let access_token = token.ok_or(ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let identity = SessionService::new(app_state.service_context())
            .current_identity(Some(&access_token))
            .await
            .ok_or(ApiError::InvalidSession)?;

        Ok(Self {
            identity,
            access_token,
        })
    }
}

/// Optional signed-in caller
///
/// A token that is absent or does not resolve reads as signed out; this
/// extractor never rejects.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref().map(|user| &user.identity)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(AuthUser::from_request_parts(parts, state).await.ok()))
    }
}
