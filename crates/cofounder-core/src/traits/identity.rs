//! Identity provider port

use async_trait::async_trait;

use crate::entities::Identity;

use super::RepoResult;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// URL that starts the OAuth sign-in and returns to `redirect_to`
    fn authorize_url(&self, redirect_to: &str) -> RepoResult<String>;

    /// Identity behind an access token; `Ok(None)` for an invalid or expired token
    async fn get_user(&self, access_token: &str) -> RepoResult<Option<Identity>>;

    /// Terminate the session behind `access_token`
    async fn sign_out(&self, access_token: &str) -> RepoResult<()>;
}
