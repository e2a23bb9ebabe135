//! Session service
//!
//! Resolves the caller's identity from a bearer token, starts sign-in and
//! ends sessions.

use cofounder_core::Identity;
use tracing::{info, instrument, warn};

use crate::dto::AuthorizeResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Session service
pub struct SessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionService<'a> {
    /// Create a new SessionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Identity behind `access_token`, or `None`
    ///
    /// Never fails: provider errors are logged and read as "signed out".
    #[instrument(skip(self, access_token))]
    pub async fn current_identity(&self, access_token: Option<&str>) -> Option<Identity> {
        let token = access_token?;
        match self.ctx.identity_provider().get_user(token).await {
            Ok(identity) => identity,
            Err(e) => {
                warn!(error = %e, "Identity lookup failed, treating session as signed out");
                None
            }
        }
    }

    /// Sign-in initiation URL; the provider sends the browser back to `callback_url`
    #[instrument(skip(self))]
    pub fn authorize(&self, callback_url: String) -> ServiceResult<AuthorizeResponse> {
        let url = self.ctx.identity_provider().authorize_url(&callback_url)?;
        Ok(AuthorizeResponse { url, callback_url })
    }

    /// End the session; provider errors are returned to the caller
    #[instrument(skip(self, access_token))]
    pub async fn sign_out(&self, access_token: &str) -> ServiceResult<()> {
        self.ctx.identity_provider().sign_out(access_token).await?;
        info!("Session signed out");
        Ok(())
    }
}
