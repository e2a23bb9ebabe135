//! OAuth callback handling
//!
//! Runs once after the provider redirects back: decides whether the new
//! session goes to onboarding, the directory, or back to login.

use cofounder_core::{resolve_route, EntryPoint, Profile, UserId};
use tracing::{info, instrument, warn};

use crate::dto::RouteResponse;

use super::context::ServiceContext;
use super::session::SessionService;

/// Auth callback service
pub struct AuthCallbackService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthCallbackService<'a> {
    /// Create a new AuthCallbackService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Route for the session behind `access_token`
    ///
    /// Always yields a route; a missing session becomes an error route
    /// pointing back to login.
    #[instrument(skip(self, access_token))]
    pub async fn handle(&self, access_token: Option<&str>) -> RouteResponse {
        let identity = SessionService::new(self.ctx)
            .current_identity(access_token)
            .await;

        let profile = match &identity {
            Some(identity) => self.find_profile(identity.id).await,
            None => None,
        };

        let route = resolve_route(EntryPoint::AuthCallback, identity.as_ref(), profile.as_ref());
        info!(
            user_id = ?identity.as_ref().map(|i| i.id),
            route = ?route,
            "Auth callback resolved"
        );
        route.into()
    }

    async fn find_profile(&self, id: UserId) -> Option<Profile> {
        match self.ctx.profile_repo().find_by_id(id).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(profile_id = %id, error = %e, "Profile lookup failed, routing to onboarding");
                None
            }
        }
    }
}
