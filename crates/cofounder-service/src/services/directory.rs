//! Directory service
//!
//! Loads the candidate list for a signed-in, onboarded user and applies the
//! search filters.

use cofounder_core::directory::visible_profiles;
use cofounder_core::{resolve_route, DirectoryFilter, EntryPoint, Identity, Profile, Route};
use tracing::{debug, instrument, warn};

use crate::dto::{DirectoryPage, DirectoryResponse, ProfileCard, ProfileSummary};

use super::context::ServiceContext;

/// Directory service
pub struct DirectoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DirectoryService<'a> {
    /// Create a new DirectoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Directory page, or a redirect to login/onboarding
    #[instrument(skip(self, identity, filter))]
    pub async fn load(
        &self,
        identity: Option<&Identity>,
        filter: DirectoryFilter,
    ) -> DirectoryResponse {
        let own = match identity {
            Some(identity) => self.own_profile(identity).await,
            None => None,
        };

        let current = match (resolve_route(EntryPoint::Directory, identity, own.as_ref()), own) {
            (Route::Directory, Some(profile)) => profile,
            (route, _) => {
                debug!(route = ?route, "Directory not available, redirecting");
                return DirectoryResponse::Redirect {
                    redirect: route.into(),
                };
            }
        };

        let candidates = self.candidates(&current).await;
        let matches = filter.apply(&candidates);
        let is_empty = matches.is_empty();

        DirectoryResponse::Loaded(DirectoryPage {
            current_user: ProfileSummary::from(&current),
            profiles: matches.into_iter().map(ProfileCard::from).collect(),
            total: candidates.len(),
            is_empty,
            reset_filters: is_empty.then(DirectoryFilter::cleared),
            filters: filter,
        })
    }

    async fn own_profile(&self, identity: &Identity) -> Option<Profile> {
        match self.ctx.profile_repo().find_by_id(identity.id).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(profile_id = %identity.id, error = %e, "Own profile lookup failed");
                None
            }
        }
    }

    /// Everyone else who finished onboarding; a failed read yields nobody
    async fn candidates(&self, current: &Profile) -> Vec<Profile> {
        match self
            .ctx
            .profile_repo()
            .list_completed_excluding(current.id)
            .await
        {
            Ok(profiles) => visible_profiles(profiles, current.id),
            Err(e) => {
                warn!(profile_id = %current.id, error = %e, "Directory listing failed");
                Vec::new()
            }
        }
    }
}
