//! Profile service
//!
//! Backs the edit-profile page of a signed-in user.

use cofounder_core::Identity;
use tracing::{info, instrument};

use crate::dto::{ProfileFormResponse, ProfileResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::{persistence, ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current user's profile as editable form state
    #[instrument(skip(self, identity), fields(profile_id = %identity.id))]
    pub async fn load(&self, identity: &Identity) -> ServiceResult<ProfileFormResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(identity.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", identity.id.to_string()))?;

        Ok(ProfileFormResponse::from(&profile))
    }

    /// Partial update of the current user's profile
    ///
    /// The request is expected to be validated already. Only an existing
    /// record is edited; a user without one has to finish onboarding first.
    #[instrument(skip(self, identity, request), fields(profile_id = %identity.id))]
    pub async fn update(
        &self,
        identity: &Identity,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        let repo = self.ctx.profile_repo();
        if repo.find_by_id(identity.id).await?.is_none() {
            return Err(ServiceError::not_found("Profile", identity.id.to_string()));
        }

        let changes = request.into_changes();
        let profile = repo
            .upsert(identity.id, &changes)
            .await
            .map_err(persistence)?;

        info!("Profile updated");
        Ok(ProfileResponse::from(&profile))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use super::*;
    use crate::services::testing::{
        context, identity, listed_profile, FakeIdentityProvider, InMemoryProfiles,
    };
    use cofounder_core::FounderType;

    #[tokio::test]
    async fn test_load_missing_profile_is_not_found() {
        let ada = identity("Ada", "Lovelace", "ada@example.com");
        let ctx = context(
            &Arc::new(InMemoryProfiles::default()),
            &Arc::new(FakeIdentityProvider::default()),
        );

        let err = ProfileService::new(&ctx).load(&ada).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_load_returns_form_state() {
        let ada = identity("Ada", "Lovelace", "ada@example.com");
        let mut stored = listed_profile("Ada", "Lovelace");
        stored.id = ada.id;
        stored.member_since = Some("March 2025".to_string());
        stored.response_rate = Some("95%".to_string());
        let ctx = context(
            &Arc::new(InMemoryProfiles::with([stored])),
            &Arc::new(FakeIdentityProvider::default()),
        );

        let response = ProfileService::new(&ctx).load(&ada).await.unwrap();
        assert_eq!(response.form.first_name, "Ada");
        assert_eq!(response.form.timezone, "");
        assert_eq!(response.member_since.as_deref(), Some("March 2025"));
        assert_eq!(response.stats.response_rate.as_deref(), Some("95%"));
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let ada = identity("Ada", "Lovelace", "ada@example.com");
        let mut stored = listed_profile("Ada", "Lovelace");
        stored.id = ada.id;
        stored.bio = Some("Original bio".to_string());
        let before = stored.updated_at;
        let profiles = Arc::new(InMemoryProfiles::with([stored]));
        let ctx = context(&profiles, &Arc::new(FakeIdentityProvider::default()));

        let request = UpdateProfileRequest {
            location: Some("Remote".to_string()),
            looking_for: Some(vec![FounderType::Hustler]),
            ..Default::default()
        };
        let response = ProfileService::new(&ctx).update(&ada, request).await.unwrap();

        assert_eq!(response.location.as_deref(), Some("Remote"));
        assert_eq!(response.bio.as_deref(), Some("Original bio"));
        assert_eq!(response.looking_for, vec![FounderType::Hustler]);
        assert!(response.onboarding_complete);
        assert!(response.updated_at >= before);
        assert_eq!(profiles.upsert_count(), 1);
    }

    #[tokio::test]
    async fn test_update_without_record_is_not_found() {
        let ada = identity("Ada", "Lovelace", "ada@example.com");
        let profiles = Arc::new(InMemoryProfiles::default());
        let ctx = context(&profiles, &Arc::new(FakeIdentityProvider::default()));

        let request = UpdateProfileRequest {
            bio: Some("Hello".to_string()),
            ..Default::default()
        };
        let err = ProfileService::new(&ctx)
            .update(&ada, request)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
        assert_eq!(profiles.upsert_count(), 0);
        assert_eq!(profiles.len(), 0);
    }

    #[tokio::test]
    async fn test_update_failure_is_persistence_error() {
        let ada = identity("Ada", "Lovelace", "ada@example.com");
        let mut stored = listed_profile("Ada", "Lovelace");
        stored.id = ada.id;
        let profiles = Arc::new(InMemoryProfiles::with([stored]));
        profiles.fail_writes.store(true, Ordering::SeqCst);
        let ctx = context(&profiles, &Arc::new(FakeIdentityProvider::default()));

        let err = ProfileService::new(&ctx)
            .update(&ada, UpdateProfileRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "PERSISTENCE_ERROR");
        assert_eq!(err.status_code(), 503);
    }
}
