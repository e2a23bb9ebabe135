//! Service context - dependency container for services
//!
//! Holds the profile store and identity provider every use case works against.

use std::sync::Arc;

use cofounder_core::traits::{IdentityProvider, ProfileRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Built once at startup and shared (cheaply cloned) across requests. It
/// provides access to:
/// - The profile repository
/// - The identity provider (session introspection, sign-in, sign-out)
#[derive(Clone)]
pub struct ServiceContext {
    profile_repo: Arc<dyn ProfileRepository>,
    identity_provider: Arc<dyn IdentityProvider>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        identity_provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            profile_repo,
            identity_provider,
        }
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the identity provider
    pub fn identity_provider(&self) -> &dyn IdentityProvider {
        self.identity_provider.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("profile_repo", &"ProfileRepository")
            .field("identity_provider", &"IdentityProvider")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    identity_provider: Option<Arc<dyn IdentityProvider>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn identity_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity_provider = Some(provider);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns an error if a dependency was not provided
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.identity_provider
                .ok_or_else(|| ServiceError::validation("identity_provider is required"))?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{FakeIdentityProvider, InMemoryProfiles};

    #[test]
    fn test_builder_requires_dependencies() {
        let err = ServiceContextBuilder::new().build().unwrap_err();
        assert!(err.to_string().contains("profile_repo is required"));

        let err = ServiceContextBuilder::new()
            .profile_repo(Arc::new(InMemoryProfiles::default()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("identity_provider is required"));
    }

    #[test]
    fn test_builder_builds() {
        let ctx = ServiceContextBuilder::new()
            .profile_repo(Arc::new(InMemoryProfiles::default()))
            .identity_provider(Arc::new(FakeIdentityProvider::default()))
            .build();
        assert!(ctx.is_ok());
    }
}
