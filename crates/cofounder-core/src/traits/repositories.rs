//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Profile, ProfileChanges};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<Profile>>;

    /// All onboarded profiles except `id`, in store order
    async fn list_completed_excluding(&self, id: UserId) -> RepoResult<Vec<Profile>>;

    /// Insert or partially update the profile, stamping `updated_at`
    ///
    /// `member_since` and `created_at` are only written when the row is new.
    async fn upsert(&self, id: UserId, changes: &ProfileChanges) -> RepoResult<Profile>;

    /// Check store connectivity
    async fn health_check(&self) -> RepoResult<()>;
}
