//! In-memory fakes of the ports for service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use cofounder_core::traits::{IdentityProvider, ProfileRepository, RepoResult};
use cofounder_core::{DomainError, Identity, IdentityMetadata, Profile, ProfileChanges, UserId};

use super::context::ServiceContext;

#[derive(Default)]
pub struct InMemoryProfiles {
    profiles: Mutex<HashMap<UserId, Profile>>,
    upserts: AtomicUsize,
    pub fail_reads: AtomicBool,
    pub fail_list: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl InMemoryProfiles {
    pub fn with(profiles: impl IntoIterator<Item = Profile>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.profiles.lock().unwrap();
            for profile in profiles {
                map.insert(profile.id, profile);
            }
        }
        repo
    }

    pub fn upsert_count(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: UserId) -> Option<Profile> {
        self.profiles.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<Profile>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::ProfileFetch("read failed".to_string()));
        }
        Ok(self.get(id))
    }

    async fn list_completed_excluding(&self, id: UserId) -> RepoResult<Vec<Profile>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(DomainError::ProfileFetch("list failed".to_string()));
        }
        let mut profiles: Vec<Profile> = self
            .profiles
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.id != id && p.onboarding_complete)
            .cloned()
            .collect();
        profiles.sort_by_key(|p| p.created_at);
        Ok(profiles)
    }

    async fn upsert(&self, id: UserId, changes: &ProfileChanges) -> RepoResult<Profile> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("write failed".to_string()));
        }

        let now = Utc::now();
        let mut map = self.profiles.lock().unwrap();
        let profile = match map.get_mut(&id) {
            Some(existing) => {
                changes.apply_to(existing, now);
                existing.clone()
            }
            None => {
                let profile = Profile::from_changes(id, changes, now);
                map.insert(id, profile.clone());
                profile
            }
        };
        Ok(profile)
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}

/// Accepts `token-<uuid>` as a valid session for the identity registered under it
#[derive(Default)]
pub struct FakeIdentityProvider {
    sessions: Mutex<HashMap<String, Identity>>,
    pub fail_lookups: AtomicBool,
    pub fail_sign_out: AtomicBool,
    pub signed_out: Mutex<Vec<String>>,
}

impl FakeIdentityProvider {
    pub fn with_session(identity: &Identity) -> (Self, String) {
        let provider = Self::default();
        let token = provider.add_session(identity);
        (provider, token)
    }

    pub fn add_session(&self, identity: &Identity) -> String {
        let token = format!("token-{}", identity.id);
        self.sessions
            .lock()
            .unwrap()
            .insert(token.clone(), identity.clone());
        token
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    fn authorize_url(&self, redirect_to: &str) -> RepoResult<String> {
        Ok(format!(
            "https://auth.test/authorize?provider=linkedin_oidc&redirect_to={redirect_to}"
        ))
    }

    async fn get_user(&self, access_token: &str) -> RepoResult<Option<Identity>> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(DomainError::IdentityProvider("lookup failed".to_string()));
        }
        Ok(self.sessions.lock().unwrap().get(access_token).cloned())
    }

    async fn sign_out(&self, access_token: &str) -> RepoResult<()> {
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(DomainError::IdentityProvider("logout failed".to_string()));
        }
        self.sessions.lock().unwrap().remove(access_token);
        self.signed_out
            .lock()
            .unwrap()
            .push(access_token.to_string());
        Ok(())
    }
}

pub fn context(
    profiles: &Arc<InMemoryProfiles>,
    provider: &Arc<FakeIdentityProvider>,
) -> ServiceContext {
    ServiceContext::new(profiles.clone(), provider.clone())
}

pub fn identity(first: &str, last: &str, email: &str) -> Identity {
    Identity {
        id: UserId::generate(),
        email: Some(email.to_string()),
        metadata: IdentityMetadata {
            given_name: Some(first.to_string()),
            family_name: Some(last.to_string()),
            email: Some(email.to_string()),
            picture: Some(format!("https://img.test/{first}.png")),
        },
    }
}

/// A listed profile with the fields the directory shows
pub fn listed_profile(first: &str, last: &str) -> Profile {
    let mut profile = Profile::new(UserId::generate());
    profile.first_name = Some(first.to_string());
    profile.last_name = Some(last.to_string());
    profile.email = Some(format!("{}@example.com", first.to_lowercase()));
    profile.onboarding_complete = true;
    profile
}
