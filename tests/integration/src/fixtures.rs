//! Test fixtures and data generators
//!
//! Provides reusable sessions and payloads for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use cofounder_common::{AppConfig, JwtService};
use cofounder_core::{Identity, IdentityMetadata, UserId};
use serde::Deserialize;
use serde_json::{json, Value};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A signed-in test user with a locally minted access token
#[derive(Debug, Clone)]
pub struct TestSession {
    pub identity: Identity,
    pub access_token: String,
}

impl TestSession {
    /// Fresh identity, as if the provider had just completed LinkedIn sign-in
    pub fn unique(config: &AppConfig) -> Result<Self> {
        let suffix = unique_suffix();
        let email = format!("founder{suffix}-{}@example.com", std::process::id());
        let identity = Identity {
            id: UserId::generate(),
            email: Some(email.clone()),
            metadata: IdentityMetadata {
                given_name: Some(format!("Founder{suffix}")),
                family_name: Some("Tester".to_string()),
                email: Some(email),
                picture: None,
            },
        };

        let access_token = JwtService::new(&config.auth.jwt_secret)
            .issue_access_token(&identity, 3600)
            .map_err(|e| anyhow::anyhow!("Failed to mint token: {}", e))?;

        Ok(Self {
            identity,
            access_token,
        })
    }

    pub fn first_name(&self) -> &str {
        self.identity.metadata.given_name.as_deref().unwrap_or_default()
    }
}

/// A wizard form with every required field filled in
pub fn complete_form(first_name: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": "Tester",
        "email": format!("{}@example.com", first_name.to_lowercase()),
        "linkedinUrl": format!("https://linkedin.com/in/{}", first_name.to_lowercase()),
        "location": "Berlin, Germany",
        "timezone": "cet",
        "founderType": "hacker",
        "lookingFor": ["hustler"],
        "weeklyHours": "20-30",
        "hasIdea": "yes",
        "ideaDescription": "Tooling for hardware startups",
        "calendarType": "calendly",
        "calendarUrl": "https://calendly.com/founder",
        "bio": "Embedded engineer",
        "skills": ["Rust", "Embedded"]
    })
}

/// Submit payload from the final wizard step
pub fn final_step(form: Value) -> Value {
    json!({ "step": 4, "form": form })
}

/// Navigation decision
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    pub route: String,
    pub message: Option<String>,
    pub path: String,
}

/// Stored profile as returned after a write
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub onboarding_complete: bool,
    pub member_since: Option<String>,
}

/// Wizard submission result
#[derive(Debug, Deserialize)]
pub struct SubmissionResponse {
    pub step: u8,
    pub profile: ProfileResponse,
    pub redirect: RouteResponse,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<Value>,
}
