//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use cofounder_core::onboarding::options::{self, SelectOption};
use cofounder_core::{
    CalendarType, DirectoryFilter, FormField, FounderType, HasIdea, OnboardingForm, Route,
    SortOrder, WizardMode, WizardStep,
};
use serde::Serialize;

// ============================================================================
// Routing Responses
// ============================================================================

/// Navigation decision with the client path to follow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteResponse {
    #[serde(flatten)]
    pub route: Route,
    pub path: &'static str,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Where to send the browser to start sign-in
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizeResponse {
    pub url: String,
    pub callback_url: String,
}

// ============================================================================
// Profile Responses
// ============================================================================

/// Stored profile as returned after a write
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub linkedin_url: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    pub founder_type: Option<FounderType>,
    pub looking_for: Vec<FounderType>,
    pub weekly_hours: Option<String>,
    pub has_idea: Option<HasIdea>,
    pub idea_description: Option<String>,
    pub looking_to_join: bool,
    pub calendar_type: Option<CalendarType>,
    pub calendar_url: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub is_online: bool,
    pub member_since: Option<String>,
    pub onboarding_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Display-only statistics; never computed here
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    pub match_score: Option<i32>,
    pub response_rate: Option<String>,
    pub avg_response_time: Option<String>,
}

/// Edit-profile page: editable form state plus read-only metadata
#[derive(Debug, Clone, Serialize)]
pub struct ProfileFormResponse {
    pub id: String,
    pub form: OnboardingForm,
    pub is_online: bool,
    pub member_since: Option<String>,
    pub onboarding_complete: bool,
    pub stats: ProfileStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Onboarding Responses
// ============================================================================

/// Client-held wizard state
#[derive(Debug, Clone, Serialize)]
pub struct WizardSnapshot {
    pub step: WizardStep,
    pub title: &'static str,
    pub mode: WizardMode,
    pub form: OnboardingForm,
    /// Fields the client must render read-only
    pub read_only_fields: Vec<FormField>,
    pub required_fields: Vec<FormField>,
    pub missing_fields: Vec<FormField>,
}

/// Successful wizard submit
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub step: WizardStep,
    pub profile: ProfileResponse,
    pub redirect: RouteResponse,
}

/// Option catalogs for the wizard and the directory selectors
#[derive(Debug, Clone, Serialize)]
pub struct OptionsResponse {
    pub timezones: Vec<SelectOption>,
    pub weekly_hours: Vec<SelectOption>,
    pub skills: Vec<&'static str>,
    pub founder_types: Vec<SelectOption>,
    pub idea_statuses: Vec<SelectOption>,
    pub calendar_types: Vec<SelectOption>,
    pub directory_locations: Vec<&'static str>,
    pub sort_orders: Vec<SelectOption>,
}

impl OptionsResponse {
    pub fn catalog() -> Self {
        Self {
            timezones: options::TIMEZONES.to_vec(),
            weekly_hours: options::WEEKLY_HOURS.to_vec(),
            skills: options::SKILLS.to_vec(),
            founder_types: options::founder_types(),
            idea_statuses: options::idea_statuses(),
            calendar_types: options::calendar_types(),
            directory_locations: options::DIRECTORY_LOCATIONS.to_vec(),
            sort_orders: sort_options(),
        }
    }
}

fn sort_options() -> Vec<SelectOption> {
    [SortOrder::BestMatch, SortOrder::Recent, SortOrder::Active]
        .into_iter()
        .map(|sort| SelectOption {
            value: sort.as_str(),
            label: sort.label(),
        })
        .collect()
}

// ============================================================================
// Directory Responses
// ============================================================================

/// Founder type with its display label and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FounderTypeBadge {
    pub value: FounderType,
    pub label: &'static str,
    pub icon: &'static str,
}

/// One directory card
#[derive(Debug, Clone, Serialize)]
pub struct ProfileCard {
    pub id: String,
    pub display_name: String,
    pub initials: String,
    pub avatar_url: Option<String>,
    pub founder_type: Option<FounderTypeBadge>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    pub weekly_hours: Option<String>,
    pub has_idea: Option<HasIdea>,
    pub idea_description: Option<String>,
    pub looking_for: Vec<FounderType>,
    pub looking_to_join: bool,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub calendar_type: Option<CalendarType>,
    pub calendar_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub is_online: bool,
    pub member_since: Option<String>,
    pub stats: ProfileStats,
}

/// Header summary of the signed-in user
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub id: String,
    pub display_name: String,
    pub initials: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// A loaded directory page
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryPage {
    pub current_user: ProfileSummary,
    pub profiles: Vec<ProfileCard>,
    /// Candidates loaded before filtering
    pub total: usize,
    pub filters: DirectoryFilter,
    pub is_empty: bool,
    /// Filter state behind the "clear filters" action, present when nothing matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_filters: Option<DirectoryFilter>,
}

/// Directory outcome: a page, or a redirect when the visitor may not see it yet
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DirectoryResponse {
    Redirect { redirect: RouteResponse },
    Loaded(DirectoryPage),
}

impl DirectoryResponse {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_response_serialization() {
        let response = RouteResponse::from(Route::Onboarding);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"route": "onboarding", "path": "/signup"}));

        let response = RouteResponse::from(Route::Error("try again".to_string()));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["route"], "error");
        assert_eq!(json["message"], "try again");
        assert_eq!(json["path"], "/login");
    }

    #[test]
    fn test_options_catalog() {
        let options = OptionsResponse::catalog();
        assert_eq!(options.timezones.len(), 6);
        assert_eq!(options.weekly_hours.len(), 5);
        assert_eq!(options.founder_types.len(), 3);
        assert_eq!(options.sort_orders[0].value, "match");
        assert_eq!(options.sort_orders[1].label, "Recently Joined");
    }

    #[test]
    fn test_directory_redirect_serialization() {
        let response = DirectoryResponse::Redirect {
            redirect: Route::Login.into(),
        };
        assert!(response.is_redirect());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "redirect");
        assert_eq!(json["redirect"]["path"], "/login");
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.database, "unhealthy");
    }
}
