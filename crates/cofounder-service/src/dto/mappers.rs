//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use cofounder_core::{FounderType, OnboardingForm, Profile, Route};

use super::responses::{
    FounderTypeBadge, ProfileCard, ProfileFormResponse, ProfileResponse, ProfileStats,
    ProfileSummary, RouteResponse,
};

// ============================================================================
// Route Mappers
// ============================================================================

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        let path = route.path();
        Self { route, path }
    }
}

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            email: profile.email.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            linkedin_url: profile.linkedin_url.clone(),
            avatar_url: profile.avatar_url.clone(),
            location: profile.location.clone(),
            timezone: profile.timezone.clone(),
            founder_type: profile.founder_type,
            looking_for: profile.looking_for.clone(),
            weekly_hours: profile.weekly_hours.clone(),
            has_idea: profile.has_idea,
            idea_description: profile.idea_description.clone(),
            looking_to_join: profile.looking_to_join,
            calendar_type: profile.calendar_type,
            calendar_url: profile.calendar_url.clone(),
            bio: profile.bio.clone(),
            skills: profile.skills.clone(),
            is_online: profile.is_online,
            member_since: profile.member_since.clone(),
            onboarding_complete: profile.onboarding_complete,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self::from(&profile)
    }
}

impl From<&Profile> for ProfileStats {
    fn from(profile: &Profile) -> Self {
        Self {
            match_score: profile.match_score,
            response_rate: profile.response_rate.clone(),
            avg_response_time: profile.avg_response_time.clone(),
        }
    }
}

impl From<&Profile> for ProfileFormResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            form: OnboardingForm::from_profile(profile),
            is_online: profile.is_online,
            member_since: profile.member_since.clone(),
            onboarding_complete: profile.onboarding_complete,
            stats: ProfileStats::from(profile),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

impl From<FounderType> for FounderTypeBadge {
    fn from(value: FounderType) -> Self {
        Self {
            value,
            label: value.label(),
            icon: value.icon(),
        }
    }
}

impl From<&Profile> for ProfileCard {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            display_name: profile.display_name(),
            initials: profile.initials(),
            avatar_url: profile.avatar_url.clone(),
            founder_type: profile.founder_type.map(FounderTypeBadge::from),
            location: profile.location.clone(),
            timezone: profile.timezone.clone(),
            weekly_hours: profile.weekly_hours.clone(),
            has_idea: profile.has_idea,
            idea_description: profile.idea_description.clone(),
            looking_for: profile.looking_for.clone(),
            looking_to_join: profile.looking_to_join,
            skills: profile.skills.clone(),
            bio: profile.bio.clone(),
            calendar_type: profile.calendar_type,
            calendar_url: profile.calendar_url.clone(),
            linkedin_url: profile.linkedin_url.clone(),
            is_online: profile.is_online,
            member_since: profile.member_since.clone(),
            stats: ProfileStats::from(profile),
        }
    }
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            display_name: profile.display_name(),
            initials: profile.initials(),
            email: profile.email.clone(),
            avatar_url: profile.avatar_url.clone(),
        }
    }
}
