//! Request DTOs for API endpoints
//!
//! Request bodies implement `Deserialize`; those with free-form input also
//! implement `Validate`.

use cofounder_core::{
    CalendarType, DirectoryFilter, FounderType, FounderTypeFilter, HasIdea, LocationFilter,
    OnboardingForm, ProfileChanges, SortOrder, WizardStep,
};
use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidateUrl, ValidationError};

use crate::services::{ServiceError, ServiceResult};

// ============================================================================
// Onboarding Requests
// ============================================================================

/// Wizard snapshot posted back for submission
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitOnboardingRequest {
    pub step: WizardStep,
    #[serde(default)]
    pub form: OnboardingForm,
}

// ============================================================================
// Directory Requests
// ============================================================================

/// Directory query string: `?q=&founder_type=&location=&sort=`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DirectoryQuery {
    pub q: Option<String>,
    pub founder_type: Option<String>,
    pub location: Option<String>,
    pub sort: Option<String>,
}

impl DirectoryQuery {
    /// Parse into filter state; unknown founder types or sort orders are rejected
    ///
    /// # Errors
    /// Returns a validation error naming the offending parameter
    pub fn into_filter(self) -> ServiceResult<DirectoryFilter> {
        let founder_type = self
            .founder_type
            .as_deref()
            .unwrap_or_default()
            .parse::<FounderTypeFilter>()
            .map_err(|e| ServiceError::validation(format!("founder_type: {e}")))?;
        let sort = self
            .sort
            .as_deref()
            .unwrap_or_default()
            .parse::<SortOrder>()
            .map_err(|e| ServiceError::validation(format!("sort: {e}")))?;

        Ok(DirectoryFilter {
            search: self.q.unwrap_or_default(),
            founder_type,
            location: LocationFilter::from(self.location.unwrap_or_default()),
            sort,
        })
    }
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Partial profile update from the edit page
///
/// Absent fields are left untouched; text is trimmed and an empty string
/// clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(custom(function = "optional_email"))]
    pub email: Option<String>,

    #[validate(custom(function = "optional_url"))]
    pub linkedin_url: Option<String>,

    #[validate(custom(function = "optional_url"))]
    pub avatar_url: Option<String>,

    pub location: Option<String>,
    pub timezone: Option<String>,
    pub founder_type: Option<FounderType>,
    pub looking_for: Option<Vec<FounderType>>,
    pub weekly_hours: Option<String>,
    pub has_idea: Option<HasIdea>,

    #[validate(length(max = 2000, message = "Idea description must be at most 2000 characters"))]
    pub idea_description: Option<String>,

    pub looking_to_join: Option<bool>,
    pub calendar_type: Option<CalendarType>,

    #[validate(custom(function = "optional_url"))]
    pub calendar_url: Option<String>,

    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: Option<String>,

    pub skills: Option<Vec<String>>,
}

impl UpdateProfileRequest {
    /// Typed change set for the repository
    pub fn into_changes(self) -> ProfileChanges {
        let text = |value: Option<String>| value.map(|v| v.trim().to_string());

        ProfileChanges {
            email: text(self.email),
            first_name: text(self.first_name),
            last_name: text(self.last_name),
            linkedin_url: text(self.linkedin_url),
            avatar_url: text(self.avatar_url),
            location: text(self.location),
            timezone: text(self.timezone),
            founder_type: self.founder_type,
            looking_for: self.looking_for.map(dedup),
            weekly_hours: text(self.weekly_hours),
            has_idea: self.has_idea,
            idea_description: text(self.idea_description),
            looking_to_join: self.looking_to_join,
            calendar_type: self.calendar_type,
            calendar_url: text(self.calendar_url),
            bio: text(self.bio),
            skills: self.skills.map(|skills| {
                dedup(
                    skills
                        .into_iter()
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect(),
                )
            }),
            ..ProfileChanges::default()
        }
    }
}

fn dedup<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

fn optional_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message("Must be a valid URL".into()))
    }
}

fn optional_email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Invalid email format".into()))
    }
}
