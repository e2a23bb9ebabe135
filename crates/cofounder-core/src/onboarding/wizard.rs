//! Onboarding wizard state machine
//!
//! `BasicInfo -> Profile -> Availability -> Calendar -> Submitted`, linear.
//! Intermediate transitions are never gated; the required-field check runs
//! only when the user submits from the calendar step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{member_since_label, Identity, Profile, ProfileChanges};
use crate::error::DomainError;
use crate::value_objects::UserId;

use super::form::{FieldValue, FormField, OnboardingForm};

// ============================================================================
// Steps
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WizardStep {
    BasicInfo = 1,
    Profile = 2,
    Availability = 3,
    Calendar = 4,
    Submitted = 5,
}

impl WizardStep {
    /// Last editable step; the only one submit is accepted from
    pub const FINAL: WizardStep = WizardStep::Calendar;

    #[must_use]
    pub fn number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::Profile => "Profile",
            Self::Availability => "Availability & Goals",
            Self::Calendar => "Calendar & Final",
            Self::Submitted => "Submitted",
        }
    }

    fn following(self) -> Option<Self> {
        match self {
            Self::BasicInfo => Some(Self::Profile),
            Self::Profile => Some(Self::Availability),
            Self::Availability => Some(Self::Calendar),
            Self::Calendar | Self::Submitted => None,
        }
    }

    fn preceding(self) -> Option<Self> {
        match self {
            Self::Profile => Some(Self::BasicInfo),
            Self::Availability => Some(Self::Profile),
            Self::Calendar => Some(Self::Availability),
            Self::BasicInfo | Self::Submitted => None,
        }
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::BasicInfo),
            2 => Ok(Self::Profile),
            3 => Ok(Self::Availability),
            4 => Ok(Self::Calendar),
            5 => Ok(Self::Submitted),
            other => Err(DomainError::ValidationError(format!(
                "wizard step out of range: {other}"
            ))),
        }
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.number()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.title())
    }
}

// ============================================================================
// Mode
// ============================================================================

/// Whether the wizard runs for a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardMode {
    Authenticated,
    Anonymous,
}

const AUTHENTICATED_REQUIRED: [FormField; 8] = [
    FormField::Location,
    FormField::Timezone,
    FormField::FounderType,
    FormField::LookingFor,
    FormField::WeeklyHours,
    FormField::HasIdea,
    FormField::CalendarUrl,
    FormField::Bio,
];

const ANONYMOUS_REQUIRED: [FormField; 12] = [
    FormField::FirstName,
    FormField::LastName,
    FormField::Email,
    FormField::LinkedinUrl,
    FormField::Location,
    FormField::Timezone,
    FormField::FounderType,
    FormField::LookingFor,
    FormField::WeeklyHours,
    FormField::HasIdea,
    FormField::CalendarUrl,
    FormField::Bio,
];

impl WizardMode {
    #[must_use]
    pub fn for_identity(identity: Option<&Identity>) -> Self {
        if identity.is_some() {
            Self::Authenticated
        } else {
            Self::Anonymous
        }
    }

    /// Required fields in reporting order
    #[must_use]
    pub fn required_fields(self) -> &'static [FormField] {
        match self {
            Self::Authenticated => &AUTHENTICATED_REQUIRED,
            Self::Anonymous => &ANONYMOUS_REQUIRED,
        }
    }
}

// ============================================================================
// Submission
// ============================================================================

/// Validated payload ready for `ProfileRepository::upsert`
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub profile_id: UserId,
    pub changes: ProfileChanges,
    pub mode: WizardMode,
    pub submitted_at: DateTime<Utc>,
}

// ============================================================================
// Wizard
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingWizard {
    step: WizardStep,
    mode: WizardMode,
    form: OnboardingForm,
}

impl OnboardingWizard {
    /// Fresh wizard on step 1 with an empty form
    #[must_use]
    pub fn new(mode: WizardMode) -> Self {
        Self {
            step: WizardStep::BasicInfo,
            mode,
            form: OnboardingForm::default(),
        }
    }

    /// Wizard for a signed-in user, pre-filled from the provider and any stored record
    #[must_use]
    pub fn for_identity(identity: &Identity, existing: Option<&Profile>) -> Self {
        Self {
            step: WizardStep::BasicInfo,
            mode: WizardMode::Authenticated,
            form: OnboardingForm::prefill(identity, existing),
        }
    }

    /// Restore a wizard from a client-held snapshot
    #[must_use]
    pub fn resume(step: WizardStep, form: OnboardingForm, mode: WizardMode) -> Self {
        Self { step, mode, form }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    pub fn is_submitted(&self) -> bool {
        self.step == WizardStep::Submitted
    }

    /// Advance one step; no-op on the last editable step. Returns the new step.
    pub fn next(&mut self) -> WizardStep {
        if let Some(step) = self.step.following() {
            self.step = step;
        }
        self.step
    }

    /// Go back one step; no-op on the first step.
    pub fn previous(&mut self) -> WizardStep {
        if let Some(step) = self.step.preceding() {
            self.step = step;
        }
        self.step
    }

    pub fn set_field(&mut self, field: FormField, value: FieldValue) -> Result<(), DomainError> {
        self.ensure_editable(field)?;
        self.form.set(field, value)
    }

    pub fn toggle(&mut self, field: FormField, item: &str) -> Result<(), DomainError> {
        self.ensure_editable(field)?;
        self.form.toggle(field, item)
    }

    fn ensure_editable(&self, field: FormField) -> Result<(), DomainError> {
        if self.mode == WizardMode::Authenticated && field.is_identity_bound() {
            return Err(DomainError::ReadOnlyField(field));
        }
        Ok(())
    }

    /// Required fields still empty, in reporting order
    pub fn missing_fields(&self) -> Vec<FormField> {
        self.mode
            .required_fields()
            .iter()
            .copied()
            .filter(|field| !self.form.is_filled(*field))
            .collect()
    }

    /// Validate the form and build the upsert payload
    ///
    /// The wizard stays on the calendar step; call [`Self::mark_submitted`]
    /// once the repository accepted the write.
    pub fn prepare_submission(
        &self,
        identity: Option<&Identity>,
        now: DateTime<Utc>,
    ) -> Result<Submission, DomainError> {
        if self.step != WizardStep::FINAL {
            return Err(DomainError::SubmitNotAllowed {
                step: self.step.number(),
            });
        }

        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DomainError::MissingRequiredFields(missing));
        }

        let (profile_id, mode) = match identity {
            Some(identity) => (identity.id, WizardMode::Authenticated),
            None => (UserId::generate(), WizardMode::Anonymous),
        };

        Ok(Submission {
            profile_id,
            changes: self.build_changes(identity, now),
            mode,
            submitted_at: now,
        })
    }

    pub fn mark_submitted(&mut self) {
        self.step = WizardStep::Submitted;
    }

    fn build_changes(&self, identity: Option<&Identity>, now: DateTime<Utc>) -> ProfileChanges {
        let form = &self.form;
        let text = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        let avatar_url = text(&form.avatar_url)
            .or_else(|| identity.and_then(Identity::avatar_url).map(str::to_string));
        let idea_description = form
            .has_idea
            .filter(|status| status.collects_description())
            .and_then(|_| text(&form.idea_description));

        ProfileChanges {
            overwrite: true,
            email: text(&form.email),
            first_name: text(&form.first_name),
            last_name: text(&form.last_name),
            linkedin_url: text(&form.linkedin_url),
            avatar_url,
            location: text(&form.location),
            timezone: text(&form.timezone),
            founder_type: form.founder_type,
            looking_for: Some(form.looking_for.clone()),
            weekly_hours: text(&form.weekly_hours),
            has_idea: form.has_idea,
            idea_description,
            looking_to_join: Some(form.looking_to_join),
            calendar_type: form.calendar_type,
            calendar_url: text(&form.calendar_url),
            bio: text(&form.bio),
            skills: Some(form.skills.clone()),
            is_online: Some(true),
            onboarding_complete: Some(true),
            member_since: Some(member_since_label(now)),
        }
    }
}
