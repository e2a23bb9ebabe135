//! Onboarding form state
//!
//! The form mirrors what the wizard collects. Every field has a concrete
//! default (empty string, `false`, empty list) so nulls never leak into form
//! state; single-choice enums use `None` for "not chosen yet" and travel as
//! `""` on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::{CalendarType, FounderType, HasIdea, Identity, Profile};
use crate::error::DomainError;

// ============================================================================
// Form Fields
// ============================================================================

/// Closed set of wizard form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "lastName")]
    LastName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "linkedinUrl")]
    LinkedinUrl,
    #[serde(rename = "avatarUrl")]
    AvatarUrl,
    #[serde(rename = "location")]
    Location,
    #[serde(rename = "timezone")]
    Timezone,
    #[serde(rename = "founderType")]
    FounderType,
    #[serde(rename = "lookingFor")]
    LookingFor,
    #[serde(rename = "weeklyHours")]
    WeeklyHours,
    #[serde(rename = "hasIdea")]
    HasIdea,
    #[serde(rename = "ideaDescription")]
    IdeaDescription,
    #[serde(rename = "lookingToJoin")]
    LookingToJoin,
    #[serde(rename = "calendarType")]
    CalendarType,
    #[serde(rename = "calendarUrl")]
    CalendarUrl,
    #[serde(rename = "bio")]
    Bio,
    #[serde(rename = "skills")]
    Skills,
}

impl FormField {
    pub const ALL: [FormField; 17] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::LinkedinUrl,
        Self::AvatarUrl,
        Self::Location,
        Self::Timezone,
        Self::FounderType,
        Self::LookingFor,
        Self::WeeklyHours,
        Self::HasIdea,
        Self::IdeaDescription,
        Self::LookingToJoin,
        Self::CalendarType,
        Self::CalendarUrl,
        Self::Bio,
        Self::Skills,
    ];

    /// Wire name, as reported in missing-field lists
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::LinkedinUrl => "linkedinUrl",
            Self::AvatarUrl => "avatarUrl",
            Self::Location => "location",
            Self::Timezone => "timezone",
            Self::FounderType => "founderType",
            Self::LookingFor => "lookingFor",
            Self::WeeklyHours => "weeklyHours",
            Self::HasIdea => "hasIdea",
            Self::IdeaDescription => "ideaDescription",
            Self::LookingToJoin => "lookingToJoin",
            Self::CalendarType => "calendarType",
            Self::CalendarUrl => "calendarUrl",
            Self::Bio => "bio",
            Self::Skills => "skills",
        }
    }

    /// Step-1 fields a signed-in user cannot edit (avatar comes from the provider)
    #[must_use]
    pub fn is_identity_bound(self) -> bool {
        matches!(
            self,
            Self::FirstName | Self::LastName | Self::Email | Self::LinkedinUrl
        )
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::ValidationError(format!("unknown form field: {s}")))
    }
}

/// Typed value for a single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

// ============================================================================
// Form
// ============================================================================

/// Wizard form state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingForm {
    // Step 1: Basic Info
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub linkedin_url: String,
    pub avatar_url: String,
    // Step 2: Profile
    pub location: String,
    pub timezone: String,
    #[serde(with = "blank_option")]
    pub founder_type: Option<FounderType>,
    pub looking_for: Vec<FounderType>,
    // Step 3: Availability & Goals
    pub weekly_hours: String,
    #[serde(with = "blank_option")]
    pub has_idea: Option<HasIdea>,
    pub idea_description: String,
    pub looking_to_join: bool,
    // Step 4: Calendar & Final
    #[serde(with = "blank_option")]
    pub calendar_type: Option<CalendarType>,
    pub calendar_url: String,
    pub bio: String,
    pub skills: Vec<String>,
}

impl OnboardingForm {
    /// Pre-populate the form for a signed-in user
    ///
    /// Non-null values of an existing profile win; blanks fall back to what the
    /// identity provider knows about the account.
    pub fn prefill(identity: &Identity, existing: Option<&Profile>) -> Self {
        let stored = |f: fn(&Profile) -> Option<&String>| -> Option<String> {
            existing
                .and_then(f)
                .filter(|s| !s.trim().is_empty())
                .cloned()
        };
        let or_identity = |value: Option<String>, fallback: Option<&str>| -> String {
            value
                .or_else(|| fallback.map(str::to_string))
                .unwrap_or_default()
        };

        Self {
            first_name: or_identity(stored(|p| p.first_name.as_ref()), identity.first_name()),
            last_name: or_identity(stored(|p| p.last_name.as_ref()), identity.last_name()),
            email: or_identity(stored(|p| p.email.as_ref()), identity.email()),
            linkedin_url: stored(|p| p.linkedin_url.as_ref()).unwrap_or_default(),
            avatar_url: or_identity(stored(|p| p.avatar_url.as_ref()), identity.avatar_url()),
            location: stored(|p| p.location.as_ref()).unwrap_or_default(),
            timezone: stored(|p| p.timezone.as_ref()).unwrap_or_default(),
            founder_type: existing.and_then(|p| p.founder_type),
            looking_for: existing.map(|p| p.looking_for.clone()).unwrap_or_default(),
            weekly_hours: stored(|p| p.weekly_hours.as_ref()).unwrap_or_default(),
            has_idea: existing.and_then(|p| p.has_idea),
            idea_description: stored(|p| p.idea_description.as_ref()).unwrap_or_default(),
            looking_to_join: existing.is_some_and(|p| p.looking_to_join),
            calendar_type: existing.and_then(|p| p.calendar_type),
            calendar_url: stored(|p| p.calendar_url.as_ref()).unwrap_or_default(),
            bio: stored(|p| p.bio.as_ref()).unwrap_or_default(),
            skills: existing.map(|p| p.skills.clone()).unwrap_or_default(),
        }
    }

    /// Load a stored profile into the form (edit-profile flow)
    pub fn from_profile(profile: &Profile) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        Self {
            first_name: text(&profile.first_name),
            last_name: text(&profile.last_name),
            email: text(&profile.email),
            linkedin_url: text(&profile.linkedin_url),
            avatar_url: text(&profile.avatar_url),
            location: text(&profile.location),
            timezone: text(&profile.timezone),
            founder_type: profile.founder_type,
            looking_for: profile.looking_for.clone(),
            weekly_hours: text(&profile.weekly_hours),
            has_idea: profile.has_idea,
            idea_description: text(&profile.idea_description),
            looking_to_join: profile.looking_to_join,
            calendar_type: profile.calendar_type,
            calendar_url: text(&profile.calendar_url),
            bio: text(&profile.bio),
            skills: profile.skills.clone(),
        }
    }

    /// Whether the field holds a usable value
    ///
    /// Text counts when non-blank, lists when non-empty, choices when made.
    /// `lookingToJoin` is a checkbox and always counts.
    pub fn is_filled(&self, field: FormField) -> bool {
        let text = |s: &str| !s.trim().is_empty();
        match field {
            FormField::FirstName => text(&self.first_name),
            FormField::LastName => text(&self.last_name),
            FormField::Email => text(&self.email),
            FormField::LinkedinUrl => text(&self.linkedin_url),
            FormField::AvatarUrl => text(&self.avatar_url),
            FormField::Location => text(&self.location),
            FormField::Timezone => text(&self.timezone),
            FormField::FounderType => self.founder_type.is_some(),
            FormField::LookingFor => !self.looking_for.is_empty(),
            FormField::WeeklyHours => text(&self.weekly_hours),
            FormField::HasIdea => self.has_idea.is_some(),
            FormField::IdeaDescription => text(&self.idea_description),
            FormField::LookingToJoin => true,
            FormField::CalendarType => self.calendar_type.is_some(),
            FormField::CalendarUrl => text(&self.calendar_url),
            FormField::Bio => text(&self.bio),
            FormField::Skills => !self.skills.is_empty(),
        }
    }

    /// Set a field from a typed value
    pub fn set(&mut self, field: FormField, value: FieldValue) -> Result<(), DomainError> {
        match (field, value) {
            (FormField::LookingToJoin, FieldValue::Flag(flag)) => self.looking_to_join = flag,
            (FormField::LookingFor, FieldValue::List(items)) => {
                self.looking_for = items
                    .iter()
                    .map(|item| parse_choice(field, item))
                    .collect::<Result<_, _>>()?;
            }
            (FormField::Skills, FieldValue::List(items)) => self.skills = items,
            (FormField::FounderType, FieldValue::Text(text)) => {
                self.founder_type = parse_optional_choice(field, &text)?;
            }
            (FormField::HasIdea, FieldValue::Text(text)) => {
                self.has_idea = parse_optional_choice(field, &text)?;
            }
            (FormField::CalendarType, FieldValue::Text(text)) => {
                self.calendar_type = parse_optional_choice(field, &text)?;
            }
            (field, FieldValue::Text(text)) => match self.text_mut(field) {
                Some(slot) => *slot = text,
                None => return Err(type_mismatch(field)),
            },
            (field, _) => return Err(type_mismatch(field)),
        }
        Ok(())
    }

    /// Toggle one entry of a multi-select field
    pub fn toggle(&mut self, field: FormField, item: &str) -> Result<(), DomainError> {
        match field {
            FormField::LookingFor => {
                let choice: FounderType = parse_choice(field, item)?;
                toggle_entry(&mut self.looking_for, choice);
            }
            FormField::Skills => toggle_entry(&mut self.skills, item.to_string()),
            other => return Err(type_mismatch(other)),
        }
        Ok(())
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::FirstName => Some(&mut self.first_name),
            FormField::LastName => Some(&mut self.last_name),
            FormField::Email => Some(&mut self.email),
            FormField::LinkedinUrl => Some(&mut self.linkedin_url),
            FormField::AvatarUrl => Some(&mut self.avatar_url),
            FormField::Location => Some(&mut self.location),
            FormField::Timezone => Some(&mut self.timezone),
            FormField::WeeklyHours => Some(&mut self.weekly_hours),
            FormField::IdeaDescription => Some(&mut self.idea_description),
            FormField::CalendarUrl => Some(&mut self.calendar_url),
            FormField::Bio => Some(&mut self.bio),
            FormField::FounderType
            | FormField::LookingFor
            | FormField::HasIdea
            | FormField::LookingToJoin
            | FormField::CalendarType
            | FormField::Skills => None,
        }
    }
}

fn toggle_entry<T: PartialEq>(entries: &mut Vec<T>, item: T) {
    if let Some(pos) = entries.iter().position(|e| *e == item) {
        entries.remove(pos);
    } else {
        entries.push(item);
    }
}

fn parse_choice<T: FromStr>(field: FormField, value: &str) -> Result<T, DomainError> {
    value.parse().map_err(|_| DomainError::InvalidFieldValue {
        field,
        value: value.to_string(),
    })
}

fn parse_optional_choice<T: FromStr>(field: FormField, value: &str) -> Result<Option<T>, DomainError> {
    if value.is_empty() {
        Ok(None)
    } else {
        parse_choice(field, value).map(Some)
    }
}

fn type_mismatch(field: FormField) -> DomainError {
    DomainError::ValidationError(format!("wrong value type for field {field}"))
}

/// Serde adapter: `None` <-> `""` for single-choice fields
mod blank_option {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.is_empty() {
            Ok(None)
        } else {
            raw.parse().map(Some).map_err(de::Error::custom)
        }
    }
}
