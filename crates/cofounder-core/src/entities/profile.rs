//! Profile entity - one founder profile per user account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::UserId;

/// Error returned when text does not name a known enum variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// Founder Type
// ============================================================================

/// Self-declared founder role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FounderType {
    /// Technical founder
    Hacker,
    /// Design / product founder
    Hipster,
    /// Business / sales founder
    Hustler,
}

impl FounderType {
    pub const ALL: [FounderType; 3] = [Self::Hacker, Self::Hipster, Self::Hustler];

    /// Stored/wire representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hacker => "hacker",
            Self::Hipster => "hipster",
            Self::Hustler => "hustler",
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hacker => "Hacker (Technical)",
            Self::Hipster => "Hipster (Design/Product)",
            Self::Hustler => "Hustler (Business/Sales)",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Hacker => "🧑‍💻",
            Self::Hipster => "🎨",
            Self::Hustler => "📈",
        }
    }
}

impl fmt::Display for FounderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FounderType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hacker" => Ok(Self::Hacker),
            "hipster" => Ok(Self::Hipster),
            "hustler" => Ok(Self::Hustler),
            other => Err(ParseEnumError::new("founder type", other)),
        }
    }
}

// ============================================================================
// Has Idea
// ============================================================================

/// Whether the founder brings an idea, wants to join one, or is open to both
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HasIdea {
    Yes,
    No,
    Both,
}

impl HasIdea {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Both => "both",
        }
    }

    /// The idea description is only collected for `yes` and `both`
    #[inline]
    #[must_use]
    pub fn collects_description(self) -> bool {
        matches!(self, Self::Yes | Self::Both)
    }
}

impl fmt::Display for HasIdea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HasIdea {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "both" => Ok(Self::Both),
            other => Err(ParseEnumError::new("idea status", other)),
        }
    }
}

// ============================================================================
// Calendar Type
// ============================================================================

/// Scheduling service behind `calendar_url`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    Calendly,
    Cal,
    Google,
    Outlook,
}

impl CalendarType {
    pub const ALL: [CalendarType; 4] = [Self::Calendly, Self::Cal, Self::Google, Self::Outlook];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Calendly => "calendly",
            Self::Cal => "cal",
            Self::Google => "google",
            Self::Outlook => "outlook",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Calendly => "Calendly",
            Self::Cal => "Cal.com",
            Self::Google => "Google Calendar",
            Self::Outlook => "Outlook Calendar",
        }
    }
}

impl fmt::Display for CalendarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calendly" => Ok(Self::Calendly),
            "cal" => Ok(Self::Cal),
            "google" => Ok(Self::Google),
            "outlook" => Ok(Self::Outlook),
            other => Err(ParseEnumError::new("calendar type", other)),
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Profile entity
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: UserId,
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
    /// Display-only, never computed here
    pub match_score: Option<i32>,
    pub response_rate: Option<String>,
    pub avg_response_time: Option<String>,
    pub member_since: Option<String>,
    pub onboarding_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create an empty, not yet onboarded profile
    #[must_use]
    pub fn new(id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: None,
            first_name: None,
            last_name: None,
            linkedin_url: None,
            avatar_url: None,
            location: None,
            timezone: None,
            founder_type: None,
            looking_for: Vec::new(),
            weekly_hours: None,
            has_idea: None,
            idea_description: None,
            looking_to_join: false,
            calendar_type: None,
            calendar_url: None,
            bio: None,
            skills: Vec::new(),
            is_online: false,
            match_score: None,
            response_rate: None,
            avg_response_time: None,
            member_since: None,
            onboarding_complete: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build the record an insert of `changes` would produce
    #[must_use]
    pub fn from_changes(id: UserId, changes: &ProfileChanges, now: DateTime<Utc>) -> Self {
        let mut profile = Self::new(id);
        profile.created_at = now;
        profile.member_since.clone_from(&changes.member_since);
        changes.apply_to(&mut profile, now);
        profile
    }

    /// "First Last", falling back to the email address
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if name.is_empty() {
            self.email.clone().unwrap_or_default()
        } else {
            name
        }
    }

    /// Avatar fallback initials
    pub fn initials(&self) -> String {
        let first = self
            .first_name
            .as_deref()
            .and_then(|s| s.trim().chars().next())
            .or_else(|| {
                self.email
                    .as_deref()
                    .and_then(|s| s.chars().next())
                    .map(|c| c.to_ascii_uppercase())
            });
        let last = self
            .last_name
            .as_deref()
            .and_then(|s| s.trim().chars().next());

        first.into_iter().chain(last).collect()
    }

    /// Whether this profile may be listed in the directory
    #[inline]
    pub fn is_listed(&self) -> bool {
        self.onboarding_complete
    }
}

/// Month + year label stored as `member_since`, e.g. "October 2026"
pub fn member_since_label(at: DateTime<Utc>) -> String {
    at.format("%B %Y").to_string()
}

// ============================================================================
// Profile Changes
// ============================================================================

/// Set of profile fields written by an upsert
///
/// `None` leaves the stored value untouched on update and falls back to the
/// column default on insert. With `overwrite` set, `None` clears the stored
/// value instead. `member_since` is only ever written on insert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    /// Replace every field on update rather than merging
    pub overwrite: bool,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub linkedin_url: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    pub founder_type: Option<FounderType>,
    pub looking_for: Option<Vec<FounderType>>,
    pub weekly_hours: Option<String>,
    pub has_idea: Option<HasIdea>,
    pub idea_description: Option<String>,
    pub looking_to_join: Option<bool>,
    pub calendar_type: Option<CalendarType>,
    pub calendar_url: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub is_online: Option<bool>,
    pub onboarding_complete: Option<bool>,
    pub member_since: Option<String>,
}

impl ProfileChanges {
    /// Check if nothing would be written besides `updated_at`
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the update half of an upsert to an existing record
    pub fn apply_to(&self, profile: &mut Profile, now: DateTime<Utc>) {
        let overwrite = self.overwrite;
        fn set<T: Clone + Default>(target: &mut T, value: Option<&T>, overwrite: bool) {
            match value {
                Some(value) => target.clone_from(value),
                None if overwrite => *target = T::default(),
                None => {}
            }
        }
        fn set_opt<T: Clone>(target: &mut Option<T>, value: Option<&T>, overwrite: bool) {
            if value.is_some() || overwrite {
                *target = value.cloned();
            }
        }

        set_opt(&mut profile.email, self.email.as_ref(), overwrite);
        set_opt(&mut profile.first_name, self.first_name.as_ref(), overwrite);
        set_opt(&mut profile.last_name, self.last_name.as_ref(), overwrite);
        set_opt(&mut profile.linkedin_url, self.linkedin_url.as_ref(), overwrite);
        set_opt(&mut profile.avatar_url, self.avatar_url.as_ref(), overwrite);
        set_opt(&mut profile.location, self.location.as_ref(), overwrite);
        set_opt(&mut profile.timezone, self.timezone.as_ref(), overwrite);
        set_opt(&mut profile.founder_type, self.founder_type.as_ref(), overwrite);
        set(&mut profile.looking_for, self.looking_for.as_ref(), overwrite);
        set_opt(&mut profile.weekly_hours, self.weekly_hours.as_ref(), overwrite);
        set_opt(&mut profile.has_idea, self.has_idea.as_ref(), overwrite);
        set_opt(&mut profile.idea_description, self.idea_description.as_ref(), overwrite);
        set(&mut profile.looking_to_join, self.looking_to_join.as_ref(), overwrite);
        set_opt(&mut profile.calendar_type, self.calendar_type.as_ref(), overwrite);
        set_opt(&mut profile.calendar_url, self.calendar_url.as_ref(), overwrite);
        set_opt(&mut profile.bio, self.bio.as_ref(), overwrite);
        set(&mut profile.skills, self.skills.as_ref(), overwrite);
        set(&mut profile.is_online, self.is_online.as_ref(), overwrite);
        set(&mut profile.onboarding_complete, self.onboarding_complete.as_ref(), overwrite);
        profile.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_id() -> UserId {
        UserId::parse("11111111-2222-4333-8444-555555555555").unwrap()
    }

    #[test]
    fn test_enum_parse_and_display() {
        for ft in FounderType::ALL {
            assert_eq!(ft.as_str().parse::<FounderType>().unwrap(), ft);
        }
        assert_eq!("both".parse::<HasIdea>().unwrap(), HasIdea::Both);
        assert_eq!("cal".parse::<CalendarType>().unwrap().label(), "Cal.com");

        let err = "wizard".parse::<FounderType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown founder type: wizard");
    }

    #[test]
    fn test_has_idea_collects_description() {
        assert!(HasIdea::Yes.collects_description());
        assert!(HasIdea::Both.collects_description());
        assert!(!HasIdea::No.collects_description());
    }

    #[test]
    fn test_display_name_and_initials() {
        let mut profile = Profile::new(test_id());
        profile.email = Some("ada@example.com".to_string());
        assert_eq!(profile.display_name(), "ada@example.com");
        assert_eq!(profile.initials(), "A");

        profile.first_name = Some("Ada".to_string());
        profile.last_name = Some("Lovelace".to_string());
        assert_eq!(profile.display_name(), "Ada Lovelace");
        assert_eq!(profile.initials(), "AL");
    }

    #[test]
    fn test_member_since_label() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        assert_eq!(member_since_label(at), "October 2026");
    }

    #[test]
    fn test_apply_changes_leaves_absent_fields() {
        let mut profile = Profile::new(test_id());
        profile.bio = Some("old bio".to_string());
        profile.location = Some("Austin".to_string());
        profile.member_since = Some("January 2025".to_string());

        let now = Utc::now();
        let changes = ProfileChanges {
            bio: Some("new bio".to_string()),
            skills: Some(vec!["Rust".to_string()]),
            member_since: Some("October 2026".to_string()),
            ..Default::default()
        };
        changes.apply_to(&mut profile, now);

        assert_eq!(profile.bio.as_deref(), Some("new bio"));
        assert_eq!(profile.location.as_deref(), Some("Austin"));
        assert_eq!(profile.skills, vec!["Rust".to_string()]);
        assert_eq!(profile.member_since.as_deref(), Some("January 2025"));
        assert_eq!(profile.updated_at, now);
    }

    #[test]
    fn test_overwrite_clears_absent_fields() {
        let mut profile = Profile::new(test_id());
        profile.has_idea = Some(HasIdea::Yes);
        profile.idea_description = Some("Old idea".to_string());
        profile.calendar_type = Some(CalendarType::Google);
        profile.skills = vec!["Rust".to_string()];
        profile.match_score = Some(87);
        profile.member_since = Some("January 2025".to_string());

        let now = Utc::now();
        let changes = ProfileChanges {
            overwrite: true,
            has_idea: Some(HasIdea::No),
            member_since: Some("October 2026".to_string()),
            ..Default::default()
        };
        changes.apply_to(&mut profile, now);

        assert_eq!(profile.has_idea, Some(HasIdea::No));
        assert_eq!(profile.idea_description, None);
        assert_eq!(profile.calendar_type, None);
        assert!(profile.skills.is_empty());
        assert_eq!(profile.match_score, Some(87));
        assert_eq!(profile.member_since.as_deref(), Some("January 2025"));
        assert_eq!(profile.updated_at, now);
    }

    #[test]
    fn test_from_changes_sets_insert_only_fields() {
        let now = Utc::now();
        let changes = ProfileChanges {
            onboarding_complete: Some(true),
            member_since: Some("October 2026".to_string()),
            ..Default::default()
        };
        let profile = Profile::from_changes(test_id(), &changes, now);

        assert!(profile.onboarding_complete);
        assert!(!profile.looking_to_join);
        assert_eq!(profile.member_since.as_deref(), Some("October 2026"));
        assert_eq!(profile.created_at, now);
        assert_eq!(profile.updated_at, now);
    }

    #[test]
    fn test_empty_changes() {
        assert!(ProfileChanges::default().is_empty());
        let changes = ProfileChanges {
            is_online: Some(true),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
