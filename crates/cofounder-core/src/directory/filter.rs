//! Directory filtering
//!
//! Pure predicates over the in-memory candidate list. A profile passes when
//! the search text, the founder-type selector and the location selector all
//! accept it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::{FounderType, ParseEnumError, Profile};
use crate::value_objects::UserId;

/// Selector value meaning "no restriction"
pub const ALL: &str = "all";

// ============================================================================
// Selectors
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FounderTypeFilter {
    #[default]
    All,
    Only(FounderType),
}

impl FounderTypeFilter {
    pub fn matches(self, profile: &Profile) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => profile.founder_type == Some(wanted),
        }
    }
}

impl FromStr for FounderTypeFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == ALL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl TryFrom<String> for FounderTypeFilter {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FounderTypeFilter> for String {
    fn from(filter: FounderTypeFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for FounderTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(ft) => f.write_str(ft.as_str()),
        }
    }
}

/// Location selector; matches on a case-sensitive substring
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationFilter {
    #[default]
    All,
    Contains(String),
}

impl LocationFilter {
    pub fn matches(&self, profile: &Profile) -> bool {
        match self {
            Self::All => true,
            Self::Contains(needle) => profile
                .location
                .as_deref()
                .is_some_and(|location| location.contains(needle.as_str())),
        }
    }
}

impl From<String> for LocationFilter {
    fn from(value: String) -> Self {
        if value.is_empty() || value == ALL {
            Self::All
        } else {
            Self::Contains(value)
        }
    }
}

impl From<&str> for LocationFilter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<LocationFilter> for String {
    fn from(filter: LocationFilter) -> Self {
        match filter {
            LocationFilter::All => ALL.to_string(),
            LocationFilter::Contains(value) => value,
        }
    }
}

/// Ordering selector
///
/// Only best-match ordering is meaningful; all three leave the list in the
/// order the store returned it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    #[serde(rename = "match")]
    BestMatch,
    Recent,
    Active,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BestMatch => "match",
            Self::Recent => "recent",
            Self::Active => "active",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BestMatch => "Best Match",
            Self::Recent => "Recently Joined",
            Self::Active => "Most Active",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "match" => Ok(Self::BestMatch),
            "recent" => Ok(Self::Recent),
            "active" => Ok(Self::Active),
            other => Err(ParseEnumError {
                kind: "sort order",
                value: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Current state of the directory search controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryFilter {
    pub search: String,
    pub founder_type: FounderTypeFilter,
    pub location: LocationFilter,
    pub sort: SortOrder,
}

impl DirectoryFilter {
    /// Reset state offered when nothing matches: `""`, `"all"`, `"all"`
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Reset search and both selectors; the sort choice is kept
    pub fn clear(&mut self) {
        self.search.clear();
        self.founder_type = FounderTypeFilter::All;
        self.location = LocationFilter::All;
    }

    /// Whether no predicate restricts the list
    pub fn is_default(&self) -> bool {
        self.search.is_empty()
            && self.founder_type == FounderTypeFilter::All
            && self.location == LocationFilter::All
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        self.matches_search(profile)
            && self.founder_type.matches(profile)
            && self.location.matches(profile)
    }

    fn matches_search(&self, profile: &Profile) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&profile.first_name, &profile.last_name, &profile.bio]
            .into_iter()
            .flatten()
            .any(|text| text.to_lowercase().contains(&needle))
    }

    /// Filter a loaded list, keeping the store order
    pub fn apply<'a>(&self, profiles: &'a [Profile]) -> Vec<&'a Profile> {
        profiles.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Directory candidates for `current`: everyone else who finished onboarding
pub fn visible_profiles(profiles: Vec<Profile>, current: UserId) -> Vec<Profile> {
    profiles
        .into_iter()
        .filter(|p| p.id != current && p.is_listed())
        .collect()
}
