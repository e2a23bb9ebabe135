//! Profile entity <-> model mapper

use std::str::FromStr;

use cofounder_core::entities::{FounderType, ParseEnumError, Profile, ProfileChanges};
use cofounder_core::value_objects::UserId;
use tracing::warn;
use uuid::Uuid;

use crate::models::ProfileModel;

/// Parse stored enum text; unknown values are logged and read back as absent
fn parse_column<T>(column: &'static str, id: Uuid, value: Option<String>) -> Option<T>
where
    T: FromStr<Err = ParseEnumError>,
{
    let value = value?;
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(profile_id = %id, column, error = %e, "Ignoring unknown enum value");
            None
        }
    }
}

fn parse_founder_types(id: Uuid, values: Vec<String>) -> Vec<FounderType> {
    values
        .into_iter()
        .filter_map(|value| parse_column("looking_for", id, Some(value)))
        .collect()
}

/// Convert ProfileModel to Profile entity
impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        let id = model.id;
        Profile {
            id: UserId::new(id),
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            linkedin_url: model.linkedin_url,
            avatar_url: model.avatar_url,
            location: model.location,
            timezone: model.timezone,
            founder_type: parse_column("founder_type", id, model.founder_type),
            looking_for: parse_founder_types(id, model.looking_for),
            weekly_hours: model.weekly_hours,
            has_idea: parse_column("has_idea", id, model.has_idea),
            idea_description: model.idea_description,
            looking_to_join: model.looking_to_join,
            calendar_type: parse_column("calendar_type", id, model.calendar_type),
            calendar_url: model.calendar_url,
            bio: model.bio,
            skills: model.skills,
            is_online: model.is_online,
            match_score: model.match_score,
            response_rate: model.response_rate,
            avg_response_time: model.avg_response_time,
            member_since: model.member_since,
            onboarding_complete: model.onboarding_complete,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Column values of a partial profile write, ready to bind
pub struct ProfileUpsert<'a> {
    pub id: Uuid,
    pub email: Option<&'a str>,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub linkedin_url: Option<&'a str>,
    pub avatar_url: Option<&'a str>,
    pub location: Option<&'a str>,
    pub timezone: Option<&'a str>,
    pub founder_type: Option<&'static str>,
    pub looking_for: Option<Vec<String>>,
    pub weekly_hours: Option<&'a str>,
    pub has_idea: Option<&'static str>,
    pub idea_description: Option<&'a str>,
    pub looking_to_join: Option<bool>,
    pub calendar_type: Option<&'static str>,
    pub calendar_url: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub skills: Option<&'a [String]>,
    pub is_online: Option<bool>,
    pub onboarding_complete: Option<bool>,
    pub member_since: Option<&'a str>,
}

impl<'a> ProfileUpsert<'a> {
    pub fn new(id: UserId, changes: &'a ProfileChanges) -> Self {
        Self {
            id: id.into_inner(),
            email: changes.email.as_deref(),
            first_name: changes.first_name.as_deref(),
            last_name: changes.last_name.as_deref(),
            linkedin_url: changes.linkedin_url.as_deref(),
            avatar_url: changes.avatar_url.as_deref(),
            location: changes.location.as_deref(),
            timezone: changes.timezone.as_deref(),
            founder_type: changes.founder_type.map(FounderType::as_str),
            looking_for: changes
                .looking_for
                .as_ref()
                .map(|types| types.iter().map(|t| t.as_str().to_string()).collect()),
            weekly_hours: changes.weekly_hours.as_deref(),
            has_idea: changes.has_idea.map(|h| h.as_str()),
            idea_description: changes.idea_description.as_deref(),
            looking_to_join: changes.looking_to_join,
            calendar_type: changes.calendar_type.map(|c| c.as_str()),
            calendar_url: changes.calendar_url.as_deref(),
            bio: changes.bio.as_deref(),
            skills: changes.skills.as_deref(),
            is_online: changes.is_online,
            onboarding_complete: changes.onboarding_complete,
            member_since: changes.member_since.as_deref(),
        }
    }
}
