//! Profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: Uuid,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub linkedin_url: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    pub founder_type: Option<String>,
    pub looking_for: Vec<String>,
    pub weekly_hours: Option<String>,
    pub has_idea: Option<String>,
    pub idea_description: Option<String>,
    pub looking_to_join: bool,
    pub calendar_type: Option<String>,
    pub calendar_url: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub is_online: bool,
    pub match_score: Option<i32>,
    pub response_rate: Option<String>,
    pub avg_response_time: Option<String>,
    pub member_since: Option<String>,
    pub onboarding_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
