//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use cofounder_core::entities::{Profile, ProfileChanges};
use cofounder_core::traits::{ProfileRepository, RepoResult};
use cofounder_core::value_objects::UserId;

use crate::mappers::ProfileUpsert;
use crate::models::ProfileModel;

use super::error::{map_read_error, map_write_error};

const PROFILE_COLUMNS: &str = r"
    id, email, first_name, last_name, linkedin_url, avatar_url, location, timezone,
    founder_type, looking_for, weekly_hours, has_idea, idea_description, looking_to_join,
    calendar_type, calendar_url, bio, skills, is_online, match_score, response_rate,
    avg_response_time, member_since, onboarding_complete, created_at, updated_at
";

/// Insert half of the upsert; absent values fall back to the column default
const INSERT_PROFILE: &str = r"
    INSERT INTO profiles (
        id, email, first_name, last_name, linkedin_url, avatar_url, location, timezone,
        founder_type, looking_for, weekly_hours, has_idea, idea_description, looking_to_join,
        calendar_type, calendar_url, bio, skills, is_online, onboarding_complete, member_since,
        created_at, updated_at
    )
    VALUES (
        $1, $2, $3, $4, $5, $6, $7, $8,
        $9, COALESCE($10::TEXT[], '{}'), $11, $12, $13, COALESCE($14::BOOLEAN, FALSE),
        $15, $16, $17, COALESCE($18::TEXT[], '{}'), COALESCE($19::BOOLEAN, FALSE),
        COALESCE($20::BOOLEAN, FALSE), $21,
        NOW(), NOW()
    )
";

/// Update half for partial changes: absent values keep the stored column.
/// `member_since` and `created_at` are never touched.
const MERGE_ON_CONFLICT: &str = r"
    ON CONFLICT (id) DO UPDATE SET
        email               = COALESCE($2, profiles.email),
        first_name          = COALESCE($3, profiles.first_name),
        last_name           = COALESCE($4, profiles.last_name),
        linkedin_url        = COALESCE($5, profiles.linkedin_url),
        avatar_url          = COALESCE($6, profiles.avatar_url),
        location            = COALESCE($7, profiles.location),
        timezone            = COALESCE($8, profiles.timezone),
        founder_type        = COALESCE($9, profiles.founder_type),
        looking_for         = COALESCE($10::TEXT[], profiles.looking_for),
        weekly_hours        = COALESCE($11, profiles.weekly_hours),
        has_idea            = COALESCE($12, profiles.has_idea),
        idea_description    = COALESCE($13, profiles.idea_description),
        looking_to_join     = COALESCE($14::BOOLEAN, profiles.looking_to_join),
        calendar_type       = COALESCE($15, profiles.calendar_type),
        calendar_url        = COALESCE($16, profiles.calendar_url),
        bio                 = COALESCE($17, profiles.bio),
        skills              = COALESCE($18::TEXT[], profiles.skills),
        is_online           = COALESCE($19::BOOLEAN, profiles.is_online),
        onboarding_complete = COALESCE($20::BOOLEAN, profiles.onboarding_complete),
        updated_at          = NOW()
";

/// Update half for a full wizard payload: every owned column takes the new
/// row's value, absent ones included. `member_since`, `created_at` and the
/// directory stats are never touched.
const REPLACE_ON_CONFLICT: &str = r"
    ON CONFLICT (id) DO UPDATE SET
        email               = EXCLUDED.email,
        first_name          = EXCLUDED.first_name,
        last_name           = EXCLUDED.last_name,
        linkedin_url        = EXCLUDED.linkedin_url,
        avatar_url          = EXCLUDED.avatar_url,
        location            = EXCLUDED.location,
        timezone            = EXCLUDED.timezone,
        founder_type        = EXCLUDED.founder_type,
        looking_for         = EXCLUDED.looking_for,
        weekly_hours        = EXCLUDED.weekly_hours,
        has_idea            = EXCLUDED.has_idea,
        idea_description    = EXCLUDED.idea_description,
        looking_to_join     = EXCLUDED.looking_to_join,
        calendar_type       = EXCLUDED.calendar_type,
        calendar_url        = EXCLUDED.calendar_url,
        bio                 = EXCLUDED.bio,
        skills              = EXCLUDED.skills,
        is_online           = EXCLUDED.is_online,
        onboarding_complete = EXCLUDED.onboarding_complete,
        updated_at          = NOW()
";

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self, id), fields(profile_id = %id))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<Profile>> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1");
        let result = sqlx::query_as::<_, ProfileModel>(&query)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self, id), fields(excluded = %id))]
    async fn list_completed_excluding(&self, id: UserId) -> RepoResult<Vec<Profile>> {
        let query = format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id <> $1 AND onboarding_complete = TRUE"
        );
        let rows = sqlx::query_as::<_, ProfileModel>(&query)
            .bind(id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }

    #[instrument(skip(self, id, changes), fields(profile_id = %id))]
    async fn upsert(&self, id: UserId, changes: &ProfileChanges) -> RepoResult<Profile> {
        let values = ProfileUpsert::new(id, changes);
        let on_conflict = if changes.overwrite {
            REPLACE_ON_CONFLICT
        } else {
            MERGE_ON_CONFLICT
        };
        let query = format!("{INSERT_PROFILE} {on_conflict} RETURNING {PROFILE_COLUMNS}");

        let model = sqlx::query_as::<_, ProfileModel>(&query)
            .bind(values.id)
            .bind(values.email)
            .bind(values.first_name)
            .bind(values.last_name)
            .bind(values.linkedin_url)
            .bind(values.avatar_url)
            .bind(values.location)
            .bind(values.timezone)
            .bind(values.founder_type)
            .bind(values.looking_for)
            .bind(values.weekly_hours)
            .bind(values.has_idea)
            .bind(values.idea_description)
            .bind(values.looking_to_join)
            .bind(values.calendar_type)
            .bind(values.calendar_url)
            .bind(values.bio)
            .bind(values.skills)
            .bind(values.is_online)
            .bind(values.onboarding_complete)
            .bind(values.member_since)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?;

        info!(
            onboarding_complete = model.onboarding_complete,
            overwrite = changes.overwrite,
            "Profile upserted"
        );
        Ok(Profile::from(model))
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(map_read_error)?;
        Ok(())
    }
}
