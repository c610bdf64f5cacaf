use sqlx::SqlitePool;

use super::repo_types::{Profile, ProfileFields};
use crate::error::AppError;

impl Profile {
    /// Profile for the given user email, if one was ever saved.
    pub async fn find_by_email(
        db: &SqlitePool,
        user_email: &str,
    ) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, user_email, bio, skills, experience_level,
                   rate_per_video, budget_range, niche
            FROM profiles
            WHERE user_email = ?
            "#,
        )
        .bind(user_email)
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }

    /// Insert the profile for `user_email`, or overwrite all six fields of
    /// the existing one. Returns the row as stored. An email with no user
    /// row fails the foreign key and maps to [`AppError::UnknownUser`].
    pub async fn upsert(
        db: &SqlitePool,
        user_email: &str,
        fields: &ProfileFields,
    ) -> Result<Profile, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles
                (user_email, bio, skills, experience_level, rate_per_video, budget_range, niche)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_email) DO UPDATE SET
                bio = excluded.bio,
                skills = excluded.skills,
                experience_level = excluded.experience_level,
                rate_per_video = excluded.rate_per_video,
                budget_range = excluded.budget_range,
                niche = excluded.niche
            RETURNING id, user_email, bio, skills, experience_level,
                      rate_per_video, budget_range, niche
            "#,
        )
        .bind(user_email)
        .bind(&fields.bio)
        .bind(&fields.skills)
        .bind(&fields.experience_level)
        .bind(&fields.rate_per_video)
        .bind(&fields.budget_range)
        .bind(&fields.niche)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::UnknownUser
            }
            other => AppError::Database(other),
        })?;
        Ok(profile)
    }

    pub async fn count_for(db: &SqlitePool, user_email: &str) -> Result<i64, AppError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles WHERE user_email = ?")
            .bind(user_email)
            .fetch_one(db)
            .await?;
        Ok(n)
    }
}
