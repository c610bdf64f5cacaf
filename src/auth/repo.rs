use sqlx::SqlitePool;

use crate::{auth::repo_types::User, error::AppError};

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, pin, role
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find the user whose email and PIN both match exactly.
    pub async fn find_by_credentials(
        db: &SqlitePool,
        email: &str,
        pin: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, pin, role
            FROM users
            WHERE email = ? AND pin = ?
            "#,
        )
        .bind(email)
        .bind(pin)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a new user. A clash on the unique email maps to
    /// [`AppError::EmailTaken`].
    pub async fn create(
        db: &SqlitePool,
        name: &str,
        email: &str,
        pin: &str,
        role: &str,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, pin, role)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, pin, role
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(pin)
        .bind(role)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::EmailTaken
            }
            other => AppError::Database(other),
        })?;
        Ok(user)
    }

    pub async fn count(db: &SqlitePool) -> Result<i64, AppError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await?;
        Ok(n)
    }
}
