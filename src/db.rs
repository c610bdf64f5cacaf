use std::path::Path;

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

pub const SEED_NAME: &str = "Test User";
pub const SEED_EMAIL: &str = "test@example.com";
pub const SEED_PIN: &str = "1234";
pub const SEED_ROLE: &str = "Content Creator";

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT UNIQUE,
        pin TEXT,
        role TEXT
    )
"#;

const CREATE_PROFILES: &str = r#"
    CREATE TABLE IF NOT EXISTS profiles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_email TEXT UNIQUE,
        bio TEXT,
        skills TEXT,
        experience_level TEXT,
        rate_per_video TEXT,
        budget_range TEXT,
        niche TEXT,
        FOREIGN KEY (user_email) REFERENCES users(email)
    )
"#;

const SEED_USER: &str = r#"
    INSERT OR IGNORE INTO users (name, email, pin, role)
    VALUES (?, ?, ?, ?)
"#;

/// Opens a pool over the SQLite file at `path`, creating the file if needed.
pub async fn connect(path: &Path) -> anyhow::Result<SqlitePool> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "creating database");
    } else {
        tracing::debug!(path = %path.display(), "opening database");
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .with_context(|| format!("open database at {}", path.display()))
}

/// Creates both tables if absent and inserts the seed user if absent.
///
/// Never alters an existing table or overwrites an existing row, so it is
/// safe to run on every start.
pub async fn ensure_schema(db: &SqlitePool) -> anyhow::Result<()> {
    let mut tx = db.begin().await.context("begin schema tx")?;

    sqlx::query(CREATE_USERS)
        .execute(&mut *tx)
        .await
        .context("create users table")?;
    sqlx::query(CREATE_PROFILES)
        .execute(&mut *tx)
        .await
        .context("create profiles table")?;
    let seeded = sqlx::query(SEED_USER)
        .bind(SEED_NAME)
        .bind(SEED_EMAIL)
        .bind(SEED_PIN)
        .bind(SEED_ROLE)
        .execute(&mut *tx)
        .await
        .context("insert seed user")?;

    tx.commit().await.context("commit schema tx")?;

    if seeded.rows_affected() > 0 {
        tracing::info!(email = SEED_EMAIL, "seed user created");
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::SqlitePool;
    use tempfile::TempDir;

    /// Fresh database file with the schema applied. Keep the `TempDir`
    /// alive for as long as the pool is used.
    pub async fn fresh_db() -> (TempDir, SqlitePool) {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = super::connect(&dir.path().join("test.db"))
            .await
            .expect("connect");
        super::ensure_schema(&db).await.expect("schema");
        (dir, db)
    }
}
