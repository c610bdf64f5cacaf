use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

pub const INSECURE_DEFAULT_SECRET: &str = "change_this_in_production";

/// Upper bound for `SESSION_TTL_MINUTES`: ten years.
pub const MAX_SESSION_TTL_MINUTES: i64 = 60 * 24 * 365 * 10;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub issuer: String,
    pub ttl_minutes: i64,
    pub cookie_secure: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub session: SessionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("database.db"),
            host: "0.0.0.0".into(),
            port: 5000,
            session: SessionConfig {
                secret: INSECURE_DEFAULT_SECRET.into(),
                issuer: "creatorhub".into(),
                ttl_minutes: 60 * 24 * 31,
                cookie_secure: false,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match std::env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {v:?}"))?,
            Err(_) => defaults.port,
        };

        let session = SessionConfig {
            secret: std::env::var("SESSION_SECRET").unwrap_or(defaults.session.secret),
            issuer: std::env::var("SESSION_ISSUER").unwrap_or(defaults.session.issuer),
            ttl_minutes: match std::env::var("SESSION_TTL_MINUTES") {
                Ok(v) => parse_ttl_minutes(&v)
                    .with_context(|| format!("invalid SESSION_TTL_MINUTES {v:?}"))?,
                Err(_) => defaults.session.ttl_minutes,
            },
            cookie_secure: std::env::var("COOKIE_SECURE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.session.cookie_secure),
        };

        Ok(Self {
            database_path: std::env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            host: std::env::var("APP_HOST").unwrap_or(defaults.host),
            port,
            session,
        })
    }

    pub fn uses_insecure_secret(&self) -> bool {
        self.session.secret == INSECURE_DEFAULT_SECRET
    }
}

/// Session lifetime in minutes: a positive integer no larger than
/// [`MAX_SESSION_TTL_MINUTES`].
pub fn parse_ttl_minutes(raw: &str) -> anyhow::Result<i64> {
    let minutes = raw
        .trim()
        .parse::<i64>()
        .context("not an integer number of minutes")?;
    anyhow::ensure!(minutes > 0, "must be positive");
    anyhow::ensure!(
        minutes <= MAX_SESSION_TTL_MINUTES,
        "must be at most {MAX_SESSION_TTL_MINUTES}"
    );
    Ok(minutes)
}
