use std::sync::Arc;

use sqlx::SqlitePool;

use crate::{config::AppConfig, db};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Opens the database named by the config and makes sure the schema and
    /// seed user are in place.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let db = db::connect(&config.database_path).await?;
        db::ensure_schema(&db).await?;
        Ok(Self::from_parts(db, Arc::new(config)))
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }
}
