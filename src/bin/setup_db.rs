//! Creates the database file, both tables and the seed user, then exits.

use anyhow::Context;
use creatorhub::{app, config::AppConfig, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    app::init_tracing();

    let config = AppConfig::from_env()?;
    let pool = db::connect(&config.database_path).await?;
    db::ensure_schema(&pool)
        .await
        .context("initialize schema")?;
    pool.close().await;

    tracing::info!(
        path = %config.database_path.display(),
        email = db::SEED_EMAIL,
        pin = db::SEED_PIN,
        "database setup complete with test user"
    );
    Ok(())
}
