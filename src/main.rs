use creatorhub::{app, config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    app::init_tracing();

    let config = AppConfig::from_env()?;
    if config.uses_insecure_secret() {
        tracing::warn!("SESSION_SECRET not set; using the insecure default secret");
    }

    let app_state = AppState::init(config).await?;
    let config = app_state.config.clone();

    app::serve(app::build_app(app_state), &config).await
}
