use anyhow::Context;

use word_mod_api::config::AppConfig;
use word_mod_api::state::AppState;
use word_mod_api::words::ApprovedWordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SECRET_KEY, WORDS_FILE, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();

    // A permission failure here is fatal; a missing file is just an empty list.
    let store =
        ApprovedWordStore::load(&config.words_file).context("failed to load approved words")?;
    tracing::info!(count = store.words().len(), "approved words loaded");

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(config, store);
    let app = word_mod_api::app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("word moderation API listening on http://{bind_addr}");

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
