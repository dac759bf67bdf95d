use std::sync::Arc;

use anyhow::Context;
use story_relay::config::load_config;
use story_relay::create_app;
use story_relay::handler::StoryHandler;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config();
    if config.messenger.access_token.is_none() || config.messenger.verify_token.is_none() {
        anyhow::bail!(
            "page access token and verification token are required \
             (STORY_RELAY_ACCESS_TOKEN, STORY_RELAY_VERIFY_TOKEN)"
        );
    }

    let http = reqwest::Client::new();
    let handler = Arc::new(StoryHandler::new(
        http,
        &config.feed,
        config.messenger.clone(),
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = create_app(config, handler);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
