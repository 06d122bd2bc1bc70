//! Photo Feed API Server

use std::net::SocketAddr;
use std::sync::Arc;

use photofeed_api::adapters::MockPostSource;
use photofeed_api::config::Config;
use photofeed_api::{build_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,photofeed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting photo feed API...");

    let config = Config::from_env();
    tracing::info!(
        max_posts = config.feed.max_posts,
        page_latency_ms = config.feed.latency.page.as_millis() as u64,
        "Mock feed configured"
    );

    let posts = Arc::new(MockPostSource::new(config.feed));
    let app = build_router(AppState::new(posts));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
