//! Photo Feed API
//!
//! Serves a paged photo feed with single-post lookup and like toggling,
//! backed by a deterministic in-memory mock feed that simulates network latency.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::MockPostSource;
use app::{FeedService, PagingConfig, PostService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<MockPostSource>>,
    pub post_service: Arc<PostService<MockPostSource>>,
}

impl AppState {
    pub fn new(posts: Arc<MockPostSource>) -> Self {
        Self {
            feed_service: Arc::new(FeedService::new(posts.clone(), PagingConfig::default())),
            post_service: Arc::new(PostService::new(posts)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/posts", get(handlers::list_posts))
        .route("/posts/:id", get(handlers::get_post))
        .route("/posts/:id/like", post(handlers::toggle_like))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
