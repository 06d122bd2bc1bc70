//! Post handlers
//!
//! Endpoints for the photo feed: paged listing, single post lookup and like toggling.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::app::{FeedPage, POST_NOT_FOUND};
use crate::domain::entities::{Post, PostId};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for GET /posts
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(alias = "page_size")]
    pub page_size: Option<i64>,
}

/// GET /posts?page=N&pageSize=M
///
/// Returns one page of the feed. An empty `posts` array with `nextPage: null`
/// means the feed is exhausted.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<FeedPage>, AppError> {
    let page = state.feed_service.page(query.page, query.page_size).await?;
    Ok(Json(page))
}

/// GET /posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, AppError> {
    let post = state
        .post_service
        .get_post(&PostId::from(id))
        .await?
        .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))?;

    Ok(Json(post))
}

/// POST /posts/:id/like
///
/// Toggles the like and returns the updated post.
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, AppError> {
    let post = state.post_service.toggle_like(&PostId::from(id)).await?;
    Ok(Json(post))
}
