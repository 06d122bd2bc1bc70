//! Feed service
//!
//! Serves the photo feed page by page. Listing consumers either drive the
//! paging source directly or ask for an explicit page number.

use std::sync::Arc;

use serde::Serialize;

use super::paging::{LoadParams, LoadResult, PagingConfig, PostPagingSource};
use crate::domain::entities::Post;
use crate::domain::ports::PostRepository;
use crate::error::AppError;

/// One page of the feed with links to its neighbours
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub page: i64,
    pub page_size: i64,
    pub posts: Vec<Post>,
    /// `None` once the feed is exhausted
    pub next_page: Option<i64>,
    pub prev_page: Option<i64>,
}

/// Service for paging through the feed
pub struct FeedService<PR>
where
    PR: PostRepository,
{
    paging: PostPagingSource<PR>,
    config: PagingConfig,
}

impl<PR> FeedService<PR>
where
    PR: PostRepository,
{
    pub fn new(posts: Arc<PR>, config: PagingConfig) -> Self {
        Self {
            paging: PostPagingSource::new(posts),
            config,
        }
    }

    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    /// Load the page at `key` (the first page when `None`)
    pub async fn load_page(&self, key: Option<i64>) -> LoadResult {
        self.paging.load(self.config.params_for(key)).await
    }

    /// Load an explicit page, defaulting the size to the configured page size
    pub async fn page(&self, page: i64, page_size: Option<i64>) -> Result<FeedPage, AppError> {
        let page_size = page_size.unwrap_or(self.config.page_size);
        let params = LoadParams {
            key: Some(page),
            load_size: page_size,
        };

        match self.paging.load(params).await {
            LoadResult::Page(loaded) => Ok(FeedPage {
                page,
                page_size,
                posts: loaded.data,
                next_page: loaded.next_key,
                prev_page: loaded.prev_key,
            }),
            LoadResult::Error(e) => Err(e),
        }
    }
}
