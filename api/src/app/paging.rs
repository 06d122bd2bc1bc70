//! Paging over the post feed
//!
//! Pages are addressed by an integer key (the page number). A load yields the
//! page plus the keys of its neighbours; an empty page ends the feed.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::Post;
use crate::domain::ports::PostRepository;
use crate::error::AppError;

pub const PAGE_SIZE: i64 = 10;
pub const INITIAL_LOAD_SIZE: i64 = 10;
pub const PREFETCH_DISTANCE: usize = 3;

/// How the listing consumes the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    pub page_size: i64,
    pub initial_load_size: i64,
    /// Load the next page once the viewer is this many items from the end
    pub prefetch_distance: usize,
    pub enable_placeholders: bool,
}

impl PagingConfig {
    /// Whether viewing `position` with `loaded` items in hand should trigger the next load
    pub fn should_prefetch(&self, loaded: usize, position: usize) -> bool {
        position + self.prefetch_distance >= loaded
    }

    /// Parameters for loading `key`; the first load uses the initial size
    pub fn params_for(&self, key: Option<i64>) -> LoadParams {
        let load_size = match key {
            None => self.initial_load_size,
            Some(_) => self.page_size,
        };
        LoadParams { key, load_size }
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            initial_load_size: INITIAL_LOAD_SIZE,
            prefetch_distance: PREFETCH_DISTANCE,
            enable_placeholders: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadParams {
    /// Page to load, `None` for the first load
    pub key: Option<i64>,
    pub load_size: i64,
}

/// A loaded page and the keys of its neighbours
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub data: Vec<Post>,
    pub prev_key: Option<i64>,
    pub next_key: Option<i64>,
}

/// Outcome of a single page load
#[derive(Debug)]
pub enum LoadResult {
    Page(Page),
    /// Recoverable: the consumer may retry the same params
    Error(AppError),
}

impl LoadResult {
    pub fn page(&self) -> Option<&Page> {
        match self {
            LoadResult::Page(page) => Some(page),
            LoadResult::Error(_) => None,
        }
    }
}

/// Pages loaded so far and where the viewer is
#[derive(Debug, Clone, Default)]
pub struct PagingState {
    pub pages: Vec<Page>,
    pub anchor_position: Option<usize>,
}

impl PagingState {
    /// Page containing the item at `position`, or the last page if it is past the end
    pub fn closest_page_to_position(&self, position: usize) -> Option<&Page> {
        let mut offset = 0;
        for page in &self.pages {
            offset += page.data.len();
            if position < offset {
                return Some(page);
            }
        }
        self.pages.last()
    }
}

/// Paging source backed by a post repository
pub struct PostPagingSource<PR>
where
    PR: PostRepository,
{
    posts: Arc<PR>,
}

impl<PR> PostPagingSource<PR>
where
    PR: PostRepository,
{
    pub fn new(posts: Arc<PR>) -> Self {
        Self { posts }
    }

    pub async fn load(&self, params: LoadParams) -> LoadResult {
        let current = params.key.unwrap_or(0);

        match self.posts.get_posts(current, params.load_size).await {
            Ok(data) => {
                let next_key = if data.is_empty() {
                    None
                } else {
                    Some(current + 1)
                };
                LoadResult::Page(Page {
                    data,
                    prev_key: if current == 0 { None } else { Some(current - 1) },
                    next_key,
                })
            }
            Err(e) => {
                tracing::warn!("Failed to load page {}: {}", current, e);
                LoadResult::Error(e.into())
            }
        }
    }

    /// Key to reload from so the viewer stays near the anchor after a refresh
    pub fn refresh_key(&self, state: &PagingState) -> Option<i64> {
        let anchor = state.anchor_position?;
        let page = state.closest_page_to_position(anchor)?;
        page.prev_key
            .map(|key| key + 1)
            .or_else(|| page.next_key.map(|key| key - 1))
    }
}
