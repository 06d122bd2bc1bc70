//! In-memory adapter for PostRepository
//!
//! Posts are generated lazily on paged fetches and cached for the lifetime of
//! the source. Point lookups and like toggles only ever see cached posts.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

use super::generator::generate_post;
use crate::config::FeedSettings;
use crate::domain::entities::{Post, PostId};
use crate::domain::ports::PostRepository;
use crate::error::DomainError;

/// Mock feed implementation of PostRepository
pub struct MockPostSource {
    settings: FeedSettings,
    posts: RwLock<HashMap<PostId, Post>>,
}

impl MockPostSource {
    pub fn new(settings: FeedSettings) -> Self {
        Self {
            settings,
            posts: RwLock::new(HashMap::new()),
        }
    }

    /// Number of posts generated so far
    pub async fn cached_len(&self) -> usize {
        self.posts.read().await.len()
    }

    /// Whether `id` names a post this source could ever generate
    pub fn is_addressable(&self, id: &PostId) -> bool {
        id.index().is_some_and(|index| {
            index < self.settings.max_posts && PostId::from_index(index) == *id
        })
    }

    // Delay happens before the cache is touched, so a dropped future leaves no trace.
    async fn simulate_latency(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for MockPostSource {
    fn default() -> Self {
        Self::new(FeedSettings::default())
    }
}

#[async_trait]
impl PostRepository for MockPostSource {
    async fn get_posts(&self, page: i64, page_size: i64) -> Result<Vec<Post>, DomainError> {
        if page < 0 {
            return Err(DomainError::InvalidInput(format!(
                "page must be non-negative, got {}",
                page
            )));
        }
        if page_size <= 0 {
            return Err(DomainError::InvalidInput(format!(
                "page_size must be positive, got {}",
                page_size
            )));
        }

        Self::simulate_latency(self.settings.latency.page).await;

        let max_posts = self.settings.max_posts;
        let Some(start) = page.checked_mul(page_size) else {
            return Ok(Vec::new());
        };
        if start >= max_posts {
            tracing::debug!(page, page_size, "Page starts past the end of the feed");
            return Ok(Vec::new());
        }
        let end = start.saturating_add(page_size).min(max_posts);

        let now = Utc::now();
        let mut posts = self.posts.write().await;
        let mut generated = 0usize;
        let page_posts = (start..end)
            .map(|index| {
                posts
                    .entry(PostId::from_index(index))
                    .or_insert_with(|| {
                        generated += 1;
                        generate_post(index, now)
                    })
                    .clone()
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            page,
            page_size,
            returned = page_posts.len(),
            generated,
            "Loaded feed page"
        );

        Ok(page_posts)
    }

    async fn get_post_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        Self::simulate_latency(self.settings.latency.lookup).await;

        if !self.is_addressable(id) {
            tracing::debug!(post_id = %id, "Post id outside the feed");
            return Ok(None);
        }

        let posts = self.posts.read().await;
        let post = posts.get(id).cloned();
        if post.is_none() {
            tracing::debug!(post_id = %id, "Post not in cache");
        }
        Ok(post)
    }

    async fn toggle_like(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        Self::simulate_latency(self.settings.latency.toggle).await;

        if !self.is_addressable(id) {
            tracing::debug!(post_id = %id, "Cannot toggle like outside the feed");
            return Ok(None);
        }

        let mut posts = self.posts.write().await;
        let Some(current) = posts.get(id) else {
            tracing::debug!(post_id = %id, "Cannot toggle like on unknown post");
            return Ok(None);
        };

        let updated = current.toggled_like();
        posts.insert(id.clone(), updated.clone());

        tracing::info!(
            post_id = %id,
            is_liked = updated.is_liked,
            like_count = updated.like_count,
            "Toggled like"
        );

        Ok(Some(updated))
    }
}
