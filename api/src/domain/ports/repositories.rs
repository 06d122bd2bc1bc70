//! Repository port traits
//!
//! These traits define the interface for reading and mutating posts.
//! Implementations are provided by adapters (e.g., the in-memory mock feed).

use async_trait::async_trait;

use crate::domain::entities::{Post, PostId};
use crate::error::DomainError;

/// Repository for Post entities
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch a page of posts (0-indexed page number).
    ///
    /// A page shorter than `page_size` (empty once past the end) means there
    /// is no more data. Negative `page` or non-positive `page_size` is
    /// rejected with `DomainError::InvalidInput`.
    async fn get_posts(&self, page: i64, page_size: i64) -> Result<Vec<Post>, DomainError>;

    /// Get a single post by ID, `None` if it has never been loaded
    async fn get_post_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError>;

    /// Toggle like status for a post, returning the updated post or `None` if not found
    async fn toggle_like(&self, id: &PostId) -> Result<Option<Post>, DomainError>;
}
