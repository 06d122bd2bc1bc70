//! Post service
//!
//! Single-post use cases behind the detail view: lookup and like toggling.

use std::sync::Arc;

use crate::domain::entities::{Post, PostId};
use crate::domain::ports::PostRepository;
use crate::error::AppError;

pub const POST_NOT_FOUND: &str = "Post not found";

pub struct PostService<PR>
where
    PR: PostRepository,
{
    posts: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(posts: Arc<PR>) -> Self {
        Self { posts }
    }

    /// Look a post up; never loads posts that have not been paged in
    pub async fn get_post(&self, id: &PostId) -> Result<Option<Post>, AppError> {
        Ok(self.posts.get_post_by_id(id).await?)
    }

    /// Toggle the like on a post and return the updated snapshot
    pub async fn toggle_like(&self, id: &PostId) -> Result<Post, AppError> {
        self.posts
            .toggle_like(id)
            .await?
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))
    }
}
