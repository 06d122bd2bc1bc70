//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Post, PostId};
use crate::domain::ports::PostRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Post Repository
// ============================================================================

/// Repository holding exactly the posts a test put in it, in insertion order
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a post for testing, replacing any post with the same id
    pub fn with_post(self, post: Post) -> Self {
        {
            let mut posts = self.posts.write().unwrap();
            if let Some(i) = posts.iter().position(|p| p.id == post.id) {
                posts[i] = post;
            } else {
                posts.push(post);
            }
        }
        self
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn get_posts(&self, page: i64, page_size: i64) -> Result<Vec<Post>, DomainError> {
        if page < 0 || page_size <= 0 {
            return Err(DomainError::InvalidInput("bad paging".to_string()));
        }
        let posts = self.posts.read().unwrap();
        Ok(posts
            .iter()
            .skip((page * page_size) as usize)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn get_post_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().unwrap();
        Ok(posts.iter().find(|p| &p.id == id).cloned())
    }

    async fn toggle_like(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        let mut posts = self.posts.write().unwrap();
        Ok(posts.iter_mut().find(|p| &p.id == id).map(|post| {
            *post = post.toggled_like();
            post.clone()
        }))
    }
}

// ============================================================================
// Failing Post Repository
// ============================================================================

/// Repository whose every call fails
pub struct FailingPostRepository;

#[async_trait]
impl PostRepository for FailingPostRepository {
    async fn get_posts(&self, _page: i64, _page_size: i64) -> Result<Vec<Post>, DomainError> {
        Err(DomainError::InvalidInput("feed unavailable".to_string()))
    }

    async fn get_post_by_id(&self, _id: &PostId) -> Result<Option<Post>, DomainError> {
        Err(DomainError::InvalidInput("feed unavailable".to_string()))
    }

    async fn toggle_like(&self, _id: &PostId) -> Result<Option<Post>, DomainError> {
        Err(DomainError::InvalidInput("feed unavailable".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_post;

    fn post_with_id(id: &str) -> Post {
        Post {
            id: PostId::from(id),
            ..test_post(0)
        }
    }

    #[tokio::test]
    async fn malformed_ids_are_kept_apart() {
        let repo = InMemoryPostRepository::new()
            .with_post(post_with_id("draft"))
            .with_post(post_with_id("post_x"));

        assert!(repo.get_post_by_id(&PostId::from("draft")).await.unwrap().is_some());
        assert!(repo.get_post_by_id(&PostId::from("post_x")).await.unwrap().is_some());
        assert_eq!(repo.get_posts(0, 10).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn same_id_replaces_previous_post() {
        let liked = Post {
            is_liked: true,
            ..test_post(1)
        };
        let repo = InMemoryPostRepository::new()
            .with_post(test_post(1))
            .with_post(liked.clone());

        assert_eq!(repo.get_posts(0, 10).await.unwrap(), vec![liked]);
    }
}
