//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{Duration, Utc};

use crate::domain::entities::{Post, PostId};

/// Create a test post for `index` with fixed, recognisable content
pub fn test_post(index: i64) -> Post {
    Post {
        id: PostId::from_index(index),
        image_url: "https://example.com/image.jpg".to_string(),
        caption: "Test caption".to_string(),
        author_name: "Test Author".to_string(),
        like_count: 100,
        is_liked: false,
        timestamp: Utc::now() - Duration::hours(index),
    }
}

/// Create a test post that has already been liked
pub fn test_liked_post(index: i64) -> Post {
    Post {
        like_count: 101,
        is_liked: true,
        ..test_post(index)
    }
}
