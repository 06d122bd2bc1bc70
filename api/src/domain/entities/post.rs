//! Post domain entity
//!
//! A single photo feed entry. Posts are immutable snapshots: the only
//! mutation, toggling a like, produces an updated copy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const ID_PREFIX: &str = "post_";

/// Stable identifier of a post, `post_<index>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    /// Identifier of the post generated at `index`
    pub fn from_index(index: i64) -> Self {
        Self(format!("{}{}", ID_PREFIX, index))
    }

    /// Generation index encoded in the id, if the id is well formed
    pub fn index(&self) -> Option<i64> {
        let digits = self.0.strip_prefix(ID_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A photo feed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub image_url: String,
    pub caption: String,
    pub author_name: String,
    pub like_count: i32,
    pub is_liked: bool,
    pub timestamp: DateTime<Utc>,
}

impl Post {
    /// Copy of this post with the like flag flipped and the count adjusted by one.
    ///
    /// Unliking never takes the count below zero.
    pub fn toggled_like(&self) -> Self {
        let like_count = if self.is_liked {
            self.like_count.saturating_sub(1).max(0)
        } else {
            self.like_count.saturating_add(1)
        };

        Self {
            is_liked: !self.is_liked,
            like_count,
            ..self.clone()
        }
    }
}
