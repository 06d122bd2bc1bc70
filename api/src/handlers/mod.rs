//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod posts;

pub use posts::{get_post, list_posts, toggle_like};
