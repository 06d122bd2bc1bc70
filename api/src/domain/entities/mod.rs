//! Domain entities
//!
//! Pure domain models representing the photo feed.

pub mod post;

pub use post::{Post, PostId};
