//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod feed_service;
pub mod paging;
pub mod post_service;

pub use feed_service::{FeedPage, FeedService};
pub use paging::{LoadParams, LoadResult, Page, PagingConfig, PagingState, PostPagingSource};
pub use post_service::{PostService, POST_NOT_FOUND};
