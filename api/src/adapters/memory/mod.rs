//! In-memory adapters
//!
//! A mock feed that generates deterministic posts and simulates network latency.

pub mod generator;
pub mod post_source;

pub use post_source::MockPostSource;
