//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Mocks are written by hand rather than generated: they are small, explicit,
//! and return exactly what a test configured without macro magic.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
