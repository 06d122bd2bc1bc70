//! Domain layer
//!
//! Contains pure feed logic with no external dependencies.
//! - `entities`: Domain models representing core concepts
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
