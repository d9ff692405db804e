//! rp-core: stable foundation for railpath.
//!
//! Contains:
//! - ids (stable compact IDs for model objects)
//! - error (id construction errors)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RpError, RpResult};
pub use ids::*;
