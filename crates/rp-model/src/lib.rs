//! rp-model: transit network domain model for railpath.
//!
//! Provides:
//! - `Station`: identity-only vertex entity
//! - `Section`: a distance-weighted segment between two adjacent stations
//! - `Line`: a named, ordered chain of sections with an optional surcharge
//!
//! # Example
//!
//! ```
//! use rp_core::StationId;
//! use rp_model::{Line, Station};
//!
//! let a = Station::new(StationId::new(1).unwrap(), "A");
//! let b = Station::new(StationId::new(2).unwrap(), "B");
//! let line = Line::new("Express", "red", a, b, 10, 0).unwrap();
//!
//! assert_eq!(line.stations().len(), 2);
//! assert_eq!(line.sections().len(), 1);
//! ```

pub mod error;
pub mod line;
pub mod section;
pub mod station;

// Re-exports for ergonomics
pub use error::ModelError;
pub use line::Line;
pub use section::Section;
pub use station::Station;
