//! Model-specific error types.

use thiserror::Error;

/// Violations of the line/section invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Section endpoints must be distinct stations: {station}")]
    SameStations { station: String },

    #[error("Section distance must be positive")]
    ZeroDistance,

    #[error("Both endpoints already belong to line {line}")]
    AlreadyConnected { line: String },

    #[error("Neither endpoint belongs to line {line}")]
    Disconnected { line: String },

    #[error("Inserted section distance {distance} must be shorter than the existing {existing}")]
    DistanceTooLong { distance: u32, existing: u32 },
}
