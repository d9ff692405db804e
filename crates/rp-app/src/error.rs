//! Error types for the rp-app service layer.

use rp_model::ModelError;
use rp_routing::RoutingError;

use crate::validate::ValidationError;

/// Application error type that wraps errors from the domain crates and
/// provides a unified interface for front-ends.
///
/// The first three variants are the user-facing rejections of a path
/// request; the rest belong to the network-file layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No lines available to route over")]
    NoLinesAvailable,

    #[error("Source and target stations are the same: {station}")]
    SameSourceAndTarget { station: String },

    #[error("{0}")]
    StationsNotConnected(#[from] RoutingError),

    #[error("Station not found in network: {id}")]
    StationNotFound { id: u64 },

    #[error("Network validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Network model error: {0}")]
    Model(#[from] ModelError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for rp-app operations.
pub type AppResult<T> = Result<T, AppError>;
