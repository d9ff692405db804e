//! rp-app: service layer for railpath.
//!
//! This crate ties the domain crates together behind a small front-end
//! surface: loading and validating network files, compiling them into the
//! domain model, and running the path computation (shortest path + fare +
//! age discount) end to end.

pub mod compile;
pub mod error;
pub mod path_service;
pub mod schema;
pub mod validate;

// Re-export key types for convenience
pub use compile::{compile_network, Network};
pub use error::{AppError, AppResult};
pub use path_service::{compute_path, PathResult};
pub use schema::{LineDef, NetworkDef, SectionDef, StationDef};
pub use validate::{validate_network, ValidationError, LATEST_VERSION};

/// Load, validate, and compile a network from a YAML file.
pub fn load_yaml(path: &std::path::Path) -> AppResult<Network> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_yaml::from_str(&content)?;
    validate_network(&def)?;
    compile_network(&def)
}

/// Load, validate, and compile a network from a JSON file.
pub fn load_json(path: &std::path::Path) -> AppResult<Network> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_json::from_str(&content)?;
    validate_network(&def)?;
    compile_network(&def)
}
