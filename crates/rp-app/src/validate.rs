//! Network file validation logic.

use std::collections::HashSet;

use crate::schema::NetworkDef;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: u64, context: String },

    #[error("Duplicate name: {name} in {context}")]
    DuplicateName { name: String, context: String },

    #[error("Missing reference: station {id} in {context}")]
    MissingReference { id: u64, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_network(def: &NetworkDef) -> Result<(), ValidationError> {
    if def.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: def.version,
        });
    }

    let mut station_ids = HashSet::new();
    for station in &def.stations {
        if station.id == 0 {
            return Err(ValidationError::InvalidValue {
                field: "station.id".to_string(),
                value: "0".to_string(),
                reason: "station ids start at 1".to_string(),
            });
        }
        if !station_ids.insert(station.id) {
            return Err(ValidationError::DuplicateId {
                id: station.id,
                context: "stations".to_string(),
            });
        }
    }

    let mut line_names = HashSet::new();
    for line in &def.lines {
        if !line_names.insert(&line.name) {
            return Err(ValidationError::DuplicateName {
                name: line.name.clone(),
                context: "lines".to_string(),
            });
        }
        if line.sections.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: format!("lines.{}.sections", line.name),
                value: "[]".to_string(),
                reason: "a line needs at least one section".to_string(),
            });
        }
        for section in &line.sections {
            for endpoint in [section.up, section.down] {
                if !station_ids.contains(&endpoint) {
                    return Err(ValidationError::MissingReference {
                        id: endpoint,
                        context: format!("line {}", line.name),
                    });
                }
            }
            if section.up == section.down {
                return Err(ValidationError::InvalidValue {
                    field: format!("lines.{}.sections", line.name),
                    value: section.up.to_string(),
                    reason: "section endpoints must differ".to_string(),
                });
            }
            if section.distance == 0 {
                return Err(ValidationError::InvalidValue {
                    field: format!("lines.{}.sections.distance", line.name),
                    value: "0".to_string(),
                    reason: "distance must be positive".to_string(),
                });
            }
        }
    }

    Ok(())
}
