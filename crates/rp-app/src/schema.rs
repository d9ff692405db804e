//! Network file schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub stations: Vec<StationDef>,
    #[serde(default)]
    pub lines: Vec<LineDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationDef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineDef {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub surcharge: u32,
    pub sections: Vec<SectionDef>,
}

/// One section, referencing stations by their declared ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionDef {
    pub up: u64,
    pub down: u64,
    pub distance: u32,
}
