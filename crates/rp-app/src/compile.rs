//! Compile a validated network file into the domain model.

use std::collections::HashMap;

use rp_core::StationId;
use rp_model::{Line, Section, Station};

use crate::error::{AppError, AppResult};
use crate::schema::NetworkDef;
use crate::validate::ValidationError;

/// A compiled network: the station catalogue plus the line set, ready to be
/// handed to the path service.
#[derive(Debug, Clone)]
pub struct Network {
    stations: Vec<Station>,
    lines: Vec<Line>,
}

impl Network {
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Look up a station by its raw id.
    pub fn station(&self, id: u64) -> AppResult<&Station> {
        self.stations
            .iter()
            .find(|s| s.id().get() == id)
            .ok_or(AppError::StationNotFound { id })
    }
}

/// Turn a validated `NetworkDef` into stations and lines.
///
/// Sections are fed through `Line::add_section`, so a file may list them in
/// any insertable order (tail, head, or mid-chain split); orders that leave
/// the chain disconnected are rejected via `ModelError`.
pub fn compile_network(def: &NetworkDef) -> AppResult<Network> {
    let mut by_id: HashMap<u64, Station> = HashMap::new();
    let mut stations = Vec::with_capacity(def.stations.len());
    for station_def in &def.stations {
        let id = StationId::new(station_def.id).map_err(|_| {
            AppError::Validation(ValidationError::InvalidValue {
                field: "station.id".to_string(),
                value: station_def.id.to_string(),
                reason: "station ids start at 1".to_string(),
            })
        })?;
        let station = Station::new(id, station_def.name.clone());
        by_id.insert(station_def.id, station.clone());
        stations.push(station);
    }

    let resolve = |raw: u64| -> AppResult<Station> {
        by_id
            .get(&raw)
            .cloned()
            .ok_or(AppError::StationNotFound { id: raw })
    };

    let mut lines = Vec::with_capacity(def.lines.len());
    for line_def in &def.lines {
        let mut sections = line_def.sections.iter();
        let first = sections.next().ok_or_else(|| {
            AppError::Validation(ValidationError::InvalidValue {
                field: format!("lines.{}.sections", line_def.name),
                value: "[]".to_string(),
                reason: "a line needs at least one section".to_string(),
            })
        })?;

        let mut line = Line::new(
            &line_def.name,
            &line_def.color,
            resolve(first.up)?,
            resolve(first.down)?,
            first.distance,
            line_def.surcharge,
        )?;
        for section_def in sections {
            let section = Section::new(
                resolve(section_def.up)?,
                resolve(section_def.down)?,
                section_def.distance,
            )?;
            line.add_section(section)?;
        }
        lines.push(line);
    }

    Ok(Network { stations, lines })
}
