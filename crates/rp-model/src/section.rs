//! Section: one distance-weighted segment of a line.

use crate::error::ModelError;
use crate::station::Station;

/// A segment between two adjacent stations on a line.
///
/// The up/down naming follows track direction conventions; the segment itself
/// is traversable both ways. Distance is a positive integer (km).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    up: Station,
    down: Station,
    distance: u32,
}

impl Section {
    /// Create a section. Endpoints must be distinct and distance positive.
    pub fn new(up: Station, down: Station, distance: u32) -> Result<Self, ModelError> {
        if up == down {
            return Err(ModelError::SameStations {
                station: up.name().to_string(),
            });
        }
        if distance == 0 {
            return Err(ModelError::ZeroDistance);
        }
        Ok(Self { up, down, distance })
    }

    pub fn up(&self) -> &Station {
        &self.up
    }

    pub fn down(&self) -> &Station {
        &self.down
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Whether the given station is one of this section's endpoints.
    pub fn touches(&self, station: &Station) -> bool {
        self.up == *station || self.down == *station
    }
}
