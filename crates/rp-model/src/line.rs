//! Line: a named, ordered chain of sections.

use crate::error::ModelError;
use crate::section::Section;
use crate::station::Station;

/// A transit line.
///
/// Sections always form a connected chain: each section's up station is the
/// previous section's down station. `add_section` preserves that invariant by
/// appending at the tail, prepending at the head, or splitting an existing
/// section when the new one lands mid-chain.
///
/// The surcharge is a flat premium added once per trip for riding this line
/// (0 for ordinary lines).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: String,
    color: String,
    surcharge: u32,
    sections: Vec<Section>,
}

impl Line {
    /// Create a line with its first section.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        up: Station,
        down: Station,
        distance: u32,
        surcharge: u32,
    ) -> Result<Self, ModelError> {
        let first = Section::new(up, down, distance)?;
        Ok(Self {
            name: name.into(),
            color: color.into(),
            surcharge,
            sections: vec![first],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn surcharge(&self) -> u32 {
        self.surcharge
    }

    /// All sections in chain order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All stations the line touches, in chain order.
    pub fn stations(&self) -> Vec<Station> {
        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        stations.push(self.head().up().clone());
        for section in &self.sections {
            stations.push(section.down().clone());
        }
        stations
    }

    /// Whether the given station lies on this line.
    pub fn contains(&self, station: &Station) -> bool {
        self.sections.iter().any(|s| s.touches(station))
    }

    /// Insert a section, keeping the chain connected.
    ///
    /// Exactly one endpoint of the new section must already be on the line.
    /// When the shared endpoint is the chain's head or tail the section is
    /// attached at that end; otherwise the overlapping existing section is
    /// split and the remainder keeps the leftover distance.
    pub fn add_section(&mut self, section: Section) -> Result<(), ModelError> {
        let has_up = self.contains(section.up());
        let has_down = self.contains(section.down());

        if has_up && has_down {
            return Err(ModelError::AlreadyConnected {
                line: self.name.clone(),
            });
        }
        if !has_up && !has_down {
            return Err(ModelError::Disconnected {
                line: self.name.clone(),
            });
        }

        if has_up {
            if self.tail().down() == section.up() {
                self.sections.push(section);
                return Ok(());
            }
            // Mid-chain: the shared station heads some existing section.
            let idx = self
                .sections
                .iter()
                .position(|s| s.up() == section.up())
                .expect("every non-tail station heads a section");
            let existing = self.sections[idx].clone();
            Self::check_split_distance(&section, &existing)?;
            let remainder = Section::new(
                section.down().clone(),
                existing.down().clone(),
                existing.distance() - section.distance(),
            )?;
            self.sections[idx] = remainder;
            self.sections.insert(idx, section);
        } else {
            if self.head().up() == section.down() {
                self.sections.insert(0, section);
                return Ok(());
            }
            let idx = self
                .sections
                .iter()
                .position(|s| s.down() == section.down())
                .expect("every non-head station tails a section");
            let existing = self.sections[idx].clone();
            Self::check_split_distance(&section, &existing)?;
            let lead = Section::new(
                existing.up().clone(),
                section.up().clone(),
                existing.distance() - section.distance(),
            )?;
            self.sections[idx] = lead;
            self.sections.insert(idx + 1, section);
        }
        Ok(())
    }

    fn check_split_distance(section: &Section, existing: &Section) -> Result<(), ModelError> {
        if section.distance() >= existing.distance() {
            return Err(ModelError::DistanceTooLong {
                distance: section.distance(),
                existing: existing.distance(),
            });
        }
        Ok(())
    }

    fn head(&self) -> &Section {
        self.sections.first().expect("line has at least one section")
    }

    fn tail(&self) -> &Section {
        self.sections.last().expect("line has at least one section")
    }
}
