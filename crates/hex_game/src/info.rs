//! The terrain info surface.

use std::fmt;

use hex_math::{CubeCoordinate, OffsetCoordinate};
use hex_terrain::Resource;

/// What a terrain-info click shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileReport {
    pub offset: OffsetCoordinate,
    pub cube: CubeCoordinate,
    pub tile_index: u32,
    pub resources: Vec<Resource>,
}

impl fmt::Display for TileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OffsetCoords: {} , CubeCoords: {} , Index: {} Resources: ",
            self.offset, self.cube, self.tile_index
        )?;
        for resource in &self.resources {
            write!(f, " {resource}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoPanel {
    visible: bool,
    report: Option<TileReport>,
}

impl InfoPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the report and make the panel visible.
    pub fn show(&mut self, report: TileReport) {
        self.report = Some(report);
        self.visible = true;
    }

    /// Hide the panel. The last report is kept.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn report(&self) -> Option<&TileReport> {
        self.report.as_ref()
    }
}
