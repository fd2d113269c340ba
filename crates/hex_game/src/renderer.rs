//! Reachable-tile and path markers.
//!
//! Every change clears the marker set and draws it again from scratch.

use hex_math::{CubeCoordinate, TileSize, Vec2, hex_outline};
use tracing::debug;

use crate::services::{GridService, TileLayer, resolve_tile};

/// Inset of a marker outline inside its tile, in pixels.
pub const MARKER_INSET: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// The first coordinate of the drawn set.
    Start,
    Step,
}

impl MarkerStyle {
    /// Fill colour as `0xRRGGBB`.
    #[must_use]
    pub const fn color(self) -> u32 {
        match self {
            Self::Start => 0x80_0010,
            Self::Step => 0x10_0089,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub coordinate: CubeCoordinate,
    /// Top-left corner of the marked tile.
    pub pixel: Vec2,
    pub style: MarkerStyle,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovementRenderer {
    markers: Vec<Marker>,
}

impl MovementRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the markers with one per resolvable coordinate of `coords`.
    ///
    /// Coordinates without a tile are skipped. Returns the number of markers
    /// drawn.
    pub fn create(&mut self, coords: &[CubeCoordinate], grid: &dyn GridService, tiles: &dyn TileLayer) -> usize {
        self.reset();
        for &coordinate in coords {
            let Some(tile) = resolve_tile(grid, tiles, coordinate) else {
                continue;
            };
            let style = if self.markers.is_empty() {
                MarkerStyle::Start
            } else {
                MarkerStyle::Step
            };
            self.markers.push(Marker {
                coordinate,
                pixel: tile.pixel,
                style,
            });
        }
        debug!(requested = coords.len(), drawn = self.markers.len(), "movement markers drawn");
        self.markers.len()
    }

    /// Remove every marker.
    pub fn reset(&mut self) {
        self.markers.clear();
    }

    /// Whether any marker is drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.markers.is_empty()
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Outline of one marker relative to its tile corner.
    #[must_use]
    pub fn outline(size: TileSize) -> [Vec2; 7] {
        hex_outline(size, MARKER_INSET)
    }
}
