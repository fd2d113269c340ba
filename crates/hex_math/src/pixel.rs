//! Screen-space helpers for pointy-top hex tiles.
//!
//! A tile's pixel position is the top-left corner of its bounding box, as
//! reported by the tile layer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Width and height of one tile's bounding box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileSize {
    pub width: f32,
    pub height: f32,
}

impl TileSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half the bounding box, i.e. the offset from corner to centre.
    #[must_use]
    pub fn half(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The pixel centre of the tile whose top-left corner is `corner`.
#[must_use]
pub fn tile_center(corner: Vec2, size: TileSize) -> Vec2 {
    corner + size.half()
}

/// Closed outline of a pointy-top hexagon inside its bounding box, shrunk by
/// `inset` pixels so adjacent outlines do not overlap.
///
/// The first and last points coincide.
#[must_use]
pub fn hex_outline(size: TileSize, inset: f32) -> [Vec2; 7] {
    let TileSize { width, height } = size;
    let quarter = height / 4.0;
    [
        Vec2::new(inset, quarter + inset),
        Vec2::new(inset, quarter * 3.0 - inset),
        Vec2::new(width / 2.0 - inset, height - inset),
        Vec2::new(width - inset, quarter * 3.0 - inset),
        Vec2::new(width - inset, quarter + inset),
        Vec2::new(width / 2.0 - inset, inset),
        Vec2::new(inset, quarter + inset),
    ]
}
