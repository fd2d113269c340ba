//! # hex_math
//!
//! Addressing and pixel types shared by the hex strategy crates. Re-exports
//! [`glam::Vec2`] for screen-space positions.
//!
//! Conversion between offset and cube coordinates is owned by the grid
//! service; this crate only defines the value types handed to and from it.

pub mod coord;
pub mod pixel;

// Re-export glam types for convenience.
pub use glam::Vec2;

pub use coord::{CoordinateError, CubeCoordinate, OffsetCoordinate};
pub use pixel::{TileSize, hex_outline, tile_center};
