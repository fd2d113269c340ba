//! # hex_terrain
//!
//! Deterministic lookup tables over terrain and landscape codes:
//!
//! - [`movement_cost`] / [`generate_cost_map`] — traversal cost per
//!   [`MovementLayer`], assembled into [`LayerCostMaps`] for the pathfinder.
//! - [`resource_yield`] / [`generate_resource_map`] — base plus overlay
//!   resources per tile.
//!
//! Raw codes come from the map generator. Codes outside the tables are a
//! programming error and surface as [`TerrainError`].

pub mod error;
pub mod movement;
pub mod resources;
pub mod terrain;

pub use error::TerrainError;
pub use movement::{CostMap, LayerCostMaps, MovementLayer, generate_cost_map, movement_cost};
pub use resources::{Resource, ResourceTile, ResourceType, generate_resource_map, resource_yield};
pub use terrain::{LandscapeType, TerrainType};
