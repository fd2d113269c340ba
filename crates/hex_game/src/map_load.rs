//! Map loading: cost maps for the pathfinder, the resource index and the
//! optional per-tile resource markers.

use hex_math::OffsetCoordinate;
use hex_terrain::{LayerCostMaps, TerrainError, generate_resource_map};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::components::ResourceMarkerComponent;
use crate::context::GameContext;
use crate::error::GameError;
use crate::services::{GridService, ResourceService};

/// Raw generator output: two row-major code layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapData {
    pub rows: usize,
    pub columns: usize,
    pub terrain: Vec<u8>,
    pub landscape: Vec<u8>,
}

impl MapData {
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Offset coordinate of the tile at row-major `index`.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> Option<OffsetCoordinate> {
        if self.columns == 0 || index >= self.tile_count() {
            return None;
        }
        let x = i32::try_from(index % self.columns).ok()?;
        let y = i32::try_from(index / self.columns).ok()?;
        Some(OffsetCoordinate::new(x, y))
    }

    /// One cost map per movement layer, for the pathfinder.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::LengthMismatch`] if the terrain layer does not
    /// cover the map, or an unknown-code error.
    pub fn cost_maps(&self) -> Result<LayerCostMaps, TerrainError> {
        if self.terrain.len() != self.tile_count() {
            return Err(TerrainError::LengthMismatch {
                layer: "terrain",
                expected: self.tile_count(),
                actual: self.terrain.len(),
            });
        }
        LayerCostMaps::from_terrain(&self.terrain)
    }
}

/// Result of loading a map into a session.
///
/// The cost maps are not consumed here. The host builds its pathfinder, and
/// so its [`GridService`], from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedMap {
    /// Tiles fed into the resource service.
    pub indexed: usize,
    pub cost_maps: LayerCostMaps,
}

/// Feed one resource tile per map coordinate into `resources`.
///
/// Returns the number of tiles indexed.
///
/// # Errors
///
/// Returns a [`TerrainError`] if the layers do not cover the map or hold an
/// unknown code. Nothing is indexed in that case.
pub fn index_resources(
    map: &MapData,
    grid: &dyn GridService,
    resources: &mut dyn ResourceService,
) -> Result<usize, TerrainError> {
    let tiles = generate_resource_map(&map.terrain, &map.landscape, map.rows, map.columns)?;
    let count = tiles.len();
    for (index, tile) in tiles.into_iter().enumerate() {
        let Some(offset) = map.offset_of(index) else {
            continue;
        };
        resources.add_resource_tile(grid.offset_to_cube(offset), tile);
    }
    debug!(tiles = count, "resource index built");
    Ok(count)
}

/// Attach a [`ResourceMarkerComponent`] to a new entity for every tile that
/// yields something.
///
/// Returns the number of markers created.
///
/// # Errors
///
/// Returns a registry error if attaching a marker fails.
pub fn spawn_resource_markers(map: &MapData, ctx: &mut GameContext<'_>) -> Result<usize, GameError> {
    let mut created = 0;
    for index in 0..map.tile_count() {
        let Some(offset) = map.offset_of(index) else {
            continue;
        };
        let cube = ctx.grid.offset_to_cube(offset);
        let Some(resources) = ctx.resources.resources(cube).filter(|r| !r.is_empty()).map(<[_]>::to_vec) else {
            continue;
        };
        let Some(tile) = ctx.tiles.tile_at(offset) else {
            debug!(%offset, "no tile for resource marker");
            continue;
        };
        let entity = ctx.registry.spawn();
        ctx.registry
            .attach(entity, ResourceMarkerComponent::new(tile.pixel, resources))?;
        created += 1;
    }
    info!(markers = created, "resource markers created");
    Ok(created)
}
