//! Boundaries to the external collaborators.
//!
//! Pathfinding, hex conversion, tile rendering and the unit/city stores live
//! outside this crate. The game reaches them only through these traits.

use std::collections::HashMap;

use hex_math::{CubeCoordinate, OffsetCoordinate, Vec2};
use hex_terrain::{MovementLayer, Resource, ResourceTile};
use tracing::warn;

use crate::model::{City, CityId, NewCity, PlayerId, Unit, UnitId, UnitSpawn};

/// A rendered map tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub offset: OffsetCoordinate,
    /// Tile-set index of the rendered terrain.
    pub index: u32,
    /// Top-left corner of the tile's bounding box.
    pub pixel: Vec2,
}

/// The rendered tile layer.
pub trait TileLayer {
    fn tile_at(&self, offset: OffsetCoordinate) -> Option<Tile>;
}

/// Pathfinding and hex conversion, built from the layer cost maps at map load.
pub trait GridService {
    /// Tiles reachable from `origin` within `movement_points`. The origin is
    /// the first entry.
    fn reachable_tiles(
        &self,
        origin: CubeCoordinate,
        movement_points: u32,
        layer: MovementLayer,
    ) -> Vec<CubeCoordinate>;

    /// Path from `start` to `end`, both included.
    fn compute_path(&self, start: CubeCoordinate, end: CubeCoordinate, layer: MovementLayer) -> Vec<CubeCoordinate>;

    fn offset_to_cube(&self, offset: OffsetCoordinate) -> CubeCoordinate;

    fn cube_to_offset(&self, cube: CubeCoordinate) -> OffsetCoordinate;

    /// On-map neighbours of `coord` in a fixed direction order.
    fn neighbor_tiles(&self, coord: CubeCoordinate) -> Vec<CubeCoordinate>;
}

/// The unit store.
pub trait UnitService {
    fn units_at(&self, coord: CubeCoordinate, player: PlayerId) -> Vec<Unit>;

    /// Move a unit along `path`. Returns `false` if the move is declined, in
    /// which case nothing changed.
    fn move_unit_by_path(&mut self, id: UnitId, path: &[CubeCoordinate]) -> bool;

    fn unit(&self, id: UnitId) -> Option<Unit>;

    fn create_unit(&mut self, spawn: UnitSpawn) -> Option<UnitId>;

    fn remove_unit(&mut self, id: UnitId) -> bool;
}

/// The city store. Owns border computation.
pub trait CityService {
    fn create_city(&mut self, city: NewCity) -> Option<CityId>;

    /// Claim `coord` for the city. Returns `false` if the tile is taken or
    /// the city is unknown.
    fn add_city_tile(&mut self, id: CityId, coord: CubeCoordinate, pixel: Vec2) -> bool;

    /// Rebuild the border set of every city of `player`.
    fn create_city_borders(&mut self, player: PlayerId, tile_width: f32, tile_height: f32);

    fn city(&self, id: CityId) -> Option<City>;

    fn cities_of_player(&self, player: PlayerId) -> Vec<City>;
}

/// Coordinate-indexed resource lookup, filled once at map load.
pub trait ResourceService {
    fn add_resource_tile(&mut self, coord: CubeCoordinate, tile: ResourceTile);

    fn resources(&self, coord: CubeCoordinate) -> Option<&[Resource]>;
}

/// In-memory [`ResourceService`].
#[derive(Debug, Clone, Default)]
pub struct ResourceIndex {
    tiles: HashMap<CubeCoordinate, ResourceTile>,
}

impl ResourceIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl ResourceService for ResourceIndex {
    fn add_resource_tile(&mut self, coord: CubeCoordinate, tile: ResourceTile) {
        self.tiles.insert(coord, tile);
    }

    fn resources(&self, coord: CubeCoordinate) -> Option<&[Resource]> {
        self.tiles.get(&coord).map(ResourceTile::resources)
    }
}

/// Resolve a cube coordinate to its rendered tile.
///
/// A miss is logged and returns `None`; callers skip the visual element.
pub fn resolve_tile(grid: &dyn GridService, tiles: &dyn TileLayer, coord: CubeCoordinate) -> Option<Tile> {
    let offset = grid.cube_to_offset(coord);
    let tile = tiles.tile_at(offset);
    if tile.is_none() {
        warn!(%coord, %offset, "coordinate does not resolve to a tile");
    }
    tile
}
