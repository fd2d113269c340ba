//! In-memory collaborators for tests.
//!
//! The fakes use axial coordinates as offsets (`x = q`, `y = r`) and record
//! the calls the properties under test care about.

use std::cell::Cell;

use hex_component::ComponentRegistry;
use hex_math::{CubeCoordinate, OffsetCoordinate, TileSize, Vec2};
use hex_terrain::MovementLayer;

use crate::config::GameConfig;
use crate::context::GameContext;
use crate::info::InfoPanel;
use crate::interaction::TileClick;
use crate::model::{BorderSegment, City, CityId, NewCity, PlayerId, Unit, UnitId, UnitKind, UnitSpawn};
use crate::scene::Scene;
use crate::services::{CityService, GridService, ResourceIndex, Tile, TileLayer, UnitService};

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

#[derive(Debug)]
pub(crate) struct FakeGrid {
    rows: i32,
    columns: i32,
    reachable: Option<Vec<CubeCoordinate>>,
    pub reachable_calls: Cell<usize>,
    pub path_calls: Cell<usize>,
}

impl FakeGrid {
    pub fn new(rows: i32, columns: i32) -> Self {
        Self {
            rows,
            columns,
            reachable: None,
            reachable_calls: Cell::new(0),
            path_calls: Cell::new(0),
        }
    }

    /// Answer every reachability query with `coords`.
    pub fn with_reachable(mut self, coords: Vec<CubeCoordinate>) -> Self {
        self.reachable = Some(coords);
        self
    }

    fn on_map(&self, coord: CubeCoordinate) -> bool {
        (0..self.columns).contains(&coord.q()) && (0..self.rows).contains(&coord.r())
    }
}

impl GridService for FakeGrid {
    fn reachable_tiles(&self, origin: CubeCoordinate, movement_points: u32, _layer: MovementLayer) -> Vec<CubeCoordinate> {
        self.reachable_calls.set(self.reachable_calls.get() + 1);
        if let Some(coords) = &self.reachable {
            return coords.clone();
        }
        let range = i32::try_from(movement_points).unwrap_or(i32::MAX);
        let mut coords = vec![origin];
        for dq in -range..=range {
            for dr in (-range).max(-dq - range)..=range.min(-dq + range) {
                let coord = CubeCoordinate::new(origin.q() + dq, origin.r() + dr);
                if coord != origin && self.on_map(coord) {
                    coords.push(coord);
                }
            }
        }
        coords
    }

    fn compute_path(&self, start: CubeCoordinate, end: CubeCoordinate, _layer: MovementLayer) -> Vec<CubeCoordinate> {
        self.path_calls.set(self.path_calls.get() + 1);
        vec![start, end]
    }

    fn offset_to_cube(&self, offset: OffsetCoordinate) -> CubeCoordinate {
        CubeCoordinate::new(offset.x, offset.y)
    }

    fn cube_to_offset(&self, cube: CubeCoordinate) -> OffsetCoordinate {
        OffsetCoordinate::new(cube.q(), cube.r())
    }

    fn neighbor_tiles(&self, coord: CubeCoordinate) -> Vec<CubeCoordinate> {
        DIRECTIONS
            .iter()
            .map(|&(dq, dr)| CubeCoordinate::new(coord.q() + dq, coord.r() + dr))
            .filter(|&c| self.on_map(c))
            .collect()
    }
}

#[derive(Debug)]
pub(crate) struct FakeTiles {
    rows: usize,
    columns: usize,
    size: TileSize,
}

impl FakeTiles {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            size: TileSize::new(32.0, 34.0),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn pixel_of(&self, x: i32, y: i32) -> Vec2 {
        Vec2::new(x as f32 * self.size.width, y as f32 * self.size.height)
    }
}

impl TileLayer for FakeTiles {
    fn tile_at(&self, offset: OffsetCoordinate) -> Option<Tile> {
        let index = offset.index(self.rows, self.columns)?;
        Some(Tile {
            offset,
            index: u32::try_from(index).ok()?,
            pixel: self.pixel_of(offset.x, offset.y),
        })
    }
}

#[derive(Debug)]
pub(crate) struct FakeUnits {
    pub units: Vec<Unit>,
    next_id: u32,
    pub accept_moves: bool,
    pub moves: Vec<(UnitId, Vec<CubeCoordinate>)>,
}

impl Default for FakeUnits {
    fn default() -> Self {
        Self {
            units: Vec::new(),
            next_id: 1,
            accept_moves: true,
            moves: Vec::new(),
        }
    }
}

impl UnitService for FakeUnits {
    fn units_at(&self, coord: CubeCoordinate, player: PlayerId) -> Vec<Unit> {
        self.units
            .iter()
            .filter(|u| u.position == coord && u.player == player)
            .cloned()
            .collect()
    }

    fn move_unit_by_path(&mut self, id: UnitId, path: &[CubeCoordinate]) -> bool {
        self.moves.push((id, path.to_vec()));
        if !self.accept_moves {
            return false;
        }
        let (Some(unit), Some(&last)) = (self.units.iter_mut().find(|u| u.id == id), path.last()) else {
            return false;
        };
        let steps = u32::try_from(path.len().saturating_sub(1)).unwrap_or(u32::MAX);
        unit.position = last;
        unit.movement = unit.movement.saturating_sub(steps);
        true
    }

    fn unit(&self, id: UnitId) -> Option<Unit> {
        self.units.iter().find(|u| u.id == id).cloned()
    }

    fn create_unit(&mut self, spawn: UnitSpawn) -> Option<UnitId> {
        let id = UnitId(self.next_id);
        self.next_id += 1;
        self.units.push(Unit {
            id,
            player: spawn.player,
            kind: spawn.kind,
            layer: spawn.layer,
            position: spawn.position,
            health: spawn.max_health,
            max_health: spawn.max_health,
            movement: spawn.max_movement,
            max_movement: spawn.max_movement,
        });
        Some(id)
    }

    fn remove_unit(&mut self, id: UnitId) -> bool {
        let before = self.units.len();
        self.units.retain(|u| u.id != id);
        self.units.len() != before
    }
}

#[derive(Debug)]
pub(crate) struct FakeCities {
    pub cities: Vec<City>,
    next_id: u32,
    pub border_recomputes: usize,
    pub claims: usize,
}

impl Default for FakeCities {
    fn default() -> Self {
        Self {
            cities: Vec::new(),
            next_id: 1,
            border_recomputes: 0,
            claims: 0,
        }
    }
}

impl FakeCities {
    fn claimed(&self, coord: CubeCoordinate) -> bool {
        self.cities.iter().any(|c| c.owns(coord))
    }
}

impl CityService for FakeCities {
    fn create_city(&mut self, city: NewCity) -> Option<CityId> {
        if self.claimed(city.position) {
            return None;
        }
        let id = CityId(self.next_id);
        self.next_id += 1;
        self.cities.push(City {
            id,
            player: city.player,
            name: city.name,
            position: city.position,
            position_pixel: city.position_pixel,
            tiles: city.tiles,
            tiles_pixel: city.tiles_pixel,
            borders: Default::default(),
        });
        Some(id)
    }

    fn add_city_tile(&mut self, id: CityId, coord: CubeCoordinate, pixel: Vec2) -> bool {
        if self.claimed(coord) {
            return false;
        }
        let Some(city) = self.cities.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        city.tiles.push(coord);
        city.tiles_pixel.push(pixel);
        self.claims += 1;
        true
    }

    fn create_city_borders(&mut self, player: PlayerId, tile_width: f32, _tile_height: f32) {
        self.border_recomputes += 1;
        for city in self.cities.iter_mut().filter(|c| c.player == player) {
            city.borders = city
                .tiles_pixel
                .iter()
                .map(|&p| BorderSegment::new(p, p + Vec2::new(tile_width, 0.0)))
                .collect();
        }
    }

    fn city(&self, id: CityId) -> Option<City> {
        self.cities.iter().find(|c| c.id == id).cloned()
    }

    fn cities_of_player(&self, player: PlayerId) -> Vec<City> {
        self.cities.iter().filter(|c| c.player == player).cloned().collect()
    }
}

/// Every collaborator plus the state a [`GameContext`] borrows.
pub(crate) struct Fixture {
    pub config: GameConfig,
    pub grid: FakeGrid,
    pub tiles: FakeTiles,
    pub units: FakeUnits,
    pub cities: FakeCities,
    pub resources: ResourceIndex,
    pub registry: ComponentRegistry,
    pub scene: Scene,
    pub info: InfoPanel,
}

impl Fixture {
    pub fn new(rows: usize, columns: usize) -> Self {
        init_tracing();
        let (r, c) = (i32::try_from(rows).unwrap(), i32::try_from(columns).unwrap());
        Self {
            config: GameConfig::default(),
            grid: FakeGrid::new(r, c),
            tiles: FakeTiles::new(rows, columns),
            units: FakeUnits::default(),
            cities: FakeCities::default(),
            resources: ResourceIndex::new(),
            registry: ComponentRegistry::new(),
            scene: Scene::new(),
            info: InfoPanel::new(),
        }
    }

    pub fn ctx(&mut self) -> GameContext<'_> {
        GameContext {
            config: &self.config,
            grid: &self.grid,
            tiles: &self.tiles,
            units: &mut self.units,
            cities: &mut self.cities,
            resources: &mut self.resources,
            registry: &mut self.registry,
            scene: &mut self.scene,
            info: &mut self.info,
        }
    }

    /// The click a pointer on `(q, r)` resolves to.
    pub fn click(&self, q: i32, r: i32) -> TileClick {
        let cube = CubeCoordinate::new(q, r);
        match self.tiles.tile_at(self.grid.cube_to_offset(cube)) {
            Some(tile) => TileClick::Tile { cube, tile },
            None => TileClick::OffMap,
        }
    }

    /// Add a unit of the local player directly to the unit store.
    pub fn add_unit(&mut self, kind: UnitKind, q: i32, r: i32, movement: u32) -> UnitId {
        let spawn = UnitSpawn {
            player: self.config.player_id,
            kind,
            layer: MovementLayer::Land,
            position: CubeCoordinate::new(q, r),
            max_health: 100,
            max_movement: movement,
        };
        self.units.create_unit(spawn).unwrap()
    }
}
