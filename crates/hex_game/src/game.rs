//! The game session.
//!
//! Owns the configuration, the component registry, the presentation state
//! and the external services, and routes every action through a fresh
//! [`GameContext`].

use std::fmt;
use std::mem;

use hex_component::ComponentRegistry;
use hex_math::CubeCoordinate;
use tracing::{debug, info};

use crate::city::{self, GrowthOutcome};
use crate::config::GameConfig;
use crate::context::GameContext;
use crate::error::GameError;
use crate::info::InfoPanel;
use crate::interaction::{ClickOutcome, InteractionPhase, SelectionState, TileClick, handle_click};
use crate::map_load::{self, LoadedMap, MapData};
use crate::model::{CityId, PlayerId, UnitId};
use crate::scene::Scene;
use crate::services::{CityService, GridService, ResourceService, TileLayer, UnitService};
use crate::spawn;

/// The external collaborators of a session.
pub struct Services {
    pub grid: Box<dyn GridService>,
    pub tiles: Box<dyn TileLayer>,
    pub units: Box<dyn UnitService>,
    pub cities: Box<dyn CityService>,
    pub resources: Box<dyn ResourceService>,
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    services: Services,
    registry: ComponentRegistry,
    scene: Scene,
    info: InfoPanel,
    selection: SelectionState,
    tick_id: u64,
}

impl Game {
    /// Start a session with an empty registry and scene.
    #[must_use]
    pub fn new(config: GameConfig, services: Services) -> Self {
        info!(player = %config.player_id, units = config.units.len(), "game session created");
        Self {
            config,
            services,
            registry: ComponentRegistry::new(),
            scene: Scene::new(),
            info: InfoPanel::new(),
            selection: SelectionState::new(),
            tick_id: 0,
        }
    }

    fn context(&mut self) -> GameContext<'_> {
        GameContext {
            config: &self.config,
            grid: &*self.services.grid,
            tiles: &*self.services.tiles,
            units: &mut *self.services.units,
            cities: &mut *self.services.cities,
            resources: &mut *self.services.resources,
            registry: &mut self.registry,
            scene: &mut self.scene,
            info: &mut self.info,
        }
    }

    /// Build the movement cost maps, index the map's resources and, if
    /// configured, create resource markers.
    ///
    /// The layers are validated before anything is indexed.
    ///
    /// # Errors
    ///
    /// Returns a terrain error for malformed layers, or a registry error if a
    /// marker cannot be attached.
    pub fn load_map(&mut self, map: &MapData) -> Result<LoadedMap, GameError> {
        let cost_maps = map.cost_maps()?;
        let indexed = map_load::index_resources(map, &*self.services.grid, &mut *self.services.resources)?;
        if self.config.resource_markers {
            map_load::spawn_resource_markers(map, &mut self.context())?;
        }
        info!(rows = map.rows, columns = map.columns, indexed, "map loaded");
        Ok(LoadedMap { indexed, cost_maps })
    }

    /// Handle one resolved pointer click.
    pub fn click(&mut self, click: &TileClick) -> ClickOutcome {
        let state = mem::take(&mut self.selection);
        let (next, outcome) = handle_click(state, click, &mut self.context());
        self.selection = next;
        debug!(?outcome, phase = ?self.selection.phase(), "click handled");
        outcome
    }

    /// Advance one frame.
    ///
    /// # Errors
    ///
    /// Returns a registry error if a component hook fails.
    pub fn tick(&mut self, dt: f64) -> Result<(), GameError> {
        self.tick_id += 1;
        debug!(
            tick_id = self.tick_id,
            dt,
            pending_starts = self.registry.pending_starts(),
            "tick"
        );
        self.registry.tick(dt)?;
        Ok(())
    }

    /// Claim the first free on-map neighbour tile for `city` and redraw the borders
    /// of its owner. See [`city::grow_city`].
    pub fn grow_city(&mut self, city: CityId) -> GrowthOutcome {
        city::grow_city(city, &mut self.context())
    }

    /// Recompute the borders of every city of `player`. Returns the number
    /// of city UIs redrawn.
    pub fn update_city_borders(&mut self, player: PlayerId) -> usize {
        city::update_city_borders(player, &mut self.context())
    }

    /// Spawn a unit of the local player from the named template.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownTemplate`] if no template has that name,
    /// or the errors of [`spawn::spawn_unit`].
    pub fn spawn_unit(&mut self, template: &str, position: CubeCoordinate) -> Result<Option<UnitId>, GameError> {
        let template = self
            .config
            .template(template)
            .cloned()
            .ok_or_else(|| GameError::UnknownTemplate(template.to_owned()))?;
        let player = self.config.player_id;
        spawn::spawn_unit(&template, position, player, &mut self.context())
    }

    /// Found a city of the local player.
    ///
    /// # Errors
    ///
    /// See [`spawn::found_city`].
    pub fn found_city(&mut self, name: &str, position: CubeCoordinate) -> Result<Option<CityId>, GameError> {
        let player = self.config.player_id;
        spawn::found_city(name, position, player, &mut self.context())
    }

    /// Turn a settler into a city. A selection of that settler is dropped.
    ///
    /// # Errors
    ///
    /// See [`spawn::settler_to_city`].
    pub fn settler_to_city(&mut self, unit: UnitId, name: &str) -> Result<Option<CityId>, GameError> {
        let city = spawn::settler_to_city(unit, name, &mut self.context())?;
        if city.is_some() {
            self.selection.forget_unit(unit);
        }
        Ok(city)
    }

    /// Destroy every component and end the session.
    ///
    /// # Errors
    ///
    /// Returns a registry error if a `destroy` hook fails.
    pub fn teardown(self) -> Result<(), GameError> {
        info!(ticks = self.tick_id, entities = self.registry.entity_count(), "game session ended");
        self.registry.teardown()?;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Current phase of the click state machine.
    #[must_use]
    pub fn phase(&self) -> InteractionPhase {
        self.selection.phase()
    }

    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn info_panel(&self) -> &InfoPanel {
        &self.info
    }

    /// Number of ticks run so far.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    /// Resolve `coord` to the click a pointer on it would produce.
    #[must_use]
    pub fn click_at(&self, coord: CubeCoordinate) -> TileClick {
        let offset = self.services.grid.cube_to_offset(coord);
        match self.services.tiles.tile_at(offset) {
            Some(tile) => TileClick::Tile { cube: coord, tile },
            None => TileClick::OffMap,
        }
    }
}
