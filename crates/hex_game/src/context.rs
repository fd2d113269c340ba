//! Borrowed view of everything a game action touches.

use hex_component::ComponentRegistry;

use crate::config::GameConfig;
use crate::info::InfoPanel;
use crate::scene::Scene;
use crate::services::{CityService, GridService, ResourceService, TileLayer, UnitService};

/// The services, registry and presentation state one action runs against.
///
/// Built fresh for each action by [`Game`](crate::Game), or directly by a
/// host that owns the pieces itself.
pub struct GameContext<'a> {
    pub config: &'a GameConfig,
    pub grid: &'a dyn GridService,
    pub tiles: &'a dyn TileLayer,
    pub units: &'a mut dyn UnitService,
    pub cities: &'a mut dyn CityService,
    pub resources: &'a mut dyn ResourceService,
    pub registry: &'a mut ComponentRegistry,
    pub scene: &'a mut Scene,
    pub info: &'a mut InfoPanel,
}
