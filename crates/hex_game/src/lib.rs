//! # hex_game
//!
//! The interaction and behaviour core of the hex strategy prototype. It
//! decides what a tile click means (select a unit, preview reachable tiles,
//! confirm a move, inspect terrain), grows cities and keeps their borders
//! current, and drives the UI components attached to units and cities.
//!
//! Map generation, pathfinding, hex conversion math and sprite rendering are
//! external; they are reached through the traits in [`services`].
//!
//! ## Flow
//!
//! 1. The input layer resolves a pointer to a [`TileClick`].
//! 2. [`Game::click`] threads the owned [`SelectionState`] through
//!    [`handle_click`].
//! 3. The render loop calls [`Game::tick`] once per frame, which drives the
//!    [`ComponentRegistry`](hex_component::ComponentRegistry).

pub mod city;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod game;
pub mod info;
pub mod interaction;
pub mod map_load;
pub mod model;
pub mod renderer;
pub mod scene;
pub mod services;
pub mod spawn;

#[cfg(test)]
pub(crate) mod testing;

pub use city::{GrowthOutcome, grow_city, update_city_borders};
pub use config::{GameConfig, UnitTemplate};
pub use context::GameContext;
pub use error::GameError;
pub use game::{Game, Services};
pub use info::{InfoPanel, TileReport};
pub use interaction::{ClickOutcome, InteractionPhase, SelectionState, TileClick, handle_click};
pub use map_load::{LoadedMap, MapData};
pub use model::{BorderSegment, City, CityBorderSet, CityId, NewCity, PlayerId, Unit, UnitId, UnitKind, UnitSpawn};
pub use renderer::{Marker, MarkerStyle, MovementRenderer};
pub use scene::{Scene, Sprite};
pub use services::{CityService, GridService, ResourceIndex, ResourceService, Tile, TileLayer, UnitService};
