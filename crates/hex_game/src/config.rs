//! Game configuration.
//!
//! The unit stat table and tile geometry are loaded by the host and passed in
//! as plain data.

use hex_math::TileSize;
use hex_terrain::MovementLayer;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::model::{PlayerId, UnitKind};

/// One entry of the unit stat table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitTemplate {
    pub name: String,
    pub kind: UnitKind,
    pub layer: MovementLayer,
    pub movement: u32,
    pub max_health: u32,
    pub texture: String,
}

impl UnitTemplate {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: UnitKind, layer: MovementLayer, movement: u32) -> Self {
        let name = name.into();
        Self {
            texture: name.clone(),
            name,
            kind,
            layer,
            movement,
            max_health: 100,
        }
    }

    #[must_use]
    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = texture.into();
        self
    }

    #[must_use]
    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The local player; only this player's units react to clicks.
    pub player_id: PlayerId,
    pub tile_width: f32,
    pub tile_height: f32,
    pub unit_bar_width: f32,
    /// Attach a resource marker to every tile at map load.
    pub resource_markers: bool,
    pub units: Vec<UnitTemplate>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_id: PlayerId(1),
            tile_width: 32.0,
            tile_height: 34.0,
            unit_bar_width: 20.0,
            resource_markers: false,
            units: default_units(),
        }
    }
}

fn default_units() -> Vec<UnitTemplate> {
    vec![
        UnitTemplate::new("tank", UnitKind::Warrior, MovementLayer::Land, 3),
        UnitTemplate::new("settler", UnitKind::Settler, MovementLayer::Land, 5),
        UnitTemplate::new("ship", UnitKind::Warrior, MovementLayer::Water, 5),
        UnitTemplate::new("plane", UnitKind::Warrior, MovementLayer::Air, 8),
    ]
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if the document is not valid JSON or a
    /// field has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_player(mut self, player_id: PlayerId) -> Self {
        self.player_id = player_id;
        self
    }

    #[must_use]
    pub fn with_tile_size(mut self, width: f32, height: f32) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    #[must_use]
    pub fn with_unit_bar_width(mut self, width: f32) -> Self {
        self.unit_bar_width = width;
        self
    }

    #[must_use]
    pub fn with_resource_markers(mut self, enabled: bool) -> Self {
        self.resource_markers = enabled;
        self
    }

    /// Replace the unit templates.
    #[must_use]
    pub fn with_units(mut self, units: Vec<UnitTemplate>) -> Self {
        self.units = units;
        self
    }

    /// Tile width and height in pixels.
    #[must_use]
    pub fn tile_size(&self) -> TileSize {
        TileSize::new(self.tile_width, self.tile_height)
    }

    /// Look up a unit template by name.
    #[must_use]
    pub fn template(&self, name: &str) -> Option<&UnitTemplate> {
        self.units.iter().find(|t| t.name == name)
    }
}
