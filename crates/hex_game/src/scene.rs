//! Sprites and the bindings between service ids and entities.

use std::collections::{BTreeMap, HashMap};

use hex_component::Entity;
use hex_math::Vec2;
use tracing::trace;

use crate::model::{CityId, UnitId};

/// Draw depth of unit sprites.
pub const UNIT_DEPTH: i32 = 900;
/// Draw depth of city sprites.
pub const CITY_DEPTH: i32 = 800;

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub texture: String,
    /// Centre of the sprite.
    pub position: Vec2,
    pub depth: i32,
}

impl Sprite {
    #[must_use]
    pub fn new(texture: impl Into<String>, position: Vec2, depth: i32) -> Self {
        Self {
            texture: texture.into(),
            position,
            depth,
        }
    }
}

/// What the renderer draws, keyed by entity.
#[derive(Debug, Default)]
pub struct Scene {
    sprites: BTreeMap<Entity, Sprite>,
    units: HashMap<UnitId, Entity>,
    cities: HashMap<CityId, Entity>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `sprite` for `entity`, replacing any previous one.
    pub fn add_sprite(&mut self, entity: Entity, sprite: Sprite) {
        self.sprites.insert(entity, sprite);
    }

    #[must_use]
    pub fn sprite(&self, entity: Entity) -> Option<&Sprite> {
        self.sprites.get(&entity)
    }

    /// Move the sprite of `entity`. Returns `false` if it has none.
    pub fn move_sprite(&mut self, entity: Entity, position: Vec2) -> bool {
        match self.sprites.get_mut(&entity) {
            Some(sprite) => {
                trace!(%entity, x = position.x, y = position.y, "sprite moved");
                sprite.position = position;
                true
            }
            None => false,
        }
    }

    /// Remove the sprite of `entity`, returning it.
    pub fn remove_sprite(&mut self, entity: Entity) -> Option<Sprite> {
        self.sprites.remove(&entity)
    }

    #[must_use]
    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    /// Record which entity displays `unit`.
    pub fn bind_unit(&mut self, unit: UnitId, entity: Entity) {
        self.units.insert(unit, entity);
    }

    #[must_use]
    pub fn unit_entity(&self, unit: UnitId) -> Option<Entity> {
        self.units.get(&unit).copied()
    }

    /// Forget the entity of `unit`, returning it.
    pub fn unbind_unit(&mut self, unit: UnitId) -> Option<Entity> {
        self.units.remove(&unit)
    }

    /// Record which entity displays `city`.
    pub fn bind_city(&mut self, city: CityId, entity: Entity) {
        self.cities.insert(city, entity);
    }

    #[must_use]
    pub fn city_entity(&self, city: CityId) -> Option<Entity> {
        self.cities.get(&city).copied()
    }
}
