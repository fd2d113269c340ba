//! Plain data records exchanged with the unit and city services.

use std::fmt;

use hex_math::{CubeCoordinate, Vec2};
use hex_terrain::MovementLayer;
use serde::{Deserialize, Serialize};

use crate::config::UnitTemplate;

macro_rules! id_newtype {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }
    };
}

id_newtype!(UnitId, "unit");
id_newtype!(CityId, "city");
id_newtype!(PlayerId, "player");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Warrior,
    Settler,
}

/// Snapshot of a unit as reported by the unit service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub player: PlayerId,
    pub kind: UnitKind,
    pub layer: MovementLayer,
    pub position: CubeCoordinate,
    pub health: u32,
    pub max_health: u32,
    pub movement: u32,
    pub max_movement: u32,
}

impl Unit {
    /// Remaining health in `0.0..=1.0`.
    #[must_use]
    pub fn health_fraction(&self) -> f32 {
        fraction(self.health, self.max_health)
    }

    /// Remaining movement points in `0.0..=1.0`.
    #[must_use]
    pub fn movement_fraction(&self) -> f32 {
        fraction(self.movement, self.max_movement)
    }
}

#[allow(clippy::cast_precision_loss)]
fn fraction(value: u32, max: u32) -> f32 {
    if max == 0 {
        return 0.0;
    }
    (value as f32 / max as f32).clamp(0.0, 1.0)
}

/// A unit creation request. The unit service assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSpawn {
    pub player: PlayerId,
    pub kind: UnitKind,
    pub layer: MovementLayer,
    pub position: CubeCoordinate,
    pub max_health: u32,
    pub max_movement: u32,
}

impl UnitSpawn {
    #[must_use]
    pub fn from_template(template: &UnitTemplate, player: PlayerId, position: CubeCoordinate) -> Self {
        Self {
            player,
            kind: template.kind,
            layer: template.layer,
            position,
            max_health: template.max_health,
            max_movement: template.movement,
        }
    }
}

/// One straight piece of a city outline, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl BorderSegment {
    #[must_use]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}

/// Outline of a city's owned tiles. Replaced wholesale on recomputation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CityBorderSet {
    segments: Vec<BorderSegment>,
}

impl CityBorderSet {
    /// Wrap already computed border segments.
    #[must_use]
    pub fn new(segments: Vec<BorderSegment>) -> Self {
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[BorderSegment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromIterator<BorderSegment> for CityBorderSet {
    fn from_iter<I: IntoIterator<Item = BorderSegment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Snapshot of a city as reported by the city service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub player: PlayerId,
    pub name: String,
    pub position: CubeCoordinate,
    pub position_pixel: Vec2,
    /// Owned tiles in claim order. The centre tile is not listed.
    pub tiles: Vec<CubeCoordinate>,
    pub tiles_pixel: Vec<Vec2>,
    pub borders: CityBorderSet,
}

impl City {
    /// Whether `coord` is the city centre or one of its owned tiles.
    #[must_use]
    pub fn owns(&self, coord: CubeCoordinate) -> bool {
        self.position == coord || self.tiles.contains(&coord)
    }
}

/// A city creation request. The city service assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCity {
    pub player: PlayerId,
    pub name: String,
    pub position: CubeCoordinate,
    pub position_pixel: Vec2,
    pub tiles: Vec<CubeCoordinate>,
    pub tiles_pixel: Vec<Vec2>,
}
