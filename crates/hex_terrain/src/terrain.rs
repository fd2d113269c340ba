//! Terrain and landscape codes as produced by the map generator.
//!
//! Terrain codes start at 1 (tile-set index = code - 1). Landscape code 0 is
//! "no landscape overlay".

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::TerrainError;

/// Base terrain of a tile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum TerrainType {
    DeepWater = 1,
    ShallowWater = 2,
    Desert = 3,
    DesertHills = 4,
    Plain = 5,
    PlainHills = 6,
    Grass = 7,
    GrassHills = 8,
    Tundra = 9,
    TundraHills = 10,
    Snow = 11,
    SnowHills = 12,
    Mountain = 13,
}

impl TerrainType {
    /// The raw generator code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_water(self) -> bool {
        matches!(self, Self::DeepWater | Self::ShallowWater)
    }

    #[must_use]
    pub const fn is_hills(self) -> bool {
        matches!(
            self,
            Self::DesertHills | Self::PlainHills | Self::GrassHills | Self::TundraHills | Self::SnowHills
        )
    }
}

impl TryFrom<u8> for TerrainType {
    type Error = TerrainError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            1 => Self::DeepWater,
            2 => Self::ShallowWater,
            3 => Self::Desert,
            4 => Self::DesertHills,
            5 => Self::Plain,
            6 => Self::PlainHills,
            7 => Self::Grass,
            8 => Self::GrassHills,
            9 => Self::Tundra,
            10 => Self::TundraHills,
            11 => Self::Snow,
            12 => Self::SnowHills,
            13 => Self::Mountain,
            other => return Err(TerrainError::UnknownTerrain(other)),
        })
    }
}

/// Landscape overlay of a tile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum LandscapeType {
    None = 0,
    Ice = 1,
    Reef = 2,
    Oasis = 3,
    Swamp = 4,
    Volcano = 5,
    Jungle = 6,
    Forest = 7,
}

impl LandscapeType {
    /// The raw generator code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for LandscapeType {
    type Error = TerrainError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Self::None,
            1 => Self::Ice,
            2 => Self::Reef,
            3 => Self::Oasis,
            4 => Self::Swamp,
            5 => Self::Volcano,
            6 => Self::Jungle,
            7 => Self::Forest,
            other => return Err(TerrainError::UnknownLandscape(other)),
        })
    }
}
