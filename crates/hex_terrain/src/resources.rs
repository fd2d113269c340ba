//! Resource yield tables.
//!
//! A tile's yield is the concatenation of two independently keyed tables:
//! the terrain base and the landscape overlay. Entries are neither merged nor
//! capped, so a tile may list the same resource type twice.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::TerrainError;
use crate::terrain::{LandscapeType, TerrainType};
use ResourceType::{Food, Gold, Production};

/// Kind of resource a tile yields.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ResourceType {
    #[strum(serialize = "food")]
    Food = 1,
    #[strum(serialize = "prod")]
    Production = 2,
    #[strum(serialize = "gold")]
    Gold = 3,
}

/// An amount of one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Resource {
    pub kind: ResourceType,
    pub amount: u8,
}

impl Resource {
    #[must_use]
    pub const fn new(kind: ResourceType, amount: u8) -> Self {
        Self { kind, amount }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.amount)
    }
}

/// Base yield of a terrain type.
#[must_use]
pub const fn terrain_yield(terrain: TerrainType) -> &'static [Resource] {
    match terrain {
        TerrainType::ShallowWater => &[
            Resource { kind: Food, amount: 1 },
            Resource { kind: Gold, amount: 1 },
        ],
        TerrainType::DeepWater | TerrainType::Tundra => &[Resource { kind: Food, amount: 1 }],
        TerrainType::Plain | TerrainType::TundraHills => &[
            Resource { kind: Food, amount: 1 },
            Resource { kind: Production, amount: 1 },
        ],
        TerrainType::PlainHills => &[
            Resource { kind: Food, amount: 1 },
            Resource { kind: Production, amount: 2 },
        ],
        TerrainType::DesertHills | TerrainType::SnowHills => &[Resource { kind: Production, amount: 1 }],
        TerrainType::Grass => &[Resource { kind: Food, amount: 2 }],
        TerrainType::GrassHills => &[
            Resource { kind: Food, amount: 2 },
            Resource { kind: Production, amount: 1 },
        ],
        TerrainType::Desert | TerrainType::Snow | TerrainType::Mountain => &[],
    }
}

/// Overlay yield of a landscape type.
#[must_use]
pub const fn landscape_yield(landscape: LandscapeType) -> &'static [Resource] {
    match landscape {
        LandscapeType::Reef => &[
            Resource { kind: Food, amount: 1 },
            Resource { kind: Production, amount: 1 },
        ],
        LandscapeType::Jungle | LandscapeType::Swamp => &[Resource { kind: Food, amount: 1 }],
        LandscapeType::Forest => &[Resource { kind: Production, amount: 1 }],
        LandscapeType::Oasis => &[
            Resource { kind: Food, amount: 3 },
            Resource { kind: Gold, amount: 1 },
        ],
        LandscapeType::None | LandscapeType::Volcano | LandscapeType::Ice => &[],
    }
}

/// The resources of one map tile. Immutable once generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTile {
    resources: Vec<Resource>,
}

impl ResourceTile {
    #[must_use]
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    /// Entries in yield order: terrain base first, then landscape overlay.
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Total amount of `kind` across all entries.
    #[must_use]
    pub fn total(&self, kind: ResourceType) -> u32 {
        self.resources
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| u32::from(r.amount))
            .sum()
    }
}

/// Resources of a tile: terrain base followed by landscape overlay.
#[must_use]
pub fn resource_yield(terrain: TerrainType, landscape: LandscapeType) -> ResourceTile {
    let resources = terrain_yield(terrain)
        .iter()
        .chain(landscape_yield(landscape))
        .copied()
        .collect();
    ResourceTile::new(resources)
}

/// Build the row-major resource map of a `rows` × `columns` map.
///
/// # Errors
///
/// Returns [`TerrainError::LengthMismatch`] if either layer does not have
/// `rows * columns` entries, or an unknown-code error for the first code
/// outside the tables.
pub fn generate_resource_map(
    terrain_codes: &[u8],
    landscape_codes: &[u8],
    rows: usize,
    columns: usize,
) -> Result<Vec<ResourceTile>, TerrainError> {
    let expected = rows * columns;
    for (layer, codes) in [("terrain", terrain_codes), ("landscape", landscape_codes)] {
        if codes.len() != expected {
            return Err(TerrainError::LengthMismatch {
                layer,
                expected,
                actual: codes.len(),
            });
        }
    }

    terrain_codes
        .iter()
        .zip(landscape_codes)
        .map(|(&terrain, &landscape)| {
            Ok(resource_yield(
                TerrainType::try_from(terrain)?,
                LandscapeType::try_from(landscape)?,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn res(kind: ResourceType, amount: u8) -> Resource {
        Resource::new(kind, amount)
    }

    #[test]
    fn test_shallow_water_reef_yield() {
        let tile = resource_yield(TerrainType::ShallowWater, LandscapeType::Reef);
        assert_eq!(
            tile.resources(),
            &[res(Food, 1), res(Gold, 1), res(Food, 1), res(Production, 1)]
        );
        assert_eq!(tile.total(Food), 2);
    }

    #[test]
    fn test_barren_tiles_yield_nothing() {
        assert!(resource_yield(TerrainType::Mountain, LandscapeType::None).is_empty());
        assert!(resource_yield(TerrainType::Desert, LandscapeType::Volcano).is_empty());
    }

    #[test]
    fn test_oasis_on_desert() {
        let tile = resource_yield(TerrainType::Desert, LandscapeType::Oasis);
        assert_eq!(tile.resources(), &[res(Food, 3), res(Gold, 1)]);
    }

    #[test]
    fn test_yield_is_base_plus_overlay_as_multiset() {
        for terrain in TerrainType::iter() {
            for landscape in LandscapeType::iter() {
                let mut combined = resource_yield(terrain, landscape).resources().to_vec();
                let mut reversed: Vec<_> = landscape_yield(landscape)
                    .iter()
                    .chain(terrain_yield(terrain))
                    .copied()
                    .collect();
                combined.sort();
                reversed.sort();
                assert_eq!(combined, reversed, "{terrain} + {landscape}");
            }
        }
    }

    #[test]
    fn test_generate_resource_map_is_row_major() {
        // 2 rows x 2 columns.
        let terrain = [7, 2, 13, 6];
        let landscape = [0, 2, 0, 7];
        let map = generate_resource_map(&terrain, &landscape, 2, 2).unwrap();
        assert_eq!(map.len(), 4);
        assert_eq!(map[0].resources(), &[res(Food, 2)]);
        assert_eq!(map[1].len(), 4);
        assert!(map[2].is_empty());
        assert_eq!(map[3].total(Production), 3);
    }

    #[test]
    fn test_generate_resource_map_checks_lengths() {
        let err = generate_resource_map(&[1, 2, 3], &[0, 0, 0, 0], 2, 2).unwrap_err();
        assert_eq!(
            err,
            TerrainError::LengthMismatch {
                layer: "terrain",
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_generate_resource_map_rejects_unknown_landscape() {
        let err = generate_resource_map(&[1], &[42], 1, 1).unwrap_err();
        assert_eq!(err, TerrainError::UnknownLandscape(42));
    }

    #[test]
    fn test_resource_display() {
        assert_eq!(res(Production, 2).to_string(), "prod: 2");
        assert_eq!(res(Food, 1).to_string(), "food: 1");
    }
}
