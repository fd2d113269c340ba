//! Movement cost tables.
//!
//! A cost of 0 marks a tile impassable for the layer; any other value is the
//! cost of entering it.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::debug;

use crate::error::TerrainError;
use crate::terrain::TerrainType;

/// Traversability class of a unit. Each layer has its own cost map and its
/// own unit population.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MovementLayer {
    Water,
    Land,
    Air,
}

impl MovementLayer {
    /// Position of this layer in a [`LayerCostMaps`] collection.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Water => 0,
            Self::Land => 1,
            Self::Air => 2,
        }
    }
}

/// Cost of entering a tile of `terrain` on `layer`.
#[must_use]
pub const fn movement_cost(terrain: TerrainType, layer: MovementLayer) -> u8 {
    match layer {
        MovementLayer::Land => match terrain {
            TerrainType::DeepWater | TerrainType::ShallowWater | TerrainType::Mountain => 0,
            TerrainType::DesertHills
            | TerrainType::PlainHills
            | TerrainType::GrassHills
            | TerrainType::TundraHills
            | TerrainType::SnowHills => 2,
            TerrainType::Desert
            | TerrainType::Plain
            | TerrainType::Grass
            | TerrainType::Tundra
            | TerrainType::Snow => 1,
        },
        MovementLayer::Water => {
            if terrain.is_water() {
                1
            } else {
                0
            }
        }
        MovementLayer::Air => 1,
    }
}

/// One cost entry per map tile, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostMap(Vec<u8>);

impl CostMap {
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cost of the tile at `index`, or `None` outside the map.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

/// Map raw terrain codes to a cost map for `layer`, index for index.
///
/// # Errors
///
/// Returns [`TerrainError::UnknownTerrain`] for the first code outside the
/// terrain table.
pub fn generate_cost_map(terrain_codes: &[u8], layer: MovementLayer) -> Result<CostMap, TerrainError> {
    terrain_codes
        .iter()
        .map(|&code| TerrainType::try_from(code).map(|terrain| movement_cost(terrain, layer)))
        .collect::<Result<Vec<_>, _>>()
        .map(CostMap)
}

/// One [`CostMap`] per [`MovementLayer`], indexed by layer.
///
/// This is the collection handed verbatim to the pathfinder at map load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerCostMaps {
    maps: [CostMap; 3],
}

impl LayerCostMaps {
    /// Build the cost map of every layer from the terrain layer of a map.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::UnknownTerrain`] for the first code outside
    /// the terrain table.
    pub fn from_terrain(terrain_codes: &[u8]) -> Result<Self, TerrainError> {
        let maps = [
            generate_cost_map(terrain_codes, MovementLayer::Water)?,
            generate_cost_map(terrain_codes, MovementLayer::Land)?,
            generate_cost_map(terrain_codes, MovementLayer::Air)?,
        ];
        debug!(tiles = terrain_codes.len(), "generated movement cost maps");
        Ok(Self { maps })
    }

    /// The cost map of `layer`.
    #[must_use]
    pub fn layer(&self, layer: MovementLayer) -> &CostMap {
        &self.maps[layer.index()]
    }

    /// Iterate `(layer, cost map)` pairs in layer order.
    pub fn iter(&self) -> impl Iterator<Item = (MovementLayer, &CostMap)> {
        MovementLayer::iter().map(|layer| (layer, self.layer(layer)))
    }

    #[must_use]
    pub fn into_maps(self) -> [CostMap; 3] {
        self.maps
    }
}

impl Index<MovementLayer> for LayerCostMaps {
    type Output = CostMap;

    fn index(&self, layer: MovementLayer) -> &CostMap {
        self.layer(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs_stay_in_range() {
        for terrain in TerrainType::iter() {
            for layer in MovementLayer::iter() {
                assert!(movement_cost(terrain, layer) <= 2, "{terrain} on {layer}");
            }
        }
    }

    #[test]
    fn test_air_is_always_one() {
        for terrain in TerrainType::iter() {
            assert_eq!(movement_cost(terrain, MovementLayer::Air), 1);
        }
    }

    #[test]
    fn test_land_costs() {
        assert_eq!(movement_cost(TerrainType::DeepWater, MovementLayer::Land), 0);
        assert_eq!(movement_cost(TerrainType::Mountain, MovementLayer::Land), 0);
        assert_eq!(movement_cost(TerrainType::Plain, MovementLayer::Land), 1);
        assert_eq!(movement_cost(TerrainType::GrassHills, MovementLayer::Land), 2);
        for terrain in TerrainType::iter().filter(|t| t.is_hills()) {
            assert_eq!(movement_cost(terrain, MovementLayer::Land), 2);
        }
    }

    #[test]
    fn test_water_only_passes_water() {
        for terrain in TerrainType::iter() {
            let expected = u8::from(terrain.is_water());
            assert_eq!(movement_cost(terrain, MovementLayer::Water), expected, "{terrain}");
        }
    }

    #[test]
    fn test_cost_map_preserves_index_and_length() {
        let codes = [1, 7, 8, 13, 2, 5];
        for layer in MovementLayer::iter() {
            let map = generate_cost_map(&codes, layer).unwrap();
            assert_eq!(map.len(), codes.len());
            for (i, &code) in codes.iter().enumerate() {
                let terrain = TerrainType::try_from(code).unwrap();
                assert_eq!(map.get(i), Some(movement_cost(terrain, layer)));
            }
        }
    }

    #[test]
    fn test_cost_map_rejects_unknown_code() {
        let err = generate_cost_map(&[1, 2, 99], MovementLayer::Land).unwrap_err();
        assert_eq!(err, TerrainError::UnknownTerrain(99));
    }

    #[test]
    fn test_layer_cost_maps_are_indexed_by_layer() {
        let codes = [2, 8];
        let maps = LayerCostMaps::from_terrain(&codes).unwrap();
        assert_eq!(maps[MovementLayer::Water].as_slice(), &[1, 0]);
        assert_eq!(maps[MovementLayer::Land].as_slice(), &[0, 2]);
        assert_eq!(maps[MovementLayer::Air].as_slice(), &[1, 1]);
        let layers: Vec<_> = maps.iter().map(|(layer, _)| layer).collect();
        assert_eq!(layers, vec![MovementLayer::Water, MovementLayer::Land, MovementLayer::Air]);
    }

    #[test]
    fn test_layer_serde_names() {
        let layer: MovementLayer = serde_json::from_str("\"land\"").unwrap();
        assert_eq!(layer, MovementLayer::Land);
    }
}
