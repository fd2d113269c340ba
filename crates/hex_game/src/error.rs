//! Error types for game actions.

use hex_component::RegistryError;
use hex_math::CubeCoordinate;
use hex_terrain::TerrainError;
use thiserror::Error;

use crate::model::UnitId;

/// Errors surfaced by game actions.
///
/// Declined requests (blocked moves, exhausted city growth) are not errors;
/// they come back as outcome values.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Terrain(#[from] TerrainError),

    #[error("invalid game config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{0} not found")]
    UnitNotFound(UnitId),

    #[error("{0} is not a settler")]
    NotASettler(UnitId),

    #[error("no unit template named {0:?}")]
    UnknownTemplate(String),

    #[error("coordinate {0} does not resolve to a map tile")]
    OffMap(CubeCoordinate),
}
