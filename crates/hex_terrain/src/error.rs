//! Lookup-table error types.

/// Errors raised when raw map codes do not fit the lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TerrainError {
    /// A terrain code outside the terrain table.
    #[error("unknown terrain code {0}")]
    UnknownTerrain(u8),

    /// A landscape code outside the landscape table.
    #[error("unknown landscape code {0}")]
    UnknownLandscape(u8),

    /// A map layer does not have one entry per tile.
    #[error("{layer} layer has {actual} entries, expected {expected}")]
    LengthMismatch {
        layer: &'static str,
        expected: usize,
        actual: usize,
    },
}
