//! Cube and offset coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors raised when constructing coordinates from raw components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("cube coordinate ({q},{r},{s}) violates q + r + s = 0")]
    NotOnPlane { q: i32, r: i32, s: i32 },
}

/// A hex-grid address `(q, r, s)` with the invariant `q + r + s = 0`.
///
/// The fields are private so the invariant cannot be broken after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCube", into = "RawCube")]
pub struct CubeCoordinate {
    q: i32,
    r: i32,
    s: i32,
}

impl CubeCoordinate {
    /// The grid origin `(0, 0, 0)`.
    pub const ORIGIN: Self = Self { q: 0, r: 0, s: 0 };

    /// Create a coordinate from its axial part; `s` is derived.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Create a coordinate from all three components.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::NotOnPlane`] if `q + r + s != 0`.
    pub const fn try_new(q: i32, r: i32, s: i32) -> Result<Self, CoordinateError> {
        if q as i64 + r as i64 + s as i64 != 0 {
            return Err(CoordinateError::NotOnPlane { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    #[must_use]
    pub const fn q(self) -> i32 {
        self.q
    }

    #[must_use]
    pub const fn r(self) -> i32 {
        self.r
    }

    #[must_use]
    pub const fn s(self) -> i32 {
        self.s
    }
}

impl fmt::Display for CubeCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.q, self.r, self.s)
    }
}

/// Serde mirror of [`CubeCoordinate`]; validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawCube {
    q: i32,
    r: i32,
    s: i32,
}

impl TryFrom<RawCube> for CubeCoordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCube) -> Result<Self, Self::Error> {
        Self::try_new(raw.q, raw.r, raw.s)
    }
}

impl From<CubeCoordinate> for RawCube {
    fn from(cube: CubeCoordinate) -> Self {
        Self {
            q: cube.q,
            r: cube.r,
            s: cube.s,
        }
    }
}

/// A column/row address into the rectangular tile layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OffsetCoordinate {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl OffsetCoordinate {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Row-major tile index for a map `columns` wide, or `None` if the
    /// coordinate lies outside the map.
    #[must_use]
    pub fn index(self, rows: usize, columns: usize) -> Option<usize> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        (x < columns && y < rows).then_some(y * columns + x)
    }
}

impl fmt::Display for OffsetCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_s() {
        let c = CubeCoordinate::new(2, -5);
        assert_eq!(c.s(), 3);
        assert_eq!(c.q() + c.r() + c.s(), 0);
    }

    #[test]
    fn test_try_new_rejects_off_plane() {
        assert_eq!(
            CubeCoordinate::try_new(1, 1, 1),
            Err(CoordinateError::NotOnPlane { q: 1, r: 1, s: 1 })
        );
        assert_eq!(CubeCoordinate::try_new(0, 5, -5), Ok(CubeCoordinate::new(0, 5)));
    }

    #[test]
    fn test_deserialize_validates_invariant() {
        let ok: CubeCoordinate = serde_json::from_str(r#"{"q":3,"r":1,"s":-4}"#).unwrap();
        assert_eq!(ok, CubeCoordinate::new(3, 1));
        let bad = serde_json::from_str::<CubeCoordinate>(r#"{"q":3,"r":1,"s":4}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_extreme_components_are_rejected_not_wrapped() {
        assert_eq!(
            CubeCoordinate::try_new(i32::MAX, 1, 0),
            Err(CoordinateError::NotOnPlane { q: i32::MAX, r: 1, s: 0 })
        );
        // Wraps to zero in i32 arithmetic.
        assert!(CubeCoordinate::try_new(i32::MAX, i32::MAX, 2).is_err());
        let bad = serde_json::from_str::<CubeCoordinate>(r#"{"q":2147483647,"r":1,"s":0}"#);
        assert!(bad.is_err());
        assert_eq!(
            CubeCoordinate::try_new(i32::MAX, 0, -i32::MAX),
            Ok(CubeCoordinate::new(i32::MAX, 0))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(CubeCoordinate::new(0, 5).to_string(), "0,5,-5");
        assert_eq!(OffsetCoordinate::new(4, 7).to_string(), "4,7");
    }

    #[test]
    fn test_offset_index_is_row_major() {
        assert_eq!(OffsetCoordinate::new(3, 2).index(4, 10), Some(23));
        assert_eq!(OffsetCoordinate::new(10, 0).index(4, 10), None);
        assert_eq!(OffsetCoordinate::new(0, 4).index(4, 10), None);
        assert_eq!(OffsetCoordinate::new(-1, 0).index(4, 10), None);
    }
}
