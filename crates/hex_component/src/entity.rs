//! Entity handles.
//!
//! Units, cities and resource markers are each one entity. The handle is
//! issued by the registry when the game spawns the entity and never changes
//! afterwards; attaching components does not touch it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque entity handle. Handles compare in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(u64);

impl Entity {
    /// Never issued by an allocator.
    pub const INVALID: Self = Self(0);

    /// Rebuild a handle from its raw id.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Issues entity handles in strictly increasing order, starting at 1.
///
/// Handles are not recycled, which is what makes handle order a stable
/// update order for the registry.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    issued: u64,
}

impl EntityAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next handle.
    pub fn allocate(&mut self) -> Entity {
        self.issued += 1;
        Entity(self.issued)
    }

    /// Handles issued so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_handle_is_one() {
        let mut allocator = EntityAllocator::new();
        let first = allocator.allocate();
        assert_eq!(first, Entity::from_raw(1));
        assert!(first.is_valid());
        assert!(!Entity::INVALID.is_valid());
    }

    #[test]
    fn test_handles_follow_creation_order() {
        let mut allocator = EntityAllocator::new();
        let handles: Vec<_> = (0..4).map(|_| allocator.allocate()).collect();
        assert!(handles.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(allocator.count(), 4);
    }

    #[test]
    fn test_display_and_serde() {
        let entity = Entity::from_raw(12);
        assert_eq!(entity.to_string(), "e12");
        assert_eq!(serde_json::to_string(&entity).unwrap(), "12");
    }
}
