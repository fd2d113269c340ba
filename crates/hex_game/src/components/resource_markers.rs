//! Per-tile resource dots.
//!
//! Each resource entry gets a column; its amount is drawn as up to four dots
//! in a small cluster at the bottom of the tile.

use hex_component::{Component, Entity, HookResult, Hooks};
use hex_math::Vec2;
use hex_terrain::{Resource, ResourceType};
use tracing::warn;

const DOT_RADIUS: f32 = 2.0;
const DOT_ROW: f32 = 20.0;

/// Offsets of the dots of one entry, by amount.
const AMOUNT_OFFSETS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(4.0, 0.0),
    Vec2::new(0.0, 4.0),
    Vec2::new(4.0, 0.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceDot {
    pub kind: ResourceType,
    pub position: Vec2,
    pub radius: f32,
}

impl ResourceDot {
    /// Fill colour as `0xRRGGBB`.
    #[must_use]
    pub const fn color(&self) -> u32 {
        match self.kind {
            ResourceType::Food => 0x41_a71a,
            ResourceType::Production => 0xeb_7400,
            ResourceType::Gold => 0xf7_ce2b,
        }
    }
}

/// Column x-positions for `count` entries within a tile.
#[allow(clippy::cast_precision_loss)]
fn column_starts(count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![14.0],
        2 => vec![10.0, 18.0],
        3 => vec![5.0, 14.0, 23.0],
        // Spread further entries evenly over the three-column span.
        n => {
            let step = 18.0 / (n - 1) as f32;
            (0..n).map(|i| 5.0 + step * i as f32).collect()
        }
    }
}

#[derive(Debug)]
pub struct ResourceMarkerComponent {
    owner: Option<Entity>,
    tile_corner: Vec2,
    resources: Vec<Resource>,
    dots: Vec<ResourceDot>,
}

impl ResourceMarkerComponent {
    /// `tile_corner` is the top-left corner of the tile.
    #[must_use]
    pub fn new(tile_corner: Vec2, resources: Vec<Resource>) -> Self {
        Self {
            owner: None,
            tile_corner,
            resources,
            dots: Vec::new(),
        }
    }

    #[must_use]
    pub fn dots(&self) -> &[ResourceDot] {
        &self.dots
    }

    fn layout(&self) -> Vec<ResourceDot> {
        let mut dots = Vec::new();
        let starts = column_starts(self.resources.len());
        for (resource, &x) in self.resources.iter().zip(&starts) {
            let base = self.tile_corner + Vec2::new(x, DOT_ROW);
            let amount = usize::from(resource.amount);
            if amount > AMOUNT_OFFSETS.len() {
                warn!(owner = ?self.owner, %resource, "resource amount exceeds marker capacity");
            }
            for offset in AMOUNT_OFFSETS.iter().take(amount) {
                dots.push(ResourceDot {
                    kind: resource.kind,
                    position: base + *offset,
                    radius: DOT_RADIUS,
                });
            }
        }
        dots
    }
}

impl Component for ResourceMarkerComponent {
    fn type_name() -> &'static str {
        "ResourceMarkerComponent"
    }

    fn hooks(&self) -> Hooks {
        Hooks::START | Hooks::DESTROY
    }

    fn init(&mut self, entity: Entity) -> HookResult {
        self.owner = Some(entity);
        Ok(())
    }

    fn start(&mut self) -> HookResult {
        self.dots = self.layout();
        Ok(())
    }

    fn destroy(&mut self) -> HookResult {
        self.dots.clear();
        Ok(())
    }
}
