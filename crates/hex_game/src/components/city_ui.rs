//! City name label and border outline.

use hex_component::{Component, Entity, HookResult, Hooks};
use hex_math::Vec2;
use tracing::debug;

use crate::model::{BorderSegment, CityBorderSet};

/// Draw depth of city labels and borders.
pub const CITY_UI_DEPTH: i32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Vec2,
    pub depth: i32,
}

#[derive(Debug)]
pub struct CityUiComponent {
    owner: Option<Entity>,
    name: String,
    label_position: Vec2,
    label: Option<Label>,
    borders: CityBorderSet,
    redraws: u32,
}

impl CityUiComponent {
    /// UI for the city `name`; the label is placed at `label_position`.
    #[must_use]
    pub fn new(name: impl Into<String>, label_position: Vec2) -> Self {
        Self {
            owner: None,
            name: name.into(),
            label_position,
            label: None,
            borders: CityBorderSet::default(),
            redraws: 0,
        }
    }

    /// Set the initial outline.
    #[must_use]
    pub fn with_borders(mut self, borders: CityBorderSet) -> Self {
        self.borders = borders;
        self
    }

    /// Replace the drawn outline with `borders`.
    pub fn update_borders(&mut self, borders: &CityBorderSet) {
        self.borders = borders.clone();
        self.redraws += 1;
        debug!(owner = ?self.owner, segments = borders.len(), "city borders redrawn");
    }

    #[must_use]
    pub fn borders(&self) -> &[BorderSegment] {
        self.borders.segments()
    }

    /// How many times the outline was replaced.
    #[must_use]
    pub fn redraws(&self) -> u32 {
        self.redraws
    }

    /// The name label, created on `start`.
    #[must_use]
    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Component for CityUiComponent {
    fn type_name() -> &'static str {
        "CityUiComponent"
    }

    fn hooks(&self) -> Hooks {
        Hooks::START
    }

    fn init(&mut self, entity: Entity) -> HookResult {
        self.owner = Some(entity);
        Ok(())
    }

    fn start(&mut self) -> HookResult {
        self.label = Some(Label {
            text: self.name.clone(),
            position: self.label_position,
            depth: CITY_UI_DEPTH,
        });
        Ok(())
    }
}
