//! Health and movement bars drawn under a unit.

use hex_component::{Component, Entity, HookResult, Hooks};
use hex_math::Vec2;
use tracing::trace;

use super::bar::ProgressBar;

/// Vertical offset of the health bar below the unit centre.
pub const HEALTH_BAR_OFFSET: f32 = 17.0;
/// Vertical offset of the movement bar below the unit centre.
pub const MOVEMENT_BAR_OFFSET: f32 = 19.0;

/// Bars are created on `start` and dropped on `destroy`.
#[derive(Debug)]
pub struct UnitUiComponent {
    owner: Option<Entity>,
    anchor: Vec2,
    bar_width: f32,
    health: Option<ProgressBar>,
    movement: Option<ProgressBar>,
}

impl UnitUiComponent {
    /// `anchor` is the centre of the unit sprite.
    #[must_use]
    pub fn new(anchor: Vec2, bar_width: f32) -> Self {
        Self {
            owner: None,
            anchor,
            bar_width,
            health: None,
            movement: None,
        }
    }

    fn bar_origin(&self, offset: f32) -> Vec2 {
        Vec2::new(self.anchor.x - self.bar_width / 2.0, self.anchor.y + offset)
    }

    /// Set the health bar to `fraction` of full. Does nothing before `start`
    /// has created the bars.
    pub fn update_health(&mut self, fraction: f32) {
        if let Some(bar) = &mut self.health {
            bar.set_fill(fraction);
        }
    }

    /// Set the movement bar to `fraction` of the unit's movement points.
    pub fn update_movement(&mut self, fraction: f32) {
        if let Some(bar) = &mut self.movement {
            bar.set_fill(fraction);
        }
    }

    /// Follow the unit to a new centre.
    pub fn update_step(&mut self, anchor: Vec2) {
        self.anchor = anchor;
        let health_origin = self.bar_origin(HEALTH_BAR_OFFSET);
        let movement_origin = self.bar_origin(MOVEMENT_BAR_OFFSET);
        if let Some(bar) = &mut self.health {
            bar.move_to(health_origin);
        }
        if let Some(bar) = &mut self.movement {
            bar.move_to(movement_origin);
        }
    }

    /// Entity this UI was attached to, once `init` has run.
    #[must_use]
    pub fn owner(&self) -> Option<Entity> {
        self.owner
    }

    #[must_use]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// The health bar, created on `start`.
    #[must_use]
    pub fn health_bar(&self) -> Option<&ProgressBar> {
        self.health.as_ref()
    }

    #[must_use]
    pub fn movement_bar(&self) -> Option<&ProgressBar> {
        self.movement.as_ref()
    }
}

impl Component for UnitUiComponent {
    fn type_name() -> &'static str {
        "UnitUiComponent"
    }

    fn hooks(&self) -> Hooks {
        Hooks::START | Hooks::DESTROY
    }

    fn init(&mut self, entity: Entity) -> HookResult {
        self.owner = Some(entity);
        Ok(())
    }

    fn start(&mut self) -> HookResult {
        self.health = Some(ProgressBar::new(self.bar_origin(HEALTH_BAR_OFFSET), self.bar_width));
        self.movement = Some(ProgressBar::new(self.bar_origin(MOVEMENT_BAR_OFFSET), self.bar_width));
        trace!(owner = ?self.owner, "unit bars created");
        Ok(())
    }

    fn destroy(&mut self) -> HookResult {
        self.health = None;
        self.movement = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hex_component::ComponentRegistry;

    use super::*;

    #[test]
    fn test_bars_appear_after_first_tick() {
        let mut registry = ComponentRegistry::new();
        let entity = registry.spawn();
        registry.attach(entity, UnitUiComponent::new(Vec2::new(16.0, 17.0), 20.0)).unwrap();

        let ui = registry.find::<UnitUiComponent>(entity).unwrap();
        assert_eq!(ui.owner(), Some(entity));
        assert!(ui.health_bar().is_none());

        registry.tick(0.016).unwrap();
        let ui = registry.find::<UnitUiComponent>(entity).unwrap();
        assert_eq!(ui.health_bar().unwrap().position(), Vec2::new(6.0, 34.0));
        assert_eq!(ui.movement_bar().unwrap().position(), Vec2::new(6.0, 36.0));
        assert_eq!(ui.movement_bar().unwrap().width(), 20.0);
    }

    #[test]
    fn test_updates_before_start_are_ignored() {
        let mut ui = UnitUiComponent::new(Vec2::ZERO, 20.0);
        ui.update_health(0.2);
        ui.start().unwrap();
        assert_eq!(ui.health_bar().unwrap().fill(), 1.0);
    }

    #[test]
    fn test_update_step_moves_bars() {
        let mut ui = UnitUiComponent::new(Vec2::ZERO, 20.0);
        ui.start().unwrap();
        ui.update_movement(0.25);
        ui.update_step(Vec2::new(48.0, 51.0));
        let movement = ui.movement_bar().unwrap();
        assert_eq!(movement.position(), Vec2::new(38.0, 70.0));
        assert_eq!(movement.fill(), 0.25);
        assert_eq!(ui.health_bar().unwrap().position(), Vec2::new(38.0, 68.0));
    }

    #[test]
    fn test_destroy_drops_bars() {
        let mut registry = ComponentRegistry::new();
        let entity = registry.spawn();
        registry.attach(entity, UnitUiComponent::new(Vec2::ZERO, 20.0)).unwrap();
        registry.tick(0.016).unwrap();
        registry.detach::<UnitUiComponent>(entity).unwrap();
        assert!(!registry.contains::<UnitUiComponent>(entity));
    }
}
