//! Tile-click state machine.
//!
//! [`handle_click`] takes the current [`SelectionState`] by value and returns
//! the next one, so the whole flow is a function of its inputs:
//!
//! - clicking a friendly unit selects it and shows its reachable tiles;
//! - clicking the same unit again hides them;
//! - clicking a reachable tile previews a path to it;
//! - clicking that tile again moves the unit along the path;
//! - clicking anywhere else inspects the tile.

use hex_math::{CubeCoordinate, Vec2, tile_center};
use tracing::{debug, info, trace, warn};

use crate::components::UnitUiComponent;
use crate::context::GameContext;
use crate::info::TileReport;
use crate::model::{Unit, UnitId};
use crate::renderer::MovementRenderer;
use crate::services::Tile;

/// A resolved pointer click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileClick {
    /// The pointer was outside the map.
    OffMap,
    Tile { cube: CubeCoordinate, tile: Tile },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    Idle,
    UnitSelected,
    PathPreview,
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    OffMap,
    /// The tile was shown in the info panel.
    Inspected,
    Selected { unit: UnitId },
    PreviewShown { reachable: usize },
    PathShown { steps: usize },
    PreviewCleared,
    Moved { unit: UnitId, to: CubeCoordinate },
    MoveRejected { unit: UnitId },
}

/// Selection and preview state carried between clicks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected: Option<Unit>,
    last_clicked: Option<CubeCoordinate>,
    reachable: Vec<CubeCoordinate>,
    preview_path: Vec<CubeCoordinate>,
    markers: MovementRenderer,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> InteractionPhase {
        if self.markers.is_visible() {
            InteractionPhase::PathPreview
        } else if self.selected.is_some() {
            InteractionPhase::UnitSelected
        } else {
            InteractionPhase::Idle
        }
    }

    /// The unit selected for moving, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Unit> {
        self.selected.as_ref()
    }

    /// The tile of the previous click.
    #[must_use]
    pub fn last_clicked(&self) -> Option<CubeCoordinate> {
        self.last_clicked
    }

    /// The last reachable set computed; the unit's own tile comes first.
    #[must_use]
    pub fn reachable(&self) -> &[CubeCoordinate] {
        &self.reachable
    }

    /// Path shown for the pending move; empty when none is shown.
    #[must_use]
    pub fn preview_path(&self) -> &[CubeCoordinate] {
        &self.preview_path
    }

    #[must_use]
    pub fn markers(&self) -> &MovementRenderer {
        &self.markers
    }

    /// Drop the selection if it refers to `unit`.
    pub fn forget_unit(&mut self, unit: UnitId) {
        if self.selected.as_ref().is_some_and(|u| u.id == unit) {
            *self = Self {
                last_clicked: self.last_clicked,
                ..Self::default()
            };
        }
    }
}

/// Apply one click to `state`.
pub fn handle_click(
    mut state: SelectionState,
    click: &TileClick,
    ctx: &mut GameContext<'_>,
) -> (SelectionState, ClickOutcome) {
    let (cube, tile) = match *click {
        TileClick::OffMap => {
            ctx.info.hide();
            return (state, ClickOutcome::OffMap);
        }
        TileClick::Tile { cube, tile } => (cube, tile),
    };

    if let Some(outcome) = confirm_move(&mut state, cube, &tile, ctx) {
        return (state, outcome);
    }

    let mut outcome;
    let mut fresh_preview = false;
    match ctx.units.units_at(cube, ctx.config.player_id).into_iter().next() {
        Some(unit) => {
            let (id, movement, layer) = (unit.id, unit.movement, unit.layer);
            trace!(unit = %id, %cube, "unit selected");
            state.selected = Some(unit);
            outcome = ClickOutcome::Selected { unit: id };

            if state.markers.is_visible() {
                state.preview_path.clear();
                state.markers.reset();
                outcome = ClickOutcome::PreviewCleared;
            } else if state.preview_path.is_empty() {
                state.reachable = ctx.grid.reachable_tiles(cube, movement, layer);
                state.markers.create(&state.reachable, ctx.grid, ctx.tiles);
                fresh_preview = true;
                debug!(unit = %id, reachable = state.reachable.len(), "reachable tiles shown");
                outcome = ClickOutcome::PreviewShown {
                    reachable: state.reachable.len(),
                };
            }
        }
        None => {
            inspect_tile(cube, &tile, ctx);
            outcome = ClickOutcome::Inspected;
        }
    }

    if state.markers.is_visible() && !fresh_preview {
        if let Some(path_outcome) = resolve_path(&mut state, cube, ctx) {
            outcome = path_outcome;
        }
    }

    state.last_clicked = Some(cube);
    (state, outcome)
}

/// Second click on the previewed destination. Returns `None` if the click is
/// not a confirmation.
fn confirm_move(
    state: &mut SelectionState,
    cube: CubeCoordinate,
    tile: &Tile,
    ctx: &mut GameContext<'_>,
) -> Option<ClickOutcome> {
    let unit = state.selected.as_ref()?.id;
    if state.last_clicked != Some(cube) || state.preview_path.is_empty() {
        return None;
    }

    if !ctx.units.move_unit_by_path(unit, &state.preview_path) {
        debug!(%unit, %cube, steps = state.preview_path.len(), "move rejected");
        return Some(ClickOutcome::MoveRejected { unit });
    }

    let center = tile_center(tile.pixel, ctx.config.tile_size());
    refresh_moved_unit(unit, center, ctx);
    *state = SelectionState {
        last_clicked: Some(cube),
        ..SelectionState::default()
    };
    info!(%unit, to = %cube, "unit moved");
    Some(ClickOutcome::Moved { unit, to: cube })
}

fn refresh_moved_unit(unit: UnitId, center: Vec2, ctx: &mut GameContext<'_>) {
    let Some(entity) = ctx.scene.unit_entity(unit) else {
        warn!(%unit, "moved unit has no entity");
        return;
    };
    ctx.scene.move_sprite(entity, center);

    let Some(snapshot) = ctx.units.unit(unit) else {
        warn!(%unit, "moved unit vanished from the unit service");
        return;
    };
    if let Some(ui) = ctx.registry.find_mut::<UnitUiComponent>(entity) {
        ui.update_health(snapshot.health_fraction());
        ui.update_movement(snapshot.movement_fraction());
        ui.update_step(center);
    }
}

/// Preview the path to `cube`, or clear the preview if `cube` is out of
/// reach. Returns `None` when the click changes nothing.
fn resolve_path(state: &mut SelectionState, cube: CubeCoordinate, ctx: &GameContext<'_>) -> Option<ClickOutcome> {
    let anchor = *state.reachable.first()?;
    let mut outcome = None;

    if anchor != cube {
        if state.reachable.contains(&cube) {
            let layer = state.selected.as_ref()?.layer;
            state.preview_path = ctx.grid.compute_path(anchor, cube, layer);
            let steps = state.markers.create(&state.preview_path, ctx.grid, ctx.tiles);
            debug!(from = %anchor, to = %cube, steps, "path previewed");
            outcome = Some(ClickOutcome::PathShown { steps });
        } else {
            state.preview_path.clear();
        }
    }

    if state.preview_path.is_empty() {
        state.markers.reset();
        outcome = Some(ClickOutcome::PreviewCleared);
    }
    outcome
}

fn inspect_tile(cube: CubeCoordinate, tile: &Tile, ctx: &mut GameContext<'_>) {
    let resources = ctx.resources.resources(cube).map(<[_]>::to_vec).unwrap_or_default();
    let report = TileReport {
        offset: tile.offset,
        cube,
        tile_index: tile.index,
        resources,
    };
    trace!(%report, "tile inspected");
    ctx.info.show(report);
}
