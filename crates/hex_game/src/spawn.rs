//! Gameplay actions that create and destroy unit and city entities.

use hex_component::{Component, Entity};
use hex_math::{CubeCoordinate, Vec2, tile_center};
use tracing::{debug, info, warn};

use crate::city::update_city_borders;
use crate::components::{CityUiComponent, UnitUiComponent};
use crate::config::UnitTemplate;
use crate::context::GameContext;
use crate::error::GameError;
use crate::model::{CityId, NewCity, PlayerId, UnitId, UnitKind, UnitSpawn};
use crate::scene::{CITY_DEPTH, Sprite, UNIT_DEPTH};
use crate::services::resolve_tile;

/// Texture of city sprites.
pub const CITY_TEXTURE: &str = "city";

/// Create a unit of `player` from `template` at `position`.
///
/// Returns `Ok(None)` if the unit service declines the unit.
///
/// # Errors
///
/// Returns [`GameError::OffMap`] if `position` has no tile, or a registry
/// error if attaching the unit's UI fails. In that case the unit is removed
/// from the unit service again and its entity is discarded.
pub fn spawn_unit(
    template: &UnitTemplate,
    position: CubeCoordinate,
    player: PlayerId,
    ctx: &mut GameContext<'_>,
) -> Result<Option<UnitId>, GameError> {
    let tile = resolve_tile(ctx.grid, ctx.tiles, position).ok_or(GameError::OffMap(position))?;
    let Some(id) = ctx.units.create_unit(UnitSpawn::from_template(template, player, position)) else {
        debug!(template = %template.name, %position, "unit service declined spawn");
        return Ok(None);
    };

    let center = tile_center(tile.pixel, ctx.config.tile_size());
    let entity = ctx.registry.spawn();
    ctx.scene.add_sprite(entity, Sprite::new(template.texture.clone(), center, UNIT_DEPTH));
    let ui = UnitUiComponent::new(center, ctx.config.unit_bar_width);
    if let Err(err) = attach_or_discard(entity, ui, ctx) {
        ctx.units.remove_unit(id);
        return Err(err);
    }
    ctx.scene.bind_unit(id, entity);

    info!(unit = %id, %entity, template = %template.name, %position, "unit spawned");
    Ok(Some(id))
}

/// Found a city for `player` at `position`, claiming its on-map neighbours.
///
/// Returns `Ok(None)` if the city service declines the city.
///
/// # Errors
///
/// Returns [`GameError::OffMap`] if `position` has no tile, or a registry
/// error if attaching the city's UI fails. The city service has no removal,
/// so its record stays; the entity and sprite are discarded.
pub fn found_city(
    name: &str,
    position: CubeCoordinate,
    player: PlayerId,
    ctx: &mut GameContext<'_>,
) -> Result<Option<CityId>, GameError> {
    let tile = resolve_tile(ctx.grid, ctx.tiles, position).ok_or(GameError::OffMap(position))?;

    let mut tiles = Vec::new();
    let mut tiles_pixel = Vec::new();
    for neighbor in ctx.grid.neighbor_tiles(position) {
        if let Some(neighbor_tile) = resolve_tile(ctx.grid, ctx.tiles, neighbor) {
            tiles.push(neighbor);
            tiles_pixel.push(neighbor_tile.pixel);
        }
    }

    let request = NewCity {
        player,
        name: name.to_owned(),
        position,
        position_pixel: tile.pixel,
        tiles,
        tiles_pixel,
    };
    let Some(id) = ctx.cities.create_city(request) else {
        debug!(name, %position, "city service declined city");
        return Ok(None);
    };
    ctx.cities
        .create_city_borders(player, ctx.config.tile_width, ctx.config.tile_height);
    let borders = ctx.cities.city(id).map(|c| c.borders).unwrap_or_default();

    let size = ctx.config.tile_size();
    let entity = ctx.registry.spawn();
    ctx.scene
        .add_sprite(entity, Sprite::new(CITY_TEXTURE, tile_center(tile.pixel, size), CITY_DEPTH));
    let label_position = tile.pixel + Vec2::new(-2.0, size.height - 4.0);
    let ui = CityUiComponent::new(name, label_position).with_borders(borders);
    attach_or_discard(entity, ui, ctx)?;
    ctx.scene.bind_city(id, entity);

    info!(city = %id, %entity, name, %position, "city founded");
    Ok(Some(id))
}

/// Turn a settler into a city on its tile.
///
/// The settler is only consumed once the city exists. If the city service
/// declines, this returns `Ok(None)` and the settler stays where it is.
///
/// # Errors
///
/// Returns [`GameError::UnitNotFound`] or [`GameError::NotASettler`] without
/// changing anything, or the errors of [`found_city`].
pub fn settler_to_city(unit_id: UnitId, name: &str, ctx: &mut GameContext<'_>) -> Result<Option<CityId>, GameError> {
    let unit = ctx.units.unit(unit_id).ok_or(GameError::UnitNotFound(unit_id))?;
    if unit.kind != UnitKind::Settler {
        return Err(GameError::NotASettler(unit_id));
    }

    let Some(city) = found_city(name, unit.position, unit.player, ctx)? else {
        debug!(unit = %unit_id, position = %unit.position, "settler kept, city declined");
        return Ok(None);
    };

    if !ctx.units.remove_unit(unit_id) {
        warn!(unit = %unit_id, "unit service did not remove settler");
    }
    if let Some(entity) = ctx.scene.unbind_unit(unit_id) {
        ctx.registry.detach::<UnitUiComponent>(entity)?;
        ctx.registry.despawn(entity)?;
        ctx.scene.remove_sprite(entity);
    }
    update_city_borders(unit.player, ctx);
    Ok(Some(city))
}

/// Attach `component` to the freshly spawned `entity`. On failure the entity
/// and its sprite are discarded before the error is returned.
fn attach_or_discard<T: Component>(
    entity: Entity,
    component: T,
    ctx: &mut GameContext<'_>,
) -> Result<(), GameError> {
    let Err(err) = ctx.registry.attach(entity, component) else {
        return Ok(());
    };
    ctx.scene.remove_sprite(entity);
    if let Err(cleanup) = ctx.registry.despawn(entity) {
        warn!(%entity, error = %cleanup, "failed to discard entity");
    }
    Err(err.into())
}
