//! City growth and border recomputation.
//!
//! Growth claims one tile per call, always the first unclaimed neighbour in
//! owned-tile order then neighbour order. Every successful claim rebuilds
//! the borders of all the owner's cities and redraws their outlines.

use hex_math::CubeCoordinate;
use tracing::{debug, info};

use crate::components::CityUiComponent;
use crate::context::GameContext;
use crate::model::{City, CityId, PlayerId};
use crate::services::resolve_tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthOutcome {
    /// The city claimed this tile.
    Grew(CubeCoordinate),
    /// No unclaimed neighbour is left on the city's frontier.
    Exhausted,
    UnknownCity,
}

/// Claim one more tile for `city_id`.
pub fn grow_city(city_id: CityId, ctx: &mut GameContext<'_>) -> GrowthOutcome {
    let Some(city) = ctx.cities.city(city_id) else {
        debug!(city = %city_id, "grow requested for unknown city");
        return GrowthOutcome::UnknownCity;
    };

    let Some(claimed) = claim_first_neighbor(&city, ctx) else {
        debug!(city = %city_id, tiles = city.tiles.len(), "city cannot grow");
        return GrowthOutcome::Exhausted;
    };

    let notified = update_city_borders(city.player, ctx);
    info!(city = %city_id, tile = %claimed, notified, "city grew");
    GrowthOutcome::Grew(claimed)
}

fn claim_first_neighbor(city: &City, ctx: &mut GameContext<'_>) -> Option<CubeCoordinate> {
    for &owned in &city.tiles {
        for neighbor in ctx.grid.neighbor_tiles(owned) {
            if city.owns(neighbor) {
                continue;
            }
            let Some(tile) = resolve_tile(ctx.grid, ctx.tiles, neighbor) else {
                continue;
            };
            if ctx.cities.add_city_tile(city.id, neighbor, tile.pixel) {
                return Some(neighbor);
            }
        }
    }
    None
}

/// Rebuild the borders of every city of `player` and redraw their outlines.
///
/// Returns how many city UI components were redrawn.
pub fn update_city_borders(player: PlayerId, ctx: &mut GameContext<'_>) -> usize {
    ctx.cities
        .create_city_borders(player, ctx.config.tile_width, ctx.config.tile_height);

    let mut notified = 0;
    for city in ctx.cities.cities_of_player(player) {
        let Some(entity) = ctx.scene.city_entity(city.id) else {
            debug!(city = %city.id, "city has no entity");
            continue;
        };
        if let Some(ui) = ctx.registry.find_mut::<CityUiComponent>(entity) {
            ui.update_borders(&city.borders);
            notified += 1;
        }
    }
    debug!(%player, notified, "city borders updated");
    notified
}

#[cfg(test)]
mod tests {
    use hex_math::Vec2;

    use super::*;
    use crate::model::NewCity;
    use crate::services::CityService;
    use crate::testing::Fixture;

    fn cube(q: i32, r: i32) -> CubeCoordinate {
        CubeCoordinate::new(q, r)
    }

    /// A city at `(q, r)` owning only `tiles`, with a UI component attached.
    fn city_with_ui(fx: &mut Fixture, q: i32, r: i32, tiles: &[CubeCoordinate]) -> (CityId, hex_component::Entity) {
        let id = fx
            .cities
            .create_city(NewCity {
                player: fx.config.player_id,
                name: "Ur".into(),
                position: cube(q, r),
                position_pixel: fx.tiles.pixel_of(q, r),
                tiles: tiles.to_vec(),
                tiles_pixel: tiles.iter().map(|c| fx.tiles.pixel_of(c.q(), c.r())).collect(),
            })
            .unwrap();
        let entity = fx.registry.spawn();
        fx.scene.bind_city(id, entity);
        fx.registry
            .attach(entity, CityUiComponent::new("Ur", Vec2::ZERO))
            .unwrap();
        (id, entity)
    }

    #[test]
    fn test_grow_claims_first_unclaimed_neighbour() {
        let mut fx = Fixture::new(6, 6);
        let (id, entity) = city_with_ui(&mut fx, 2, 2, &[cube(3, 2)]);

        let outcome = grow_city(id, &mut fx.ctx());

        // (3,2) + (1,0) is the first neighbour in direction order.
        assert_eq!(outcome, GrowthOutcome::Grew(cube(4, 2)));
        assert_eq!(fx.cities.claims, 1);
        assert_eq!(fx.cities.border_recomputes, 1);
        let ui = fx.registry.find::<CityUiComponent>(entity).unwrap();
        assert_eq!(ui.redraws(), 1);
        assert_eq!(ui.borders().len(), 2);
    }

    #[test]
    fn test_grow_skips_owned_and_claimed_tiles() {
        let mut fx = Fixture::new(6, 6);
        // Another city already holds (4,2).
        city_with_ui(&mut fx, 4, 2, &[]);
        let (id, _) = city_with_ui(&mut fx, 2, 2, &[cube(3, 2)]);

        let outcome = grow_city(id, &mut fx.ctx());

        // (4,2) taken, (4,1) is next.
        assert_eq!(outcome, GrowthOutcome::Grew(cube(4, 1)));
    }

    #[test]
    fn test_grow_claims_one_tile_per_call() {
        let mut fx = Fixture::new(6, 6);
        let (id, _) = city_with_ui(&mut fx, 2, 2, &[cube(3, 2)]);
        grow_city(id, &mut fx.ctx());
        grow_city(id, &mut fx.ctx());
        assert_eq!(fx.cities.claims, 2);
        assert_eq!(fx.cities.city(id).unwrap().tiles.len(), 3);
    }

    #[test]
    fn test_grow_is_idempotent_once_exhausted() {
        // A 1x2 map: the city centre and one tile.
        let mut fx = Fixture::new(1, 2);
        let (id, entity) = city_with_ui(&mut fx, 0, 0, &[cube(1, 0)]);

        for _ in 0..3 {
            assert_eq!(grow_city(id, &mut fx.ctx()), GrowthOutcome::Exhausted);
        }
        assert_eq!(fx.cities.claims, 0);
        assert_eq!(fx.cities.border_recomputes, 0);
        assert_eq!(fx.registry.find::<CityUiComponent>(entity).unwrap().redraws(), 0);
    }

    #[test]
    fn test_grow_unknown_city() {
        let mut fx = Fixture::new(3, 3);
        assert_eq!(grow_city(CityId(42), &mut fx.ctx()), GrowthOutcome::UnknownCity);
        assert_eq!(fx.cities.border_recomputes, 0);
    }

    #[test]
    fn test_update_borders_notifies_every_city_of_player() {
        let mut fx = Fixture::new(8, 8);
        let (_, first) = city_with_ui(&mut fx, 1, 1, &[cube(2, 1)]);
        let (_, second) = city_with_ui(&mut fx, 5, 5, &[cube(6, 5), cube(5, 6)]);
        let player = fx.config.player_id;

        assert_eq!(update_city_borders(player, &mut fx.ctx()), 2);
        assert_eq!(fx.cities.border_recomputes, 1);
        assert_eq!(fx.registry.find::<CityUiComponent>(first).unwrap().borders().len(), 1);
        assert_eq!(fx.registry.find::<CityUiComponent>(second).unwrap().borders().len(), 2);

        assert_eq!(update_city_borders(PlayerId(9), &mut fx.ctx()), 0);
    }
}
