//! Pairwise collision resolution.
//!
//! Bounding boxes are built from positions at move-end and the extents
//! resolved at engine construction. Every unordered pair of live entities
//! is tested once in roster order; a hit runs the reaction for both
//! orderings of the pair. Reactions only mark disposals and push events,
//! the engine flushes the buffer afterwards.

use hecs::{Entity, World};

use gridfall_core::components::{AlienState, ShipState, ShotState};
use gridfall_core::constants::ALIEN_KILL_SPEEDUP;
use gridfall_core::enums::EntityKind;
use gridfall_core::events::GameEvent;
use gridfall_core::sprites::ExtentTable;
use gridfall_core::types::{Position, Rect, Velocity};

use super::mark_for_disposal;

/// Mutable state threaded through the reaction table.
pub struct ReactionCtx<'a> {
    pub disposal: &'a mut Vec<Entity>,
    pub events: &'a mut Vec<GameEvent>,
    pub alien_count: &'a mut u32,
}

/// Test every pair of live entities and run the reactions for hits.
pub fn run(world: &mut World, roster: &[Entity], extents: &ExtentTable, ctx: &mut ReactionCtx) {
    // Positions are stable during resolution, so the bounds are computed
    // once up front.
    let mut bodies: Vec<(Entity, EntityKind, Rect)> = Vec::with_capacity(roster.len());
    for &entity in roster {
        let Ok((kind, pos)) = world.query_one_mut::<(&EntityKind, &Position)>(entity) else {
            continue;
        };
        let extent = extents.get(kind.sprite());
        let rect = Rect::new(
            pos.x as i32,
            pos.y as i32,
            extent.width as i32,
            extent.height as i32,
        );
        bodies.push((entity, *kind, rect));
    }

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (a, kind_a, rect_a) = bodies[i];
            let (b, kind_b, rect_b) = bodies[j];
            if !rect_a.intersects(&rect_b) {
                continue;
            }
            react(world, a, kind_a, b, kind_b, ctx);
            react(world, b, kind_b, a, kind_a, ctx);
        }
    }
}

/// The reaction table, keyed on the ordered kind pair. Unlisted pairs
/// (shot on shot, friendly fire) are inert.
fn react(
    world: &mut World,
    first: Entity,
    first_kind: EntityKind,
    second: Entity,
    second_kind: EntityKind,
    ctx: &mut ReactionCtx,
) {
    match (first_kind, second_kind) {
        (EntityKind::PlayerShot, EntityKind::Alien) => {
            if shot_used(world, first) || ctx.disposal.contains(&second) {
                return;
            }
            consume_shot(world, first);
            mark_for_disposal(ctx.disposal, first);
            mark_for_disposal(ctx.disposal, second);
            *ctx.alien_count = ctx.alien_count.saturating_sub(1);
            ctx.events.push(GameEvent::AlienKilled);
            if *ctx.alien_count == 0 {
                ctx.events.push(GameEvent::Win);
            } else {
                // Every survivor speeds up; the factor compounds per kill.
                for (_, (vel, _)) in world.query_mut::<(&mut Velocity, &AlienState)>() {
                    vel.dx *= ALIEN_KILL_SPEEDUP;
                }
            }
        }
        (EntityKind::AlienShot, EntityKind::Ship) => {
            if shot_used(world, first) {
                return;
            }
            consume_shot(world, first);
            mark_for_disposal(ctx.disposal, first);
            if let Ok(mut ship) = world.get::<&mut ShipState>(second) {
                if ship.lives > 0 {
                    ship.lives -= 1;
                    let lives_left = ship.lives;
                    drop(ship);
                    ctx.events.push(GameEvent::ShipHit { lives_left });
                } else {
                    drop(ship);
                    ctx.events.push(GameEvent::PlayerDied);
                }
            }
        }
        (EntityKind::Ship, EntityKind::Alien) => {
            ctx.events.push(GameEvent::PlayerDied);
        }
        _ => {}
    }
}

fn shot_used(world: &World, shot: Entity) -> bool {
    world.get::<&ShotState>(shot).map_or(true, |s| s.used)
}

fn consume_shot(world: &mut World, shot: Entity) {
    if let Ok(mut state) = world.get::<&mut ShotState>(shot) {
        state.used = true;
    }
}
