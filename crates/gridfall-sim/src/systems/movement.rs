//! Kinematic integration with per-kind boundary policy.
//!
//! Position updates are `position += velocity * delta / 1000` over the
//! measured frame delta. The ship rejects moves that would carry it past
//! the play-area bounds (the move is skipped, never clamped); an alien
//! touching a horizontal edge raises the deferred logic flag before moving;
//! shots dispose themselves once past their exit line.

use hecs::{Entity, World};

use gridfall_core::components::Paused;
use gridfall_core::constants::*;
use gridfall_core::enums::EntityKind;
use gridfall_core::types::{Position, Velocity};

use super::mark_for_disposal;

/// Move every live entity in roster order.
pub fn run(
    world: &mut World,
    roster: &[Entity],
    delta_ms: u64,
    logic_required: &mut bool,
    disposal: &mut Vec<Entity>,
) {
    let dt = delta_ms as f64 / 1000.0;

    for &entity in roster {
        let query =
            world.query_one_mut::<(&EntityKind, &mut Position, &Velocity, &Paused)>(entity);
        let Ok((kind, pos, vel, paused)) = query else {
            // A malformed entity must not abort the tick for the others.
            log::debug!("skipping move for incomplete entity {entity:?}");
            continue;
        };

        if paused.0 {
            continue;
        }

        match kind {
            EntityKind::Ship => {
                if ship_move_rejected(pos, vel) {
                    continue;
                }
                integrate(pos, vel, dt);
            }
            EntityKind::Alien => {
                if (vel.dx < 0.0 && pos.x < ALIEN_EDGE_MIN_X)
                    || (vel.dx > 0.0 && pos.x > ALIEN_EDGE_MAX_X)
                {
                    *logic_required = true;
                }
                integrate(pos, vel, dt);
            }
            EntityKind::PlayerShot => {
                integrate(pos, vel, dt);
                if pos.y < PLAYER_SHOT_EXIT_Y {
                    mark_for_disposal(disposal, entity);
                }
            }
            EntityKind::AlienShot => {
                integrate(pos, vel, dt);
                if pos.y > ALIEN_SHOT_EXIT_Y {
                    mark_for_disposal(disposal, entity);
                }
            }
        }
    }
}

fn integrate(pos: &mut Position, vel: &Velocity, dt: f64) {
    pos.x += vel.dx * dt;
    pos.y += vel.dy * dt;
}

/// The whole move is rejected as soon as any bound would be violated.
fn ship_move_rejected(pos: &Position, vel: &Velocity) -> bool {
    (vel.dx < 0.0 && pos.x < SHIP_MIN_X)
        || (vel.dy < 0.0 && pos.y < SHIP_MIN_Y)
        || (vel.dx > 0.0 && pos.x > SHIP_MAX_X)
        || (vel.dy > 0.0 && pos.y > SHIP_MAX_Y)
}
