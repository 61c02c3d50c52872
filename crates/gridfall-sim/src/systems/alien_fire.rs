//! Alien fire decisions.
//!
//! Each live alien rolls once per tick; a roll at or under the fire chance
//! plus a cleared per-alien interval queues a shot. Spawn positions are
//! buffered and merged into the world by the engine after the iteration,
//! so shots fired this tick never move or collide until the next one.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridfall_core::components::{AlienState, Paused};
use gridfall_core::constants::{ALIEN_FIRE_CHANCE, ALIEN_FIRE_INTERVAL_MS};
use gridfall_core::types::Position;

/// Roll fire chances for every alien, pushing queued spawn positions.
/// Only aliens carry `AlienState`, so the query skips everything else.
pub fn run(
    world: &mut World,
    roster: &[Entity],
    now_ms: u64,
    rng: &mut ChaCha8Rng,
    pending: &mut Vec<(f64, f64)>,
) {
    for &entity in roster {
        let query = world.query_one_mut::<(&Position, &mut AlienState, &Paused)>(entity);
        let Ok((pos, state, paused)) = query else {
            continue;
        };
        if paused.0 {
            continue;
        }

        // The roll is consumed whether or not the interval gate passes, so
        // the random stream depends only on the alien census.
        let roll: f64 = rng.gen();
        if roll > ALIEN_FIRE_CHANCE {
            continue;
        }
        if let Some(last) = state.last_fire_ms {
            if now_ms.saturating_sub(last) < ALIEN_FIRE_INTERVAL_MS {
                continue;
            }
        }

        state.last_fire_ms = Some(now_ms);
        pending.push((pos.x, pos.y));
    }
}
