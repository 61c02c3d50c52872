//! Deferred formation turn.
//!
//! When an alien touches a horizontal edge during movement, the engine
//! raises a flag and runs this pass at the end of the same tick: every
//! alien reverses horizontal direction and descends one step. An alien
//! ending up below the death line loses the round, reported as a single
//! event no matter how many aliens breached.

use hecs::World;

use gridfall_core::components::AlienState;
use gridfall_core::constants::{ALIEN_DEATH_LINE, ALIEN_DESCENT_STEP};
use gridfall_core::events::GameEvent;
use gridfall_core::types::{Position, Velocity};

/// Reverse and descend the whole formation.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    let mut breached = false;
    for (_, (pos, vel, _)) in world.query_mut::<(&mut Position, &mut Velocity, &AlienState)>() {
        vel.dx = -vel.dx;
        pos.y += ALIEN_DESCENT_STEP;
        if pos.y > ALIEN_DEATH_LINE {
            breached = true;
        }
    }
    if breached {
        events.push(GameEvent::PlayerDied);
    }
}
