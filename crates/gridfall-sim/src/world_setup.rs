//! Entity spawn factories.
//!
//! Creates the ship, the alien formation, and in-flight shots with their
//! component bundles. The engine appends every spawned entity to its
//! insertion-ordered roster.

use hecs::{Entity, World};

use gridfall_core::components::{AlienState, Paused, ShipState, ShotState};
use gridfall_core::constants::*;
use gridfall_core::enums::EntityKind;
use gridfall_core::types::{Position, Velocity};

/// Spawn the player's ship at its start position with full lives.
pub fn spawn_ship(world: &mut World) -> Entity {
    world.spawn((
        EntityKind::Ship,
        Position::new(SHIP_START_X, SHIP_START_Y),
        Velocity::new(0.0, 0.0),
        Paused(false),
        ShipState {
            lives: SHIP_START_LIVES,
            last_fire_ms: None,
        },
    ))
}

/// Spawn one alien. The formation starts moving left at uniform speed.
pub fn spawn_alien(world: &mut World, x: f64, y: f64) -> Entity {
    world.spawn((
        EntityKind::Alien,
        Position::new(x, y),
        Velocity::new(-ALIEN_MOVE_SPEED, 0.0),
        Paused(false),
        AlienState::default(),
    ))
}

/// Spawn the full 5x12 formation, row-major, and return the entities in
/// spawn order.
pub fn spawn_alien_grid(world: &mut World) -> Vec<Entity> {
    let mut aliens = Vec::with_capacity((ALIEN_ROWS * ALIENS_PER_ROW) as usize);
    for row in 0..ALIEN_ROWS {
        for col in 0..ALIENS_PER_ROW {
            let x = ALIEN_START_X + f64::from(col) * ALIEN_COL_SPACING;
            let y = ALIEN_START_Y + f64::from(row) * ALIEN_ROW_SPACING;
            aliens.push(spawn_alien(world, x, y));
        }
    }
    aliens
}

/// Spawn a player shot just above the ship.
pub fn spawn_player_shot(world: &mut World, ship_x: f64, ship_y: f64) -> Entity {
    world.spawn((
        EntityKind::PlayerShot,
        Position::new(ship_x + PLAYER_SHOT_OFFSET_X, ship_y + PLAYER_SHOT_OFFSET_Y),
        Velocity::new(0.0, PLAYER_SHOT_SPEED),
        Paused(false),
        ShotState::default(),
    ))
}

/// Spawn an alien shot just below the firing alien.
pub fn spawn_alien_shot(world: &mut World, alien_x: f64, alien_y: f64) -> Entity {
    world.spawn((
        EntityKind::AlienShot,
        Position::new(alien_x + ALIEN_SHOT_OFFSET_X, alien_y + ALIEN_SHOT_OFFSET_Y),
        Velocity::new(0.0, ALIEN_SHOT_SPEED),
        Paused(false),
        ShotState::default(),
    ))
}
