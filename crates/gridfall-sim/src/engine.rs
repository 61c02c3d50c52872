//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the insertion-ordered
//! entity roster, and runs the fixed per-tick pipeline: alien fire and
//! movement, collision resolution with a single disposal flush, then the
//! deferred formation turn. Completely headless (no terminal dependency),
//! enabling deterministic testing.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gridfall_core::components::{Paused, ShipState};
use gridfall_core::constants::{
    ALIEN_ROWS, ALIENS_PER_ROW, SHIP_FIRE_INTERVAL_MS, SHIP_SPEED, SHIP_START_LIVES,
};
#[cfg(test)]
use gridfall_core::enums::EntityKind;
use gridfall_core::error::GameError;
use gridfall_core::events::GameEvent;
use gridfall_core::input::MoveDirection;
use gridfall_core::sprites::{ExtentTable, SpriteSource};
use gridfall_core::state::EntityView;
use gridfall_core::types::{Position, SimTime, Velocity};

use crate::systems;
use crate::systems::collision::ReactionCtx;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    /// Live entities in spawn order. Keeps pairwise collision enumeration
    /// and snapshot draw order stable across runs.
    roster: Vec<Entity>,
    disposal_buffer: Vec<Entity>,
    alien_count: u32,
    logic_required: bool,
    time: SimTime,
    rng: ChaCha8Rng,
    events: Vec<GameEvent>,
    extents: ExtentTable,
}

impl SimulationEngine {
    /// Create a new engine with a populated world. Fails if the sprite
    /// source resolves any sprite to a zero-sized extent.
    pub fn new(config: SimConfig, sprites: &dyn SpriteSource) -> Result<Self, GameError> {
        let extents = ExtentTable::resolve(sprites)?;
        let mut engine = Self {
            world: World::new(),
            roster: Vec::new(),
            disposal_buffer: Vec::new(),
            alien_count: 0,
            logic_required: false,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            events: Vec::new(),
            extents,
        };
        engine.populate();
        Ok(engine)
    }

    /// Reset the world for a fresh round. The RNG stream continues; restart
    /// a round with the same seed by constructing a new engine.
    pub fn reset(&mut self) {
        self.world.clear();
        self.roster.clear();
        self.disposal_buffer.clear();
        self.events.clear();
        self.logic_required = false;
        self.time = SimTime::default();
        self.populate();
    }

    fn populate(&mut self) {
        let ship = world_setup::spawn_ship(&mut self.world);
        self.roster.push(ship);
        let aliens = world_setup::spawn_alien_grid(&mut self.world);
        self.alien_count = aliens.len() as u32;
        debug_assert_eq!(self.alien_count, ALIEN_ROWS * ALIENS_PER_ROW);
        self.roster.extend(aliens);
    }

    /// Advance simulation time by one tick of measured wall time.
    pub fn advance_time(&mut self, delta_ms: u64) {
        self.time.advance(delta_ms);
    }

    /// Run alien fire decisions, then integrate all movement. Shots queued
    /// by aliens this tick are merged in afterwards so they first move and
    /// collide on the next tick.
    pub fn move_all(&mut self, delta_ms: u64) {
        let mut pending_shots = Vec::new();
        systems::alien_fire::run(
            &mut self.world,
            &self.roster,
            self.time.elapsed_ms,
            &mut self.rng,
            &mut pending_shots,
        );
        systems::movement::run(
            &mut self.world,
            &self.roster,
            delta_ms,
            &mut self.logic_required,
            &mut self.disposal_buffer,
        );
        for (x, y) in pending_shots {
            let shot = world_setup::spawn_alien_shot(&mut self.world, x, y);
            self.roster.push(shot);
        }
    }

    /// Test every pair of live entities, run the reactions, then flush the
    /// disposal buffer. The flush is the only point entities are despawned.
    pub fn resolve_collisions(&mut self) {
        let mut ctx = ReactionCtx {
            disposal: &mut self.disposal_buffer,
            events: &mut self.events,
            alien_count: &mut self.alien_count,
        };
        systems::collision::run(&mut self.world, &self.roster, &self.extents, &mut ctx);
        self.flush_disposals();
    }

    /// Run the deferred formation turn if an alien touched an edge this
    /// tick. The flag is always cleared, consumed or not.
    pub fn run_logic_if_requested(&mut self) {
        if self.logic_required {
            systems::formation::run(&mut self.world, &mut self.events);
            self.logic_required = false;
        }
    }

    /// Fire a player shot if the ship's cooldown has elapsed. The first
    /// shot of a round is never throttled.
    pub fn try_fire_ship(&mut self) {
        let now = self.time.elapsed_ms;
        let Some(&ship) = self.roster.first() else {
            return;
        };
        let fire_at = {
            let Ok(mut state) = self.world.get::<&mut ShipState>(ship) else {
                return;
            };
            if let Some(last) = state.last_fire_ms {
                if now.saturating_sub(last) < SHIP_FIRE_INTERVAL_MS {
                    return;
                }
            }
            state.last_fire_ms = Some(now);
            match self.world.get::<&Position>(ship) {
                Ok(pos) => (pos.x, pos.y),
                Err(_) => return,
            }
        };
        let shot = world_setup::spawn_player_shot(&mut self.world, fire_at.0, fire_at.1);
        self.roster.push(shot);
    }

    /// Point the ship along the resolved movement axis, or stop it.
    pub fn set_ship_movement(&mut self, direction: Option<MoveDirection>) {
        let Some(&ship) = self.roster.first() else {
            return;
        };
        if let Ok(mut vel) = self.world.get::<&mut Velocity>(ship) {
            *vel = match direction {
                Some(MoveDirection::Left) => Velocity::new(-SHIP_SPEED, 0.0),
                Some(MoveDirection::Right) => Velocity::new(SHIP_SPEED, 0.0),
                Some(MoveDirection::Up) => Velocity::new(0.0, -SHIP_SPEED),
                Some(MoveDirection::Down) => Velocity::new(0.0, SHIP_SPEED),
                None => Velocity::new(0.0, 0.0),
            };
        }
    }

    /// Freeze movement for every live entity.
    pub fn pause_all(&mut self) {
        for (_, paused) in self.world.query_mut::<&mut Paused>() {
            paused.0 = true;
        }
    }

    /// Resume movement for every live entity.
    pub fn release_pause(&mut self) {
        for (_, paused) in self.world.query_mut::<&mut Paused>() {
            paused.0 = false;
        }
    }

    /// Drain the events observed since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Remaining ship lives, or the starting count if the ship is gone.
    pub fn lives_left(&self) -> u32 {
        self.roster
            .first()
            .and_then(|&ship| self.world.get::<&ShipState>(ship).ok())
            .map(|state| state.lives)
            .unwrap_or(SHIP_START_LIVES)
    }

    /// Remaining aliens in the formation.
    pub fn alien_count(&self) -> u32 {
        self.alien_count
    }

    /// Build the drawable view of every live entity, in spawn order.
    pub fn entity_views(&self) -> Vec<EntityView> {
        systems::snapshot::entity_views(&self.world, &self.roster)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Despawn everything marked this tick and drop it from the roster.
    /// Set semantics in the buffer make a double despawn impossible.
    fn flush_disposals(&mut self) {
        if self.disposal_buffer.is_empty() {
            return;
        }
        for &entity in &self.disposal_buffer {
            if let Err(err) = self.world.despawn(entity) {
                log::debug!("despawn of {entity:?} failed: {err}");
            }
        }
        let disposed = std::mem::take(&mut self.disposal_buffer);
        self.roster.retain(|e| !disposed.contains(e));
    }

}

#[cfg(test)]
impl SimulationEngine {
    /// Count live entities of one kind.
    pub(crate) fn count_kind(&self, kind: EntityKind) -> usize {
        let mut query = self.world.query::<&EntityKind>();
        query.iter().filter(|(_, k)| **k == kind).count()
    }

    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub(crate) fn roster(&self) -> &[Entity] {
        self.roster.as_slice()
    }

    /// Spawn a player shot at an exact position (bypasses the ship offset).
    pub(crate) fn spawn_shot_at(&mut self, kind: EntityKind, x: f64, y: f64) -> Entity {
        let dy = match kind {
            EntityKind::PlayerShot => gridfall_core::constants::PLAYER_SHOT_SPEED,
            _ => gridfall_core::constants::ALIEN_SHOT_SPEED,
        };
        let shot = self.world.spawn((
            kind,
            Position::new(x, y),
            Velocity::new(0.0, dy),
            Paused(false),
            gridfall_core::components::ShotState::default(),
        ));
        self.roster.push(shot);
        shot
    }
}
