//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Suppresses movement (and firing) while set. Collision resolution and
/// formation logic are unaffected by this flag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Paused(pub bool);

/// State owned by the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShipState {
    /// Remaining lives. A hit at zero lives ends the round.
    pub lives: u32,
    /// Simulation time of the last shot; `None` until the first shot, so
    /// the first shot is never throttled.
    pub last_fire_ms: Option<u64>,
}

/// State owned by each alien.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AlienState {
    /// Simulation time of this alien's last shot.
    pub last_fire_ms: Option<u64>,
}

/// State owned by both shot kinds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShotState {
    /// Set after the first disposal-triggering hit. Later pairwise tests in
    /// the same tick see the flag and skip, preventing double kills.
    pub used: bool,
}
