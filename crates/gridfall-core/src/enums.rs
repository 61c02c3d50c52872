//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The tagged variant for every live entity. Collision reactions dispatch
/// on `(EntityKind, EntityKind)` pairs instead of runtime type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The player's ship.
    Ship,
    /// A member of the descending formation.
    Alien,
    /// A shot fired by the ship (travels upward).
    PlayerShot,
    /// A shot fired by an alien (travels downward).
    AlienShot,
}

/// Logical sprite identifier, resolved to drawable dimensions by the
/// frontend's sprite source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKey {
    Ship,
    Alien,
    PlayerShot,
    AlienShot,
}

impl EntityKind {
    /// The sprite drawn for this kind of entity.
    pub fn sprite(self) -> SpriteKey {
        match self {
            EntityKind::Ship => SpriteKey::Ship,
            EntityKind::Alien => SpriteKey::Alien,
            EntityKind::PlayerShot => SpriteKey::PlayerShot,
            EntityKind::AlienShot => SpriteKey::AlienShot,
        }
    }
}

/// How a completed round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Loss,
}

/// Why the any-key gate is armed. A pause is not a wait cause: releasing a
/// pause resumes the round with entities intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaitCause {
    /// Waiting for the first game of the process.
    NewGame,
    /// A round just ended; the next game starts after the gate opens.
    RoundEnded(RoundOutcome),
}
