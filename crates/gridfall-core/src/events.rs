//! Events emitted by the engine during a tick, drained by the session.

use serde::{Deserialize, Serialize};

/// A game event observed while running the tick pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A player shot destroyed an alien. The session scores one point each.
    AlienKilled,
    /// An alien shot hit the ship while it still had lives in reserve.
    ShipHit { lives_left: u32 },
    /// The round is lost: the ship was hit with no lives left, rammed by an
    /// alien, or the formation descended past the death line.
    PlayerDied,
    /// The round is won: the last alien was destroyed.
    Win,
}
