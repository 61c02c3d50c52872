//! Game state snapshot — the read-only view handed to a renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::SpriteKey;
use crate::types::SimTime;

/// Complete visible state for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    /// True while the any-key gate is armed (round over or not yet started).
    pub waiting: bool,
    /// True while the round is paused.
    pub paused: bool,
    /// Result / pause message to display, empty during normal play.
    pub message: String,
    /// Live entities in stable (insertion) order.
    pub entities: Vec<EntityView>,
    pub hud: HudView,
}

/// One drawable entity: truncated position plus its sprite key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityView {
    pub x: i32,
    pub y: i32,
    pub sprite: SpriteKey,
}

/// Score surface for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub lives: u32,
    /// Ranked display strings for the TOP TEN panel, best first.
    pub top_attempts: Vec<String>,
}
