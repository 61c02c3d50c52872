//! Control intents handed to the session once per tick.
//!
//! The core never reads raw device codes; the frontend folds its key events
//! into one consistent `ControlState` snapshot before each update, so a
//! tick's resolution can never observe a torn set of intents.

use serde::{Deserialize, Serialize};

/// A resolved single-axis movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Point-in-time snapshot of the player's intents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub pause: bool,
    /// A qualifying "any key" event occurred since the last snapshot.
    /// Only consulted while the any-key gate is armed or the game is paused.
    pub any_key: bool,
}

impl ControlState {
    /// Resolve held directions into at most one axis of movement.
    ///
    /// Priority order is left > right > up > down; simultaneous opposite
    /// presses cancel each other. There is no diagonal composition: if left
    /// and up are both held, the ship moves left.
    pub fn move_direction(&self) -> Option<MoveDirection> {
        if self.left && !self.right {
            Some(MoveDirection::Left)
        } else if self.right && !self.left {
            Some(MoveDirection::Right)
        } else if self.up && !self.down {
            Some(MoveDirection::Up)
        } else if self.down && !self.up {
            Some(MoveDirection::Down)
        } else {
            None
        }
    }
}
