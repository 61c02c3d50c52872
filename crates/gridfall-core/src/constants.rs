//! Simulation constants and tuning parameters.
//!
//! All coordinates are logical pixels in an 800x600 play field.

use crate::types::Extent;

/// Nominal simulation tick rate (Hz). Actual integration uses measured
/// elapsed time, not a fixed step.
pub const TICK_RATE: u32 = 100;

// --- Play field ---

/// Logical field width in pixels.
pub const FIELD_WIDTH: f64 = 800.0;

/// Logical field height in pixels.
pub const FIELD_HEIGHT: f64 = 600.0;

// --- Ship ---

/// Ship start position.
pub const SHIP_START_X: f64 = 370.0;
pub const SHIP_START_Y: f64 = 550.0;

/// Ship movement speed (pixels/sec).
pub const SHIP_SPEED: f64 = 300.0;

/// Minimum interval between player shots (ms).
pub const SHIP_FIRE_INTERVAL_MS: u64 = 500;

/// Starting life count.
pub const SHIP_START_LIVES: u32 = 5;

/// Movement bounds for the ship. A move that would carry the ship past a
/// bound is rejected outright, never clamped.
pub const SHIP_MIN_X: f64 = 10.0;
pub const SHIP_MAX_X: f64 = 750.0;
pub const SHIP_MIN_Y: f64 = 10.0;
pub const SHIP_MAX_Y: f64 = 550.0;

// --- Alien formation ---

/// Formation dimensions.
pub const ALIEN_ROWS: u32 = 5;
pub const ALIENS_PER_ROW: u32 = 12;

/// Top-left alien start position and grid spacing.
pub const ALIEN_START_X: f64 = 100.0;
pub const ALIEN_START_Y: f64 = 50.0;
pub const ALIEN_COL_SPACING: f64 = 50.0;
pub const ALIEN_ROW_SPACING: f64 = 30.0;

/// Initial horizontal speed (pixels/sec); the formation starts moving left.
pub const ALIEN_MOVE_SPEED: f64 = 75.0;

/// Horizontal bounds that trigger a formation turn.
pub const ALIEN_EDGE_MIN_X: f64 = 10.0;
pub const ALIEN_EDGE_MAX_X: f64 = 750.0;

/// Vertical descent per formation turn (pixels).
pub const ALIEN_DESCENT_STEP: f64 = 10.0;

/// An alien descending past this line ends the round.
pub const ALIEN_DEATH_LINE: f64 = 570.0;

/// Per-alien fire chance, evaluated once per alien per tick.
pub const ALIEN_FIRE_CHANCE: f64 = 0.001;

/// Minimum interval between shots from one alien (ms).
pub const ALIEN_FIRE_INTERVAL_MS: u64 = 100;

/// Horizontal speed multiplier applied to every remaining alien per kill.
pub const ALIEN_KILL_SPEEDUP: f64 = 1.02;

// --- Shots ---

/// Player shot vertical speed (pixels/sec, upward).
pub const PLAYER_SHOT_SPEED: f64 = -300.0;

/// Player shots are disposed once above this line.
pub const PLAYER_SHOT_EXIT_Y: f64 = -100.0;

/// Player shot spawn offset from the ship position.
pub const PLAYER_SHOT_OFFSET_X: f64 = 10.0;
pub const PLAYER_SHOT_OFFSET_Y: f64 = -30.0;

/// Alien shot vertical speed (pixels/sec, downward).
pub const ALIEN_SHOT_SPEED: f64 = 300.0;

/// Alien shots are disposed once below this line.
pub const ALIEN_SHOT_EXIT_Y: f64 = 700.0;

/// Alien shot spawn offset from the firing alien's position.
pub const ALIEN_SHOT_OFFSET_X: f64 = -10.0;
pub const ALIEN_SHOT_OFFSET_Y: f64 = 30.0;

// --- Leaderboard ---

/// Number of historical attempts retained.
pub const LEADERBOARD_CAPACITY: usize = 10;

/// Field separator in the persisted record format.
pub const LEADERBOARD_SEPARATOR: char = ';';

// --- Default sprite extents ---

pub const SHIP_EXTENT: Extent = Extent {
    width: 32,
    height: 24,
};
pub const ALIEN_EXTENT: Extent = Extent {
    width: 40,
    height: 24,
};
pub const PLAYER_SHOT_EXTENT: Extent = Extent {
    width: 8,
    height: 16,
};
pub const ALIEN_SHOT_EXTENT: Extent = Extent {
    width: 8,
    height: 16,
};
