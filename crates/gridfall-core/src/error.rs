//! Error taxonomy.
//!
//! Precondition violations are fatal and surface before any tick runs.
//! Leaderboard IO failures are always recovered locally by the store:
//! a failed load reads as "no prior records", a failed save drops that
//! persist attempt. Rejected input (a move past a boundary, a shot inside
//! the cooldown) is normal control flow, not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The engine or session was constructed with an unusable configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Leaderboard read or write failed.
    #[error("leaderboard io error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted leaderboard line did not parse as `score;lives;timestamp`.
    #[error("malformed leaderboard record: {line:?}")]
    MalformedRecord { line: String },
}
