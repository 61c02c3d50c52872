//! Headless Gridfall simulation.
//!
//! `SimulationEngine` owns the hecs world and runs the per-tick pipeline
//! (move, collide/dispose, deferred formation logic); `GameSession` wraps
//! it with the waiting/playing/paused state machine, score, and leaderboard
//! persistence. No rendering or input dependency, enabling deterministic
//! testing.

pub mod engine;
pub mod leaderboard;
pub mod session;
pub mod systems;
pub mod world_setup;

#[cfg(test)]
mod tests;
