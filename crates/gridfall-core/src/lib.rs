//! Core types and definitions for the Gridfall simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, control state, events, snapshot views, and constants.
//! It has no dependency on the terminal frontend or any runtime framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod sprites;
pub mod state;
pub mod types;
