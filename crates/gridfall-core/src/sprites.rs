//! The asset-collaborator seam.
//!
//! The engine never loads images; it only asks a `SpriteSource` to resolve
//! a logical sprite key to drawable dimensions for collision bounds.
//! Caching policy is the collaborator's concern.

use crate::constants::{ALIEN_EXTENT, ALIEN_SHOT_EXTENT, PLAYER_SHOT_EXTENT, SHIP_EXTENT};
use crate::enums::SpriteKey;
use crate::error::GameError;
use crate::types::Extent;

/// Resolves a logical sprite key to its drawable dimensions.
pub trait SpriteSource {
    fn extent(&self, key: SpriteKey) -> Extent;
}

/// A `SpriteSource` backed by a fixed table of extents.
#[derive(Debug, Clone, Copy)]
pub struct FixedExtents {
    pub ship: Extent,
    pub alien: Extent,
    pub player_shot: Extent,
    pub alien_shot: Extent,
}

impl Default for FixedExtents {
    fn default() -> Self {
        Self {
            ship: SHIP_EXTENT,
            alien: ALIEN_EXTENT,
            player_shot: PLAYER_SHOT_EXTENT,
            alien_shot: ALIEN_SHOT_EXTENT,
        }
    }
}

impl SpriteSource for FixedExtents {
    fn extent(&self, key: SpriteKey) -> Extent {
        match key {
            SpriteKey::Ship => self.ship,
            SpriteKey::Alien => self.alien,
            SpriteKey::PlayerShot => self.player_shot,
            SpriteKey::AlienShot => self.alien_shot,
        }
    }
}

/// All four extents, resolved once at engine construction.
#[derive(Debug, Clone, Copy)]
pub struct ExtentTable {
    ship: Extent,
    alien: Extent,
    player_shot: Extent,
    alien_shot: Extent,
}

impl ExtentTable {
    /// Resolve every sprite key up front. A zero-sized extent would make
    /// collision bounds degenerate, so it is a fatal precondition violation.
    pub fn resolve(source: &dyn SpriteSource) -> Result<Self, GameError> {
        let table = Self {
            ship: source.extent(SpriteKey::Ship),
            alien: source.extent(SpriteKey::Alien),
            player_shot: source.extent(SpriteKey::PlayerShot),
            alien_shot: source.extent(SpriteKey::AlienShot),
        };
        for (key, extent) in [
            (SpriteKey::Ship, table.ship),
            (SpriteKey::Alien, table.alien),
            (SpriteKey::PlayerShot, table.player_shot),
            (SpriteKey::AlienShot, table.alien_shot),
        ] {
            if extent.width == 0 || extent.height == 0 {
                return Err(GameError::InvalidConfig(format!(
                    "sprite {key:?} resolved to a zero-sized extent"
                )));
            }
        }
        Ok(table)
    }

    pub fn get(&self, key: SpriteKey) -> Extent {
        match key {
            SpriteKey::Ship => self.ship,
            SpriteKey::Alien => self.alien,
            SpriteKey::PlayerShot => self.player_shot,
            SpriteKey::AlienShot => self.alien_shot,
        }
    }
}
