//! Round lifecycle around the engine.
//!
//! `GameSession` owns a `SimulationEngine` plus everything that outlives a
//! single round: the waiting/playing/paused state machine, the any-key
//! debounce, the score, the result message, and the leaderboard store.

use std::path::PathBuf;

use gridfall_core::enums::{RoundOutcome, WaitCause};
use gridfall_core::error::GameError;
use gridfall_core::events::GameEvent;
use gridfall_core::input::ControlState;
use gridfall_core::sprites::SpriteSource;
use gridfall_core::state::{GameSnapshot, HudView};

use crate::engine::{SimConfig, SimulationEngine};
use crate::leaderboard::LeaderboardStore;

const WIN_MESSAGE: &str = "Well done! You Win!";
const LOSS_MESSAGE: &str = "Oh no! They got you, try again?";
const PAUSE_MESSAGE: &str = "Paused";

/// Where the session is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    /// The any-key gate is armed; no round is running.
    WaitingForKey { cause: WaitCause },
    Playing,
    Paused,
}

/// One player's sitting: rounds, score, and persisted history.
pub struct GameSession {
    engine: SimulationEngine,
    state: SessionState,
    score: u32,
    message: String,
    /// Any-key debounce. Starts at 1 so the very first press opens the
    /// gate; after a round ends it is 0 and one press is swallowed.
    press_count: u32,
    leaderboard: LeaderboardStore,
}

impl GameSession {
    /// Create a session with an armed new-game gate.
    pub fn new(
        config: SimConfig,
        sprites: &dyn SpriteSource,
        leaderboard_path: PathBuf,
    ) -> Result<Self, GameError> {
        Ok(Self {
            engine: SimulationEngine::new(config, sprites)?,
            state: SessionState::WaitingForKey {
                cause: WaitCause::NewGame,
            },
            score: 0,
            message: String::new(),
            press_count: 1,
            leaderboard: LeaderboardStore::open(leaderboard_path),
        })
    }

    /// Advance the session by one tick of measured wall time.
    ///
    /// While the gate is armed nothing simulates; once playing, the intents
    /// are applied and the engine runs its fixed pipeline. Pausing freezes
    /// movement and firing but a tick still flows through the pipeline.
    pub fn update(&mut self, controls: &ControlState, delta_ms: u64) {
        match self.state {
            SessionState::WaitingForKey { .. } => {
                if controls.any_key {
                    self.gate_press();
                }
                return;
            }
            SessionState::Paused => {
                if controls.any_key {
                    self.engine.release_pause();
                    self.message.clear();
                    self.state = SessionState::Playing;
                }
            }
            SessionState::Playing => {
                self.engine.set_ship_movement(controls.move_direction());
                if controls.fire {
                    self.engine.try_fire_ship();
                }
                if controls.pause {
                    self.engine.pause_all();
                    self.message = PAUSE_MESSAGE.to_string();
                    self.state = SessionState::Paused;
                }
            }
        }

        self.engine.advance_time(delta_ms);
        self.engine.move_all(delta_ms);
        self.engine.resolve_collisions();
        self.engine.run_logic_if_requested();
        self.process_events();
    }

    /// Drawable state for the renderer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            time: self.engine.time(),
            waiting: self.is_waiting(),
            paused: self.is_paused(),
            message: self.message.clone(),
            entities: self.engine.entity_views(),
            hud: HudView {
                score: self.score,
                lives: self.engine.lives_left(),
                top_attempts: self.leaderboard.display_lines(),
            },
        }
    }

    pub fn current_score(&self) -> u32 {
        self.score
    }

    pub fn lives_left(&self) -> u32 {
        self.engine.lives_left()
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self.state, SessionState::WaitingForKey { .. })
    }

    pub fn is_paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    /// The result or pause message, empty during normal play.
    pub fn result_message(&self) -> &str {
        &self.message
    }

    /// Ranked display strings for the TOP TEN panel.
    pub fn top_attempts(&self) -> Vec<String> {
        self.leaderboard.display_lines()
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> &mut SimulationEngine {
        &mut self.engine
    }

    /// One armed-gate key press. The counter swallows the key event left
    /// over from the press that ended the previous round.
    fn gate_press(&mut self) {
        if self.press_count == 1 {
            self.start_round();
            self.press_count = 0;
        } else {
            self.press_count += 1;
        }
    }

    fn start_round(&mut self) {
        self.engine.reset();
        self.score = 0;
        self.message.clear();
        self.state = SessionState::Playing;
    }

    fn process_events(&mut self) {
        for event in self.engine.drain_events() {
            match event {
                GameEvent::AlienKilled => self.score += 1,
                GameEvent::ShipHit { lives_left } => {
                    log::debug!("ship hit, {lives_left} lives left");
                }
                GameEvent::PlayerDied => self.end_round(RoundOutcome::Loss),
                GameEvent::Win => self.end_round(RoundOutcome::Win),
            }
        }
    }

    /// End the round once; later terminal events from the same tick are
    /// dropped against the armed gate.
    fn end_round(&mut self, outcome: RoundOutcome) {
        if self.is_waiting() {
            return;
        }
        let lives_left = match outcome {
            RoundOutcome::Win => self.engine.lives_left(),
            RoundOutcome::Loss => 0,
        };
        self.leaderboard.record_attempt(self.score, lives_left);
        self.message = match outcome {
            RoundOutcome::Win => WIN_MESSAGE.to_string(),
            RoundOutcome::Loss => LOSS_MESSAGE.to_string(),
        };
        self.state = SessionState::WaitingForKey {
            cause: WaitCause::RoundEnded(outcome),
        };
    }
}
