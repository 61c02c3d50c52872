//! Key tracking — folds raw terminal events into per-tick control snapshots.
//!
//! Directions count as held while their last press or repeat event is within
//! a short window. Terminals without key-release reporting only emit repeated
//! `Press` events; the OS repeat rate refreshes the window faster than it
//! expires, so held keys stay live and expire shortly after release. Fire,
//! pause, and the any-key gate are edge-triggered and consumed per snapshot.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use gridfall_core::input::ControlState;

/// A key is "held" if its last press or repeat arrived within this window.
const HOLD_WINDOW: Duration = Duration::from_millis(150);

#[derive(Default)]
pub struct InputTracker {
    held: HashMap<KeyCode, Instant>,
    any_key: bool,
    pause: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one terminal event into the tracker.
    pub fn handle_event(&mut self, event: &Event) {
        let Event::Key(KeyEvent { code, kind, .. }) = event else {
            return;
        };
        match kind {
            KeyEventKind::Press => {
                self.held.insert(*code, Instant::now());
                self.any_key = true;
                if matches!(code, KeyCode::Char('p') | KeyCode::Char('P')) {
                    self.pause = true;
                }
            }
            KeyEventKind::Repeat => {
                self.held.insert(*code, Instant::now());
            }
            KeyEventKind::Release => {
                self.held.remove(code);
            }
        }
    }

    /// Produce this tick's control snapshot, consuming the edge flags.
    pub fn snapshot(&mut self) -> ControlState {
        let now = Instant::now();
        let controls = ControlState {
            up: self.is_held(now, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')]),
            down: self.is_held(now, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')]),
            left: self.is_held(now, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
            right: self.is_held(now, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
            fire: self.is_held(now, &[KeyCode::Char(' ')]),
            pause: self.pause,
            any_key: self.any_key,
        };
        self.any_key = false;
        self.pause = false;
        controls
    }

    /// Drop all held state, e.g. when a round starts.
    pub fn reset(&mut self) {
        self.held.clear();
        self.any_key = false;
        self.pause = false;
    }

    fn is_held(&self, now: Instant, codes: &[KeyCode]) -> bool {
        codes.iter().any(|code| {
            self.held
                .get(code)
                .is_some_and(|&last| now.duration_since(last) <= HOLD_WINDOW)
        })
    }
}
