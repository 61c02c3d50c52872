//! The frame loop — runs the session at the nominal tick rate and renders
//! each snapshot. Input events arrive from a dedicated reader thread so the
//! loop never blocks on terminal I/O.

use std::io::Write;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use gridfall_core::constants::TICK_RATE;
use gridfall_sim::session::GameSession;

use crate::input::InputTracker;
use crate::render;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Run until the player quits.
pub fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    session: &mut GameSession,
) -> std::io::Result<()> {
    let mut tracker = InputTracker::new();
    let mut next_tick_time = Instant::now();
    let mut last_update = Instant::now();

    loop {
        // 1. Drain all pending input events
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    if is_quit(&event) {
                        return Ok(());
                    }
                    tracker.handle_event(&event);
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return Ok(()),
            }
        }

        // 2. Advance the session by the measured elapsed time
        let now = Instant::now();
        let delta_ms = now.duration_since(last_update).as_millis() as u64;
        last_update = now;

        let was_waiting = session.is_waiting();
        session.update(&tracker.snapshot(), delta_ms);
        if was_waiting && !session.is_waiting() {
            // Stale holds from the menu must not move the ship.
            tracker.reset();
        }

        // 3. Render
        render::render(out, &session.snapshot())?;

        // 4. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

fn is_quit(event: &Event) -> bool {
    let Event::Key(KeyEvent {
        code,
        kind: KeyEventKind::Press,
        modifiers,
        ..
    }) = event
    else {
        return false;
    };
    matches!(code, KeyCode::Esc)
        || (*code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}
