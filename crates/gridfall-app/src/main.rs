//! Terminal frontend: raw-mode setup, the input reader thread, and session
//! construction. The simulation itself is entirely inside `gridfall-sim`.

mod game_loop;
mod input;
mod render;

use std::io::{stdout, BufWriter};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use gridfall_core::sprites::FixedExtents;
use gridfall_sim::engine::SimConfig;
use gridfall_sim::session::GameSession;

fn leaderboard_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".gridfall_attempts")
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let board = leaderboard_path();
    log::debug!("attempt history at {}", board.display());
    let mut session = match GameSession::new(SimConfig::default(), &FixedExtents::default(), board)
    {
        Ok(session) => session,
        Err(err) => {
            eprintln!("failed to start: {err}");
            std::process::exit(1);
        }
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release events where the terminal supports them; classic
    // terminals fall back to the hold-window heuristic in the input tracker.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread to blocking event reads so the frame loop never
    // waits on terminal I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop::run(&mut out, &rx, &mut session);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
