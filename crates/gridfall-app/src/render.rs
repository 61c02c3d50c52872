//! Rendering layer — all terminal I/O lives here.
//!
//! Translates a `GameSnapshot` into terminal commands; no game logic.
//! The 800x600 logical field maps onto an 80x30 character grid.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use gridfall_core::enums::SpriteKey;
use gridfall_core::state::GameSnapshot;

/// Character-grid dimensions of the play field.
const GRID_WIDTH: u16 = 80;
const GRID_HEIGHT: u16 = 30;

/// Logical pixels per character cell.
const CELL_WIDTH: i32 = 10;
const CELL_HEIGHT: i32 = 20;

/// Rows above the field reserved for the HUD.
const FIELD_TOP: u16 = 1;

const C_SHIP: Color = Color::Cyan;
const C_ALIEN: Color = Color::Green;
const C_PLAYER_SHOT: Color = Color::White;
const C_ALIEN_SHOT: Color = Color::Magenta;
const C_HUD: Color = Color::Yellow;
const C_MESSAGE: Color = Color::White;
const C_PANEL: Color = Color::DarkGrey;

fn glyph(sprite: SpriteKey) -> (char, Color) {
    match sprite {
        SpriteKey::Ship => ('A', C_SHIP),
        SpriteKey::Alien => ('W', C_ALIEN),
        SpriteKey::PlayerShot => ('|', C_PLAYER_SHOT),
        SpriteKey::AlienShot => ('!', C_ALIEN_SHOT),
    }
}

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snapshot: &GameSnapshot) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, snapshot)?;

    for entity in &snapshot.entities {
        let col = (entity.x / CELL_WIDTH).clamp(0, i32::from(GRID_WIDTH) - 1) as u16;
        let row = (entity.y / CELL_HEIGHT).clamp(0, i32::from(GRID_HEIGHT) - 1) as u16;
        let (ch, color) = glyph(entity.sprite);
        out.queue(cursor::MoveTo(col, row + FIELD_TOP))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(ch))?;
    }

    if snapshot.waiting || snapshot.paused {
        draw_overlay(out, snapshot)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, GRID_HEIGHT + FIELD_TOP))?;
    out.flush()?;
    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, snapshot: &GameSnapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Score:{:>5}   Lives: {}",
        snapshot.hud.score, snapshot.hud.lives
    )))?;
    Ok(())
}

/// Centered result / pause message, the any-key prompt, and the attempt
/// history panel while the gate is armed.
fn draw_overlay<W: Write>(out: &mut W, snapshot: &GameSnapshot) -> std::io::Result<()> {
    let cx = GRID_WIDTH / 2;
    let cy = GRID_HEIGHT / 2;

    if !snapshot.message.is_empty() {
        out.queue(cursor::MoveTo(
            cx.saturating_sub(snapshot.message.chars().count() as u16 / 2),
            cy.saturating_sub(2),
        ))?;
        out.queue(style::SetForegroundColor(C_MESSAGE))?;
        out.queue(Print(&snapshot.message))?;
    }

    let prompt = if snapshot.paused {
        "Press any key to resume"
    } else {
        "Press any key to start"
    };
    out.queue(cursor::MoveTo(
        cx.saturating_sub(prompt.chars().count() as u16 / 2),
        cy,
    ))?;
    out.queue(style::SetForegroundColor(C_PANEL))?;
    out.queue(Print(prompt))?;

    if snapshot.waiting && !snapshot.hud.top_attempts.is_empty() {
        let header = "--- TOP TEN ---";
        out.queue(cursor::MoveTo(
            cx.saturating_sub(header.chars().count() as u16 / 2),
            cy + 2,
        ))?;
        out.queue(Print(header))?;
        for (i, line) in snapshot.hud.top_attempts.iter().enumerate() {
            out.queue(cursor::MoveTo(
                cx.saturating_sub(line.chars().count() as u16 / 2),
                cy + 3 + i as u16,
            ))?;
            out.queue(Print(line))?;
        }
    }

    Ok(())
}
