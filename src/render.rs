//! Terminal presenter
//!
//! All terminal output lives here. Each function receives a mutable writer
//! and an immutable view of the session; no game logic runs in this module.
//! The 500x800 play field is scaled onto a 50x40 cell grid.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};

use crate::sim::{FruitKind, GamePhase, GameSession, Mode};

// ── Layout ────────────────────────────────────────────────────────────────────

/// World units per terminal column
const CELL_W: f32 = 10.0;
/// World units per terminal row
const CELL_H: f32 = 20.0;
/// Field columns between the side walls
const FIELD_COLS: u16 = 50;
/// Field rows between the top and bottom bars
const FIELD_ROWS: u16 = 40;
/// First field row (row 0 is the HUD, row 1 the top bar)
const FIELD_TOP: u16 = 2;
/// Full screen width including the walls
const TERM_COLS: u16 = FIELD_COLS + 2;
/// Bottom bar row
const BOTTOM_ROW: u16 = FIELD_TOP + FIELD_ROWS;
/// Controls hint row
const HINT_ROW: u16 = BOTTOM_ROW + 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkGreen;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_CATCHER: Color = Color::White;
const C_STRAWBERRY: Color = Color::Red;
const C_APPLE: Color = Color::Green;
const C_PINEAPPLE: Color = Color::Yellow;
const C_MARKER: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::DarkGreen;

fn world_col(x: f32) -> u16 {
    1 + ((x / CELL_W) as u16).min(FIELD_COLS - 1)
}

fn world_row(y: f32) -> u16 {
    FIELD_TOP + ((y / CELL_H) as u16).min(FIELD_ROWS - 1)
}

fn centered_col(text: &str) -> u16 {
    (TERM_COLS / 2).saturating_sub(text.chars().count() as u16 / 2)
}

fn fruit_sprite(kind: FruitKind) -> (&'static str, Color) {
    match kind {
        FruitKind::Strawberry => ("(S)", C_STRAWBERRY),
        FruitKind::Apple => ("(A)", C_APPLE),
        FruitKind::Pineapple => ("(P)", C_PINEAPPLE),
    }
}

// ── Session frame ─────────────────────────────────────────────────────────────

/// Render one complete gameplay frame
///
/// `marker_x` is the tracked marker position in capture-frame coordinates;
/// pass `None` to hide the indicator.
pub fn draw_session<W: Write>(
    out: &mut W,
    session: &GameSession,
    marker_x: Option<i32>,
    frame_width: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out)?;
    draw_hud(out, session)?;

    for fruit in &session.fruits {
        let (sprite, color) = fruit_sprite(fruit.kind);
        let center = fruit.hitbox().origin + fruit.hitbox().size / 2.0;
        out.queue(cursor::MoveTo(world_col(center.x) - 1, world_row(center.y)))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(sprite))?;
    }

    draw_catcher(out, session)?;

    if let Some(x) = marker_x {
        let col = 1 + (x.max(0) as u32 * u32::from(FIELD_COLS) / frame_width.max(1)) as u16;
        out.queue(cursor::MoveTo(col.min(FIELD_COLS), BOTTOM_ROW))?;
        out.queue(style::SetForegroundColor(C_MARKER))?;
        out.queue(Print("▲"))?;
    }

    out.queue(cursor::MoveTo(1, HINT_ROW))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Marker steers the basket   P : Pause   Q : Quit"))?;

    match session.phase {
        GamePhase::Paused => draw_pause_overlay(out)?,
        GamePhase::GameOver => draw_game_over_overlay(out)?,
        GamePhase::Playing => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, HINT_ROW))?;
    out.flush()?;
    Ok(())
}

fn draw_border<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(FIELD_COLS as usize))))?;

    out.queue(cursor::MoveTo(0, BOTTOM_ROW))?;
    out.queue(Print(format!("└{}┘", "─".repeat(FIELD_COLS as usize))))?;

    for row in FIELD_TOP..BOTTOM_ROW {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(TERM_COLS - 1, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, session: &GameSession) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>4}", session.score)))?;

    let (mode_str, mode_color) = match session.mode {
        Mode::Normal => ("[ NORMAL ]", Color::Green),
        Mode::Hard => ("[ HARD ]", Color::Red),
    };
    out.queue(cursor::MoveTo(centered_col(mode_str), 0))?;
    out.queue(style::SetForegroundColor(mode_color))?;
    out.queue(Print(mode_str))?;

    let lives_str = format!("Lives:{}", "♥".repeat(session.lives as usize));
    let rx = TERM_COLS.saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(lives_str))?;

    Ok(())
}

fn draw_catcher<W: Write>(out: &mut W, session: &GameSession) -> std::io::Result<()> {
    // Basket sprite, two rows, 12 columns (125 world units wide):
    //   \__________/   ← rim
    //   ╚══════════╝   ← base
    let pos = session.catcher.pos;
    let col = world_col(pos.x);
    let row = world_row(pos.y);

    out.queue(style::SetForegroundColor(C_CATCHER))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("\\__________/"))?;
    if row + 1 < BOTTOM_ROW {
        out.queue(cursor::MoveTo(col, row + 1))?;
        out.queue(Print("╚══════════╝"))?;
    }

    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_overlay_box<W: Write>(
    out: &mut W,
    lines: &[(&str, Color)],
    hint: &str,
) -> std::io::Result<()> {
    let start_row = (HINT_ROW / 2).saturating_sub((lines.len() as u16 + 1) / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(centered_col(msg), start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    out.queue(cursor::MoveTo(
        centered_col(hint),
        start_row + lines.len() as u16 + 1,
    ))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;
    Ok(())
}

fn draw_pause_overlay<W: Write>(out: &mut W) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════════╗", Color::Cyan),
        ("║        Paused        ║", Color::Cyan),
        ("╚══════════════════════╝", Color::Cyan),
    ];
    draw_overlay_box(out, lines, "Press C to Continue or Q to Quit")
}

fn draw_game_over_overlay<W: Write>(out: &mut W) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════════╗", Color::Red),
        ("║      GAME OVER       ║", Color::Red),
        ("║     YOU ARE BAD      ║", Color::Red),
        ("╚══════════════════════╝", Color::Red),
    ];
    draw_overlay_box(out, lines, "Press R to Restart or Q to Quit")
}

// ── Menu screens ──────────────────────────────────────────────────────────────

fn draw_screen<W: Write>(out: &mut W, lines: &[(&str, Color)]) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let start_row = (HINT_ROW / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        if msg.is_empty() {
            continue;
        }
        out.queue(cursor::MoveTo(centered_col(msg), start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, HINT_ROW))?;
    out.flush()?;
    Ok(())
}

/// Title screen
pub fn draw_intro<W: Write>(out: &mut W) -> std::io::Result<()> {
    draw_screen(
        out,
        &[
            ("FRUIT CATCHER", C_TITLE),
            ("", Color::White),
            ("", Color::White),
            ("P - Play", Color::Green),
            ("I - Info", Color::Yellow),
            ("Q - Quit", Color::Red),
        ],
    )
}

/// Objective and controls screen
pub fn draw_info<W: Write>(out: &mut W) -> std::io::Result<()> {
    draw_screen(
        out,
        &[
            ("INFORMATION", C_TITLE),
            ("", Color::White),
            ("Objective", Color::White),
            ("Catch as many Fruits as you can", C_HINT),
            ("by moving the Basket", C_HINT),
            ("But Watch Out! You only get 3 LIVES!", C_HINT),
            ("", Color::White),
            ("Controls", Color::White),
            ("Move Left: Move Marker Left", C_HINT),
            ("Move Right: Move Marker Right", C_HINT),
            ("Pause: Press P", C_HINT),
            ("", Color::White),
            ("B - Back", Color::Yellow),
        ],
    )
}

/// Mode selection screen
pub fn draw_mode_select<W: Write>(out: &mut W) -> std::io::Result<()> {
    draw_screen(
        out,
        &[
            ("CHOOSE MODE", C_TITLE),
            ("", Color::White),
            ("Normal mode is plain at regular speed", C_HINT),
            ("with basic controls", C_HINT),
            ("", Color::White),
            ("N - Normal", Color::Green),
            ("", Color::White),
            ("All controls are now flipped", C_HINT),
            ("Move Left: Move Marker Right", C_HINT),
            ("Move Right: Move Marker Left", C_HINT),
            ("Everything is also FASTER", C_HINT),
            ("GOOD LUCK!", C_HINT),
            ("", Color::White),
            ("H - Hard", Color::Red),
        ],
    )
}
