//! Fruitfall entry point
//!
//! Owns the terminal and the frame source and paces the screens: menus at
//! 15 Hz, gameplay at 60 Hz, pause polling at 5 Hz. All input is polled;
//! nothing here blocks on I/O for longer than one frame.

use std::io::{BufWriter, Write, stdout};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    ExecutableCommand, cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};

use fruitfall::Settings;
use fruitfall::consts::{MENU_TICK_RATE, PAUSE_TICK_RATE, TICK_RATE};
use fruitfall::render;
use fruitfall::sim::{GamePhase, GameSession, Mode, TickInput, tick};
use fruitfall::vision::{FrameSource, SteeringResolver, SyntheticSource};

/// Wall-clock session seed, millisecond resolution
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

/// One key press, if any arrives within the timeout
fn next_key(timeout: Duration) -> std::io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

/// Esc or Ctrl-C exits the program from any screen
fn is_quit_combo(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

// ── Menus ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq)]
enum MenuScreen {
    Intro,
    Info,
    ModeSelect,
}

enum MenuChoice {
    Play(Mode),
    Quit,
}

fn show_menus<W: Write>(out: &mut W) -> std::io::Result<MenuChoice> {
    let frame = Duration::from_secs(1) / MENU_TICK_RATE;
    let mut screen = MenuScreen::Intro;

    loop {
        match screen {
            MenuScreen::Intro => render::draw_intro(out)?,
            MenuScreen::Info => render::draw_info(out)?,
            MenuScreen::ModeSelect => render::draw_mode_select(out)?,
        }

        let Some(key) = next_key(frame)? else { continue };
        if is_quit_combo(&key) {
            return Ok(MenuChoice::Quit);
        }
        match (screen, key.code) {
            (MenuScreen::Intro, KeyCode::Char('p' | 'P')) => screen = MenuScreen::ModeSelect,
            (MenuScreen::Intro, KeyCode::Char('i' | 'I')) => screen = MenuScreen::Info,
            (MenuScreen::Intro, KeyCode::Char('q' | 'Q')) => return Ok(MenuChoice::Quit),
            (MenuScreen::Info, KeyCode::Char('b' | 'B')) => screen = MenuScreen::Intro,
            (MenuScreen::ModeSelect, KeyCode::Char('n' | 'N')) => {
                return Ok(MenuChoice::Play(Mode::Normal));
            }
            (MenuScreen::ModeSelect, KeyCode::Char('h' | 'H')) => {
                return Ok(MenuChoice::Play(Mode::Hard));
            }
            _ => {}
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs sessions until the player leaves for the menu or exits the program.
///
/// Returns `true` → exit program, `false` → back to the intro screen.
/// Restart builds a fresh session in place; the loop never recurses.
fn run_game<W: Write>(
    out: &mut W,
    settings: &Settings,
    source: &mut dyn FrameSource,
    mode: Mode,
) -> std::io::Result<bool> {
    let resolver = SteeringResolver::new(settings.band);
    let play_frame = Duration::from_secs(1) / TICK_RATE;
    let pause_frame = Duration::from_secs(1) / PAUSE_TICK_RATE;
    let over_frame = Duration::from_secs(1) / MENU_TICK_RATE;

    let seed = clock_seed();
    let mut session = GameSession::new(mode, seed);
    log::info!("Session started: {} mode, seed {}", mode.as_str(), seed);

    loop {
        let frame_start = Instant::now();
        let mut input = TickInput::default();

        // Drain every pending key press before the tick
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if is_quit_combo(&key) {
                return Ok(true);
            }
            match (session.phase, key.code) {
                (GamePhase::Playing, KeyCode::Char('p' | 'P')) => input.pause = true,
                (GamePhase::Paused, KeyCode::Char('c' | 'C')) => input.resume = true,
                (GamePhase::GameOver, KeyCode::Char('r' | 'R')) => {
                    let seed = clock_seed();
                    session = GameSession::new(mode, seed);
                    log::info!("Session restarted: seed {}", seed);
                }
                (_, KeyCode::Char('q' | 'Q')) => {
                    log::info!("Leaving session for the menu");
                    return Ok(false);
                }
                _ => {}
            }
        }

        // Steering comes from the tracker only while playing
        let mut marker_x = None;
        if session.phase == GamePhase::Playing {
            match resolver.resolve(source) {
                Ok(steering) => {
                    input.signal = steering.signal;
                    if settings.show_marker {
                        marker_x = steering.marker.map(|rect| rect.left());
                    }
                }
                Err(err) => {
                    // Signal stays Neutral for this tick
                    log::warn!("Frame capture failed: {err}");
                }
            }
        }

        tick(&mut session, &input);
        render::draw_session(out, &session, marker_x, settings.frame_width)?;

        let frame = match session.phase {
            GamePhase::Playing => play_frame,
            GamePhase::Paused => pause_frame,
            GamePhase::GameOver => over_frame,
        };
        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn run<W: Write>(
    out: &mut W,
    settings: &Settings,
    source: &mut dyn FrameSource,
) -> std::io::Result<()> {
    loop {
        match show_menus(out)? {
            MenuChoice::Quit => break,
            MenuChoice::Play(mode) => {
                if run_game(out, settings, source, mode)? {
                    break;
                }
            }
        }
    }
    log::info!("Fruitfall exiting");
    Ok(())
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("Fruitfall starting");

    let settings = Settings::load();
    if !settings.synthetic_source {
        log::warn!("No camera backend compiled in; using the synthetic source");
    }
    let mut source = SyntheticSource::new(settings.frame_width, settings.frame_height);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let result = run(&mut out, &settings, &mut source);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
