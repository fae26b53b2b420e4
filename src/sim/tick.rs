//! Fixed cadence simulation tick
//!
//! Advances one session by exactly one tick. The driver calls this at
//! `TICK_RATE` while playing; everything here is deterministic given the
//! session seed and the input sequence.

use rand::Rng;

use super::collision;
use super::state::{Fruit, FruitKind, GamePhase, GameSession, MoveSignal};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steering signal resolved from the current camera frame
    pub signal: MoveSignal,
    /// Pause request (Playing -> Paused)
    pub pause: bool,
    /// Resume request (Paused -> Playing)
    pub resume: bool,
}

/// Advance the session by one tick
pub fn tick(session: &mut GameSession, input: &TickInput) {
    // Handle pause transitions first
    if input.pause && session.phase == GamePhase::Playing {
        session.phase = GamePhase::Paused;
        return;
    }
    if input.resume && session.phase == GamePhase::Paused {
        session.phase = GamePhase::Playing;
    }

    // Don't tick if paused or game over
    match session.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    session.ticks += 1;

    steer_catcher(session, input.signal);
    run_spawner(session);

    // Advance every fruit, including one spawned this tick
    let step = session.mode.fall_step();
    for fruit in &mut session.fruits {
        fruit.pos.y += step;
    }

    collision::resolve(session);
}

/// Displace the catcher one step for the given signal
///
/// Hard mode flips the signal before applying it. Travel limits are
/// checked before the step, not after.
fn steer_catcher(session: &mut GameSession, signal: MoveSignal) {
    let signal = if session.mode.inverts_steering() {
        signal.flipped()
    } else {
        signal
    };
    let step = session.mode.steer_step();

    match signal {
        MoveSignal::Left if session.catcher.pos.x > CATCHER_MIN_X => {
            session.catcher.pos.x -= step;
        }
        MoveSignal::Right if session.catcher.pos.x < CATCHER_MAX_X => {
            session.catcher.pos.x += step;
        }
        _ => {}
    }
}

/// Count up to the mode's spawn interval, then emit one fruit
fn run_spawner(session: &mut GameSession) {
    session.spawn_counter += 1;
    if session.spawn_counter == session.mode.spawn_interval() {
        session.spawn_counter = 0;
        spawn_fruit(session);
    }
}

/// Spawn one fruit at a uniform x inside the margins, with a uniform kind
fn spawn_fruit(session: &mut GameSession) {
    let x = session
        .rng
        .random_range(SPAWN_MARGIN..DISPLAY_WIDTH as i32 - SPAWN_MARGIN) as f32;
    let kind = match session.rng.random_range(0..3) {
        0 => FruitKind::Strawberry,
        1 => FruitKind::Apple,
        _ => FruitKind::Pineapple,
    };
    log::debug!("spawned {} at x {}", kind.as_str(), x);
    session.fruits.push(Fruit::new(x, kind));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Mode;

    fn run_ticks(session: &mut GameSession, input: &TickInput, n: u32) {
        for _ in 0..n {
            tick(session, input);
        }
    }

    #[test]
    fn test_mode_parameters() {
        assert_eq!(Mode::Normal.spawn_interval(), 75);
        assert_eq!(Mode::Hard.spawn_interval(), 45);
        assert!((Mode::Normal.fall_step() - 5.0).abs() < 1e-4);
        assert!((Mode::Hard.fall_step() - 11.3).abs() < 1e-4);
        assert!((Mode::Normal.steer_step() - 3.0).abs() < 1e-4);
        assert!((Mode::Hard.steer_step() - 10.0).abs() < 1e-4);
        assert!(!Mode::Normal.inverts_steering());
        assert!(Mode::Hard.inverts_steering());
    }

    #[test]
    fn test_first_spawn_lands_on_the_interval_tick() {
        let mut session = GameSession::new(Mode::Normal, 12345);
        let input = TickInput::default();

        run_ticks(&mut session, &input, 74);
        assert!(session.fruits.is_empty());

        // Tick 75: the fruit spawns and already falls one step
        tick(&mut session, &input);
        assert_eq!(session.fruits.len(), 1);
        assert_eq!(session.fruits[0].pos.y, Mode::Normal.fall_step());
        assert_eq!(session.score, 0);
        assert_eq!(session.spawn_counter, 0);
    }

    #[test]
    fn test_spawner_repeats_every_interval() {
        let mut session = GameSession::new(Mode::Normal, 12345);
        let input = TickInput::default();

        run_ticks(&mut session, &input, 150);
        assert_eq!(session.fruits.len(), 2);
    }

    #[test]
    fn test_hard_mode_spawns_faster() {
        let mut session = GameSession::new(Mode::Hard, 12345);
        let input = TickInput::default();

        run_ticks(&mut session, &input, 44);
        assert!(session.fruits.is_empty());
        tick(&mut session, &input);
        assert_eq!(session.fruits.len(), 1);
    }

    #[test]
    fn test_spawn_x_stays_inside_margins() {
        let mut session = GameSession::new(Mode::Normal, 99999);
        for _ in 0..50 {
            spawn_fruit(&mut session);
        }
        for fruit in &session.fruits {
            assert!(fruit.pos.x >= SPAWN_MARGIN as f32);
            assert!(fruit.pos.x < DISPLAY_WIDTH - SPAWN_MARGIN as f32);
            assert_eq!(fruit.pos.y, 0.0);
        }
    }

    #[test]
    fn test_steering_normal() {
        let mut session = GameSession::new(Mode::Normal, 12345);
        let start_x = session.catcher.pos.x;

        tick(&mut session, &TickInput {
            signal: MoveSignal::Left,
            ..Default::default()
        });
        assert_eq!(session.catcher.pos.x, start_x - 3.0);

        tick(&mut session, &TickInput {
            signal: MoveSignal::Right,
            ..Default::default()
        });
        assert_eq!(session.catcher.pos.x, start_x);

        tick(&mut session, &TickInput::default());
        assert_eq!(session.catcher.pos.x, start_x);
    }

    #[test]
    fn test_steering_hard_flips_and_speeds_up() {
        let mut session = GameSession::new(Mode::Hard, 12345);
        let start_x = session.catcher.pos.x;

        // Left signal drives the catcher right in Hard mode
        tick(&mut session, &TickInput {
            signal: MoveSignal::Left,
            ..Default::default()
        });
        assert_eq!(session.catcher.pos.x, start_x + 10.0);

        tick(&mut session, &TickInput {
            signal: MoveSignal::Right,
            ..Default::default()
        });
        assert_eq!(session.catcher.pos.x, start_x);
    }

    #[test]
    fn test_steering_stops_at_travel_limits() {
        let mut session = GameSession::new(Mode::Normal, 12345);
        let left = TickInput {
            signal: MoveSignal::Left,
            ..Default::default()
        };
        let right = TickInput {
            signal: MoveSignal::Right,
            ..Default::default()
        };

        // At the limit the step is refused outright
        session.catcher.pos.x = CATCHER_MIN_X;
        tick(&mut session, &left);
        assert_eq!(session.catcher.pos.x, CATCHER_MIN_X);

        // Just inside, one step is still taken and may land past the limit
        session.catcher.pos.x = CATCHER_MIN_X + 1.0;
        tick(&mut session, &left);
        assert_eq!(session.catcher.pos.x, CATCHER_MIN_X - 2.0);

        session.catcher.pos.x = CATCHER_MAX_X;
        tick(&mut session, &right);
        assert_eq!(session.catcher.pos.x, CATCHER_MAX_X);
    }

    #[test]
    fn test_fall_rates_per_mode() {
        let mut normal = GameSession::new(Mode::Normal, 12345);
        normal.fruits.push(Fruit::new(250.0, FruitKind::Apple));
        tick(&mut normal, &TickInput::default());
        assert!((normal.fruits[0].pos.y - 5.0).abs() < 1e-4);

        let mut hard = GameSession::new(Mode::Hard, 12345);
        hard.fruits.push(Fruit::new(250.0, FruitKind::Apple));
        tick(&mut hard, &TickInput::default());
        assert!((hard.fruits[0].pos.y - 11.3).abs() < 1e-4);
    }

    #[test]
    fn test_falling_fruit_gets_caught() {
        // Fruit over the catcher reaches the catch band (y 610) on tick 122
        let mut session = GameSession::new(Mode::Normal, 12345);
        session.fruits.push(Fruit::new(200.0, FruitKind::Apple));

        run_ticks(&mut session, &TickInput::default(), 122);

        assert_eq!(session.score, 2);
        // Only the tick-75 spawn is still falling
        assert_eq!(session.fruits.len(), 1);
        assert_eq!(session.lives, 3);
    }

    #[test]
    fn test_unattended_fruits_drain_lives_then_end_the_run() {
        // Park the catcher at the left edge so nothing is ever caught;
        // spawns stay inside x >= 100, outside the catch window around x 5
        let mut session = GameSession::new(Mode::Normal, 99999);
        session.catcher.pos.x = CATCHER_MIN_X;

        let input = TickInput::default();
        let mut guard = 0;
        while session.phase != GamePhase::GameOver && guard < 10_000 {
            tick(&mut session, &input);
            guard += 1;
        }

        assert_eq!(session.phase, GamePhase::GameOver);
        assert_eq!(session.lives, 1);
        assert_eq!(session.score, 0);
        // The fruit that ended the run is still on the field
        assert!(!session.fruits.is_empty());
    }

    #[test]
    fn test_pause_freezes_the_session() {
        let mut session = GameSession::new(Mode::Normal, 12345);
        run_ticks(&mut session, &TickInput::default(), 80);
        assert_eq!(session.fruits.len(), 1);

        tick(&mut session, &TickInput {
            pause: true,
            ..Default::default()
        });
        assert_eq!(session.phase, GamePhase::Paused);

        let fruits = session.fruits.clone();
        let catcher_x = session.catcher.pos.x;
        let ticks = session.ticks;

        // Steering input while paused changes nothing
        run_ticks(
            &mut session,
            &TickInput {
                signal: MoveSignal::Left,
                ..Default::default()
            },
            50,
        );
        assert_eq!(session.fruits, fruits);
        assert_eq!(session.catcher.pos.x, catcher_x);
        assert_eq!(session.ticks, ticks);

        // Resume continues from the frozen state
        tick(&mut session, &TickInput {
            resume: true,
            ..Default::default()
        });
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.ticks, ticks + 1);
    }

    #[test]
    fn test_game_over_is_inert() {
        let mut session = GameSession::new(Mode::Normal, 12345);
        session.lives = 1;
        let mut fruit = Fruit::new(300.0, FruitKind::Apple);
        fruit.pos.y = 750.0;
        session.fruits.push(fruit);

        tick(&mut session, &TickInput::default());
        assert_eq!(session.phase, GamePhase::GameOver);

        let ticks = session.ticks;
        let fruits = session.fruits.clone();
        run_ticks(
            &mut session,
            &TickInput {
                signal: MoveSignal::Right,
                ..Default::default()
            },
            25,
        );
        assert_eq!(session.ticks, ticks);
        assert_eq!(session.fruits, fruits);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and input script stay identical
        let mut a = GameSession::new(Mode::Hard, 99999);
        let mut b = GameSession::new(Mode::Hard, 99999);

        let script = [
            MoveSignal::Neutral,
            MoveSignal::Left,
            MoveSignal::Left,
            MoveSignal::Right,
            MoveSignal::Neutral,
        ];
        for i in 0..200 {
            let input = TickInput {
                signal: script[i % script.len()],
                ..Default::default()
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.ticks, b.ticks);
        assert_eq!(a.fruits, b.fruits);
        assert_eq!(a.catcher.pos, b.catcher.pos);
        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
    }
}
