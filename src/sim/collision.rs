//! Catch and floor-crossing resolution
//!
//! Pure rectangle-band checks against the catcher hitbox and the floor
//! bands; `resolve` applies them to every fruit in spawn order.

use crate::consts::*;

use super::state::{GamePhase, GameSession, Hitbox};

/// Check whether a fruit hitbox sits inside the catch window
///
/// The window spans `CATCH_X_RANGE` either side of the catcher hitbox
/// origin, and the band between `CATCH_ABOVE_MAX` and `CATCH_ABOVE_MIN`
/// units above it. All four edges are inclusive.
pub fn fruit_caught(fruit: &Hitbox, catcher: &Hitbox) -> bool {
    fruit.origin.x >= catcher.origin.x - CATCH_X_RANGE
        && fruit.origin.x <= catcher.origin.x + CATCH_X_RANGE
        && fruit.origin.y >= catcher.origin.y - CATCH_ABOVE_MAX
        && fruit.origin.y <= catcher.origin.y - CATCH_ABOVE_MIN
}

/// Check whether a fruit at this y has crossed the floor
///
/// Both bands must agree; their intersection is the effective window, so a
/// fruit triggers at most one crossing before it is removed.
pub fn floor_crossed(y: f32) -> bool {
    (FLOOR_GATE_MIN..=FLOOR_GATE_MAX).contains(&y)
        && (FLOOR_BAND_MIN..=FLOOR_BAND_MAX).contains(&y)
}

/// Resolve catches and floor crossings for every fruit
///
/// A caught fruit scores and is removed. A floor crossing costs a life and
/// removes the fruit, or ends the run when no spare life remains; in that
/// case the fruit stays in place under the game-over screen. The scan
/// continues over the remaining fruits either way.
pub fn resolve(session: &mut GameSession) {
    let catcher_box = session.catcher.hitbox();

    let mut i = 0;
    while i < session.fruits.len() {
        let fruit = &session.fruits[i];

        if fruit_caught(&fruit.hitbox(), &catcher_box) {
            let kind = fruit.kind;
            session.fruits.remove(i);
            session.score += kind.points();
            log::debug!(
                "caught {} (+{}), score {}",
                kind.as_str(),
                kind.points(),
                session.score
            );
            continue;
        }

        if floor_crossed(fruit.pos.y) {
            if session.lives >= 2 {
                session.lives -= 1;
                session.fruits.remove(i);
                log::info!("fruit hit the floor, {} lives left", session.lives);
                continue;
            }
            session.phase = GamePhase::GameOver;
            log::info!("fruit hit the floor on the last life, run over");
        }

        i += 1;
    }
}
