//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick cadence only
//! - Seeded RNG only
//! - No rendering, vision, or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{floor_crossed, fruit_caught};
pub use state::{Catcher, Fruit, FruitKind, GamePhase, GameSession, Hitbox, Mode, MoveSignal};
pub use tick::{TickInput, tick};
