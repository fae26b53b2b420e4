//! Fruitfall - a fruit-catching arcade game steered by a color marker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling, catching, game state)
//! - `vision`: Marker tracking over camera frames, producing steering signals
//! - `render`: Terminal presenter
//! - `settings`: Tunable configuration (HSV band, frame geometry)

pub mod render;
pub mod settings;
pub mod sim;
pub mod vision;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (world units; steering thresholds assume the
    /// frame shares this width)
    pub const DISPLAY_WIDTH: f32 = 500.0;
    pub const DISPLAY_HEIGHT: f32 = 800.0;

    /// Simulation cadence while playing
    pub const TICK_RATE: u32 = 60;
    /// Cadence for menu-only screens
    pub const MENU_TICK_RATE: u32 = 15;
    /// Cadence while paused
    pub const PAUSE_TICK_RATE: u32 = 5;

    /// Catcher sprite footprint
    pub const CATCHER_SPRITE_W: f32 = 125.0;
    pub const CATCHER_SPRITE_H: f32 = 150.0;
    /// Catcher hitbox, offset downward from the sprite origin
    pub const CATCHER_HITBOX_Y_OFFSET: f32 = 20.0;
    pub const CATCHER_HITBOX_W: f32 = 125.0;
    pub const CATCHER_HITBOX_H: f32 = 130.0;
    /// Base catcher speed (world units per tick, scaled per mode)
    pub const CATCHER_BASE_VEL: f32 = 10.0;
    /// Catcher spawn position
    pub const CATCHER_START_X: f32 = DISPLAY_WIDTH * 0.35;
    pub const CATCHER_START_Y: f32 = DISPLAY_HEIGHT - 160.0;
    /// Catcher travel limits, checked before each step
    pub const CATCHER_MIN_X: f32 = CATCHER_BASE_VEL - 5.0;
    pub const CATCHER_MAX_X: f32 = DISPLAY_WIDTH - 150.0 - CATCHER_BASE_VEL;

    /// Fruit hitbox edge length (square, anchored at the fruit origin)
    pub const FRUIT_SIZE: f32 = 100.0;
    /// Base fall speed (world units per tick, scaled per mode)
    pub const FRUIT_BASE_VEL: f32 = 10.0;
    /// Fruit spawn x stays this far from both field edges
    pub const SPAWN_MARGIN: i32 = 100;

    /// Horizontal catch window around the catcher hitbox origin
    pub const CATCH_X_RANGE: f32 = 90.0;
    /// Vertical catch window: fruit origin must sit between
    /// `CATCH_ABOVE_MAX` and `CATCH_ABOVE_MIN` units above the hitbox origin
    pub const CATCH_ABOVE_MAX: f32 = 50.0;
    pub const CATCH_ABOVE_MIN: f32 = 20.0;

    /// Floor crossing fires only inside BOTH of these y bands
    pub const FLOOR_GATE_MIN: f32 = DISPLAY_HEIGHT - 50.0;
    pub const FLOOR_GATE_MAX: f32 = DISPLAY_HEIGHT + 100.0;
    pub const FLOOR_BAND_MIN: f32 = DISPLAY_HEIGHT - 150.0;
    pub const FLOOR_BAND_MAX: f32 = DISPLAY_HEIGHT - 40.0;

    /// Marker x beyond this steers left
    pub const STEER_LEFT_MIN_X: i32 = 450;
    /// Marker x below this (but nonzero) steers right
    pub const STEER_RIGHT_MAX_X: i32 = 250;
}
