//! Game state and core simulation types
//!
//! Everything the tick function reads or writes lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended (a fruit hit the floor with no lives to spare)
    GameOver,
}

/// Difficulty mode, fixed for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Hard,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "Normal",
            Mode::Hard => "Hard",
        }
    }

    /// Playing ticks between fruit spawns
    pub fn spawn_interval(&self) -> u32 {
        match self {
            Mode::Normal => 75,
            Mode::Hard => 45,
        }
    }

    /// Fruit fall distance per tick
    pub fn fall_step(&self) -> f32 {
        match self {
            Mode::Normal => 0.5 * FRUIT_BASE_VEL,
            Mode::Hard => 1.13 * FRUIT_BASE_VEL,
        }
    }

    /// Catcher travel per steered tick
    pub fn steer_step(&self) -> f32 {
        match self {
            Mode::Normal => 0.3 * CATCHER_BASE_VEL,
            Mode::Hard => CATCHER_BASE_VEL,
        }
    }

    /// Hard mode flips the steering direction
    pub fn inverts_steering(&self) -> bool {
        matches!(self, Mode::Hard)
    }
}

/// Steering signal resolved from one camera frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveSignal {
    #[default]
    Neutral,
    Left,
    Right,
}

impl MoveSignal {
    /// Swap Left and Right (Hard mode steering)
    pub fn flipped(&self) -> Self {
        match self {
            MoveSignal::Left => MoveSignal::Right,
            MoveSignal::Right => MoveSignal::Left,
            MoveSignal::Neutral => MoveSignal::Neutral,
        }
    }
}

/// Axis-aligned collision rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Fruit categories; the kind selects point value and sprite, nothing else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FruitKind {
    Strawberry,
    Apple,
    Pineapple,
}

impl FruitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FruitKind::Strawberry => "Strawberry",
            FruitKind::Apple => "Apple",
            FruitKind::Pineapple => "Pineapple",
        }
    }

    /// Score awarded on catch
    pub fn points(&self) -> u32 {
        match self {
            FruitKind::Strawberry => 1,
            FruitKind::Apple => 2,
            FruitKind::Pineapple => 3,
        }
    }
}

/// A falling fruit entity
#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    pub pos: Vec2,
    pub kind: FruitKind,
}

impl Fruit {
    /// Spawn at the top edge of the field
    pub fn new(x: f32, kind: FruitKind) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
            kind,
        }
    }

    /// Square hitbox anchored at the sprite origin
    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            origin: self.pos,
            size: Vec2::splat(FRUIT_SIZE),
        }
    }
}

/// The player's catcher
#[derive(Debug, Clone, PartialEq)]
pub struct Catcher {
    pub pos: Vec2,
}

impl Default for Catcher {
    fn default() -> Self {
        Self {
            pos: Vec2::new(CATCHER_START_X, CATCHER_START_Y),
        }
    }
}

impl Catcher {
    /// Hitbox sits below the sprite origin, trimming the sprite's top band
    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            origin: Vec2::new(self.pos.x, self.pos.y + CATCHER_HITBOX_Y_OFFSET),
            size: Vec2::new(CATCHER_HITBOX_W, CATCHER_HITBOX_H),
        }
    }
}

/// Complete session state (deterministic given seed and inputs)
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Difficulty, chosen at session start
    pub mode: Mode,
    /// Current phase
    pub phase: GamePhase,
    /// The player's catcher
    pub catcher: Catcher,
    /// Falling fruits, in spawn order
    pub fruits: Vec<Fruit>,
    /// Score
    pub score: u32,
    /// Player lives
    pub lives: u8,
    /// Playing ticks since the last spawn
    pub spawn_counter: u32,
    /// Simulation tick counter
    pub ticks: u64,
    /// Spawn RNG, seeded from `seed`
    pub rng: Pcg32,
}

impl GameSession {
    /// Create a fresh session with the given mode and seed
    pub fn new(mode: Mode, seed: u64) -> Self {
        Self {
            seed,
            mode,
            phase: GamePhase::Playing,
            catcher: Catcher::default(),
            fruits: Vec::new(),
            score: 0,
            lives: 3,
            spawn_counter: 0,
            ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}
