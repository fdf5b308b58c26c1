//! Flappy Bonk - A single-screen flap-through-the-pipes arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, game state)
//! - `session`: Simulation controller that talks to the score store
//! - `platform`: Host input mapping and the browser facade
//! - `persistence`: Key-value store backends
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::BEST_SCORE_KEY;
pub use persistence::{MemoryStore, ScoreStore, StoreError};
pub use session::Session;
pub use settings::Settings;
pub use tuning::{ConfigError, Tuning};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player defaults - x never changes during play
    pub const PLAYER_X: f32 = 120.0;
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.6;
    /// Velocity set by a flap (negative = up)
    pub const JUMP_POWER: f32 = -12.0;

    /// Rotation = velocity * factor, clamped to [-MAX_UP, +MAX_DOWN]
    pub const ROTATION_FACTOR: f32 = 0.1;
    pub const MAX_UP_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
    pub const MAX_DOWN_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 100.0;
    pub const PIPE_GAP: f32 = 180.0;
    pub const PIPE_SPACING: f32 = 250.0;
    pub const PIPE_SPEED: f32 = 2.5;
    /// Minimum distance between the gap and the top/bottom edge
    pub const GAP_MARGIN: f32 = 60.0;
}
