//! Game state and core simulation types
//!
//! Everything one run of the game mutates lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::{ConfigError, Tuning};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first activation
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for activation to restart
    GameOver,
}

/// Character the presentation layer draws for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Skin {
    #[default]
    Bonk,
    Hippo,
    Bird,
}

impl Skin {
    pub const ALL: [Skin; 3] = [Skin::Bonk, Skin::Hippo, Skin::Bird];

    pub fn as_str(&self) -> &'static str {
        match self {
            Skin::Bonk => "bonk",
            Skin::Hippo => "hippo",
            Skin::Bird => "bird",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bonk" => Some(Skin::Bonk),
            "hippo" => Some(Skin::Hippo),
            "bird" => Some(Skin::Bird),
            _ => None,
        }
    }

    /// Solid colour drawn when the skin's image is not available
    pub fn fallback_color(&self) -> &'static str {
        match self {
            Skin::Bonk => "#FFA500",
            Skin::Hippo => "#8B4513",
            Skin::Bird => "#FFD700",
        }
    }

    /// Glyph drawn on top of the fallback colour
    pub fn emoji(&self) -> &'static str {
        match self {
            Skin::Bonk => "🐕",
            Skin::Hippo => "🦛",
            Skin::Bird => "🐦",
        }
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Bottom of the body went past the playfield floor
    Floor,
    /// Body overlapped a pipe outside its gap
    Pipe,
}

/// Things that happened during a tick, drained by the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    Flap,
    PipeSpawned { gap_top: f32 },
    Scored { score: u32 },
    GameOver {
        cause: GameOverCause,
        score: u32,
        best: u32,
        new_best: bool,
    },
}

/// The player's character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x is fixed for the whole run
    pub pos: Vec2,
    /// Vertical velocity (pixels/tick, positive = down)
    pub vel_y: f32,
    pub size: Vec2,
    /// Cosmetic tilt derived from velocity each tick
    pub rotation: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, tuning.player_start_y()),
            vel_y: 0.0,
            size: Vec2::new(tuning.player_width, tuning.player_height),
            rotation: 0.0,
        }
    }

    /// Put the player back at the start pose
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Unrotated bounding box used for collisions
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + self.size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A pipe pair with a passable gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Top of the gap, fixed at creation
    pub gap_top: f32,
    /// Set once the pipe's right edge has passed the player
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            scored: false,
        }
    }

    #[inline]
    pub fn right(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_width
    }

    #[inline]
    pub fn gap_bottom(&self, tuning: &Tuning) -> f32 {
        self.gap_top + tuning.pipe_gap
    }
}

/// Complete state of one game instance
#[derive(Debug, Clone)]
pub struct GameState {
    /// Gap placement RNG
    pub rng: Pcg32,
    /// Validated constants
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Pipes cleared this run
    pub score: u32,
    /// Best score across runs (mirrors the score store)
    pub best_score: u32,
    /// Character skin (cosmetic only)
    pub skin: Skin,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    pub player: Player,
    /// Oldest (leftmost) first
    pub pipes: Vec<Pipe>,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game in the Start phase
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self {
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning),
            tuning,
            phase: GamePhase::Start,
            score: 0,
            best_score: 0,
            skin: Skin::default(),
            time_ticks: 0,
            pipes: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Create a new game with a known best score
    pub fn with_best_score(mut self, best_score: u32) -> Self {
        self.best_score = best_score;
        self
    }

    /// Hand over the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
