//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no delta-time scaling
//! - Seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod physics;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check_pipes, pipe_collision, pipe_passed};
pub use physics::{BodyStep, rotation_for};
pub use snapshot::{PipeView, PlayerView, Snapshot};
pub use state::{GameEvent, GameOverCause, GamePhase, GameState, Pipe, Player, Skin};
pub use tick::{TickInput, activate, autopilot_wants_activate, tick};
