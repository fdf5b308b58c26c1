//! Collision detection and scoring
//!
//! Everything is axis-aligned: the player's box is never rotated, and a pipe
//! is a vertical band with a gap cut out of it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Pipe, Player};
use crate::tuning::Tuning;

/// Axis-aligned box, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strict overlap on the x axis (touching edges do not count)
    #[inline]
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.max.x > left && self.min.x < right
    }

    /// True if any part of the box is outside `[top, bottom]` vertically
    #[inline]
    pub fn escapes_y(&self, top: f32, bottom: f32) -> bool {
        self.min.y < top || self.max.y > bottom
    }
}

/// Result of checking one pipe against the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipeCheck {
    pub hit: bool,
    pub scored: bool,
}

/// Does the player's box hit the solid part of a pipe?
pub fn pipe_collision(body: &Aabb, pipe: &Pipe, tuning: &Tuning) -> bool {
    body.overlaps_x(pipe.x, pipe.right(tuning))
        && body.escapes_y(pipe.gap_top, pipe.gap_bottom(tuning))
}

/// Has the pipe's right edge gone past the player's left edge?
#[inline]
pub fn pipe_passed(pipe: &Pipe, player: &Player, tuning: &Tuning) -> bool {
    pipe.right(tuning) < player.left()
}

/// Check every pipe for a hit and mark newly passed ones as scored.
///
/// No early exit: a pipe passed on the same tick as a crash still scores.
/// Each pipe's `scored` flag flips at most once.
pub fn check_pipes(player: &Player, pipes: &mut [Pipe], tuning: &Tuning) -> (bool, u32) {
    let body = player.bounds();
    let mut hit = false;
    let mut points = 0;

    for pipe in pipes.iter_mut() {
        let check = check_pipe(&body, player, pipe, tuning);
        hit |= check.hit;
        if check.scored {
            points += 1;
        }
    }

    (hit, points)
}

fn check_pipe(body: &Aabb, player: &Player, pipe: &mut Pipe, tuning: &Tuning) -> PipeCheck {
    let hit = pipe_collision(body, pipe, tuning);
    let scored = !pipe.scored && pipe_passed(pipe, player, tuning);
    if scored {
        pipe.scored = true;
    }
    PipeCheck { hit, scored }
}
