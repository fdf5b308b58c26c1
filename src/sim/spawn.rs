//! Pipe generation
//!
//! Gap placement is generic over [`rand::Rng`] so tests can drive it with any
//! seeded source.

use rand::Rng;

use super::state::Pipe;
use crate::tuning::Tuning;

/// Draw a gap top uniformly from `[margin, height - gap - margin]`
pub fn random_gap_top<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> f32 {
    (tuning.gap_margin + rng.random::<f32>() * tuning.gap_range()).min(tuning.max_gap_top())
}

/// Create a pipe at the right edge of the playfield
pub fn new_pipe<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Pipe {
    Pipe::new(tuning.playfield_width, random_gap_top(rng, tuning))
}

/// Whether a new pipe is due: none exist, or the newest one has moved left of
/// `width - spacing`
pub fn should_spawn(pipes: &[Pipe], tuning: &Tuning) -> bool {
    match pipes.last() {
        None => true,
        Some(last) => last.x < tuning.playfield_width - tuning.pipe_spacing,
    }
}

/// Move every pipe left by one tick of travel
pub fn advance(pipes: &mut [Pipe], tuning: &Tuning) {
    for pipe in pipes.iter_mut() {
        pipe.x -= tuning.pipe_speed;
    }
}

/// Drop pipes whose right edge has left the playfield
pub fn prune(pipes: &mut Vec<Pipe>, tuning: &Tuning) {
    pipes.retain(|p| p.x > -tuning.pipe_width);
}

/// Append at most one pipe; returns the gap top if one was spawned
pub fn maybe_spawn<R: Rng + ?Sized>(
    pipes: &mut Vec<Pipe>,
    rng: &mut R,
    tuning: &Tuning,
) -> Option<f32> {
    if !should_spawn(pipes, tuning) {
        return None;
    }
    let pipe = new_pipe(rng, tuning);
    let gap_top = pipe.gap_top;
    pipes.push(pipe);
    Some(gap_top)
}
