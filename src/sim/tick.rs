//! Per-tick simulation and the phase state machine
//!
//! One call to [`tick`] is one frame. Order inside a tick is fixed:
//! phase gate, body, pipes (advance, prune, spawn), collision and scoring,
//! then the GameOver transition if anything was hit.

use super::collision::check_pipes;
use super::physics::{self, BodyStep};
use super::spawn;
use super::state::{GameEvent, GameOverCause, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Activation (key press, click or touch) seen since the last tick
    pub activate: bool,
    /// Demo mode - the autopilot decides when to activate
    pub autopilot: bool,
}

/// Extra clearance the autopilot keeps above the lower gap edge
const AUTOPILOT_MARGIN: f32 = 4.0;

/// Apply one activation to the state machine
///
/// Start and GameOver begin a fresh run; Playing flaps.
pub fn activate(state: &mut GameState) {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver => start_run(state),
        GamePhase::Playing => {
            physics::flap(&mut state.player, &state.tuning);
            state.events.push(GameEvent::Flap);
        }
    }
}

/// Reset the run and seed the first pipe
fn start_run(state: &mut GameState) {
    state.phase = GamePhase::Playing;
    state.score = 0;
    state.time_ticks = 0;
    state.player.reset(&state.tuning);
    state.pipes.clear();
    state.events.push(GameEvent::RunStarted);
    spawn_pipe(state);
    log::info!("Run started (best {})", state.best_score);
}

fn spawn_pipe(state: &mut GameState) {
    if let Some(gap_top) = spawn::maybe_spawn(&mut state.pipes, &mut state.rng, &state.tuning) {
        log::debug!("Pipe spawned, gap top {:.1}", gap_top);
        state.events.push(GameEvent::PipeSpawned { gap_top });
    }
}

/// Playing -> GameOver; the only place the best score changes
fn end_run(state: &mut GameState, cause: GameOverCause) {
    state.phase = GamePhase::GameOver;
    let new_best = state.score > state.best_score;
    if new_best {
        state.best_score = state.score;
    }
    log::info!(
        "Game over ({:?}) score {} best {}{}",
        cause,
        state.score,
        state.best_score,
        if new_best { " - new best!" } else { "" }
    );
    state.events.push(GameEvent::GameOver {
        cause,
        score: state.score,
        best: state.best_score,
        new_best,
    });
}

/// Decide whether the autopilot wants to activate this tick
///
/// Flaps when the next tick of falling would take the body's bottom edge
/// within `AUTOPILOT_MARGIN` of the lower gap edge of the pipe ahead.
pub fn autopilot_wants_activate(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver => true,
        GamePhase::Playing => {
            let tuning = &state.tuning;
            let player = &state.player;
            if player.vel_y < 0.0 {
                return false;
            }
            let target_bottom = state
                .pipes
                .iter()
                .find(|p| p.right(tuning) >= player.left())
                .map(|p| p.gap_bottom(tuning))
                .unwrap_or(tuning.playfield_height - tuning.gap_margin);
            let next_bottom = player.bottom() + player.vel_y + tuning.gravity;
            next_bottom > target_bottom - AUTOPILOT_MARGIN
        }
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    let wants_activate = input.activate || (input.autopilot && autopilot_wants_activate(state));
    if wants_activate {
        activate(state);
    }

    // Nothing moves outside of Playing
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    if physics::integrate(&mut state.player, &state.tuning) == BodyStep::HitFloor {
        end_run(state, GameOverCause::Floor);
        return;
    }

    spawn::advance(&mut state.pipes, &state.tuning);
    spawn::prune(&mut state.pipes, &state.tuning);
    spawn_pipe(state);

    let (hit, points) = check_pipes(&state.player, &mut state.pipes, &state.tuning);
    for _ in 0..points {
        state.score += 1;
        log::debug!("Scored: {}", state.score);
        state.events.push(GameEvent::Scored { score: state.score });
    }

    if hit {
        end_run(state, GameOverCause::Pipe);
    }
}
