//! Read-only view of the simulation for the presentation layer

use serde::Serialize;

use super::state::{GamePhase, GameState, Skin};

/// Player as the renderer needs it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
    pub skin: Skin,
    /// Drawn when the skin's image has not loaded
    pub fallback_color: &'static str,
    pub emoji: &'static str,
}

/// One pipe pair: solid from 0 to `gap_top` and from `gap_bottom` to the floor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipeView {
    pub x: f32,
    pub width: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
    pub scored: bool,
}

/// Everything drawn for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub best_score: u32,
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub player: PlayerView,
    pub pipes: Vec<PipeView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let tuning = &state.tuning;
        let player = &state.player;
        Self {
            phase: state.phase,
            score: state.score,
            best_score: state.best_score,
            playfield_width: tuning.playfield_width,
            playfield_height: tuning.playfield_height,
            player: PlayerView {
                x: player.pos.x,
                y: player.pos.y,
                width: player.size.x,
                height: player.size.y,
                rotation: player.rotation,
                skin: state.skin,
                fallback_color: state.skin.fallback_color(),
                emoji: state.skin.emoji(),
            },
            pipes: state
                .pipes
                .iter()
                .map(|p| PipeView {
                    x: p.x,
                    width: tuning.pipe_width,
                    gap_top: p.gap_top,
                    gap_bottom: p.gap_bottom(tuning),
                    scored: p.scored,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::activate;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_mirrors_state() {
        let mut state = GameState::new(3, Tuning::default()).unwrap();
        state.skin = Skin::Hippo;
        activate(&mut state);

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.player.skin, Skin::Hippo);
        assert_eq!(snap.player.fallback_color, "#8B4513");
        assert_eq!(snap.player.emoji, "🦛");
        assert_eq!(snap.player.x, 120.0);
        assert_eq!(snap.pipes.len(), 1);
        assert_eq!(snap.pipes[0].gap_bottom - snap.pipes[0].gap_top, 180.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(3, Tuning::default()).unwrap();
        let json = serde_json::to_string(&Snapshot::capture(&state)).unwrap();
        assert!(json.contains("\"phase\":\"Start\""));
        assert!(json.contains("\"skin\":\"Bonk\""));
        assert!(json.contains("\"fallback_color\":\"#FFA500\""));
    }
}
