//! Data-driven game balance
//!
//! Every number the simulation reads comes from a [`Tuning`]. Defaults match
//! [`crate::consts`]; a JSON document can override any subset of fields.
//! Tunings are validated before a game can be built from them, so the tick
//! path never has to deal with impossible geometry.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rejected configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error(
        "no room to place a gap: height {height} - gap {gap} - 2 * margin {margin} leaves nothing"
    )]
    NoGapRange { height: f32, gap: f32, margin: f32 },
    #[error("pipe spacing {spacing} is smaller than pipe speed {speed}")]
    SpacingBelowSpeed { spacing: f32, speed: f32 },
    #[error("player box does not fit inside the {width}x{height} playfield")]
    PlayerOutOfBounds { width: f32, height: f32 },
    #[error("invalid tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Simulation constants for one game instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,

    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub gravity: f32,
    pub jump_power: f32,
    pub rotation_factor: f32,
    pub max_up_angle: f32,
    pub max_down_angle: f32,

    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_spacing: f32,
    pub pipe_speed: f32,
    pub gap_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            rotation_factor: ROTATION_FACTOR,
            max_up_angle: MAX_UP_ANGLE,
            max_down_angle: MAX_DOWN_ANGLE,

            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_spacing: PIPE_SPACING,
            pipe_speed: PIPE_SPEED,
            gap_margin: GAP_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that this tuning describes a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("player_x", self.player_x),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("gravity", self.gravity),
            ("jump_power", self.jump_power),
            ("rotation_factor", self.rotation_factor),
            ("max_up_angle", self.max_up_angle),
            ("max_down_angle", self.max_down_angle),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_spacing", self.pipe_spacing),
            ("pipe_speed", self.pipe_speed),
            ("gap_margin", self.gap_margin),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_spacing", self.pipe_spacing),
            ("pipe_speed", self.pipe_speed),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("player_x", self.player_x),
            ("gap_margin", self.gap_margin),
            ("max_up_angle", self.max_up_angle),
            ("max_down_angle", self.max_down_angle),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.gap_range() <= 0.0 {
            return Err(ConfigError::NoGapRange {
                height: self.playfield_height,
                gap: self.pipe_gap,
                margin: self.gap_margin,
            });
        }

        // One spawn per tick only keeps pipes apart if they move less than
        // the spacing in a single tick
        if self.pipe_spacing < self.pipe_speed {
            return Err(ConfigError::SpacingBelowSpeed {
                spacing: self.pipe_spacing,
                speed: self.pipe_speed,
            });
        }

        if self.player_height >= self.playfield_height
            || self.player_x + self.player_width >= self.playfield_width
        {
            return Err(ConfigError::PlayerOutOfBounds {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }

        Ok(())
    }

    /// Width of the interval a gap top may be drawn from
    #[inline]
    pub fn gap_range(&self) -> f32 {
        self.playfield_height - self.pipe_gap - 2.0 * self.gap_margin
    }

    /// Largest gap top whose gap bottom still satisfies
    /// `gap_bottom <= playfield_height - gap_margin` in f32 arithmetic
    pub fn max_gap_top(&self) -> f32 {
        let limit = self.playfield_height - self.gap_margin;
        let mut top = limit - self.pipe_gap;
        // Rounding of `top + gap` can land one ulp past the limit
        while top > self.gap_margin && top + self.pipe_gap > limit {
            top = f32::from_bits(top.to_bits() - 1);
        }
        top
    }

    /// Vertical start position of the player for a new run
    #[inline]
    pub fn player_start_y(&self) -> f32 {
        self.playfield_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_gap_taller_than_playfield_rejected() {
        let tuning = Tuning {
            pipe_gap: 700.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::NoGapRange { .. })
        ));
    }

    #[test]
    fn test_degenerate_gap_range_rejected() {
        // 600 - 480 - 2 * 60 == 0
        let tuning = Tuning {
            pipe_gap: 480.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::NoGapRange { .. })
        ));
    }

    #[test]
    fn test_spacing_below_speed_rejected() {
        let tuning = Tuning {
            pipe_spacing: 2.0,
            pipe_speed: 3.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::SpacingBelowSpeed { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let tuning = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::NotFinite { field: "gravity", .. })
        ));
    }

    #[test]
    fn test_zero_speed_rejected() {
        let tuning = Tuning {
            pipe_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::NotPositive { field: "pipe_speed", .. })
        ));
    }

    #[test]
    fn test_player_must_fit() {
        let tuning = Tuning {
            player_x: 780.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::PlayerOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_partial_json_override() {
        let tuning = Tuning::from_json(r#"{ "pipe_speed": 3.5, "gravity": 0.5 }"#).unwrap();
        assert_eq!(tuning.pipe_speed, 3.5);
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.pipe_gap, PIPE_GAP);
    }

    #[test]
    fn test_bad_json_rejected() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "playfield_height": 100.0 }"#),
            Err(ConfigError::NoGapRange { .. })
        ));
    }
}
