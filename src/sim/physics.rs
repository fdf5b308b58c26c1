//! Player body integration
//!
//! Constant gravity, explicit Euler, one step per tick. Rotation is a
//! cosmetic function of velocity and never feeds back into collisions.

use super::state::Player;
use crate::tuning::Tuning;

/// Outcome of moving the body for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStep {
    /// Still in the air (possibly pinned to the ceiling)
    Airborne,
    /// Bottom edge went below the floor
    HitFloor,
}

/// Tilt for a given vertical velocity
#[inline]
pub fn rotation_for(vel_y: f32, tuning: &Tuning) -> f32 {
    (vel_y * tuning.rotation_factor).clamp(-tuning.max_up_angle, tuning.max_down_angle)
}

/// Overwrite the current velocity with the jump impulse
pub fn flap(player: &mut Player, tuning: &Tuning) {
    player.vel_y = tuning.jump_power;
}

/// Advance the body one tick
pub fn integrate(player: &mut Player, tuning: &Tuning) -> BodyStep {
    player.vel_y += tuning.gravity;
    player.pos.y += player.vel_y;
    player.rotation = rotation_for(player.vel_y, tuning);

    // The ceiling stops the body but is not fatal
    if player.pos.y < 0.0 {
        player.pos.y = 0.0;
        player.vel_y = 0.0;
    }

    if player.bottom() > tuning.playfield_height {
        BodyStep::HitFloor
    } else {
        BodyStep::Airborne
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_gravity_accumulates() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);

        assert_eq!(integrate(&mut player, &tuning), BodyStep::Airborne);
        assert!((player.vel_y - 0.6).abs() < 1e-6);
        assert!((player.pos.y - 300.6).abs() < 1e-4);

        integrate(&mut player, &tuning);
        assert!((player.vel_y - 1.2).abs() < 1e-6);
        assert!((player.pos.y - 301.8).abs() < 1e-4);
    }

    #[test]
    fn test_flap_overwrites_velocity() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.vel_y = 9.0;
        flap(&mut player, &tuning);
        assert_eq!(player.vel_y, -12.0);
    }

    #[test]
    fn test_rotation_clamped() {
        let tuning = Tuning::default();
        assert!((rotation_for(-100.0, &tuning) + FRAC_PI_4).abs() < 1e-6);
        assert!((rotation_for(100.0, &tuning) - FRAC_PI_2).abs() < 1e-6);
        assert!((rotation_for(3.0, &tuning) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_ceiling_clamps_and_stops() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.pos.y = 5.0;
        player.vel_y = -40.0;

        assert_eq!(integrate(&mut player, &tuning), BodyStep::Airborne);
        assert_eq!(player.pos.y, 0.0);
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn test_floor_is_reported() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.pos.y = tuning.playfield_height - tuning.player_height - 0.1;
        player.vel_y = 0.0;
        assert_eq!(integrate(&mut player, &tuning), BodyStep::HitFloor);
    }

    #[test]
    fn test_resting_on_floor_is_not_a_hit() {
        let tuning = Tuning {
            gravity: 0.0,
            ..Default::default()
        };
        let mut player = Player::new(&tuning);
        player.pos.y = tuning.playfield_height - tuning.player_height;
        assert_eq!(integrate(&mut player, &tuning), BodyStep::Airborne);
    }
}
