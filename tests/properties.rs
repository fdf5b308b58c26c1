use flappy_bonk::Tuning;
use flappy_bonk::sim::spawn::new_pipe;
use flappy_bonk::sim::{Pipe, Player, pipe_collision};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

proptest! {
    #[test]
    fn gap_always_inside_margins(
        seed in any::<u64>(),
        height in 400.0f32..1200.0,
        gap in 80.0f32..200.0,
        margin in 0.0f32..80.0,
    ) {
        let tuning = Tuning {
            playfield_height: height,
            pipe_gap: gap,
            gap_margin: margin,
            ..Default::default()
        };
        prop_assume!(tuning.validate().is_ok());

        let mut rng = Pcg32::seed_from_u64(seed);
        for _ in 0..50 {
            let pipe = new_pipe(&mut rng, &tuning);
            prop_assert_eq!(pipe.x, tuning.playfield_width);
            prop_assert!(!pipe.scored);
            prop_assert!(pipe.gap_top >= tuning.gap_margin);
            prop_assert!(pipe.gap_bottom(&tuning) <= tuning.playfield_height - tuning.gap_margin);
        }
    }

    #[test]
    fn collision_matches_box_formula(
        by in 0.0f32..540.0,
        ox in -100.0f32..800.0,
        gy in 60.0f32..300.0,
    ) {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.pos.y = by;
        let pipe = Pipe::new(ox, gy);

        let (bx, bw, bh) = (tuning.player_x, tuning.player_width, tuning.player_height);
        let (ow, gh) = (tuning.pipe_width, tuning.pipe_gap);
        let expected = bx + bw > ox && bx < ox + ow && (by < gy || by + bh > gy + gh);

        prop_assert_eq!(pipe_collision(&player.bounds(), &pipe, &tuning), expected);
    }
}
