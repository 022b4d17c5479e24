//! Invariants that must hold for any seed and any input stream.

use proptest::prelude::*;

use crystal_dash::config::GameConfig;
use crystal_dash::sim::*;

fn playing_state(config: GameConfig, seed: u64) -> GameState {
    let mut state = GameState::new(config, seed).unwrap();
    tick(&mut state, &[InputEvent::Confirm]);
    assert_eq!(state.mode, GameMode::Play);
    state
}

fn event_from(code: u8) -> InputEvent {
    match code % 6 {
        0 => InputEvent::NavigateUp,
        1 => InputEvent::NavigateDown,
        2 => InputEvent::Confirm,
        3 => InputEvent::Jump,
        4 => InputEvent::Pause,
        _ => InputEvent::Quit,
    }
}

proptest! {
    /// No input stream can push the state out of its documented bounds.
    #[test]
    fn state_stays_bounded_under_random_input(
        seed in any::<u64>(),
        script in prop::collection::vec(0u8..6, 1..200),
    ) {
        let mut state = GameState::new(GameConfig::default(), seed).unwrap();
        let start_x = state.player.pos.x;
        let frames = script.len() as u64;
        let mut prev_crystals = 0;

        for code in script {
            let event = event_from(code);
            tick(&mut state, &[event]);

            prop_assert!(state.player.lives <= state.config.starting_lives);
            // Crystals only ever grow, except across a New Game reset.
            if event != InputEvent::Confirm {
                prop_assert!(state.player.crystals >= prev_crystals);
            }
            prev_crystals = state.player.crystals;
            prop_assert_eq!(state.player.pos.x, start_x);
            prop_assert!(state.player.pos.y <= state.ground_y());
            // The apex frame may overshoot by strictly less than one step.
            prop_assert!(state.player.pos.y >= state.apex_y() - state.config.jump_step);
            if state.mode != GameMode::Play {
                prop_assert!(state.menu_cursor < state.menu_items().len());
            }
        }
        prop_assert_eq!(state.frame, frames);
    }

    /// A jump spends as many frames rising as falling and lands exactly on
    /// the ground line, whatever the height and step.
    #[test]
    fn jump_airtime_is_symmetric(
        height in 20u32..=300,
        step in 5u32..=60,
        seed in any::<u64>(),
    ) {
        prop_assume!(height > step);

        // A wide arena keeps spawned objects far from the player for the
        // whole arc.
        let config = GameConfig {
            screen_w: 6000.0,
            jump_height: height as f32,
            jump_step: step as f32,
            ..GameConfig::default()
        };
        let mut state = playing_state(config, seed);

        tick(&mut state, &[InputEvent::Jump]);
        let mut airborne = 1u32;
        while state.player.jump != JumpState::Grounded {
            prop_assert!(airborne < 1000);
            tick(&mut state, &[]);
            airborne += 1;
        }

        prop_assert_eq!(airborne, 2 * height.div_ceil(step));
        prop_assert_eq!(state.player.pos.y, state.ground_y());
        prop_assert_eq!(state.player.lives, state.config.starting_lives);
    }

    /// Two sessions with the same seed and script are indistinguishable.
    #[test]
    fn same_seed_and_script_reach_the_same_state(
        seed in any::<u64>(),
        cadence in 1usize..=25,
    ) {
        let mut a = playing_state(GameConfig::default(), seed);
        let mut b = playing_state(GameConfig::default(), seed);

        for frame in 0..150 {
            let events: &[InputEvent] = if frame % cadence == 0 {
                &[InputEvent::Jump]
            } else {
                &[]
            };
            tick(&mut a, events);
            tick(&mut b, events);
        }
        prop_assert_eq!(a, b);
    }

    /// A live frame shifts every surviving object one step left, keeps spawn
    /// order, and drops objects only from the front.
    #[test]
    fn objects_march_left_as_a_shifted_suffix(
        seed in any::<u64>(),
        warmup in 0usize..150,
    ) {
        let mut state = playing_state(GameConfig::default(), seed);
        for _ in 0..warmup {
            tick(&mut state, &[]);
        }
        prop_assume!(state.mode == GameMode::Play);
        prop_assume!(state.player.hit_pause_remaining == 0);

        let before: Vec<FlyingObject> = state.objects.iter().copied().collect();
        let popped = before.iter().take_while(|o| o.right() < 0.0).count();

        tick(&mut state, &[]);

        let survivors = before.len() - popped;
        prop_assert!(state.objects.len() >= survivors);
        prop_assert!(state.objects.len() <= survivors + 1);
        for j in 0..survivors {
            let was = before[popped + j];
            let now = state.objects[j];
            let step = match was.kind {
                ObjectKind::Obstacle => state.config.obstacle_step,
                ObjectKind::Collectible => state.config.collectible_step,
            };
            prop_assert_eq!(now.kind, was.kind);
            prop_assert_eq!(now.pos.x, was.pos.x - step);
            prop_assert_eq!(now.pos.y, was.pos.y);
        }
    }
}
