use glam::Vec2;

use crystal_dash::config::GameConfig;
use crystal_dash::sim::*;

fn make_state(seed: u64) -> GameState {
    GameState::new(GameConfig::default(), seed).unwrap()
}

/// Boot straight into a fresh run
fn playing_state(seed: u64) -> GameState {
    let mut state = make_state(seed);
    tick(&mut state, &[InputEvent::Confirm]);
    assert_eq!(state.mode, GameMode::Play);
    state
}

fn obstacle_on_player(state: &GameState) -> FlyingObject {
    FlyingObject::new(
        ObjectKind::Obstacle,
        state.player.pos + state.player.size / 2.0,
        Vec2::splat(state.config.obstacle_radius * 2.0),
    )
}

// ── Menu and mode transitions ─────────────────────────────────────────────────

#[test]
fn boot_lands_in_menu_with_cursor_on_new_game() {
    let state = make_state(7);
    assert_eq!(state.mode, GameMode::Menu);
    assert_eq!(state.menu_cursor, 0);
    assert_eq!(state.menu_items(), &[MenuItem::NewGame, MenuItem::Exit]);
    assert!(!state.game_over);
}

#[test]
fn full_session_from_menu_through_pause_to_exit() {
    let mut state = make_state(7);

    // New Game
    tick(&mut state, &[InputEvent::Confirm]);
    assert_eq!(state.mode, GameMode::Play);

    // Play a while, jump once mid-run.
    for frame in 0..10 {
        let events: &[InputEvent] = if frame == 4 { &[InputEvent::Jump] } else { &[] };
        tick(&mut state, events);
    }
    let mid_air_y = state.player.pos.y;
    assert_ne!(state.player.jump, JumpState::Grounded);

    // Pause freezes the world mid-jump.
    tick(&mut state, &[InputEvent::Pause]);
    assert_eq!(state.mode, GameMode::Pause);
    assert_eq!(state.menu_cursor, 0);
    assert_eq!(
        state.menu_items(),
        &[MenuItem::Resume, MenuItem::NewGame, MenuItem::Exit]
    );
    for _ in 0..5 {
        tick(&mut state, &[]);
    }
    assert_eq!(state.player.pos.y, mid_air_y - state.config.jump_step);

    // Resume finishes the jump.
    tick(&mut state, &[InputEvent::Confirm]);
    assert_eq!(state.mode, GameMode::Play);
    for _ in 0..30 {
        tick(&mut state, &[]);
    }
    assert_eq!(state.player.jump, JumpState::Grounded);
    assert_eq!(state.player.pos.y, state.ground_y());

    // Back to pause, walk the cursor down to Exit.
    tick(&mut state, &[InputEvent::Pause]);
    tick(&mut state, &[InputEvent::NavigateDown]);
    tick(&mut state, &[InputEvent::NavigateDown]);
    assert_eq!(state.menu_items()[state.menu_cursor], MenuItem::Exit);
    tick(&mut state, &[InputEvent::Confirm]);
    assert!(!state.running);
}

// ── Spawning over a long run ──────────────────────────────────────────────────

#[test]
fn spawned_objects_keep_kind_bands_and_min_gaps() {
    // Enough lives that grounded collisions never end the run mid-test.
    let config = GameConfig {
        starting_lives: 1000,
        ..GameConfig::default()
    };
    let mut state = GameState::new(config, 99).unwrap();
    tick(&mut state, &[InputEvent::Confirm]);

    let arena = state.arena;
    let rest_y = arena.lower_y - state.config.collectible_h / 2.0;
    let mut prev_len = state.objects.len();
    let mut saw_obstacle = false;
    let mut saw_collectible = false;

    for _ in 0..400 {
        tick(&mut state, &[]);

        for object in &state.objects {
            match object.kind {
                ObjectKind::Obstacle => {
                    saw_obstacle = true;
                    assert_eq!(object.pos.y, arena.lower_y - state.config.obstacle_radius);
                    assert_eq!(object.size, Vec2::splat(state.config.obstacle_radius * 2.0));
                }
                ObjectKind::Collectible => {
                    saw_collectible = true;
                    assert!(object.pos.y <= rest_y);
                    assert!(object.pos.y >= rest_y - state.config.jump_height);
                    assert_eq!(
                        object.size,
                        Vec2::new(state.config.collectible_w, state.config.collectible_h)
                    );
                }
            }
        }

        // A newly admitted object implies its gap rule held. Positions here
        // are post-move, which only widens the measured gap.
        if state.objects.len() > prev_len {
            let new = state.objects.back().unwrap();
            let older: Vec<&FlyingObject> =
                state.objects.iter().take(state.objects.len() - 1).collect();
            match new.kind {
                ObjectKind::Obstacle => {
                    if let Some(last) = older.iter().rev().find(|o| o.kind == ObjectKind::Obstacle)
                    {
                        assert!(
                            last.pos.x + last.size.x
                                <= arena.right_x - state.config.min_obstacle_dist
                        );
                    }
                }
                ObjectKind::Collectible => {
                    if let Some(last) = older.last() {
                        assert!(
                            last.pos.x + last.size.x
                                <= arena.right_x - state.config.min_collectible_dist
                        );
                    }
                }
            }
        }
        prev_len = state.objects.len();
    }

    assert!(saw_obstacle);
    assert!(saw_collectible);
}

// ── Hits, scoring, and game over ──────────────────────────────────────────────

#[test]
fn obstacle_hit_freezes_then_releases() {
    let mut state = playing_state(11);
    state.objects.push_back(obstacle_on_player(&state));

    tick(&mut state, &[]);
    assert_eq!(state.player.lives, 2);
    assert!(state.player.is_hit);
    assert_eq!(state.player.hit_pause_remaining, state.config.hit_pause_length);

    // The freeze drops input and pins the world, but the frame clock runs.
    let frozen_y = state.player.pos.y;
    let frozen_front_x = state.objects.front().unwrap().pos.x;
    let frame_before = state.frame;
    for _ in 0..state.config.hit_pause_length {
        tick(&mut state, &[InputEvent::Jump]);
        assert!(state.player.is_hit);
        assert_eq!(state.player.pos.y, frozen_y);
        assert_eq!(state.objects.front().unwrap().pos.x, frozen_front_x);
        assert_eq!(state.player.jump, JumpState::Grounded);
    }
    assert_eq!(state.frame, frame_before + state.config.hit_pause_length as u64);
    assert_eq!(state.player.hit_pause_remaining, 0);

    // First live frame: flag drops, world moves, and the latched obstacle
    // cannot score again.
    tick(&mut state, &[]);
    assert!(!state.player.is_hit);
    assert!(state.objects.front().unwrap().pos.x < frozen_front_x);
    assert_eq!(state.player.lives, 2);
}

#[test]
fn collectible_pickup_scores_without_freezing() {
    let mut state = playing_state(13);
    state.objects.push_back(FlyingObject::new(
        ObjectKind::Collectible,
        state.player.pos + state.player.size / 2.0,
        Vec2::new(state.config.collectible_w, state.config.collectible_h),
    ));

    tick(&mut state, &[]);
    assert_eq!(state.player.crystals, 1);
    assert_eq!(state.player.lives, 3);
    assert!(!state.player.is_hit);
    assert_eq!(state.player.hit_pause_remaining, 0);
    assert!(state.objects.front().unwrap().has_scored);

    // The latched crystal never pays out twice.
    tick(&mut state, &[]);
    assert_eq!(state.player.crystals, 1);
}

#[test]
fn losing_all_lives_raises_game_over_then_new_game_starts_clean() {
    let mut state = playing_state(17);

    for expected_lives in [2, 1] {
        state.objects.push_back(obstacle_on_player(&state));
        tick(&mut state, &[]);
        assert_eq!(state.player.lives, expected_lives);
        for _ in 0..state.config.hit_pause_length {
            tick(&mut state, &[]);
        }
    }

    // Third hit is fatal: straight to the menu, no lingering freeze.
    state.objects.push_back(obstacle_on_player(&state));
    tick(&mut state, &[]);
    assert_eq!(state.player.lives, 0);
    assert_eq!(state.mode, GameMode::Menu);
    assert!(state.game_over);
    assert_eq!(state.menu_cursor, 0);
    assert_eq!(state.player.hit_pause_remaining, 0);

    // The overlay is a single-frame pulse.
    tick(&mut state, &[]);
    assert!(!state.game_over);

    // New Game from the post-mortem menu starts from scratch.
    tick(&mut state, &[InputEvent::Confirm]);
    assert_eq!(state.mode, GameMode::Play);
    assert_eq!(state.player.lives, state.config.starting_lives);
    assert_eq!(state.player.crystals, 0);
    assert!(state.objects.is_empty());
    assert_eq!(state.player.pos.y, state.ground_y());
}

// ── Config files ──────────────────────────────────────────────────────────────

#[test]
fn config_overrides_apply_and_bad_files_fall_back() {
    let dir = std::env::temp_dir();

    let good = dir.join(format!("crystal-dash-good-{}.json", std::process::id()));
    std::fs::write(&good, r#"{ "jump_step": 25.0, "starting_lives": 5 }"#).unwrap();
    let config = GameConfig::load_or_default(&good);
    assert_eq!(config.jump_step, 25.0);
    assert_eq!(config.starting_lives, 5);
    assert_eq!(config.screen_w, GameConfig::default().screen_w);
    std::fs::remove_file(&good).unwrap();

    let bad = dir.join(format!("crystal-dash-bad-{}.json", std::process::id()));
    std::fs::write(&bad, "{ this is not json").unwrap();
    assert_eq!(GameConfig::load_or_default(&bad), GameConfig::default());
    std::fs::remove_file(&bad).unwrap();

    let missing = dir.join(format!("crystal-dash-missing-{}.json", std::process::id()));
    assert_eq!(GameConfig::load_or_default(&missing), GameConfig::default());
}
