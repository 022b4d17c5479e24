//! Fixed timestep frame advance
//!
//! One call to [`tick`] is one logical frame: route input by mode, then, in
//! play, spawn, evict, integrate motion, resolve collisions, and check for
//! the end of the run. Mode routing is decided once at frame entry, so a
//! pause press still lets the frame it arrived in finish.

use super::collision::resolve_collisions;
use super::spawn::{evict_offscreen, spawn_object};
use super::state::{GameMode, GameState, JumpState, MenuItem, ObjectKind};

/// Logical input events for one frame, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    NavigateUp,
    NavigateDown,
    Confirm,
    Jump,
    Pause,
    Quit,
}

/// Advance the game by one logical frame
pub fn tick(state: &mut GameState, events: &[InputEvent]) {
    state.frame += 1;

    // A hit freezes everything but the render clock until the counter runs
    // out. Input arriving during the freeze is dropped.
    if state.player.hit_pause_remaining > 0 {
        state.player.hit_pause_remaining -= 1;
        return;
    }
    state.player.is_hit = false;

    match state.mode {
        GameMode::Menu | GameMode::Pause => {
            // The game-over overlay lives for exactly one rendered frame;
            // entering the next menu frame retires it.
            state.game_over = false;
            menu_frame(state, events);
        }
        GameMode::Play => play_frame(state, events),
    }
}

fn menu_frame(state: &mut GameState, events: &[InputEvent]) {
    for &event in events {
        let items = state.menu_items();
        match event {
            InputEvent::NavigateUp => {
                state.menu_cursor = (state.menu_cursor + items.len() - 1) % items.len();
            }
            InputEvent::NavigateDown => {
                state.menu_cursor = (state.menu_cursor + 1) % items.len();
            }
            InputEvent::Confirm => {
                match items[state.menu_cursor] {
                    MenuItem::NewGame => state.reset(),
                    MenuItem::Resume => state.mode = GameMode::Play,
                    MenuItem::Exit => state.running = false,
                }
                // The selection acted; later events belong to the next mode.
                return;
            }
            InputEvent::Quit => {
                state.running = false;
                return;
            }
            InputEvent::Jump | InputEvent::Pause => {}
        }
    }
}

fn play_frame(state: &mut GameState, events: &[InputEvent]) {
    for &event in events {
        match event {
            InputEvent::Jump => {
                // Edge-triggered: airborne presses are ignored.
                if state.player.jump == JumpState::Grounded {
                    state.player.jump = JumpState::Ascending;
                }
            }
            InputEvent::Pause => {
                state.mode = GameMode::Pause;
                state.menu_cursor = 0;
            }
            InputEvent::Quit => {
                state.running = false;
            }
            InputEvent::NavigateUp | InputEvent::NavigateDown | InputEvent::Confirm => {}
        }
    }

    spawn_object(state);
    evict_offscreen(state);
    advance_jump(state);
    advance_objects(state);
    resolve_collisions(state);

    // Last life gone: back to the menu with the game-over overlay raised.
    // The fatal hit armed a hit-pause; the menu must not inherit the freeze.
    if state.player.lives == 0 {
        state.mode = GameMode::Menu;
        state.game_over = true;
        state.menu_cursor = 0;
        state.player.hit_pause_remaining = 0;
    }
}

/// Integrate the jump arc by one frame
///
/// The apex frame flips ascending→descending and moves in the same frame.
/// Landing clamps: a descending step that reaches or passes ground level
/// snaps onto it and clears the jump, so an uneven `jump_height` /
/// `jump_step` pairing can never wedge the player mid-air.
fn advance_jump(state: &mut GameState) {
    let step = state.config.jump_step;
    let ground = state.ground_y();
    let apex = state.apex_y();
    match state.player.jump {
        JumpState::Grounded => {}
        JumpState::Ascending => {
            if state.player.pos.y <= apex {
                state.player.jump = JumpState::Descending;
                state.player.pos.y += step;
            } else {
                state.player.pos.y -= step;
            }
        }
        JumpState::Descending => {
            state.player.pos.y += step;
            if state.player.pos.y >= ground {
                state.player.pos.y = ground;
                state.player.jump = JumpState::Grounded;
            }
        }
    }
}

/// March every live object one step leftward at its kind's speed
fn advance_objects(state: &mut GameState) {
    let obstacle_step = state.config.obstacle_step;
    let collectible_step = state.config.collectible_step;
    for object in state.objects.iter_mut() {
        object.pos.x -= match object.kind {
            ObjectKind::Obstacle => obstacle_step,
            ObjectKind::Collectible => collectible_step,
        };
    }
}
