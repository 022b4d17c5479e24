//! Procedural object spawning and off-screen eviction
//!
//! One spawn attempt per play-frame. Admission enforces a minimum horizontal
//! gap from the most recently relevant object so the stream never clusters
//! unfairly; a rejected attempt just skips the frame.

use glam::Vec2;
use rand::Rng;

use super::state::{FlyingObject, GameState, ObjectKind};

/// Whether a new object of `kind` may be appended this frame
///
/// Obstacles measure against the last existing obstacle, collectibles
/// against the last object of any kind. An empty sequence always admits.
pub fn admits(state: &GameState, kind: ObjectKind) -> bool {
    let gap_ok = |last: &FlyingObject, min_dist: f32| {
        last.pos.x + last.size.x <= state.arena.right_x - min_dist
    };
    match kind {
        ObjectKind::Obstacle => state
            .objects
            .iter()
            .rev()
            .find(|o| o.kind == ObjectKind::Obstacle)
            .is_none_or(|last| gap_ok(last, state.config.min_obstacle_dist)),
        ObjectKind::Collectible => state
            .objects
            .back()
            .is_none_or(|last| gap_ok(last, state.config.min_collectible_dist)),
    }
}

/// Roll a spawn kind, test admission, and append the new object on success
pub fn spawn_object(state: &mut GameState) {
    let kind = if state.rng.random::<f32>() <= state.config.obstacle_probability() {
        ObjectKind::Obstacle
    } else {
        ObjectKind::Collectible
    };
    if !admits(state, kind) {
        return;
    }

    let right_x = state.arena.right_x;
    let lower_y = state.arena.lower_y;
    let object = match kind {
        ObjectKind::Obstacle => {
            let span = state.config.max_obstacle_dist - state.config.min_obstacle_dist;
            let x = right_x + state.rng.random::<f32>() * span;
            let radius = state.config.obstacle_radius;
            FlyingObject::new(
                kind,
                Vec2::new(x, lower_y - radius),
                Vec2::splat(radius * 2.0),
            )
        }
        ObjectKind::Collectible => {
            let span = state.config.max_collectible_dist - state.config.min_collectible_dist;
            let x = right_x + state.rng.random::<f32>() * span;
            // Anywhere between resting on the ground and the jump apex, so
            // collecting takes a timed jump.
            let rest_y = lower_y - state.config.collectible_h / 2.0;
            let lift = state.rng.random::<f32>() * state.config.jump_height;
            FlyingObject::new(
                kind,
                Vec2::new(x, rest_y - lift),
                Vec2::new(state.config.collectible_w, state.config.collectible_h),
            )
        }
    };
    state.objects.push_back(object);
}

/// Drop objects that have fully scrolled off the left screen edge
///
/// Only ever pops the front of the deque; objects march leftward in
/// lockstep, so the front is the first to leave.
pub fn evict_offscreen(state: &mut GameState) {
    while state.objects.front().is_some_and(|o| o.right() < 0.0) {
        state.objects.pop_front();
    }
}
