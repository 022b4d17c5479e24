//! Hit tests between the runner and flying objects
//!
//! Obstacles are circles rolling along the ground and use a closest-point
//! circle-vs-rectangle test; collectibles are boxes and use a plain overlap
//! test. Scoring mutates lives/crystals through a per-object latch so an
//! overlap that lasts several frames counts exactly once.

use glam::Vec2;

use super::state::{FlyingObject, GameState, ObjectKind, Player};

/// Shrink applied to the obstacle radius so edge grazes don't register
pub const HIT_SLACK: f32 = 5.0;

/// Circle-vs-rectangle test via the closest point on the rectangle
///
/// `rect_pos` is the top-left corner. The effective radius is reduced by
/// [`HIT_SLACK`].
#[inline]
pub fn circle_hits_rect(center: Vec2, radius: f32, rect_pos: Vec2, rect_size: Vec2) -> bool {
    let closest = center.clamp(rect_pos, rect_pos + rect_size);
    let effective = (radius - HIT_SLACK).max(0.0);
    center.distance_squared(closest) <= effective * effective
}

/// Axis-aligned rectangle overlap; touching edges count
#[inline]
pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x <= b_pos.x + b_size.x
        && b_pos.x <= a_pos.x + a_size.x
        && a_pos.y <= b_pos.y + b_size.y
        && b_pos.y <= a_pos.y + a_size.y
}

/// Does this object connect with the player's hit-box right now?
pub fn object_hits_player(object: &FlyingObject, player: &Player) -> bool {
    match object.kind {
        ObjectKind::Obstacle => circle_hits_rect(
            object.pos,
            object.size.x / 2.0,
            player.pos,
            player.size,
        ),
        ObjectKind::Collectible => rects_overlap(
            player.pos,
            player.size,
            Vec2::new(object.left(), object.top()),
            object.size,
        ),
    }
}

/// One frame's collision and scoring pass
///
/// Only the false→true transition of `has_scored` mutates anything: an
/// obstacle costs a life and arms the hit-pause, a collectible adds a
/// crystal.
pub fn resolve_collisions(state: &mut GameState) {
    let player = state.player;
    for object in state.objects.iter_mut() {
        if object.has_scored || !object_hits_player(object, &player) {
            continue;
        }
        match object.kind {
            ObjectKind::Obstacle => {
                state.player.lives = state.player.lives.saturating_sub(1);
                state.player.is_hit = true;
                state.player.hit_pause_remaining = state.config.hit_pause_length;
            }
            ObjectKind::Collectible => {
                state.player.crystals += 1;
            }
        }
        object.has_scored = true;
    }
}
