//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{HIT_SLACK, circle_hits_rect, object_hits_player, rects_overlap};
pub use spawn::{admits, evict_offscreen, spawn_object};
pub use state::{
    FlyingObject, GameMode, GameState, JumpState, MenuItem, ObjectKind, Player,
};
pub use tick::{InputEvent, tick};
