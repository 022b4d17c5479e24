//! Crystal Dash - a terminal side-view runner
//!
//! Core modules:
//! - `sim`: deterministic simulation (spawning, physics, collisions, state machine)
//! - `config`: gameplay tunables, palettes, and derived arena geometry
//! - `tui`: crossterm renderer and key translation

pub mod config;
pub mod sim;
pub mod tui;

pub use config::{Arena, ConfigError, GameConfig, Rgb};
pub use sim::{GameState, InputEvent, tick};

/// Game loop constants
pub mod consts {
    /// Logical simulation rate (frames per second)
    pub const TICKS_PER_SECOND: u64 = 30;
    /// Wall-clock budget for one frame
    pub const FRAME_MILLIS: u64 = 1000 / TICKS_PER_SECOND;
}
