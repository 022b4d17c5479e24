//! Game configuration and derived arena geometry
//!
//! Every gameplay tunable lives here. Loaded once at startup (optionally from
//! a JSON file), validated, then treated as immutable for the life of the
//! process.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An RGB color as stored in config palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Rejected configurations, surfaced before the loop starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error(
        "arena is degenerate: playable bounds are x {left_x}..{right_x}, y {upper_y}..{lower_y}"
    )]
    DegenerateArena {
        left_x: f32,
        right_x: f32,
        upper_y: f32,
        lower_y: f32,
    },

    #[error("{kind} spawn distances inverted: min {min} > max {max}")]
    InvertedSpawnRange {
        kind: &'static str,
        min: f32,
        max: f32,
    },

    #[error("obstacle_ratio and collectible_ratio cannot both be zero")]
    ZeroSpawnRatio,

    #[error("crystal_milestone must be at least 1")]
    ZeroMilestone,
}

/// The full configuration surface
///
/// `#[serde(default)]` lets a config file override only the fields it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen & border ===
    pub screen_w: f32,
    pub screen_h: f32,
    /// Margin between the screen edge and the arena frame
    pub border: f32,
    pub border_width: f32,

    // === Player ===
    pub player_w: f32,
    pub player_h: f32,
    /// Horizontal offset of the runner from the left screen border
    pub player_arena_x: f32,
    pub jump_height: f32,
    pub jump_step: f32,

    // === Spawning ===
    pub obstacle_ratio: u32,
    pub collectible_ratio: u32,
    pub min_obstacle_dist: f32,
    pub max_obstacle_dist: f32,
    pub min_collectible_dist: f32,
    pub max_collectible_dist: f32,

    // === Flying objects ===
    pub obstacle_radius: f32,
    pub obstacle_step: f32,
    pub collectible_w: f32,
    pub collectible_h: f32,
    pub collectible_step: f32,

    // === Run rules ===
    pub starting_lives: u32,
    /// Frames the simulation freezes after an obstacle hit
    pub hit_pause_length: u32,
    /// Crystals collected per palette flip
    pub crystal_milestone: u32,

    // === Palettes, indexed by the crystal milestone variant ===
    pub background_colors: [Rgb; 2],
    pub obstacle_colors: [Rgb; 2],
    pub collectible_colors: [Rgb; 2],
    pub border_color: Rgb,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_w: 1280.0,
            screen_h: 720.0,
            border: 50.0,
            border_width: 5.0,

            player_w: 100.0,
            player_h: 100.0,
            player_arena_x: 300.0,
            jump_height: 300.0,
            jump_step: 30.0,

            obstacle_ratio: 4,
            collectible_ratio: 1,
            min_obstacle_dist: 500.0,
            max_obstacle_dist: 2000.0,
            min_collectible_dist: 100.0,
            max_collectible_dist: 1000.0,

            obstacle_radius: 20.0,
            obstacle_step: 15.0,
            collectible_w: 40.0,
            collectible_h: 60.0,
            collectible_step: 15.0,

            starting_lives: 3,
            hit_pause_length: 20,
            crystal_milestone: 50,

            background_colors: [Rgb(0, 0, 0), Rgb(30, 30, 30)],
            obstacle_colors: [Rgb(211, 51, 68), Rgb(26, 246, 66)],
            collectible_colors: [Rgb(151, 57, 240), Rgb(246, 26, 96)],
            border_color: Rgb(255, 255, 255),
        }
    }
}

impl GameConfig {
    /// Probability that a spawn attempt rolls an obstacle
    pub fn obstacle_probability(&self) -> f32 {
        self.obstacle_ratio as f32 / (self.obstacle_ratio + self.collectible_ratio) as f32
    }

    /// Read a config file, falling back to defaults when it is missing or
    /// malformed. Validation still runs on whatever this returns.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring malformed config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Reject configurations the simulation cannot run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("screen_w", self.screen_w),
            ("screen_h", self.screen_h),
            ("player_w", self.player_w),
            ("player_h", self.player_h),
            ("jump_height", self.jump_height),
            ("jump_step", self.jump_step),
            ("obstacle_radius", self.obstacle_radius),
            ("collectible_w", self.collectible_w),
            ("collectible_h", self.collectible_h),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.obstacle_ratio + self.collectible_ratio == 0 {
            return Err(ConfigError::ZeroSpawnRatio);
        }
        if self.crystal_milestone == 0 {
            return Err(ConfigError::ZeroMilestone);
        }
        if self.min_obstacle_dist > self.max_obstacle_dist {
            return Err(ConfigError::InvertedSpawnRange {
                kind: "obstacle",
                min: self.min_obstacle_dist,
                max: self.max_obstacle_dist,
            });
        }
        if self.min_collectible_dist > self.max_collectible_dist {
            return Err(ConfigError::InvertedSpawnRange {
                kind: "collectible",
                min: self.min_collectible_dist,
                max: self.max_collectible_dist,
            });
        }
        Ok(())
    }
}

/// Playable region derived from screen and border geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub screen_w: f32,
    pub screen_h: f32,
    pub border: f32,
    pub border_width: f32,
    pub upper_y: f32,
    pub lower_y: f32,
    pub left_x: f32,
    pub right_x: f32,
}

impl Arena {
    /// Derive the playable bounds, failing fast on degenerate geometry
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let inset = config.border + config.border_width;
        let arena = Self {
            screen_w: config.screen_w,
            screen_h: config.screen_h,
            border: config.border,
            border_width: config.border_width,
            upper_y: inset,
            lower_y: config.screen_h - inset,
            left_x: inset,
            right_x: config.screen_w - inset,
        };
        if arena.left_x >= arena.right_x || arena.upper_y >= arena.lower_y {
            return Err(ConfigError::DegenerateArena {
                left_x: arena.left_x,
                right_x: arena.right_x,
                upper_y: arena.upper_y,
                lower_y: arena.lower_y,
            });
        }
        Ok(arena)
    }
}
