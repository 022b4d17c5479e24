//! Game state and core simulation types
//!
//! Everything the renderer needs to draw a frame is readable from here, and
//! everything the tick needs to advance a frame is owned here. The RNG stays
//! crate-private so a `&GameState` is a true read-only snapshot.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::{Arena, ConfigError, GameConfig};

/// What a flying object is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Rolling ball the runner must jump over; contact costs a life
    Obstacle,
    /// Floating crystal worth one point
    Collectible,
}

/// Top-level mode of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Play,
    Pause,
}

/// Rows the menus can display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Resume,
    NewGame,
    Exit,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Resume => "Resume Game",
            MenuItem::NewGame => "New Game",
            MenuItem::Exit => "Exit Game",
        }
    }
}

/// Vertical phase of the runner's jump arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    #[default]
    Grounded,
    Ascending,
    Descending,
}

/// An obstacle or collectible streaming right-to-left across the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyingObject {
    pub kind: ObjectKind,
    /// Center position
    pub pos: Vec2,
    pub size: Vec2,
    /// Latched on first player overlap so a hit or pickup counts once
    pub has_scored: bool,
}

impl FlyingObject {
    pub fn new(kind: ObjectKind, pos: Vec2, size: Vec2) -> Self {
        Self {
            kind,
            pos,
            size,
            has_scored: false,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// The runner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Top-left corner of the hit-box; `x` never changes after construction
    pub pos: Vec2,
    pub size: Vec2,
    pub lives: u32,
    pub crystals: u32,
    /// True from the frame an obstacle connects until the hit-pause ends
    pub is_hit: bool,
    /// Frames of full simulation freeze left after a hit
    pub hit_pause_remaining: u32,
    pub jump: JumpState,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub config: GameConfig,
    pub arena: Arena,
    pub mode: GameMode,
    /// Raised over the menu for one frame after the last life is lost
    pub game_over: bool,
    /// Selected row in the current menu
    pub menu_cursor: usize,
    pub player: Player,
    /// Live objects in spawn order; evicted only from the front
    pub objects: VecDeque<FlyingObject>,
    /// Cleared by Exit/Quit; the outer loop polls it once per frame
    pub running: bool,
    /// Render clock, advances every frame including frozen ones
    pub frame: u64,
    /// Session seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Build the initial state from a config and a session seed
    ///
    /// Validates the config and derives the arena; a rejected config never
    /// produces a state.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let arena = Arena::new(&config)?;
        let player = Player {
            pos: Vec2::new(
                config.border + config.player_arena_x,
                arena.lower_y - config.player_h,
            ),
            size: Vec2::new(config.player_w, config.player_h),
            lives: config.starting_lives,
            crystals: 0,
            is_hit: false,
            hit_pause_remaining: 0,
            jump: JumpState::Grounded,
        };
        Ok(Self {
            config,
            arena,
            mode: GameMode::Menu,
            game_over: false,
            menu_cursor: 0,
            player,
            objects: VecDeque::new(),
            running: true,
            frame: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Menu rows for the current mode. Pure function of `mode`; the renderer
    /// reads this, nothing stores it.
    pub fn menu_items(&self) -> &'static [MenuItem] {
        match self.mode {
            GameMode::Menu => &[MenuItem::NewGame, MenuItem::Exit],
            GameMode::Pause => &[MenuItem::Resume, MenuItem::NewGame, MenuItem::Exit],
            GameMode::Play => &[],
        }
    }

    /// Which palette half to draw with, flipping every `crystal_milestone`
    /// crystals collected
    pub fn palette_variant(&self) -> usize {
        ((self.player.crystals / self.config.crystal_milestone) % 2) as usize
    }

    /// Ground-level `y` for the player's top-left corner
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.arena.lower_y - self.player.size.y
    }

    /// Apex `y` for the player's top-left corner (smallest `y` a jump reaches)
    #[inline]
    pub fn apex_y(&self) -> f32 {
        self.ground_y() - self.config.jump_height
    }

    /// Start a fresh run: lives, crystals, objects, jump and hit flags all
    /// return to their initial values and play begins. Config, arena, and the
    /// RNG stream carry over.
    pub fn reset(&mut self) {
        self.player.lives = self.config.starting_lives;
        self.player.crystals = 0;
        self.player.is_hit = false;
        self.player.hit_pause_remaining = 0;
        self.player.jump = JumpState::Grounded;
        self.player.pos.y = self.ground_y();
        self.objects.clear();
        self.game_over = false;
        self.menu_cursor = 0;
        self.mode = GameMode::Play;
    }
}
