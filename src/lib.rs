//! Gift Runner - A side-scrolling gift collecting runner/dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, spawning, collisions, difficulty)
//! - `game`: Frame loop wiring the simulation to its collaborators
//! - `renderer`: Draw-call issuing against an abstract render target
//! - `platform`: Clock and input abstraction
//! - `persistence`: Plain-text high score record
//! - `audio`: Fire-and-forget sound cues

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Runner, SessionSummary};
pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target frame rate cap (frames per second)
    pub const TARGET_FPS: u32 = 144;

    /// World (visible area) dimensions
    pub const WORLD_WIDTH: f32 = 1200.0;
    pub const WORLD_HEIGHT: f32 = 800.0;

    /// Highest y (top edge) the player may walk to; the snowy lane starts here
    pub const TOP_BOUNDARY: f32 = WORLD_HEIGHT / 2.0 - 40.0;
    /// Hazards never spawn above this y
    pub const HAZARD_TOP_BOUNDARY: f32 = WORLD_HEIGHT / 2.0 + 80.0;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 89.0;
    pub const PLAYER_HEIGHT: f32 = 133.0;
    /// Player spawn position (sprite center)
    pub const PLAYER_START_CENTER: (f32, f32) = (100.0, 633.0);
    /// Walking speed right / up / down (pixels per second)
    pub const PLAYER_FORWARD_SPEED: f32 = 500.0;
    /// Walking speed left (pixels per second)
    pub const PLAYER_BACKWARD_SPEED: f32 = 800.0;
    /// Fraction of the sprite height (from the feet up) used as hitbox
    pub const PLAYER_HITBOX_RATIO: f32 = 0.6;

    /// Jump parameter starts at `JUMP_START_STEPS * JUMP_PARAM_STEP` (= 10.0)
    pub const JUMP_START_STEPS: i32 = 50;
    /// Jump ends once the parameter drops below `-JUMP_START_STEPS * JUMP_PARAM_STEP`
    pub const JUMP_END_STEPS: i32 = -50;
    /// Amount the jump parameter drops each frame
    pub const JUMP_PARAM_STEP: f32 = 0.2;
    pub const JUMP_HEIGHT_MULTIPLIER: f32 = 0.10;

    /// Invulnerability after a hazard hit (seconds)
    pub const INVULNERABILITY_DURATION: f32 = 2.0;
    pub const STARTING_LIVES: u8 = 3;

    /// Initial entity scroll speed (pixels per frame)
    pub const SCROLL_SPEED_INITIAL: u32 = 2;
    /// Score points per difficulty tier
    pub const TIER_SCORE_STEP: u64 = 10;
    /// Scroll speed added when a new tier is reached
    pub const SCROLL_SPEED_PER_TIER: u32 = 1;
    /// Background offset change per frame (pixels)
    pub const BACKGROUND_SCROLL_PER_FRAME: f32 = 2.0;

    /// Collectible (gift) sprite size
    pub const COLLECTIBLE_WIDTH: f32 = 50.0;
    pub const COLLECTIBLE_HEIGHT: f32 = 50.0;
    /// Hazard (ice hole) sprite size
    pub const HAZARD_WIDTH: f32 = 122.0;
    pub const HAZARD_HEIGHT: f32 = 56.0;
    /// Hazard hitbox is the sprite shrunk by this margin on every side
    pub const HAZARD_HITBOX_INSET: f32 = 20.0;

    /// Spawn x is `WORLD_WIDTH + [0, SPAWN_X_JITTER]`
    pub const SPAWN_X_JITTER: i32 = 300;
    /// Seconds between collectible spawns (inclusive range)
    pub const COLLECTIBLE_INTERVAL_SECS: (u32, u32) = (2, 5);
    /// Seconds between hazard spawns (inclusive range)
    pub const HAZARD_INTERVAL_SECS: (u32, u32) = (2, 7);
}
