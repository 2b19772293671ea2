//! Game settings and preferences
//!
//! Built in code; the only file the game reads or writes is the score record.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Session seed; `None` picks one from the wall clock
    pub seed: Option<u64>,
    /// Frame rate cap
    pub target_fps: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Simulation ===
    /// Remove entities once they scroll past the left edge
    pub cull_offscreen: bool,

    // === Persistence ===
    /// Plain-text high score record
    pub score_path: PathBuf,

    /// Frames the headless demo plays before quitting
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            target_fps: TARGET_FPS,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,

            cull_offscreen: true,

            score_path: PathBuf::from("score.txt"),

            // Two minutes of play
            demo_frames: u64::from(TARGET_FPS) * 120,
        }
    }
}

impl Settings {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed to use for the next session
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Nominal seconds per frame at the frame rate cap
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }
}
