//! Sound cues
//!
//! The simulation never plays audio itself. The runner maps game events to
//! cues and hands them to an `AudioSink`, fire-and-forget.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

pub const CUE_COUNT: usize = 4;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Gift collected
    Collect,
    /// Ice hole cost a life
    Hazard,
    /// Jump started
    Jump,
    /// Background music (looped)
    Soundtrack,
}

impl SoundCue {
    pub const ALL: [SoundCue; CUE_COUNT] = [
        SoundCue::Collect,
        SoundCue::Hazard,
        SoundCue::Jump,
        SoundCue::Soundtrack,
    ];

    /// Logical asset name
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundCue::Collect => "giftsound",
            SoundCue::Hazard => "iceSound",
            SoundCue::Jump => "jumpSound",
            SoundCue::Soundtrack => "soundtrack",
        }
    }

    pub fn is_music(&self) -> bool {
        matches!(self, SoundCue::Soundtrack)
    }

    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundCue::Jump),
            GameEvent::Collected { .. } => Some(SoundCue::Collect),
            GameEvent::HazardHit { .. } => Some(SoundCue::Hazard),
            _ => None,
        }
    }

    fn index(&self) -> usize {
        match self {
            SoundCue::Collect => 0,
            SoundCue::Hazard => 1,
            SoundCue::Jump => 2,
            SoundCue::Soundtrack => 3,
        }
    }
}

/// Anything that can play a cue
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    played: [u32; CUE_COUNT],
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            played: [0; CUE_COUNT],
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_music_volume(settings.music_volume);
        audio.set_muted(settings.muted);
        if audio.muted {
            log::warn!("Audio muted by settings");
        }
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume for a cue
    pub fn effective_volume(&self, cue: SoundCue) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if cue.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        self.master_volume * channel
    }

    /// How many times `cue` was actually played (silent cues are not counted)
    pub fn plays(&self, cue: SoundCue) -> u32 {
        self.played[cue.index()]
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, cue: SoundCue) {
        let vol = self.effective_volume(cue);
        if vol <= 0.0 {
            return;
        }
        self.played[cue.index()] += 1;
        log::debug!("Cue {} at volume {:.2}", cue.asset_name(), vol);
    }
}
