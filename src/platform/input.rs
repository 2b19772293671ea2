//! Input providers
//!
//! Providers report held directions every frame. Jump is edge-triggered: it
//! fires on the key-down transition only, never while the key is held.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::sim::autopilot;
use crate::sim::{GameSession, Movement, TickInput};

/// Raw held-key snapshot for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    pub quit: bool,
}

/// Turns a held key into a single pulse on press
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    was_down: bool,
}

impl EdgeTrigger {
    /// True only on the frame the key goes from up to down
    pub fn update(&mut self, down: bool) -> bool {
        let pressed = down && !self.was_down;
        self.was_down = down;
        pressed
    }
}

/// Source of per-frame input
pub trait InputProvider {
    /// Input for the next frame. The session is available read-only for
    /// providers that react to the game (the autopilot); device-backed
    /// providers ignore it.
    fn poll(&mut self, session: &GameSession) -> TickInput;
}

/// Replays recorded key states, then asks to quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<KeyState>,
    jump: EdgeTrigger,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = KeyState>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            jump: EdgeTrigger::default(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputProvider for ScriptedInput {
    fn poll(&mut self, _session: &GameSession) -> TickInput {
        let Some(keys) = self.frames.pop_front() else {
            return TickInput {
                quit: true,
                ..Default::default()
            };
        };
        TickInput {
            movement: Movement {
                left: keys.left,
                right: keys.right,
                up: keys.up,
                down: keys.down,
            },
            jump: self.jump.update(keys.jump),
            quit: keys.quit,
        }
    }
}

/// Autopilot that quits after a fixed number of frames
#[derive(Debug, Clone)]
pub struct AutopilotInput {
    frame_limit: u64,
    frames: u64,
}

impl AutopilotInput {
    pub fn new(frame_limit: u64) -> Self {
        Self {
            frame_limit,
            frames: 0,
        }
    }
}

impl InputProvider for AutopilotInput {
    fn poll(&mut self, session: &GameSession) -> TickInput {
        if self.frames >= self.frame_limit {
            return TickInput {
                quit: true,
                ..Default::default()
            };
        }
        self.frames += 1;
        autopilot::steer(session)
    }
}
