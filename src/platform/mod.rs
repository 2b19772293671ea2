//! Platform abstraction layer
//!
//! Handles the collaborators around the simulation:
//! - Frame timing (elapsed time per frame, frame rate cap)
//! - Input (held directions, edge-triggered jump, quit)

pub mod input;
pub mod time;

pub use input::{AutopilotInput, EdgeTrigger, InputProvider, KeyState, ScriptedInput};
pub use time::{FixedClock, FrameClock, RealClock};
