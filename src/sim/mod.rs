//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time is passed in, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod player;
pub mod rect;
pub mod scroller;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{resolve_collectibles, resolve_hazards};
pub use difficulty::DifficultyController;
pub use entity::{Collectible, Entity, Hazard};
pub use player::{JumpState, Movement, Player};
pub use rect::Rect;
pub use scroller::Scroller;
pub use spawner::Spawner;
pub use state::{EndReason, GameEvent, GamePhase, GameSession, InvariantViolation};
pub use tick::{TickInput, tick};
