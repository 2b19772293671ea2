//! Scrolling entities: collectibles (gifts) and hazards (ice holes)

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Shared shape of everything the spawners create.
///
/// An entity has a display box for rendering and a (possibly tighter) hitbox
/// for collision. Entities only ever move left, by the session scroll speed.
pub trait Entity: Sized {
    /// Sprite size
    const SIZE: Vec2;
    /// Inclusive range for the top edge when spawning
    const LANE_BAND: (i32, i32);

    /// Place a new entity with its display box at `pos`
    fn at(pos: Vec2) -> Self;

    fn bounds(&self) -> Rect;

    fn hitbox(&self) -> Rect;

    /// Move left by `scroll_speed` pixels (one frame)
    fn advance(&mut self, scroll_speed: u32);

    /// Create at a random position just past the right edge, inside the lane band
    fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = WORLD_WIDTH as i32 + rng.random_range(0..=SPAWN_X_JITTER);
        let (low, high) = Self::LANE_BAND;
        let y = rng.random_range(low..=high);
        Self::at(Vec2::new(x as f32, y as f32))
    }

    /// True once the entity can no longer be seen or touched
    fn is_offscreen(&self) -> bool {
        self.bounds().right() < 0.0
    }
}

/// A gift: collected on contact for one point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub rect: Rect,
}

impl Entity for Collectible {
    const SIZE: Vec2 = Vec2::new(COLLECTIBLE_WIDTH, COLLECTIBLE_HEIGHT);
    const LANE_BAND: (i32, i32) = (
        TOP_BOUNDARY as i32,
        (WORLD_HEIGHT - COLLECTIBLE_HEIGHT) as i32,
    );

    fn at(pos: Vec2) -> Self {
        Self {
            rect: Rect::from_pos_size(pos, Self::SIZE),
        }
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn hitbox(&self) -> Rect {
        self.rect
    }

    fn advance(&mut self, scroll_speed: u32) {
        self.rect.pos.x -= scroll_speed as f32;
    }
}

/// An ice hole: costs a life unless the player is jumping or invulnerable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Rect,
    /// Inset collision box, re-derived on every move
    pub hitbox: Rect,
}

impl Hazard {
    fn sync_hitbox(&mut self) {
        self.hitbox = self.rect.inset(HAZARD_HITBOX_INSET);
    }
}

impl Entity for Hazard {
    const SIZE: Vec2 = Vec2::new(HAZARD_WIDTH, HAZARD_HEIGHT);
    const LANE_BAND: (i32, i32) = (
        HAZARD_TOP_BOUNDARY as i32,
        (WORLD_HEIGHT - HAZARD_HEIGHT) as i32,
    );

    fn at(pos: Vec2) -> Self {
        let rect = Rect::from_pos_size(pos, Self::SIZE);
        Self {
            rect,
            hitbox: rect.inset(HAZARD_HITBOX_INSET),
        }
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn hitbox(&self) -> Rect {
        self.hitbox
    }

    fn advance(&mut self, scroll_speed: u32) {
        self.rect.pos.x -= scroll_speed as f32;
        self.sync_hitbox();
    }
}
