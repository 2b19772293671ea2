//! Frame rendering against an abstract render target
//!
//! The core only decides what to draw and where; pixels are the target's job.
//! Draw order: background tiles, hazards, gifts, player, HUD.

pub mod headless;
pub mod hud;

pub use headless::{DrawCall, HeadlessTarget};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Entity, GameSession};

/// Bitmap resources, by logical name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Background,
    Player,
    Gift,
    IceHole,
    Heart,
    Trophy,
}

impl Sprite {
    /// Size the bitmap is scaled to
    pub fn size(&self) -> Vec2 {
        match self {
            Sprite::Background => Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            Sprite::Player => Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            Sprite::Gift => Vec2::new(COLLECTIBLE_WIDTH, COLLECTIBLE_HEIGHT),
            Sprite::IceHole => Vec2::new(HAZARD_WIDTH, HAZARD_HEIGHT),
            Sprite::Heart | Sprite::Trophy => Vec2::new(50.0, 50.0),
        }
    }

    pub fn asset_name(&self) -> &'static str {
        match self {
            Sprite::Background => "background",
            Sprite::Player => "player",
            Sprite::Gift => "gift",
            Sprite::IceHole => "icehole",
            Sprite::Heart => "heart",
            Sprite::Trophy => "trophy",
        }
    }
}

/// Accepts draw calls in top-left screen coordinates
pub trait RenderTarget {
    fn clear(&mut self);

    fn draw_sprite(&mut self, sprite: Sprite, top_left: Vec2);

    fn draw_text(&mut self, text: &str, top_left: Vec2);

    /// Rendered width of `text`, used for HUD layout
    fn text_width(&self, text: &str) -> f32;

    /// Show the finished frame
    fn present(&mut self);
}

/// Issue every draw call for the current session state
pub fn draw_frame(session: &GameSession, target: &mut dyn RenderTarget) {
    target.clear();

    for x in session.scroller.tile_positions(WORLD_WIDTH) {
        target.draw_sprite(Sprite::Background, Vec2::new(x, 0.0));
    }
    for hole in &session.hazards {
        target.draw_sprite(Sprite::IceHole, hole.bounds().pos);
    }
    for gift in &session.collectibles {
        target.draw_sprite(Sprite::Gift, gift.bounds().pos);
    }
    target.draw_sprite(Sprite::Player, session.player.pos);

    hud::draw_hud(session.score, session.high_score.best, session.lives, target);

    target.present();
}
