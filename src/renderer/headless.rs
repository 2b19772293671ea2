//! Render target that records draw calls instead of drawing

use glam::Vec2;

use super::{RenderTarget, Sprite};

/// Approximate glyph advance of the HUD font
const GLYPH_WIDTH: f32 = 22.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Sprite { sprite: Sprite, at: Vec2 },
    Text { text: String, at: Vec2 },
}

/// Keeps the draw calls of the frame in progress
#[derive(Debug, Clone, Default)]
pub struct HeadlessTarget {
    pub frame: Vec<DrawCall>,
    pub frames_presented: u64,
}

impl HeadlessTarget {
    /// Draws of `sprite` in the current frame
    pub fn count(&self, sprite: Sprite) -> usize {
        self.frame
            .iter()
            .filter(|call| matches!(call, DrawCall::Sprite { sprite: s, .. } if *s == sprite))
            .count()
    }
}

impl RenderTarget for HeadlessTarget {
    fn clear(&mut self) {
        self.frame.clear();
    }

    fn draw_sprite(&mut self, sprite: Sprite, top_left: Vec2) {
        log::trace!("draw {} at {:?}", sprite.asset_name(), top_left);
        self.frame.push(DrawCall::Sprite {
            sprite,
            at: top_left,
        });
    }

    fn draw_text(&mut self, text: &str, top_left: Vec2) {
        self.frame.push(DrawCall::Text {
            text: text.to_string(),
            at: top_left,
        });
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * GLYPH_WIDTH
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}
