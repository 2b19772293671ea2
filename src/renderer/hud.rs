//! HUD layout: remaining lives as hearts above the score block

use glam::Vec2;

use super::{RenderTarget, Sprite};

/// Anchor of the HUD block
const HUD_X: f32 = 550.0;
const HUD_Y: f32 = 100.0;
/// Horizontal offset of the score numbers
const NUMBER_OFFSET_X: f32 = 90.0;
const HEART_SPACING: f32 = 60.0;

pub fn draw_hud(score: u64, high_score: u64, lives: u8, target: &mut dyn RenderTarget) {
    let score_text = score.to_string();
    let high_text = high_score.to_string();
    // Icons sit right after the score's rendered width
    let icon_x = HUD_X + target.text_width(&score_text);

    target.draw_sprite(Sprite::Gift, Vec2::new(icon_x, HUD_Y));
    target.draw_text(&score_text, Vec2::new(HUD_X + NUMBER_OFFSET_X, HUD_Y + 10.0));
    target.draw_sprite(Sprite::Trophy, Vec2::new(icon_x, HUD_Y + 70.0));
    target.draw_text(&high_text, Vec2::new(HUD_X + NUMBER_OFFSET_X, HUD_Y + 75.0));

    for i in 0..lives {
        let x = HUD_X + f32::from(i) * HEART_SPACING;
        target.draw_sprite(Sprite::Heart, Vec2::new(x, HUD_Y - 70.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCall, HeadlessTarget};

    #[test]
    fn test_one_heart_per_life() {
        for lives in 0..=3u8 {
            let mut target = HeadlessTarget::default();
            draw_hud(0, 0, lives, &mut target);
            assert_eq!(target.count(Sprite::Heart), lives as usize);
        }
    }

    #[test]
    fn test_scores_rendered_as_text() {
        let mut target = HeadlessTarget::default();
        draw_hud(12, 340, 3, &mut target);
        let texts: Vec<&str> = target
            .frame
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                DrawCall::Sprite { .. } => None,
            })
            .collect();
        assert_eq!(texts, vec!["12", "340"]);
    }

    #[test]
    fn test_icons_shift_with_score_width() {
        let mut narrow = HeadlessTarget::default();
        let mut wide = HeadlessTarget::default();
        draw_hud(5, 0, 0, &mut narrow);
        draw_hud(5000, 0, 0, &mut wide);
        let gift_x = |target: &HeadlessTarget| match target.frame[0] {
            DrawCall::Sprite { at, .. } => at.x,
            DrawCall::Text { .. } => f32::NAN,
        };
        assert!(gift_x(&wide) > gift_x(&narrow));
    }
}
