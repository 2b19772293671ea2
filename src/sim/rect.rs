//! Axis-aligned rectangles for display boxes and hitboxes
//!
//! Screen convention: x grows right, y grows down, `pos` is the top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in world pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Move so the bottom edge sits at `bottom`, keeping the height
    pub fn set_bottom(&mut self, bottom: f32) {
        self.pos.y = bottom - self.size.y;
    }

    /// Shrink by `margin` on every side
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            pos: self.pos + Vec2::splat(margin),
            size: (self.size - Vec2::splat(2.0 * margin)).max(Vec2::ZERO),
        }
    }

    /// Strict overlap test. Boxes that only share an edge do not collide,
    /// and an empty box collides with nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.size.x <= 0.0 || self.size.y <= 0.0 || other.size.x <= 0.0 || other.size.y <= 0.0
        {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let empty = Rect::new(2.0, 2.0, 0.0, 5.0);
        assert!(!a.intersects(&empty));
    }

    #[test]
    fn test_inset_shrinks_every_side() {
        let r = Rect::new(100.0, 200.0, 122.0, 56.0).inset(20.0);
        assert_eq!(r, Rect::new(120.0, 220.0, 82.0, 16.0));

        // Over-inset collapses to empty instead of going negative
        let tiny = Rect::new(0.0, 0.0, 10.0, 10.0).inset(20.0);
        assert_eq!(tiny.size, Vec2::ZERO);
    }

    #[test]
    fn test_set_bottom_keeps_height() {
        let mut r = Rect::new(0.0, 0.0, 89.0, 79.8);
        r.set_bottom(700.0);
        assert!((r.bottom() - 700.0).abs() < 1e-4);
        assert!((r.size.y - 79.8).abs() < 1e-6);
    }
}
