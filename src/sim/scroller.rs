//! Background scrolling
//!
//! The background moves a fixed number of pixels per frame (frame-scaled, not
//! `dt`-scaled) and is unrelated to the entity scroll speed.

use serde::{Deserialize, Serialize};

use crate::consts::BACKGROUND_SCROLL_PER_FRAME;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scroller {
    /// Horizontal offset of the first tile, in `(-tile_width, 0]`
    pub offset: f32,
    pub tile_width: f32,
}

impl Scroller {
    pub fn new(tile_width: f32) -> Self {
        debug_assert!(tile_width > 0.0);
        Self {
            offset: 0.0,
            tile_width,
        }
    }

    /// One frame of scrolling; wraps to 0 once a full tile has passed
    pub fn advance(&mut self) {
        self.offset -= BACKGROUND_SCROLL_PER_FRAME;
        if self.offset.abs() > self.tile_width {
            self.offset = 0.0;
        }
    }

    /// x positions of the tiles needed to cover `view_width`
    pub fn tile_positions(&self, view_width: f32) -> impl Iterator<Item = f32> + '_ {
        let tiles = (view_width / self.tile_width).ceil() as usize + 1;
        (0..tiles).map(move |i| i as f32 * self.tile_width + self.offset)
    }
}
