//! Player movement, jump arc and invulnerability
//!
//! Two time bases drive the player:
//! - `dt`-scaled (sim time): walking in all four directions and invulnerability decay
//! - frame-scaled (frame ticks): jump arc progression, one parameter step per frame
//!
//! The jump keeps the same shape at any frame rate while walking stays frame rate
//! independent. Do not unify them; doing so changes how the game feels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Held directional controls for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Vertical state machine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum JumpState {
    Grounded,
    /// `step * JUMP_PARAM_STEP` is the jump parameter; `origin_y` is where the jump began
    Jumping { step: i32, origin_y: f32 },
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the display box
    pub pos: Vec2,
    pub size: Vec2,
    /// Collision box: full width, bottom 60% of the display box
    pub hitbox: Rect,
    pub jump: JumpState,
    /// Seconds of hazard immunity left (never negative)
    pub invulnerability: f32,
}

impl Default for Player {
    fn default() -> Self {
        let (cx, cy) = PLAYER_START_CENTER;
        // Integer half sizes keep the start position on whole pixels
        let half = Vec2::new((PLAYER_WIDTH / 2.0).floor(), (PLAYER_HEIGHT / 2.0).floor());
        Self::at(Vec2::new(cx, cy) - half)
    }
}

impl Player {
    /// Create a grounded player with its display box at `pos`
    pub fn at(pos: Vec2) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        let hitbox_height = size.y * PLAYER_HITBOX_RATIO;
        let mut player = Self {
            pos,
            size,
            hitbox: Rect::new(pos.x, 0.0, size.x, hitbox_height),
            jump: JumpState::Grounded,
            invulnerability: INVULNERABILITY_DURATION,
        };
        player.sync_hitbox();
        player
    }

    /// Display box
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn is_jumping(&self) -> bool {
        matches!(self.jump, JumpState::Jumping { .. })
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerability > 0.0
    }

    /// Current jump parameter (10.0 at take-off, 0.0 at the peak)
    pub fn jump_param(&self) -> Option<f32> {
        match self.jump {
            JumpState::Jumping { step, .. } => Some(step as f32 * JUMP_PARAM_STEP),
            JumpState::Grounded => None,
        }
    }

    /// Begin a jump. Returns false (and does nothing) if already airborne.
    pub fn start_jump(&mut self) -> bool {
        if self.is_jumping() {
            return false;
        }
        self.jump = JumpState::Jumping {
            step: JUMP_START_STEPS,
            origin_y: self.pos.y,
        };
        true
    }

    /// Upward displacement applied on the frame whose jump step is `step`.
    ///
    /// `sign(p) * p² * multiplier` with `p = step * JUMP_PARAM_STEP`; the sign is
    /// negative for `p <= 0`, so the arc mirrors exactly around the peak.
    pub fn jump_displacement(step: i32) -> f32 {
        let param = step as f32 * JUMP_PARAM_STEP;
        let direction = if param > 0.0 { 1.0 } else { -1.0 };
        param * param * JUMP_HEIGHT_MULTIPLIER * direction
    }

    /// Re-align the hitbox with the display box's left edge and bottom
    pub fn sync_hitbox(&mut self) {
        self.hitbox.pos.x = self.pos.x;
        self.hitbox.set_bottom(self.pos.y + self.size.y);
    }

    /// Advance one frame of movement.
    ///
    /// The hitbox is synced before moving, so collisions this frame use the
    /// position the player had at the start of the frame.
    pub fn update(&mut self, movement: &Movement, dt: f32) {
        self.sync_hitbox();

        if movement.left {
            self.pos.x -= PLAYER_BACKWARD_SPEED * dt;
        }
        if movement.right {
            self.pos.x += PLAYER_FORWARD_SPEED * dt;
        }

        match self.jump {
            JumpState::Jumping { step, origin_y } if step >= JUMP_END_STEPS => {
                self.pos.y -= Self::jump_displacement(step);
                self.jump = JumpState::Jumping {
                    step: step - 1,
                    origin_y,
                };
            }
            JumpState::Jumping { origin_y, .. } => {
                // Arc complete: land where we took off, never above the lane
                self.jump = JumpState::Grounded;
                self.pos.y = origin_y.max(TOP_BOUNDARY);
            }
            JumpState::Grounded => {
                if movement.up {
                    self.pos.y = TOP_BOUNDARY.max(self.pos.y - PLAYER_FORWARD_SPEED * dt);
                } else if movement.down {
                    self.pos.y += PLAYER_FORWARD_SPEED * dt;
                }
            }
        }

        if self.invulnerability > 0.0 {
            self.invulnerability = (self.invulnerability - dt).max(0.0);
        }

        self.pos.x = self.pos.x.clamp(0.0, WORLD_WIDTH - self.size.x);
        self.pos.y = self.pos.y.min(WORLD_HEIGHT - self.size.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 144.0;

    /// Frames from take-off until grounded again
    const JUMP_FRAMES: usize = (JUMP_START_STEPS - JUMP_END_STEPS) as usize + 2;

    #[test]
    fn test_start_position_and_hitbox() {
        let player = Player::default();
        assert_eq!(player.pos, Vec2::new(56.0, 567.0));
        assert!(!player.is_jumping());
        assert_eq!(player.invulnerability, INVULNERABILITY_DURATION);

        let bounds = player.bounds();
        assert_eq!(player.hitbox.left(), bounds.left());
        assert!((player.hitbox.bottom() - bounds.bottom()).abs() < 1e-4);
        assert!((player.hitbox.size.y - PLAYER_HEIGHT * 0.6).abs() < 1e-4);
    }

    #[test]
    fn test_walk_left_and_right_scale_with_dt() {
        let mut player = Player::at(Vec2::new(500.0, 500.0));
        player.update(&Movement { right: true, ..Default::default() }, 0.1);
        assert!((player.pos.x - 550.0).abs() < 1e-3);

        player.update(&Movement { left: true, ..Default::default() }, 0.1);
        assert!((player.pos.x - 470.0).abs() < 1e-3);

        // Both held: the faster backstep wins
        player.update(&Movement { left: true, right: true, ..Default::default() }, 0.1);
        assert!((player.pos.x - 440.0).abs() < 1e-3);
    }

    #[test]
    fn test_horizontal_clamp() {
        let mut player = Player::at(Vec2::new(5.0, 500.0));
        player.update(&Movement { left: true, ..Default::default() }, 1.0);
        assert_eq!(player.pos.x, 0.0);

        player.update(&Movement { right: true, ..Default::default() }, 10.0);
        assert_eq!(player.pos.x, WORLD_WIDTH - PLAYER_WIDTH);
    }

    #[test]
    fn test_up_clamps_to_top_boundary() {
        let mut player = Player::at(Vec2::new(100.0, TOP_BOUNDARY + 10.0));
        player.update(&Movement { up: true, ..Default::default() }, 1.0);
        assert_eq!(player.pos.y, TOP_BOUNDARY);
    }

    #[test]
    fn test_down_clamps_to_world_bottom() {
        let mut player = Player::at(Vec2::new(100.0, 600.0));
        player.update(&Movement { down: true, ..Default::default() }, 1.0);
        assert_eq!(player.pos.y, WORLD_HEIGHT - PLAYER_HEIGHT);
    }

    #[test]
    fn test_up_wins_over_down() {
        let mut player = Player::at(Vec2::new(100.0, 600.0));
        player.update(&Movement { up: true, down: true, ..Default::default() }, 0.1);
        assert!((player.pos.y - 550.0).abs() < 1e-3);
    }

    #[test]
    fn test_cannot_start_jump_twice() {
        let mut player = Player::default();
        assert!(player.start_jump());
        assert!(!player.start_jump());
        assert_eq!(player.jump_param(), Some(10.0));
    }

    #[test]
    fn test_up_down_ignored_while_jumping() {
        let mut a = Player::default();
        let mut b = Player::default();
        a.start_jump();
        b.start_jump();
        for _ in 0..20 {
            a.update(&Movement { up: true, ..Default::default() }, DT);
            b.update(&Movement { down: true, ..Default::default() }, DT);
        }
        assert_eq!(a.pos.y, b.pos.y);
    }

    #[test]
    fn test_jump_displacements_are_symmetric() {
        let steps: Vec<f32> = (JUMP_END_STEPS..=JUMP_START_STEPS)
            .rev()
            .map(Player::jump_displacement)
            .collect();
        let n = steps.len();
        assert_eq!(n, 101);
        for i in 0..n {
            assert_eq!(steps[i], -steps[n - 1 - i], "asymmetric at frame {i}");
        }
        // First frame rises by 10² * 0.1
        assert!((steps[0] - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_jump_returns_to_take_off_height() {
        let mut player = Player::default();
        let origin = player.pos.y;
        player.start_jump();

        let mut peak = origin;
        for frame in 0..JUMP_FRAMES {
            assert!(player.is_jumping(), "landed early at frame {frame}");
            player.update(&Movement::default(), DT);
            peak = peak.min(player.pos.y);
        }
        assert!(!player.is_jumping());
        assert_eq!(player.pos.y, origin);
        // Sum of the rising half of the arc
        assert!((origin - peak - 171.7).abs() < 0.1, "peak height {}", origin - peak);
    }

    #[test]
    fn test_jump_shape_independent_of_dt() {
        let mut slow = Player::default();
        let mut fast = Player::default();
        slow.start_jump();
        fast.start_jump();
        for _ in 0..30 {
            slow.update(&Movement::default(), 1.0 / 30.0);
            fast.update(&Movement::default(), 1.0 / 240.0);
        }
        assert_eq!(slow.pos.y, fast.pos.y);
    }

    #[test]
    fn test_landing_clamps_below_top_boundary() {
        let mut player = Player::at(Vec2::new(100.0, TOP_BOUNDARY - 50.0));
        player.start_jump();
        for _ in 0..JUMP_FRAMES {
            player.update(&Movement::default(), DT);
        }
        assert_eq!(player.pos.y, TOP_BOUNDARY);
    }

    #[test]
    fn test_invulnerability_decays_to_zero() {
        let mut player = Player::default();
        player.update(&Movement::default(), 1.5);
        assert!((player.invulnerability - 0.5).abs() < 1e-6);
        player.update(&Movement::default(), 1.5);
        assert_eq!(player.invulnerability, 0.0);
        assert!(!player.is_invulnerable());
    }

    #[test]
    fn test_hitbox_lags_one_frame() {
        let mut player = Player::at(Vec2::new(100.0, 500.0));
        player.update(&Movement { right: true, ..Default::default() }, 0.1);
        // Synced before the move
        assert_eq!(player.hitbox.left(), 100.0);

        player.update(&Movement::default(), 0.1);
        assert_eq!(player.hitbox.left(), player.pos.x);
        assert!((player.hitbox.bottom() - player.bounds().bottom()).abs() < 1e-4);
    }

    fn movement_strategy() -> impl Strategy<Value = (Movement, bool)> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(left, right, up, down, jump)| (Movement { left, right, up, down }, jump),
        )
    }

    proptest! {
        #[test]
        fn player_stays_inside_world(
            start_x in 0.0f32..(WORLD_WIDTH - PLAYER_WIDTH),
            start_y in TOP_BOUNDARY..(WORLD_HEIGHT - PLAYER_HEIGHT),
            frames in proptest::collection::vec((movement_strategy(), 0.0f32..0.05), 1..300)
        ) {
            let mut player = Player::at(Vec2::new(start_x, start_y));
            for ((movement, jump), dt) in frames {
                if jump {
                    player.start_jump();
                }
                player.update(&movement, dt);
                prop_assert!(player.pos.x >= 0.0);
                prop_assert!(player.pos.x <= WORLD_WIDTH - PLAYER_WIDTH);
                prop_assert!(player.pos.y <= WORLD_HEIGHT - PLAYER_HEIGHT);
                prop_assert!(player.invulnerability >= 0.0);
            }
        }

        #[test]
        fn jump_lands_where_it_started(
            start_y in TOP_BOUNDARY..(WORLD_HEIGHT - PLAYER_HEIGHT),
            dts in proptest::collection::vec(0.0f32..0.05, JUMP_FRAMES)
        ) {
            let mut player = Player::at(Vec2::new(300.0, start_y));
            player.start_jump();
            for dt in dts {
                // Lateral walking never disturbs the arc
                player.update(&Movement { right: true, ..Default::default() }, dt);
            }
            prop_assert!(!player.is_jumping());
            prop_assert_eq!(player.pos.y, start_y);
        }
    }
}
