//! Demo autopilot
//!
//! Plays the game from the session state alone: hops over ice holes that are
//! about to reach the player and otherwise lines up with the nearest gift.

use super::entity::Entity;
use super::player::Movement;
use super::state::GameSession;
use super::tick::TickInput;

/// How many frames ahead a hazard counts as incoming
const JUMP_LOOKAHEAD_FRAMES: f32 = 6.0;
/// Preferred x for the player's left edge
const CRUISE_X: f32 = 150.0;
/// Dead zone to avoid jittering around a target
const DEAD_ZONE: f32 = 6.0;

/// Choose this frame's input
pub fn steer(session: &GameSession) -> TickInput {
    let player = &session.player;
    let hitbox = player.hitbox;
    let speed = session.scroll_speed() as f32;

    let hazard_incoming = !player.is_invulnerable()
        && session.hazards.iter().map(|hole| hole.hitbox()).any(|hole| {
            let same_lane = hole.top() < hitbox.bottom() && hitbox.top() < hole.bottom();
            let gap = hole.left() - hitbox.right();
            same_lane && hole.right() > hitbox.left() && gap <= speed * JUMP_LOOKAHEAD_FRAMES
        });

    let mut movement = Movement::default();

    let target = session
        .collectibles
        .iter()
        .map(|gift| gift.bounds())
        .filter(|gift| gift.right() > hitbox.left())
        .min_by(|a, b| a.left().total_cmp(&b.left()));

    if let Some(gift) = target {
        let gift_center = gift.top() + gift.size.y / 2.0;
        let hitbox_center = hitbox.top() + hitbox.size.y / 2.0;
        if gift_center < hitbox_center - DEAD_ZONE {
            movement.up = true;
        } else if gift_center > hitbox_center + DEAD_ZONE {
            movement.down = true;
        }
    }

    if player.pos.x < CRUISE_X - DEAD_ZONE {
        movement.right = true;
    } else if player.pos.x > CRUISE_X + DEAD_ZONE {
        movement.left = true;
    }

    TickInput {
        movement,
        jump: hazard_incoming && !player.is_jumping(),
        quit: false,
    }
}
