//! Per-frame simulation step
//!
//! Order within a frame is fixed: input, player, spawn, difficulty, entity
//! advance + collision, cull, background scroll. Difficulty is evaluated before
//! entities move, so a tier reached on one frame speeds up that same frame's
//! entity advance.

use serde::{Deserialize, Serialize};

use super::collision::{resolve_collectibles, resolve_hazards};
use super::entity::Entity;
use super::player::Movement;
use super::state::{EndReason, GameEvent, GameSession};

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held directional controls
    pub movement: Movement,
    /// Jump requested this frame (edge-triggered by the input provider)
    pub jump: bool,
    /// Quit requested
    pub quit: bool,
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) {
    if session.is_over() {
        return;
    }
    if input.quit {
        session.end(EndReason::Quit);
        return;
    }

    session.frame_count += 1;
    session.sim_time += f64::from(dt);

    if input.jump && session.player.start_jump() {
        session.events.push(GameEvent::Jumped);
    }

    session.player.update(&input.movement, dt);

    if let Some(gift) = session.collectible_spawner.update(dt) {
        log::debug!("Gift spawned at {:?}", gift.bounds().pos);
        session.collectibles.push(gift);
    }
    if let Some(hole) = session.hazard_spawner.update(dt) {
        log::debug!("Ice hole spawned at {:?}", hole.bounds().pos);
        session.hazards.push(hole);
    }

    if let Some(tier) = session.difficulty.observe(session.score) {
        session.events.push(GameEvent::SpeedIncreased {
            tier,
            scroll_speed: session.difficulty.scroll_speed,
        });
    }

    let speed = session.scroll_speed();
    for gift in &mut session.collectibles {
        gift.advance(speed);
    }
    resolve_collectibles(session);

    for hole in &mut session.hazards {
        hole.advance(speed);
    }
    resolve_hazards(session);

    if session.cull_offscreen {
        session.cull_offscreen_entities();
    }

    session.scroller.advance();

    debug_assert!(
        session.validate_invariants().is_ok(),
        "invariant violated: {:?}",
        session.validate_invariants()
    );
}
