//! Collision detection and resolution against the player hitbox
//!
//! Gifts are scored and removed. Ice holes cost a life unless the player is
//! airborne or still invulnerable; they are never removed on contact.

use super::entity::Entity;
use super::state::{EndReason, GameEvent, GameSession};
use crate::consts::INVULNERABILITY_DURATION;

/// Score every collectible touching the player; returns how many were collected
pub fn resolve_collectibles(session: &mut GameSession) -> usize {
    let hitbox = session.player.hitbox;

    // Scan first, remove after, so indices stay valid during the scan
    let hits: Vec<usize> = session
        .collectibles
        .iter()
        .enumerate()
        .filter(|(_, gift)| hitbox.intersects(&gift.hitbox()))
        .map(|(i, _)| i)
        .collect();

    for &index in hits.iter().rev() {
        session.collectibles.remove(index);
    }

    for _ in &hits {
        session.score += 1;
        session.events.push(GameEvent::Collected {
            score: session.score,
        });
        if session.high_score.record(session.score) {
            session.events.push(GameEvent::NewHighScore {
                score: session.score,
            });
        }
        log::debug!("Gift collected, score {}", session.score);
    }

    hits.len()
}

/// Apply hazard damage; returns true if a life was lost this frame
pub fn resolve_hazards(session: &mut GameSession) -> bool {
    let player = &session.player;
    // Airborne players sail over ice holes regardless of invulnerability
    if player.is_jumping() || player.is_invulnerable() {
        return false;
    }

    let hitbox = player.hitbox;
    if !session.hazards.iter().any(|hole| hitbox.intersects(&hole.hitbox())) {
        return false;
    }

    session.lives = session.lives.saturating_sub(1);
    session.player.invulnerability = INVULNERABILITY_DURATION;
    session.events.push(GameEvent::HazardHit {
        lives: session.lives,
    });
    log::debug!("Hazard hit, {} lives left", session.lives);

    if session.lives == 0 {
        session.end(EndReason::LivesExhausted);
    }
    true
}
