//! Session state and core simulation types
//!
//! Everything a play-through mutates lives in `GameSession`; nothing is global.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::difficulty::DifficultyController;
use super::entity::{Collectible, Entity, Hazard};
use super::player::Player;
use super::scroller::Scroller;
use super::spawner::Spawner;
use crate::consts::*;
use crate::highscores::HighScore;

/// PCG stream ids; one per spawner
const COLLECTIBLE_STREAM: u64 = 1;
const HAZARD_STREAM: u64 = 2;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    LivesExhausted,
    Quit,
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Collected { score: u64 },
    NewHighScore { score: u64 },
    HazardHit { lives: u8 },
    SpeedIncreased { tier: u64, scroll_speed: u32 },
    GameOver { reason: EndReason },
}

/// Broken internal invariants. These are defects, not runtime conditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("lives {0} above the starting count")]
    Lives(u8),
    #[error("lives exhausted but session still running")]
    DeadButRunning,
    #[error("high score {high} below score {score}")]
    HighScoreBelowScore { high: u64, score: u64 },
    #[error("scroll speed {0} below initial")]
    ScrollSpeed(u32),
    #[error("player at ({x}, {y}) outside the world")]
    PlayerOutOfBounds { x: f32, y: f32 },
    #[error("negative invulnerability {0}")]
    Invulnerability(f32),
}

/// One complete play-through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub end_reason: Option<EndReason>,
    pub score: u64,
    pub high_score: HighScore,
    pub lives: u8,
    /// Frames simulated (frame-scaled time base)
    pub frame_count: u64,
    /// Seconds simulated (`dt`-scaled time base)
    pub sim_time: f64,
    pub player: Player,
    pub scroller: Scroller,
    pub difficulty: DifficultyController,
    /// Active gifts, in spawn order
    pub collectibles: Vec<Collectible>,
    /// Active ice holes, in spawn order
    pub hazards: Vec<Hazard>,
    pub collectible_spawner: Spawner<Collectible>,
    pub hazard_spawner: Spawner<Hazard>,
    /// Drop entities once they have fully left the screen
    pub cull_offscreen: bool,
    /// Set once the high score has been handed to persistence
    pub high_score_saved: bool,
    /// Events produced since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameSession {
    /// Start a session with the given seed and previously persisted high score
    pub fn new(seed: u64, previous_high_score: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Running,
            end_reason: None,
            score: 0,
            high_score: HighScore::new(previous_high_score),
            lives: STARTING_LIVES,
            frame_count: 0,
            sim_time: 0.0,
            player: Player::default(),
            scroller: Scroller::new(WORLD_WIDTH),
            difficulty: DifficultyController::default(),
            collectibles: Vec::new(),
            hazards: Vec::new(),
            collectible_spawner: Spawner::new(
                COLLECTIBLE_INTERVAL_SECS,
                Pcg32::new(seed, COLLECTIBLE_STREAM),
            ),
            hazard_spawner: Spawner::new(HAZARD_INTERVAL_SECS, Pcg32::new(seed, HAZARD_STREAM)),
            cull_offscreen: true,
            high_score_saved: false,
            events: Vec::new(),
        }
    }

    pub fn with_culling(mut self, cull_offscreen: bool) -> Self {
        self.cull_offscreen = cull_offscreen;
        self
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Current entity scroll speed (pixels per frame)
    pub fn scroll_speed(&self) -> u32 {
        self.difficulty.scroll_speed
    }

    /// Move to `GameOver`. Only the first call has any effect.
    pub fn end(&mut self, reason: EndReason) {
        if self.is_over() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.end_reason = Some(reason);
        self.events.push(GameEvent::GameOver { reason });
        log::info!(
            "Game over ({:?}) after {} frames: score {}, high score {}",
            reason,
            self.frame_count,
            self.score,
            self.high_score.best
        );
    }

    /// Returns the high score to persist the first time it is called after
    /// game over, and `None` otherwise.
    pub fn take_high_score_for_save(&mut self) -> Option<u64> {
        if !self.is_over() || self.high_score_saved {
            return None;
        }
        self.high_score_saved = true;
        Some(self.high_score.best)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check the data model invariants
    pub fn validate_invariants(&self) -> Result<(), InvariantViolation> {
        if self.lives > STARTING_LIVES {
            return Err(InvariantViolation::Lives(self.lives));
        }
        if self.lives == 0 && !self.is_over() {
            return Err(InvariantViolation::DeadButRunning);
        }
        if self.high_score.best < self.score {
            return Err(InvariantViolation::HighScoreBelowScore {
                high: self.high_score.best,
                score: self.score,
            });
        }
        if self.difficulty.scroll_speed < SCROLL_SPEED_INITIAL {
            return Err(InvariantViolation::ScrollSpeed(self.difficulty.scroll_speed));
        }
        let pos = self.player.pos;
        if pos.x < 0.0 || pos.x > WORLD_WIDTH - self.player.size.x || pos.y > WORLD_HEIGHT - self.player.size.y
        {
            return Err(InvariantViolation::PlayerOutOfBounds { x: pos.x, y: pos.y });
        }
        if self.player.invulnerability < 0.0 {
            return Err(InvariantViolation::Invulnerability(self.player.invulnerability));
        }
        Ok(())
    }

    /// Total active entities (for diagnostics)
    pub fn entity_count(&self) -> usize {
        self.collectibles.len() + self.hazards.len()
    }

    /// Drop entities that have fully scrolled past the left edge
    pub(super) fn cull_offscreen_entities(&mut self) {
        let before = self.entity_count();
        self.collectibles.retain(|c| !c.is_offscreen());
        self.hazards.retain(|h| !h.is_offscreen());
        let culled = before - self.entity_count();
        if culled > 0 {
            log::trace!("Culled {} offscreen entities", culled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new(1, 7);
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.lives, 3);
        assert_eq!(session.score, 0);
        assert_eq!(session.high_score.best, 7);
        assert_eq!(session.scroll_speed(), 2);
        assert!(session.collectibles.is_empty());
        assert!(session.hazards.is_empty());
        assert!(session.validate_invariants().is_ok());
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut session = GameSession::new(1, 0);
        session.end(EndReason::Quit);
        session.end(EndReason::LivesExhausted);
        assert_eq!(session.end_reason, Some(EndReason::Quit));
        let game_overs = session
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_high_score_taken_once_after_game_over() {
        let mut session = GameSession::new(1, 12);
        assert_eq!(session.take_high_score_for_save(), None);
        session.end(EndReason::Quit);
        assert_eq!(session.take_high_score_for_save(), Some(12));
        assert_eq!(session.take_high_score_for_save(), None);
    }

    #[test]
    fn test_invariant_violations_detected() {
        let mut session = GameSession::new(1, 0);
        session.lives = 4;
        assert_eq!(session.validate_invariants(), Err(InvariantViolation::Lives(4)));

        let mut session = GameSession::new(1, 0);
        session.lives = 0;
        assert_eq!(session.validate_invariants(), Err(InvariantViolation::DeadButRunning));

        let mut session = GameSession::new(1, 0);
        session.score = 5;
        assert!(matches!(
            session.validate_invariants(),
            Err(InvariantViolation::HighScoreBelowScore { .. })
        ));

        let mut session = GameSession::new(1, 0);
        session.player.pos.x = -1.0;
        assert!(matches!(
            session.validate_invariants(),
            Err(InvariantViolation::PlayerOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_serde_round_trip_preserves_rng_streams() {
        let session = GameSession::new(77, 3);
        let json = serde_json::to_string(&session).expect("serialize");
        let restored: GameSession = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, session);
    }
}
