//! Score-driven difficulty
//!
//! `tier = score / TIER_SCORE_STEP`. The first time each positive tier is seen
//! the entity scroll speed goes up by `SCROLL_SPEED_PER_TIER`; a tier never
//! triggers twice, even if it is seen again on later frames.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::consts::{SCROLL_SPEED_INITIAL, SCROLL_SPEED_PER_TIER, TIER_SCORE_STEP};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyController {
    /// Entity scroll speed in pixels per frame
    pub scroll_speed: u32,
    /// Tiers that have already bumped the speed
    pub reached_tiers: BTreeSet<u64>,
}

impl Default for DifficultyController {
    fn default() -> Self {
        Self {
            scroll_speed: SCROLL_SPEED_INITIAL,
            reached_tiers: BTreeSet::new(),
        }
    }
}

impl DifficultyController {
    pub fn tier_for(score: u64) -> u64 {
        score / TIER_SCORE_STEP
    }

    /// Check the score; returns the tier if this call raised the speed
    pub fn observe(&mut self, score: u64) -> Option<u64> {
        let tier = Self::tier_for(score);
        if tier == 0 || !self.reached_tiers.insert(tier) {
            return None;
        }
        self.scroll_speed += SCROLL_SPEED_PER_TIER;
        log::info!("Difficulty tier {} reached, scroll speed {}", tier, self.scroll_speed);
        Some(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tier_zero_never_bumps() {
        let mut difficulty = DifficultyController::default();
        for score in 0..10 {
            assert_eq!(difficulty.observe(score), None);
        }
        assert_eq!(difficulty.scroll_speed, SCROLL_SPEED_INITIAL);
    }

    #[test]
    fn test_each_tier_bumps_once() {
        let mut difficulty = DifficultyController::default();
        assert_eq!(difficulty.observe(10), Some(1));
        assert_eq!(difficulty.observe(10), None);
        assert_eq!(difficulty.observe(19), None);
        assert_eq!(difficulty.scroll_speed, 3);
        assert_eq!(difficulty.observe(20), Some(2));
        assert_eq!(difficulty.scroll_speed, 4);
    }

    #[test]
    fn test_skipped_tier_only_bumps_for_observed_value() {
        let mut difficulty = DifficultyController::default();
        // Jumping straight to tier 3 bumps once, not three times
        assert_eq!(difficulty.observe(35), Some(3));
        assert_eq!(difficulty.scroll_speed, 3);
        assert!(difficulty.reached_tiers.contains(&3));
        assert!(!difficulty.reached_tiers.contains(&1));
    }

    proptest! {
        #[test]
        fn speed_is_monotonic_and_tiers_unique(
            scores in proptest::collection::vec(0u64..200, 1..200)
        ) {
            let mut difficulty = DifficultyController::default();
            let mut bumped = Vec::new();
            let mut last_speed = difficulty.scroll_speed;
            for score in scores {
                if let Some(tier) = difficulty.observe(score) {
                    prop_assert!(!bumped.contains(&tier));
                    bumped.push(tier);
                }
                prop_assert!(difficulty.scroll_speed >= last_speed);
                last_speed = difficulty.scroll_speed;
            }
            prop_assert_eq!(
                difficulty.scroll_speed,
                SCROLL_SPEED_INITIAL + bumped.len() as u32 * SCROLL_SPEED_PER_TIER
            );
        }
    }
}
