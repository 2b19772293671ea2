//! Timed entity spawning
//!
//! Each spawner owns its own PCG stream, so the two spawners in a session
//! never perturb each other's randomness.

use std::marker::PhantomData;

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Periodically creates one `E` after a random number of seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner<E> {
    /// Inclusive interval range in whole seconds
    pub interval_secs: (u32, u32),
    /// Seconds accumulated since the last spawn
    pub elapsed: f32,
    /// Threshold for the current cycle (drawn lazily at cycle start)
    pub threshold: Option<f32>,
    rng: Pcg32,
    #[serde(skip)]
    _kind: PhantomData<E>,
}

impl<E: Entity> Spawner<E> {
    pub fn new(interval_secs: (u32, u32), rng: Pcg32) -> Self {
        debug_assert!(interval_secs.0 <= interval_secs.1);
        Self {
            interval_secs,
            elapsed: 0.0,
            threshold: None,
            rng,
            _kind: PhantomData,
        }
    }

    /// Accumulate `dt` and spawn once the cycle threshold is met
    pub fn update(&mut self, dt: f32) -> Option<E> {
        self.elapsed += dt;
        let (low, high) = self.interval_secs;
        let rng = &mut self.rng;
        let threshold = *self
            .threshold
            .get_or_insert_with(|| rng.random_range(low..=high) as f32);

        if self.elapsed < threshold {
            return None;
        }

        self.elapsed = 0.0;
        self.threshold = None;
        Some(E::spawn(&mut self.rng))
    }
}
