//! High score persistence
//!
//! The record is a single plain-text integer. Reads never fail from the
//! caller's point of view: a missing or unreadable record counts as 0.

pub mod score_file;

pub use score_file::{FileScoreStore, ScoreFileError, read_score_file, write_score_file};

/// Where the high score lives between sessions
pub trait ScoreStore {
    /// Previously saved high score, or 0 if there is none or it is unreadable
    fn load_high_score(&mut self) -> u64;

    /// Overwrite the saved high score. Failures are logged, not returned.
    fn save_high_score(&mut self, score: u64);
}

/// In-memory store, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub stored: Option<u64>,
    /// Every value passed to `save_high_score`, in order
    pub saves: Vec<u64>,
}

impl MemoryScoreStore {
    pub fn with_score(score: u64) -> Self {
        Self {
            stored: Some(score),
            saves: Vec::new(),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_high_score(&mut self) -> u64 {
        self.stored.unwrap_or(0)
    }

    fn save_high_score(&mut self, score: u64) {
        self.stored = Some(score);
        self.saves.push(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_defaults_to_zero() {
        let mut store = MemoryScoreStore::default();
        assert_eq!(store.load_high_score(), 0);
        store.save_high_score(9);
        assert_eq!(store.load_high_score(), 9);
        assert_eq!(store.saves, vec![9]);
    }
}
