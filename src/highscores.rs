//! High score tracking
//!
//! A single best score, loaded from the score record at startup and written
//! back once when the session ends.

use serde::{Deserialize, Serialize};

/// Best score seen so far, across this and previous sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    /// Best score (never decreases)
    pub best: u64,
    /// Value loaded at session start
    pub previous: u64,
}

impl HighScore {
    /// Start from a previously persisted record
    pub fn new(previous: u64) -> Self {
        Self {
            best: previous,
            previous,
        }
    }

    /// `best = max(best, score)`. Returns true when this call set a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// True once the previous record has been beaten this session
    pub fn is_new_record(&self) -> bool {
        self.best > self.previous
    }
}
