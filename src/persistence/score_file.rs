//! Plain-text score file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::ScoreStore;

#[derive(Debug, Error)]
pub enum ScoreFileError {
    #[error("cannot access score file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score file {} does not hold a number: {content:?}", .path.display())]
    Parse { path: PathBuf, content: String },
}

impl ScoreFileError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScoreFileError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Read the integer on the first line of `path`
pub fn read_score_file(path: &Path) -> Result<u64, ScoreFileError> {
    let text = fs::read_to_string(path).map_err(|source| ScoreFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let first_line = text.lines().next().unwrap_or("").trim();
    first_line.parse().map_err(|_| ScoreFileError::Parse {
        path: path.to_path_buf(),
        content: first_line.to_string(),
    })
}

/// Replace the contents of `path` with `score`
pub fn write_score_file(path: &Path, score: u64) -> Result<(), ScoreFileError> {
    fs::write(path, score.to_string()).map_err(|source| ScoreFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Score record on disk
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load_high_score(&mut self) -> u64 {
        match read_score_file(&self.path) {
            Ok(score) => {
                log::info!("Loaded high score {} from {}", score, self.path.display());
                score
            }
            Err(e) if e.is_not_found() => {
                log::info!("No high score record at {}, starting fresh", self.path.display());
                0
            }
            Err(e) => {
                log::warn!("{e}; using 0");
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u64) {
        match write_score_file(&self.path, score) {
            Ok(()) => log::info!("High score {} saved to {}", score, self.path.display()),
            Err(e) => log::warn!("High score not saved: {e}"),
        }
    }
}
