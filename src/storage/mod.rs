//! Best-score persistence
//!
//! The game only ever needs a single non-negative number to survive between
//! runs. Callers see it through the [`ScoreStore`] capability and never learn
//! where it lives.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access best score at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("best score file {path:?} is malformed: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A slot holding the best score seen so far
pub trait ScoreStore {
    fn read_best(&self) -> Result<u32, StoreError>;
    fn write_best(&mut self, score: u32) -> Result<(), StoreError>;
}

/// In-process slot, used when persistence is turned off
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    best: u32,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read_best(&self) -> Result<u32, StoreError> {
        Ok(self.best)
    }

    fn write_best(&mut self, score: u32) -> Result<(), StoreError> {
        self.best = score;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct BestScoreRecord {
    best_score: u32,
}

/// Best score kept as a small JSON document on disk
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ScoreStore for FileScoreStore {
    /// A missing file means nothing has been recorded yet
    fn read_best(&self) -> Result<u32, StoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(self.io_error(err)),
        };

        let record: BestScoreRecord =
            serde_json::from_str(&json).map_err(|source| StoreError::Format {
                path: self.path.clone(),
                source,
            })?;
        Ok(record.best_score)
    }

    fn write_best(&mut self, score: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let json = serde_json::to_string_pretty(&BestScoreRecord { best_score: score })
            .map_err(|source| StoreError::Format {
                path: self.path.clone(),
                source,
            })?;
        std::fs::write(&self.path, json).map_err(|err| self.io_error(err))
    }
}
