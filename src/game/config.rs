use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Largest playable grid; a cell is drawn two columns wide
pub const MAX_GRID_SIZE: usize = 255;

/// Reasons a configuration cannot be played
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size {0} is too small (minimum 4)")]
    GridTooSmall(usize),
    #[error("grid size {0} is too large (maximum {MAX_GRID_SIZE})")]
    GridTooLarge(usize),
    #[error("initial snake length {length} does not fit a grid of size {grid_size}")]
    BadSnakeLength { length: usize, grid_size: usize },
    #[error("minimum tick interval must be non-zero")]
    ZeroTickInterval,
    #[error("minimum tick interval {min_ms}ms exceeds base interval {base_ms}ms")]
    InvertedSpeedCurve { base_ms: u64, min_ms: u64 },
    #[error("speed cap score must be non-zero")]
    ZeroSpeedCap,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the square grid
    pub grid_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Pixel size of one cell, handed to the renderer and used to scale drags
    pub cell_px: u32,

    // Speed curve
    /// Tick interval at score 0
    pub base_tick_ms: u64,
    /// Tick interval floor
    pub min_tick_ms: u64,
    /// Score at which the floor is reached
    pub speed_cap_score: u32,

    /// Forgiveness window refreshed by each accepted turn
    pub grace_ms: u64,
    /// Swipes shorter than this on both axes are ignored
    pub swipe_min_distance: f32,
    /// Delay between game over and the automatic restart
    pub restart_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_snake_length: 2,
            cell_px: 20,
            base_tick_ms: 170,
            min_tick_ms: 80,
            speed_cap_score: 30,
            grace_ms: 250,
            swipe_min_distance: 30.0,
            restart_delay_ms: 2000,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 4 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(self.grid_size));
        }
        if self.initial_snake_length < 2 || self.initial_snake_length > self.grid_size / 2 {
            return Err(ConfigError::BadSnakeLength {
                length: self.initial_snake_length,
                grid_size: self.grid_size,
            });
        }
        if self.min_tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.min_tick_ms > self.base_tick_ms {
            return Err(ConfigError::InvertedSpeedCurve {
                base_ms: self.base_tick_ms,
                min_ms: self.min_tick_ms,
            });
        }
        if self.speed_cap_score == 0 {
            return Err(ConfigError::ZeroSpeedCap);
        }
        Ok(())
    }

    /// Linear speed-up from `base_tick_ms` at score 0 to `min_tick_ms` at
    /// `speed_cap_score` and beyond.
    pub fn tick_interval_for(&self, score: u32) -> Duration {
        let capped = score.min(self.speed_cap_score) as u64;
        let span = self.base_tick_ms.saturating_sub(self.min_tick_ms);
        let ms = self.base_tick_ms - span * capped / self.speed_cap_score.max(1) as u64;
        Duration::from_millis(ms)
    }

    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }
}
