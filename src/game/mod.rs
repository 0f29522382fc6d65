//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The engine performs single ticks; the session drives it from real elapsed time.

pub mod collision;
pub mod config;
pub mod engine;
pub mod food;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod vector;

// Re-export commonly used types
pub use collision::Collision;
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, StepOutcome};
pub use session::{Command, FrameReport, Session};
pub use snapshot::RenderSnapshot;
pub use state::{GameState, Phase, Snake};
pub use vector::{Direction, Vector};
