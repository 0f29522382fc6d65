//! Grid Snake - a fixed-timestep snake game for the terminal
//!
//! This library provides:
//! - Core game logic and the real-time session driver (game module)
//! - Keyboard and drag-gesture input (input module)
//! - TUI rendering from immutable snapshots (render module)
//! - Best-score persistence behind a small capability trait (storage module)
//! - Interactive play (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod storage;
