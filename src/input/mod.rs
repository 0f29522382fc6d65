pub mod handler;
pub mod swipe;

pub use handler::{InputHandler, KeyAction};
pub use swipe::{SwipeTracker, classify_swipe};
