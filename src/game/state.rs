use std::collections::VecDeque;
use std::time::Duration;

use super::vector::{Direction, Vector};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    body: VecDeque<Vector>,
}

impl Snake {
    /// Create a new snake with its head at `head`, tail trailing opposite `direction`
    pub fn new(head: Vector, direction: Direction, length: usize) -> Self {
        let back = direction.opposite();
        let body = std::iter::successors(Some(head), |prev| Some(prev.moved_in_direction(back)))
            .take(length)
            .collect();
        Self { body }
    }

    /// Build a snake from explicit cells, head first
    pub fn from_cells(cells: impl IntoIterator<Item = Vector>) -> Self {
        Self {
            body: cells.into_iter().collect(),
        }
    }

    /// Get the head position
    pub fn head(&self) -> Vector {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Vector {
        self.body[self.body.len() - 1]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Vector> {
        self.body.iter()
    }

    pub fn contains(&self, pos: Vector) -> bool {
        self.body.contains(&pos)
    }

    pub(crate) fn push_head(&mut self, pos: Vector) {
        self.body.push_front(pos);
    }

    pub(crate) fn drop_tail(&mut self) {
        self.body.pop_back();
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Terminal; no further ticks until reset
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid_size: usize,
    pub snake: Snake,
    /// Direction applied on the last tick
    pub direction: Direction,
    /// Direction buffered by input, committed on the next tick
    pub pending_direction: Direction,
    pub food: Vector,
    pub score: u32,
    pub steps: u32,
    pub tick_interval: Duration,
    /// Remaining forgiveness after the last accepted turn
    pub grace: Duration,
    pub phase: Phase,
}

impl GameState {
    /// Create a new game state
    pub fn new(
        snake: Snake,
        direction: Direction,
        food: Vector,
        grid_size: usize,
        tick_interval: Duration,
    ) -> Self {
        Self {
            grid_size,
            snake,
            direction,
            pending_direction: direction,
            food,
            score: 0,
            steps: 0,
            tick_interval,
            grace: Duration::ZERO,
            phase: Phase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Decay the grace counter by real elapsed time, floored at zero
    pub fn decay_grace(&mut self, elapsed: Duration) {
        self.grace = self.grace.saturating_sub(elapsed);
    }
}
