use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::debug;

use super::{
    collision::{self, Collision},
    config::GameConfig,
    food::spawn_food,
    state::{GameState, Phase, Snake},
    vector::{Direction, Vector},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Snake advanced one cell
    Moved { ate_food: bool },
    /// A collision was absorbed by the grace window; the snake did not move
    Forgiven(Collision),
    /// A collision with no grace left ended the game
    Crashed(Collision),
    /// The snake filled the board, leaving nowhere for food
    Cleared,
    /// The game was already over; nothing happened
    Halted,
}

impl StepOutcome {
    /// True for the outcomes that move the game into `Phase::GameOver`
    pub fn ends_game(&self) -> bool {
        matches!(self, StepOutcome::Crashed(_) | StepOutcome::Cleared)
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let center = (self.config.grid_size / 2) as i32;
        let snake = Snake::new(
            Vector::new(center, center),
            Direction::Right,
            self.config.initial_snake_length,
        );

        // A validated config leaves most of the board empty here
        let food = spawn_food(&mut self.rng, self.config.grid_size, &snake)
            .unwrap_or_else(|| Vector::new(0, 0));

        GameState::new(
            snake,
            Direction::Right,
            food,
            self.config.grid_size,
            self.config.tick_interval_for(0),
        )
    }

    /// Buffer a direction from input. Reversals of the current direction are
    /// dropped; an accepted turn refreshes the grace window.
    pub fn steer(&self, state: &mut GameState, direction: Direction) -> bool {
        if !state.is_running() || state.direction.is_opposite(direction) {
            return false;
        }

        state.pending_direction = direction;
        state.grace = self.config.grace();
        true
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState) -> StepOutcome {
        if !state.is_running() {
            return StepOutcome::Halted;
        }

        // Commit the buffered turn (prevent 180° turns)
        if !state.direction.is_opposite(state.pending_direction) {
            state.direction = state.pending_direction;
        }

        let candidate = state.snake.head().moved_in_direction(state.direction);
        let hit = collision::detect(candidate, state.grid_size, &state.snake);

        if hit.any() {
            // Leniency after a fresh turn: skip this move instead of dying
            if !state.grace.is_zero() {
                state.grace = Duration::ZERO;
                return StepOutcome::Forgiven(hit);
            }

            state.phase = Phase::GameOver;
            return StepOutcome::Crashed(hit);
        }

        state.snake.push_head(candidate);
        state.steps += 1;

        if candidate != state.food {
            state.snake.drop_tail();
            return StepOutcome::Moved { ate_food: false };
        }

        state.score += 1;
        state.tick_interval = self.config.tick_interval_for(state.score);

        match spawn_food(&mut self.rng, state.grid_size, &state.snake) {
            Some(food) => {
                debug!(x = food.x, y = food.y, score = state.score, "food spawned");
                state.food = food;
                StepOutcome::Moved { ate_food: true }
            }
            None => {
                state.phase = Phase::GameOver;
                StepOutcome::Cleared
            }
        }
    }
}
