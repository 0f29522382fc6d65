//! Real-time driver around the engine
//!
//! A [`Session`] is the single writer of the game state. Input handlers never
//! touch the state directly; they push [`Command`]s which are drained at the
//! start of the next frame. Each frame then runs zero or more fixed-size ticks
//! from a time accumulator, so the number of ticks depends only on the total
//! elapsed time and not on how it was split across frames.

use std::collections::VecDeque;
use std::time::Duration;
use tracing::{info, warn};

use super::{
    engine::{GameEngine, StepOutcome},
    snapshot::RenderSnapshot,
    state::GameState,
    vector::Direction,
};
use crate::storage::ScoreStore;

/// Upper bound on ticks replayed after a stall
pub const MAX_CATCH_UP_TICKS: u32 = 240;

/// Requests queued by input handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    TogglePause,
    Restart,
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub steps: usize,
    pub food_eaten: u32,
    /// Final score, set on the frame the game ended
    pub game_over: Option<u32>,
    pub new_best: bool,
    pub restarted: bool,
}

pub struct Session {
    engine: GameEngine,
    state: GameState,
    store: Box<dyn ScoreStore>,
    commands: VecDeque<Command>,
    accumulator: Duration,
    /// Total real time fed through `frame`
    clock: Duration,
    game_over_at: Option<Duration>,
    best_score: u32,
    paused: bool,
}

impl Session {
    pub fn new(mut engine: GameEngine, store: Box<dyn ScoreStore>) -> Self {
        let best_score = store.read_best().unwrap_or_else(|err| {
            warn!(%err, "best score unavailable, starting from zero");
            0
        });
        let state = engine.reset();

        Self {
            engine,
            state,
            store,
            commands: VecDeque::new(),
            accumulator: Duration::ZERO,
            clock: Duration::ZERO,
            game_over_at: None,
            best_score,
            paused: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over_at.is_some()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    /// Advance by `elapsed` real time: decay grace, apply queued commands,
    /// then run as many ticks as the accumulator allows.
    pub fn frame(&mut self, elapsed: Duration) -> FrameReport {
        let mut report = FrameReport::default();
        self.clock += elapsed;

        if !self.paused {
            self.state.decay_grace(elapsed);
        }

        while let Some(command) = self.commands.pop_front() {
            self.apply(command, &mut report);
        }

        if self.state.is_running() {
            if !self.paused {
                self.run_ticks(elapsed, &mut report);
            }
        } else if let Some(at) = self.game_over_at {
            if self.clock >= at + self.engine.config().restart_delay() {
                self.restart(&mut report);
            }
        }

        report
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let config = self.engine.config();
        RenderSnapshot {
            grid_size: self.state.grid_size,
            cell_px: config.cell_px,
            snake: self.state.snake.cells().copied().collect(),
            food: self.state.food,
            score: self.state.score,
            best_score: self.best_score,
            game_over: self.is_game_over(),
            game_over_at: self.game_over_at,
            now: self.clock,
            restart_delay: config.restart_delay(),
            paused: self.paused,
        }
    }

    fn apply(&mut self, command: Command, report: &mut FrameReport) {
        match command {
            Command::Steer(direction) => {
                if !self.paused {
                    self.engine.steer(&mut self.state, direction);
                }
            }
            Command::TogglePause => {
                if self.state.is_running() {
                    self.paused = !self.paused;
                    info!(paused = self.paused, "pause toggled");
                }
            }
            Command::Restart => self.restart(report),
        }
    }

    fn run_ticks(&mut self, elapsed: Duration, report: &mut FrameReport) {
        // Ticks fire only once the accumulator strictly exceeds the interval
        let cap = self.state.tick_interval * (MAX_CATCH_UP_TICKS + 1);
        self.accumulator = (self.accumulator + elapsed).min(cap);

        while self.accumulator > self.state.tick_interval {
            self.accumulator -= self.state.tick_interval;

            let outcome = self.engine.step(&mut self.state);
            report.steps += 1;

            if outcome == (StepOutcome::Moved { ate_food: true }) {
                report.food_eaten += 1;
            }
            if outcome.ends_game() {
                if outcome == StepOutcome::Cleared {
                    report.food_eaten += 1;
                }
                self.finish_game(report);
                break;
            }
        }
    }

    fn finish_game(&mut self, report: &mut FrameReport) {
        let score = self.state.score;
        self.game_over_at = Some(self.clock);
        self.accumulator = Duration::ZERO;
        report.game_over = Some(score);

        info!(score, best = self.best_score, steps = self.state.steps, "game over");

        if score > self.best_score {
            self.best_score = score;
            report.new_best = true;
            if let Err(err) = self.store.write_best(score) {
                warn!(%err, "failed to persist best score");
            }
        }
    }

    fn restart(&mut self, report: &mut FrameReport) {
        self.state = self.engine.reset();
        self.game_over_at = None;
        self.accumulator = Duration::ZERO;
        self.paused = false;
        report.restarted = true;
        info!("game restarted");
    }
}
