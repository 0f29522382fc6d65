use std::time::Duration;

use crate::game::FrameReport;

/// Play statistics for the lifetime of the process
pub struct GameMetrics {
    /// Play time of the current game; frozen while paused or over
    pub elapsed_time: Duration,
    pub games_played: u32,
    pub food_eaten: u32,
    pub ticks: u64,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            elapsed_time: Duration::ZERO,
            games_played: 0,
            food_eaten: 0,
            ticks: 0,
        }
    }

    /// Advance the game clock by one frame's wall time when play is live
    pub fn update(&mut self, elapsed: Duration, live: bool) {
        if live {
            self.elapsed_time += elapsed;
        }
    }

    pub fn on_game_start(&mut self) {
        self.elapsed_time = Duration::ZERO;
    }

    /// Fold one frame's events into the totals
    pub fn record(&mut self, report: &FrameReport) {
        self.ticks += report.steps as u64;
        self.food_eaten += report.food_eaten;
        if report.game_over.is_some() {
            self.games_played += 1;
        }
        if report.restarted {
            self.on_game_start();
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
