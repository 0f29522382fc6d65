use std::time::Duration;

use super::vector::Vector;

/// Everything a painter needs for one frame. Built fresh each frame; the
/// painter never sees or mutates the live game state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub grid_size: usize,
    pub cell_px: u32,
    /// Head first
    pub snake: Vec<Vector>,
    pub food: Vector,
    pub score: u32,
    pub best_score: u32,
    pub game_over: bool,
    /// Session clock reading when the game ended
    pub game_over_at: Option<Duration>,
    /// Session clock reading for this frame
    pub now: Duration,
    pub restart_delay: Duration,
    pub paused: bool,
}

impl RenderSnapshot {
    pub fn head(&self) -> Option<Vector> {
        self.snake.first().copied()
    }

    /// Time left before the automatic restart, if the game is over
    pub fn restart_in(&self) -> Option<Duration> {
        self.game_over_at
            .map(|at| (at + self.restart_delay).saturating_sub(self.now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(game_over_at: Option<Duration>, now: Duration) -> RenderSnapshot {
        RenderSnapshot {
            grid_size: 10,
            cell_px: 20,
            snake: vec![Vector::new(4, 4), Vector::new(3, 4)],
            food: Vector::new(0, 0),
            score: 0,
            best_score: 0,
            game_over: game_over_at.is_some(),
            game_over_at,
            now,
            restart_delay: Duration::from_millis(2000),
            paused: false,
        }
    }

    #[test]
    fn test_head_is_first_cell() {
        assert_eq!(
            snapshot(None, Duration::ZERO).head(),
            Some(Vector::new(4, 4))
        );
    }

    #[test]
    fn test_restart_countdown() {
        assert_eq!(snapshot(None, Duration::from_secs(5)).restart_in(), None);

        let at = Duration::from_secs(10);
        let snap = snapshot(Some(at), at + Duration::from_millis(500));
        assert_eq!(snap.restart_in(), Some(Duration::from_millis(1500)));

        let late = snapshot(Some(at), at + Duration::from_secs(9));
        assert_eq!(late.restart_in(), Some(Duration::ZERO));
    }
}
