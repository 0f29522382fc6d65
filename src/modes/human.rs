use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;
use tracing::{debug, info};

use crate::game::{Command, GameConfig, GameEngine, Session};
use crate::input::{InputHandler, KeyAction, SwipeTracker};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::storage::ScoreStore;

/// Display refresh period (~60 FPS)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct HumanMode {
    session: Session,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    swipe: SwipeTracker,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(engine: GameEngine, store: Box<dyn ScoreStore>) -> Self {
        let config: &GameConfig = engine.config();
        let swipe = SwipeTracker::new(config.cell_px, config.swipe_min_distance);

        Self {
            session: Session::new(engine, store),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            swipe,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(best = self.session.best_score(), "session started");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut frame_timer = interval(FRAME_INTERVAL);
        let mut last_frame = Instant::now();

        loop {
            tokio::select! {
                // Input only queues commands; the frame applies them
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Simulation catch-up, then exactly one draw
                _ = frame_timer.tick() => {
                    let now = Instant::now();
                    let elapsed = now - last_frame;
                    let report = self.session.frame(elapsed);
                    last_frame = now;

                    if let Some(score) = report.game_over {
                        debug!(score, new_best = report.new_best, "frame ended game");
                    }
                    self.metrics.record(&report);

                    let snapshot = self.session.snapshot();
                    self.metrics.update(elapsed, !(snapshot.paused || snapshot.game_over));
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            games = self.metrics.games_played,
            food = self.metrics.food_eaten,
            ticks = self.metrics.ticks,
            best = self.session.best_score(),
            "session finished"
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match self.input_handler.handle_key_event(key) {
                    KeyAction::Game(command) => self.session.push(command),
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => self.swipe.cancel(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.swipe.begin(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(direction) = self.swipe.end(mouse.column, mouse.row) {
                    self.session.push(Command::Steer(direction));
                }
            }
            _ => {}
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use crate::storage::MemoryScoreStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mode() -> HumanMode {
        let engine = GameEngine::with_seed(GameConfig::default(), 5);
        HumanMode::new(engine, Box::new(MemoryScoreStore::new()))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert!(mode.session.state().is_running());
        assert_eq!(mode.session.state().score, 0);
    }

    #[test]
    fn test_key_press_queues_steer() {
        let mut mode = mode();
        mode.handle_event(Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)));
        mode.session.frame(Duration::ZERO);

        assert_eq!(mode.session.state().pending_direction, Direction::Up);
    }

    #[test]
    fn test_drag_queues_steer() {
        let mut mode = mode();
        mode.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 20, 10));
        mode.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 20, 7));
        mode.session.frame(Duration::ZERO);

        assert_eq!(mode.session.state().pending_direction, Direction::Up);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = mode();
        mode.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_restart_key_resets_game() {
        let mut mode = mode();
        mode.session.frame(Duration::from_millis(350));
        assert_eq!(mode.session.state().steps, 2);

        mode.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('r'),
            KeyModifiers::NONE,
        )));
        let report = mode.session.frame(Duration::ZERO);

        assert!(report.restarted);
        assert_eq!(mode.session.state().steps, 0);
    }
}
