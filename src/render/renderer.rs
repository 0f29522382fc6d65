use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use std::collections::HashSet;

use crate::game::{RenderSnapshot, Vector};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &RenderSnapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snapshot, metrics);
        frame.render_widget(stats, chunks[0]);

        if snapshot.game_over {
            let game_over = self.render_game_over(snapshot);
            frame.render_widget(game_over, chunks[1]);
        } else {
            let area = centered(chunks[1], snapshot.grid_size);
            frame.render_widget(self.render_grid(snapshot, area), area);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Only the cells that fit inside `area` are painted
    fn render_grid(&self, snapshot: &RenderSnapshot, area: Rect) -> Paragraph<'_> {
        let head = snapshot.head();
        let body: HashSet<Vector> = snapshot.snake.iter().copied().collect();
        let rows = snapshot.grid_size.min(area.height.saturating_sub(2) as usize);
        let cols = snapshot.grid_size.min(area.width.saturating_sub(2) as usize / 2);
        let mut lines = Vec::with_capacity(rows);

        for y in 0..rows {
            let spans: Vec<Span> = (0..cols)
                .map(|x| {
                    let pos = Vector::new(x as i32, y as i32);
                    if Some(pos) == head {
                        Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else if body.contains(&pos) {
                        Span::styled("□ ", Style::default().fg(Color::Green))
                    } else if pos == snapshot.food {
                        Span::styled(
                            "O ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled(". ", Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();

            lines.push(Line::from(spans));
        }

        let title = if snapshot.paused { " Snake (paused) " } else { " Snake " };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(title),
        )
    }

    fn render_stats(&self, snapshot: &RenderSnapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(snapshot.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(snapshot.best_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Games: ", label),
            Span::styled(metrics.games_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &RenderSnapshot) -> Paragraph<'_> {
        let restart_in = snapshot.restart_in().unwrap_or_default();
        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        if snapshot.score > 0 && snapshot.score == snapshot.best_score {
            text.push(Line::from(Span::styled(
                "New best!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        }

        text.extend([
            Line::from(""),
            Line::from(Span::styled(
                format!("Restarting in {:.1}s", restart_in.as_secs_f32()),
                Style::default().fg(Color::Gray),
            )),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart now or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ]);

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" / "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" / drag to move | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" to pause | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Box of the grid's size (two columns per cell plus borders), centred in `area`
fn centered(area: Rect, grid_size: usize) -> Rect {
    let cells = u16::try_from(grid_size).unwrap_or(u16::MAX);
    let width = cells.saturating_mul(2).saturating_add(2).min(area.width);
    let height = cells.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
