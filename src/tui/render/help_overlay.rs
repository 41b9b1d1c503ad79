use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const BINDINGS: &[(&str, &str)] = &[
    ("j/k, arrows", "move"),
    ("space/enter", "toggle done"),
    ("a", "add task"),
    ("e", "edit task text"),
    ("d", "delete task"),
    ("t", "due date quick pick"),
    ("f / F", "cycle status / date filter"),
    ("/", "search"),
    ("c", "clear completed"),
    ("C", "clear all"),
    ("q", "quit"),
];

/// Render the key-binding help overlay, centered over the content
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let width = 44.min(area.width);
    let height = (BINDINGS.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<14}", keys),
                    Style::default()
                        .fg(app.theme.highlight)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(app.theme.text)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" keys ")
        .style(
            Style::default()
                .bg(app.theme.background)
                .fg(app.theme.dim),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
