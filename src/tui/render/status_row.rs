use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::display_width;

/// Render the status row (bottom of screen): items-left count on the left,
/// mode-specific prompt or hints on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (left, hint): (Vec<Span>, &str) = match app.mode {
        Mode::Navigate => {
            let text = match &app.status_message {
                Some(message) => message.clone(),
                None => app.items_left(),
            };
            (
                vec![Span::styled(
                    text,
                    Style::default().fg(app.theme.text).bg(bg),
                )],
                "a add  space done  d delete  t due  / search  ? help",
            )
        }
        Mode::Edit => {
            let before = &app.edit_buffer[..app.edit_cursor];
            let after = &app.edit_buffer[app.edit_cursor..];
            (
                vec![
                    Span::styled(
                        format!("> {}", before),
                        Style::default().fg(app.theme.text_bright).bg(bg),
                    ),
                    Span::styled(
                        "\u{258C}",
                        Style::default().fg(app.theme.highlight).bg(bg),
                    ),
                    Span::styled(
                        after.to_string(),
                        Style::default().fg(app.theme.text_bright).bg(bg),
                    ),
                ],
                "Enter save  Esc cancel",
            )
        }
        Mode::Search => (
            vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
            ],
            "Enter apply  Esc cancel",
        ),
        Mode::Confirm => {
            let message = app
                .confirm_state
                .as_ref()
                .map(|s| s.message.clone())
                .unwrap_or_default();
            (
                vec![Span::styled(
                    message,
                    Style::default().fg(app.theme.red).bg(bg),
                )],
                "y confirm  n cancel",
            )
        }
        Mode::DuePick => (
            vec![Span::styled(
                "Due date:",
                Style::default().fg(app.theme.yellow).bg(bg),
            )],
            "t today  w tomorrow  c clear  Esc dismiss",
        ),
    };

    let mut spans = left;
    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let hint_width = display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppConfig;
    use crate::store::{FileStorage, TaskStore};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> App {
        let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
        let store = TaskStore::open(storage);
        App::new(store, AppConfig::default())
    }

    // Padding is computed in display cells, so a double-width character in
    // the status message must not push the hint past the right edge.
    #[test]
    fn hint_stays_flush_right_with_wide_status_text() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.status_message = Some("収納 済".to_string());

        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_status_row(frame, &app, frame.area()))
            .unwrap();

        // Navigate-mode hint ends in "? help"; its last char sits in the
        // final cell when the width math is right
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(59, 0)].symbol(), "p");
        assert_eq!(buffer[(0, 0)].symbol(), "収");
    }
}
