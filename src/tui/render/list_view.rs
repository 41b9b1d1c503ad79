use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::ops::search::compile_query;
use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

use super::push_highlighted_spans;

/// Render the visible task list with cursor, due-date colors, and
/// search-match highlighting
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.visible.is_empty() {
        let message = if app.store.is_empty() {
            "No tasks yet. Press 'a' to add your first one."
        } else {
            "Nothing matches the current filters."
        };
        let line = Line::from(Span::styled(
            message,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(bg)),
            area,
        );
        return;
    }

    // Keep the cursor on screen
    let height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let search_re = compile_query(&app.applied_query);
    let today = app.today();

    let mut lines = Vec::new();
    for (row, task) in app
        .visible
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let selected = row == app.cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };

        let mut spans = Vec::new();

        let checkbox = if task.done { "[x] " } else { "[ ] " };
        let checkbox_fg = if task.done {
            app.theme.green
        } else {
            app.theme.dim
        };
        spans.push(Span::styled(
            checkbox,
            Style::default().fg(checkbox_fg).bg(row_bg),
        ));

        if let Some(due) = task.due_date {
            let due_fg = if due < today {
                app.theme.red
            } else if due == today {
                app.theme.yellow
            } else {
                app.theme.dim
            };
            spans.push(Span::styled(
                format!("{}  ", due.format("%Y-%m-%d")),
                Style::default().fg(due_fg).bg(row_bg),
            ));
        }

        let base_style = if task.done {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        let highlight_style = Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg);

        let text = truncate_to_width(&task.text, text_budget(task, area.width as usize));
        push_highlighted_spans(
            &mut spans,
            &text,
            base_style,
            highlight_style,
            search_re.as_ref(),
        );

        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

fn text_budget(task: &Task, width: usize) -> usize {
    let checkbox = 4;
    let date = if task.due_date.is_some() { 12 } else { 0 };
    width.saturating_sub(checkbox + date)
}
