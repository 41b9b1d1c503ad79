use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::filter::{DateFilter, StatusFilter};
use crate::tui::app::App;

/// Render the header: app name, status filter tabs, date filter, active search
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans = vec![
        Span::styled(
            " jot ",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default().bg(bg)),
    ];

    for status in [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Completed,
    ] {
        let style = if status == app.status_filter {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", status.label()), style));
    }

    spans.push(Span::styled("  ", Style::default().bg(bg)));

    let date_style = if app.date_filter == DateFilter::All {
        Style::default().fg(app.theme.dim).bg(bg)
    } else {
        Style::default().fg(app.theme.yellow).bg(bg)
    };
    spans.push(Span::styled(
        format!("[{}]", app.date_filter.label()),
        date_style,
    ));

    if !app.applied_query.is_empty() {
        spans.push(Span::styled("  ", Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("/{}", app.applied_query),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
