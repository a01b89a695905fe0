// Status bar widget: app title, visible row count, last message.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use ffdash_core::View;

use crate::tui::{StatusMessage, UiState};

pub fn render(frame: &mut Frame, area: Rect, view: &View<'_>, ui: &UiState) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", view.kind.title()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::Gray)),
        Span::styled(row_counter(view), Style::default().fg(Color::White)),
    ];

    if let Some(message) = &ui.status {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(message_span(message));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// E.g. "12 of 240 players".
pub fn row_counter(view: &View<'_>) -> String {
    format!("{} of {} players", view.rows.len(), view.total_players)
}

fn message_span(message: &StatusMessage) -> Span<'static> {
    let color = if message.is_error {
        Color::Red
    } else {
        Color::Green
    };
    Span::styled(message.text.clone(), Style::default().fg(color))
}
