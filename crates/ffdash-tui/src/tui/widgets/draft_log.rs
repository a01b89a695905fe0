// Draft log widget: committed drafted changes, newest first.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use ffdash_core::reconcile::{DraftLog, DraftLogEntry};
use ffdash_core::DraftStatus;

pub fn render(frame: &mut Frame, area: Rect, log: &DraftLog) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Draft Log ({}) ", log.len()));

    if log.is_empty() {
        let paragraph = Paragraph::new(Line::styled(
            "No picks marked yet.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = log.newest_first().map(|e| ListItem::new(entry_line(e))).collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// `HH:MM:SS Player: from -> to`
pub fn entry_line(entry: &DraftLogEntry) -> Line<'static> {
    let change = &entry.change;
    Line::from(vec![
        Span::styled(
            entry.at.format("%H:%M:%S ").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!("{}: {} -> ", change.player, change.from)),
        Span::styled(change.to.label(), Style::default().fg(status_color(change.to))),
    ])
}

fn status_color(status: DraftStatus) -> Color {
    match status {
        DraftStatus::MyTeam => Color::LightBlue,
        DraftStatus::OtherTeam => Color::Gray,
        DraftStatus::Undrafted => Color::White,
    }
}
