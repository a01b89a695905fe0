// Detail panel: narrative text for the selected player.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use ffdash_core::detail::DetailPanel;

pub fn render(frame: &mut Frame, area: Rect, panel: &DetailPanel) {
    let lines = match panel {
        DetailPanel::Prompt(prompt) => vec![Line::from(Span::styled(
            prompt.clone(),
            Style::default().fg(Color::DarkGray),
        ))],
        DetailPanel::Player { name, text } => vec![
            Line::from(Span::styled(
                name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(text.clone()),
        ],
        DetailPanel::Missing(err) => vec![Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Detail "))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
