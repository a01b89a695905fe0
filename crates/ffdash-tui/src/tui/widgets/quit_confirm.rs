// Quit confirmation overlay, drawn on top of the frame while
// `UiState::confirm_quit` is set.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use ffdash_core::AppKind;

const DIALOG_WIDTH: u16 = 40;
const DIALOG_HEIGHT: u16 = 6;

pub fn render(frame: &mut Frame, area: Rect, kind: AppKind) {
    let dialog_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            " Quit? ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));

    let mut lines = vec![Line::from(vec![
        Span::raw(format!(" Close the {}? (", kind.slug())),
        Span::styled("y", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw("/"),
        Span::styled("n", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(")"),
    ])];
    if kind.tracks_drafted() {
        lines.push(Line::styled(
            " Drafted marks are not saved.",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, dialog_area);
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(vertical);
    centered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::{buffer_text, test_terminal};

    #[test]
    fn dialog_is_centered() {
        let rect = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, Rect::new(0, 0, 80, 24));
        assert_eq!(rect.width, DIALOG_WIDTH);
        assert_eq!(rect.height, DIALOG_HEIGHT);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 9);
    }

    #[test]
    fn dialog_clamps_to_small_area() {
        let rect = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, Rect::new(0, 0, 30, 4));
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 4);
    }

    #[test]
    fn draft_dialog_warns_marks_are_not_saved() {
        let mut terminal = test_terminal(60, 12);
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, AppKind::Draft)
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Close the draft?"));
        assert!(text.contains("not saved"));

        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, AppKind::Stats)
            })
            .unwrap();
        assert!(!buffer_text(terminal.backend().buffer()).contains("not saved"));
    }
}
