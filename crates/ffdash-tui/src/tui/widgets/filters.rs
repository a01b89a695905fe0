// Filter bar: the active facet filters and the search box.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use ffdash_core::filter::Facet;
use ffdash_core::View;

use crate::tui::{InputMode, UiState};

pub fn render(frame: &mut Frame, area: Rect, view: &View<'_>, ui: &UiState) {
    let searching = ui.mode == InputMode::Search;
    let border = if searching { Color::Yellow } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Filters ");

    frame.render_widget(Paragraph::new(filter_line(view, searching)).block(block), area);
}

pub fn filter_line(view: &View<'_>, searching: bool) -> Line<'static> {
    let secondary = match view.secondary_facet {
        Facet::Round => view.criteria.round.map(|r| r.to_string()),
        _ => view.criteria.team.clone(),
    };

    let mut spans = Vec::new();
    spans.extend(facet_spans(Facet::Position.label(), view.criteria.position.clone()));
    spans.push(Span::raw("  "));
    spans.extend(facet_spans(view.secondary_facet.label(), secondary));
    spans.push(Span::raw("  "));
    spans.push(Span::styled("Search: ", Style::default().fg(Color::Gray)));

    let search = &view.criteria.search;
    if searching {
        spans.push(Span::styled(
            format!("{search}_"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    } else if search.is_empty() {
        spans.push(Span::styled("(press /)", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(
            format!("\"{search}\""),
            Style::default().fg(Color::White),
        ));
    }

    Line::from(spans)
}

fn facet_spans(label: &'static str, value: Option<String>) -> [Span<'static>; 2] {
    let value_span = match value {
        Some(v) => Span::styled(
            v,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("All", Style::default().fg(Color::White)),
    };
    [
        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
        value_span,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::{draft_session, stats_session};
    use ffdash_core::{render as build_view, Command};

    #[test]
    fn shows_all_when_unfiltered() {
        let session = stats_session();
        let line = filter_line(&build_view(&session), false).to_string();
        assert_eq!(line, "Position: All  Team: All  Search: (press /)");
    }

    #[test]
    fn draft_app_shows_round_filter() {
        let mut session = draft_session();
        session.handle(Command::SetRound(Some(3))).unwrap();
        session.handle(Command::SetSearch("lap".into())).unwrap();
        let line = filter_line(&build_view(&session), false).to_string();
        assert_eq!(line, "Position: All  Round: 3  Search: \"lap\"");
    }

    #[test]
    fn search_mode_shows_cursor() {
        let mut session = stats_session();
        session.handle(Command::SetSearch("jo".into())).unwrap();
        let line = filter_line(&build_view(&session), true).to_string();
        assert!(line.ends_with("Search: jo_"));
    }
}
