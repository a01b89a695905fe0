// Player grid: the filtered rows as a table, with classifier styling on the
// rating and drafted columns.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use ffdash_core::grid::{cell_text, Column, ColumnSpec};
use ffdash_core::style::cell_style;
use ffdash_core::{PlayerRecord, View};

use super::cell_style_to_ratatui;
use crate::tui::UiState;

pub const EMPTY_MESSAGE: &str = "No players match the current filters.";

pub fn render(frame: &mut Frame, area: Rect, view: &View<'_>, ui: &UiState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Players ({}) ", view.rows.len()));

    if view.is_empty() {
        let paragraph = Paragraph::new(Line::styled(
            EMPTY_MESSAGE,
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(
        view.columns
            .iter()
            .map(|c| Cell::from(c.header))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let precision = ui.precision as usize;
    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|record| build_row(record, &view.columns, precision))
        .collect();

    let table = Table::new(rows, column_widths(&view.columns))
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(view.selected_index);
    frame.render_stateful_widget(table, area, &mut state);
}

fn build_row<'a>(record: &PlayerRecord, columns: &[ColumnSpec], precision: usize) -> Row<'a> {
    let cells: Vec<Cell> = columns
        .iter()
        .map(|spec| {
            let cell = Cell::from(cell_text(record, spec.column, precision));
            match cell_style(spec.column, record) {
                Some(style) => cell.style(cell_style_to_ratatui(style)),
                None => cell,
            }
        })
        .collect();
    Row::new(cells)
}

/// Player names get the slack; everything else is sized to its header.
pub fn column_widths(columns: &[ColumnSpec]) -> Vec<Constraint> {
    columns
        .iter()
        .map(|spec| match spec.column {
            Column::Name => Constraint::Min(18),
            Column::Drafted => Constraint::Length(10),
            _ => Constraint::Length(spec.header.len().clamp(5, 12) as u16),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::{buffer_text, draft_session, stats_session, test_terminal};
    use ffdash_core::{render as build_view, Command};

    #[test]
    fn renders_headers_and_rows() {
        let session = stats_session();
        let view = build_view(&session);
        let mut terminal = test_terminal(120, 12);
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &view, &UiState::default())
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Player Name"));
        assert!(text.contains("Josh Allen"));
        assert!(text.contains("24.10"));
        assert!(text.contains("Players (3)"));
    }

    #[test]
    fn rating_label_cell_is_colored() {
        let session = stats_session();
        let view = build_view(&session);
        let mut terminal = test_terminal(140, 8);
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &view, &UiState::default())
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let (x, y) = find_text(buffer, "mega bullish").expect("label rendered");
        assert_eq!(buffer[(x, y)].bg, Color::Rgb(0, 100, 0));
        assert_eq!(buffer[(x, y)].fg, Color::Rgb(255, 255, 255));
    }

    fn find_text(buffer: &ratatui::buffer::Buffer, needle: &str) -> Option<(u16, u16)> {
        let width = buffer.area.width;
        let len = needle.chars().count() as u16;
        for y in 0..buffer.area.height {
            for x in 0..width.saturating_sub(len) {
                let found: String = (x..x + len).map(|i| buffer[(i, y)].symbol()).collect();
                if found == needle {
                    return Some((x, y));
                }
            }
        }
        None
    }

    #[test]
    fn empty_view_shows_message() {
        let mut session = stats_session();
        session.handle(Command::SetSearch("zzz".into())).unwrap();
        let view = build_view(&session);
        let mut terminal = test_terminal(80, 6);
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &view, &UiState::default())
            })
            .unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains(EMPTY_MESSAGE));
    }

    #[test]
    fn draft_grid_shows_drafted_column() {
        let session = draft_session();
        let view = build_view(&session);
        let mut terminal = test_terminal(140, 8);
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &view, &UiState::default())
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Drafted"));
        assert!(text.contains("False"));
        assert!(!text.contains("Analyst Rating"));
    }

    #[test]
    fn name_column_absorbs_slack() {
        let widths = column_widths(&view_columns());
        assert_eq!(widths[0], Constraint::Min(18));
    }

    fn view_columns() -> Vec<ColumnSpec> {
        ffdash_core::grid::visible_columns(ffdash_core::AppKind::Stats)
    }
}
