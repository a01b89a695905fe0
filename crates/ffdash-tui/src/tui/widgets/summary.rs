// Summary panel: per-position aggregates over the visible rows, transposed
// so each position is a column. The draft tracker adds a drafted tally.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use ffdash_core::summary::{format_value, DraftTally};
use ffdash_core::View;

pub fn render(frame: &mut Frame, area: Rect, view: &View<'_>, precision: u32) {
    let block = Block::default().borders(Borders::ALL).title(" Summary ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let table_area = match &view.tally {
        Some(tally) => {
            let [tally_area, rest] =
                Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);
            frame.render_widget(Paragraph::new(tally_lines(tally)), tally_area);
            rest
        }
        None => inner,
    };

    if view.summary.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "No rows to summarize.",
                Style::default().fg(Color::DarkGray),
            )),
            table_area,
        );
        return;
    }

    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(
                view.summary
                    .iter()
                    .map(|g| Cell::from(format!("{} ({})", g.position, g.count))),
            )
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = view
        .summary_labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mut cells = vec![Cell::from(label.clone())];
            cells.extend(
                view.summary
                    .iter()
                    .map(|g| Cell::from(format_value(g.values[i], precision))),
            );
            Row::new(cells)
        })
        .collect();

    let widths = std::iter::once(Constraint::Length(label_width(view)))
        .chain(view.summary.iter().map(|_| Constraint::Length(9)));
    frame.render_widget(Table::new(rows, widths).header(header), table_area);
}

fn label_width(view: &View<'_>) -> u16 {
    view.summary_labels
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(0)
        .min(28) as u16
}

/// Two lines: overall counts, then my roster by position.
pub fn tally_lines(tally: &DraftTally) -> Vec<Line<'static>> {
    let counts = Line::from(vec![
        Span::styled(
            format!("Drafted {}", tally.drafted()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " (mine {}, others {}) | Available {}",
            tally.my_team, tally.other_team, tally.undrafted
        )),
    ]);

    let roster = if tally.my_team_by_position.is_empty() {
        "My team: none yet".to_string()
    } else {
        let parts: Vec<String> = tally
            .my_team_by_position
            .iter()
            .map(|(pos, n)| format!("{pos} {n}"))
            .collect();
        format!("My team: {}", parts.join(", "))
    };

    vec![
        counts,
        Line::from(Span::styled(roster, Style::default().fg(Color::LightBlue))),
    ]
}
