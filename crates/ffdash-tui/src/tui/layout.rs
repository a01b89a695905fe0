// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Filter Bar (3 rows)                               |
// +-------------------------+------------------------+
// | Player Grid (65%)        | Sidebar (35%)          |
// |                          | +- Detail ------------+|
// |                          | +- Summary -----------+|
// |                          | +- Draft Log (draft) -+|
// +-------------------------+------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: app title, row counts, last message.
    pub status_bar: Rect,
    /// Active position/team/round filters and the search box.
    pub filters: Rect,
    /// Left side of the middle section: the player table.
    pub grid: Rect,
    /// Right sidebar top: narrative for the selected player.
    pub detail: Rect,
    /// Right sidebar middle: per-position summary statistics.
    pub summary: Rect,
    /// Right sidebar bottom, draft tracker only.
    pub draft_log: Option<Rect>,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
///
/// `with_draft_log` reserves the bottom of the sidebar for the draft log.
pub fn build_layout(area: Rect, with_draft_log: bool) -> AppLayout {
    // Vertical: status(1) | filters(3) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(3), // filter bar
            Constraint::Min(10),   // middle section (grid + sidebar)
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(vertical[2]);

    let (detail, summary, draft_log) = if with_draft_log {
        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(35),
                Constraint::Percentage(30),
            ])
            .split(middle[1]);
        (sidebar[0], sidebar[1], Some(sidebar[2]))
    } else {
        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(middle[1]);
        (sidebar[0], sidebar[1], None)
    };

    AppLayout {
        status_bar: vertical[0],
        filters: vertical[1],
        grid: middle[0],
        detail,
        summary,
        draft_log,
        help_bar: vertical[3],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rows_have_fixed_heights() {
        let layout = build_layout(Rect::new(0, 0, 120, 40), false);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.filters.height, 3);
        assert_eq!(layout.help_bar.height, 1);
        assert_eq!(layout.status_bar.y, 0);
        assert_eq!(layout.help_bar.y, 39);
    }

    #[test]
    fn grid_takes_most_of_the_width() {
        let layout = build_layout(Rect::new(0, 0, 100, 40), false);
        assert!(layout.grid.width > layout.detail.width);
        assert_eq!(layout.grid.width + layout.detail.width, 100);
        assert_eq!(layout.detail.x, layout.summary.x);
    }

    #[test]
    fn stats_layout_has_no_draft_log() {
        let layout = build_layout(Rect::new(0, 0, 120, 40), false);
        assert!(layout.draft_log.is_none());
        assert_eq!(
            layout.detail.height + layout.summary.height,
            layout.grid.height
        );
    }

    #[test]
    fn draft_layout_stacks_three_sidebar_panels() {
        let layout = build_layout(Rect::new(0, 0, 120, 40), true);
        let log = layout.draft_log.expect("draft layout has a log panel");
        assert_eq!(log.x, layout.detail.x);
        assert!(log.y > layout.summary.y);
        assert!(layout.summary.y > layout.detail.y);
        assert_eq!(
            layout.detail.height + layout.summary.height + log.height,
            layout.grid.height
        );
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let layout = build_layout(Rect::new(0, 0, 20, 8), true);
        assert!(layout.grid.width <= 20);
    }
}
