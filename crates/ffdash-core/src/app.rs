// Which of the two dashboards a session is running.

use std::fmt;

/// The two dashboards share the data model but differ in CSV layout,
/// filters, editable columns and detail text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppKind {
    /// Player stats browser (projections, confidence bounds, rating labels).
    Stats,
    /// Draft-strategy tracker with an editable Drafted column.
    Draft,
}

impl AppKind {
    pub fn title(&self) -> &'static str {
        match self {
            AppKind::Stats => "Fantasy Football Player Stats",
            AppKind::Draft => "Fantasy Football Draft Strategy",
        }
    }

    /// Short name used for log files and config sections.
    pub fn slug(&self) -> &'static str {
        match self {
            AppKind::Stats => "stats",
            AppKind::Draft => "draft",
        }
    }

    /// What the detail panel calls its free-text field.
    pub fn detail_noun(&self) -> &'static str {
        match self {
            AppKind::Stats => "rating",
            AppKind::Draft => "analysis",
        }
    }

    /// Whether the secondary category filter is by round (draft) rather
    /// than by team (stats).
    pub fn filters_by_round(&self) -> bool {
        matches!(self, AppKind::Draft)
    }

    /// Whether the grid lets the user edit the Drafted column.
    pub fn tracks_drafted(&self) -> bool {
        matches!(self, AppKind::Draft)
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
