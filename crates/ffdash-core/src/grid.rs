// Grid column configuration and the grid's edit boundary.

use crate::app::AppKind;
use crate::record::{DraftStatus, PlayerRecord};

/// Every column either dashboard can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Rank,
    Name,
    Position,
    Team,
    WeightedMean,
    CiLower,
    CiUpper,
    Value,
    Vbd,
    Tier,
    Rating,
    RatingLabel,
    Rookie,
    Round,
    Narrative,
    Drafted,
}

/// Display configuration for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub column: Column,
    pub header: &'static str,
    pub editable: bool,
    pub hidden: bool,
}

const fn shown(column: Column, header: &'static str) -> ColumnSpec {
    ColumnSpec {
        column,
        header,
        editable: false,
        hidden: false,
    }
}

const fn hidden(column: Column, header: &'static str) -> ColumnSpec {
    ColumnSpec {
        column,
        header,
        editable: false,
        hidden: true,
    }
}

const STATS_COLUMNS: &[ColumnSpec] = &[
    shown(Column::Name, "Player Name"),
    shown(Column::Position, "pos"),
    shown(Column::Team, "team"),
    shown(Column::WeightedMean, "weighted_mean"),
    shown(Column::CiLower, "discounted_ci_lower"),
    shown(Column::CiUpper, "ci_upper"),
    shown(Column::Vbd, "vbd"),
    shown(Column::RatingLabel, "rating_label"),
    hidden(Column::Narrative, "rating"),
];

const DRAFT_COLUMNS: &[ColumnSpec] = &[
    shown(Column::Rank, "Rank"),
    shown(Column::Name, "Player"),
    shown(Column::Position, "Position"),
    shown(Column::Team, "Team"),
    shown(Column::Value, "Value"),
    shown(Column::Vbd, "VBD"),
    shown(Column::Tier, "Tier"),
    shown(Column::Rating, "Rating"),
    shown(Column::Rookie, "Rookie"),
    shown(Column::Round, "Round"),
    hidden(Column::Narrative, "Analyst Rating"),
    ColumnSpec {
        column: Column::Drafted,
        header: "Drafted",
        editable: true,
        hidden: false,
    },
];

/// Full column configuration for an app, hidden columns included.
pub fn columns_for(kind: AppKind) -> &'static [ColumnSpec] {
    match kind {
        AppKind::Stats => STATS_COLUMNS,
        AppKind::Draft => DRAFT_COLUMNS,
    }
}

/// The columns the grid actually draws.
pub fn visible_columns(kind: AppKind) -> Vec<ColumnSpec> {
    columns_for(kind).iter().copied().filter(|c| !c.hidden).collect()
}

fn opt_float(v: Option<f64>, precision: usize) -> String {
    v.map(|x| format!("{:.*}", precision, x))
        .unwrap_or_else(|| "-".to_string())
}

fn opt_int<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| "-".to_string())
}

fn opt_text(v: Option<&str>) -> String {
    v.unwrap_or("-").to_string()
}

/// Text shown in a grid cell. Absent values render as `-`.
pub fn cell_text(record: &PlayerRecord, column: Column, precision: usize) -> String {
    match column {
        Column::Rank => opt_int(record.rank),
        Column::Name => record.name.clone(),
        Column::Position => record.position.clone(),
        Column::Team => {
            if record.team.is_empty() {
                "-".to_string()
            } else {
                record.team.clone()
            }
        }
        Column::WeightedMean => opt_float(record.weighted_mean, precision),
        Column::CiLower => opt_float(record.ci_lower, precision),
        Column::CiUpper => opt_float(record.ci_upper, precision),
        Column::Value => opt_float(record.value, precision),
        Column::Vbd => opt_float(record.vbd, precision),
        Column::Tier => opt_int(record.tier),
        Column::Rating => opt_int(record.rating),
        Column::RatingLabel => opt_text(record.rating_label.as_deref()),
        Column::Rookie => match record.rookie {
            Some(true) => "Yes".to_string(),
            Some(false) => "No".to_string(),
            None => "-".to_string(),
        },
        Column::Round => opt_int(record.round),
        Column::Narrative => opt_text(record.narrative.as_deref()),
        Column::Drafted => record.drafted.label().to_string(),
    }
}

/// What the grid hands back after the user edits a Drafted cell: every
/// displayed row, with the edited row's status replaced.
pub fn edited_rows(view: &[&PlayerRecord], key: &str, status: DraftStatus) -> Vec<PlayerRecord> {
    view.iter()
        .map(|r| {
            let mut row = (*r).clone();
            if row.name == key {
                row.drafted = status;
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_columns_match_export_headers() {
        let headers: Vec<&str> = visible_columns(AppKind::Stats).iter().map(|c| c.header).collect();
        assert_eq!(headers[0], "Player Name");
        assert!(headers.contains(&"rating_label"));
        assert!(!headers.contains(&"rating"));
        assert!(columns_for(AppKind::Stats).iter().all(|c| !c.editable));
    }

    #[test]
    fn only_drafted_is_editable_in_draft_app() {
        let editable: Vec<Column> = columns_for(AppKind::Draft)
            .iter()
            .filter(|c| c.editable)
            .map(|c| c.column)
            .collect();
        assert_eq!(editable, vec![Column::Drafted]);
        assert!(columns_for(AppKind::Draft)
            .iter()
            .any(|c| c.column == Column::Narrative && c.hidden));
    }

    #[test]
    fn cell_text_formats() {
        let mut r = PlayerRecord::new("A", "RB");
        r.value = Some(12.347);
        r.rookie = Some(true);
        r.drafted = DraftStatus::OtherTeam;
        assert_eq!(cell_text(&r, Column::Value, 2), "12.35");
        assert_eq!(cell_text(&r, Column::Vbd, 2), "-");
        assert_eq!(cell_text(&r, Column::Rookie, 2), "Yes");
        assert_eq!(cell_text(&r, Column::Team, 2), "-");
        assert_eq!(cell_text(&r, Column::Drafted, 2), "Other Team");
    }

    #[test]
    fn edited_rows_changes_only_the_target() {
        let a = PlayerRecord::new("A", "RB");
        let b = PlayerRecord::new("B", "WR");
        let view = vec![&a, &b];
        let rows = edited_rows(&view, "B", DraftStatus::MyTeam);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].drafted, DraftStatus::Undrafted);
        assert_eq!(rows[1].drafted, DraftStatus::MyTeam);
    }
}
