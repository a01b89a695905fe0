// Session context and the per-interaction render pass.
//
// The hosting shell owns one `SessionContext`, feeds it `Command`s, and calls
// `render` after every interaction. Nothing is cached between renders: the
// filtered rows, summaries and detail panel are rebuilt from the dataset,
// the current filters and the selection each time.

use tracing::{debug, info, warn};

use crate::app::AppKind;
use crate::dataset::Dataset;
use crate::detail::{detail_for, DetailPanel};
use crate::filter::{facet_options, filter_records, Facet, FilterCriteria};
use crate::grid::{visible_columns, ColumnSpec};
use crate::reconcile::{reconcile, DraftLog, ReconcileError, Reconciliation};
use crate::record::PlayerRecord;
use crate::summary::{column_labels, summarize, DraftTally, GroupSummary, MetricSpec};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    #[error("{app} dashboard does not support {what}")]
    Unsupported { app: AppKind, what: &'static str },
}

/// A user interaction, as reported by the presenter.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetPosition(Option<String>),
    SetTeam(Option<String>),
    SetRound(Option<u32>),
    SetSearch(String),
    ClearFilters,
    /// Select a row by player name, or clear the selection.
    Select(Option<String>),
    /// Rows returned by the grid after the user edited a Drafted cell.
    CommitEdits(Vec<PlayerRecord>),
}

/// Whether the presenter needs to redraw after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Refresh,
}

/// Everything one dashboard session owns.
#[derive(Debug, Clone)]
pub struct SessionContext {
    kind: AppKind,
    dataset: Dataset,
    criteria: FilterCriteria,
    selection: Option<String>,
    log: DraftLog,
    summary_specs: Vec<MetricSpec>,
}

impl SessionContext {
    pub fn new(kind: AppKind, dataset: Dataset, summary_specs: Vec<MetricSpec>) -> Self {
        SessionContext {
            kind,
            dataset,
            criteria: FilterCriteria::default(),
            selection: None,
            log: DraftLog::default(),
            summary_specs,
        }
    }

    pub fn kind(&self) -> AppKind {
        self.kind
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn draft_log(&self) -> &DraftLog {
        &self.log
    }

    /// Apply one interaction.
    pub fn handle(&mut self, command: Command) -> Result<Outcome, SessionError> {
        match command {
            Command::SetPosition(position) => Ok(self.set_filter(|c| &mut c.position, position)),
            Command::SetTeam(team) => Ok(self.set_filter(|c| &mut c.team, team)),
            Command::SetRound(round) => Ok(self.set_filter(|c| &mut c.round, round)),
            Command::SetSearch(search) => Ok(self.set_filter(|c| &mut c.search, search)),
            Command::ClearFilters => {
                if self.criteria == FilterCriteria::default() {
                    return Ok(Outcome::Unchanged);
                }
                self.criteria = FilterCriteria::default();
                debug!("filters cleared");
                Ok(Outcome::Refresh)
            }
            Command::Select(selection) => {
                if let Some(name) = &selection {
                    if !self.dataset.contains(name) {
                        warn!("ignoring selection of unknown player '{}'", name);
                        return Ok(Outcome::Unchanged);
                    }
                }
                if self.selection == selection {
                    return Ok(Outcome::Unchanged);
                }
                self.selection = selection;
                Ok(Outcome::Refresh)
            }
            Command::CommitEdits(rows) => {
                let outcome = self.commit(&rows)?;
                if outcome.changed() {
                    Ok(Outcome::Refresh)
                } else {
                    Ok(Outcome::Unchanged)
                }
            }
        }
    }

    fn set_filter<T: PartialEq + std::fmt::Debug>(
        &mut self,
        field: impl FnOnce(&mut FilterCriteria) -> &mut T,
        value: T,
    ) -> Outcome {
        let slot = field(&mut self.criteria);
        if *slot == value {
            return Outcome::Unchanged;
        }
        debug!("filter changed: {:?} -> {:?}", slot, value);
        *slot = value;
        Outcome::Refresh
    }

    /// Reconcile grid edits into the dataset and log any changes.
    pub fn commit(&mut self, rows: &[PlayerRecord]) -> Result<Reconciliation, SessionError> {
        if !self.kind.tracks_drafted() {
            return Err(SessionError::Unsupported {
                app: self.kind,
                what: "drafted edits",
            });
        }
        let outcome = reconcile(&mut self.dataset, rows).inspect_err(|e| {
            warn!("rejected grid edit: {}", e);
        })?;
        if outcome.changed() {
            info!("committed {} drafted change(s)", outcome.changes.len());
            self.log.record(&outcome);
        }
        Ok(outcome)
    }
}

// ---------------------------------------------------------------------------
// Render
// ---------------------------------------------------------------------------

/// Everything the presenter draws for one frame.
#[derive(Debug, Clone)]
pub struct View<'a> {
    pub kind: AppKind,
    pub columns: Vec<ColumnSpec>,
    /// Filtered rows in dataset order.
    pub rows: Vec<&'a PlayerRecord>,
    /// Index of the selected row within `rows`, if it is visible.
    pub selected_index: Option<usize>,
    pub detail: DetailPanel,
    pub summary_labels: Vec<String>,
    pub summary: Vec<GroupSummary>,
    /// Drafted tally over the whole dataset (draft app only).
    pub tally: Option<DraftTally>,
    pub position_options: Vec<String>,
    /// Team options (stats) or round options (draft).
    pub secondary_facet: Facet,
    pub secondary_options: Vec<String>,
    pub criteria: &'a FilterCriteria,
    /// Committed drafted changes (draft app only).
    pub draft_log: Option<&'a DraftLog>,
    pub total_players: usize,
}

impl View<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected(&self) -> Option<&PlayerRecord> {
        self.selected_index.map(|i| self.rows[i])
    }
}

/// Rebuild the full view from the session's current state.
pub fn render(ctx: &SessionContext) -> View<'_> {
    let rows = filter_records(ctx.dataset.records(), &ctx.criteria);
    let selected_index = ctx
        .selection
        .as_deref()
        .and_then(|key| rows.iter().position(|r| r.name == key));
    let detail = detail_for(ctx.kind, selected_index.map(|i| rows[i]));
    let summary = summarize(rows.iter().copied(), &ctx.summary_specs);
    let tally = ctx
        .kind
        .tracks_drafted()
        .then(|| DraftTally::from_records(ctx.dataset.records()));
    let secondary_facet = if ctx.kind.filters_by_round() {
        Facet::Round
    } else {
        Facet::Team
    };

    View {
        kind: ctx.kind,
        columns: visible_columns(ctx.kind),
        selected_index,
        detail,
        summary_labels: column_labels(&ctx.summary_specs),
        summary,
        tally,
        position_options: facet_options(&ctx.dataset, Facet::Position),
        secondary_facet,
        secondary_options: facet_options(&ctx.dataset, secondary_facet),
        criteria: &ctx.criteria,
        draft_log: ctx.kind.tracks_drafted().then_some(&ctx.log),
        total_players: ctx.dataset.len(),
        rows,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::edited_rows;
    use crate::record::DraftStatus;

    fn draft_session() -> SessionContext {
        let mut a = PlayerRecord::new("A", "RB");
        a.round = Some(1);
        a.narrative = Some("Bell cow.".into());
        let mut b = PlayerRecord::new("B", "WR");
        b.round = Some(2);
        SessionContext::new(
            AppKind::Draft,
            Dataset::from_records(vec![a, b]),
            MetricSpec::draft_defaults(),
        )
    }

    #[test]
    fn position_filter_scenario() {
        let mut s = draft_session();
        assert_eq!(s.handle(Command::SetPosition(Some("RB".into()))).unwrap(), Outcome::Refresh);
        let view = render(&s);
        let names: Vec<&str> = view.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn same_filter_twice_is_unchanged() {
        let mut s = draft_session();
        s.handle(Command::SetRound(Some(2))).unwrap();
        assert_eq!(s.handle(Command::SetRound(Some(2))).unwrap(), Outcome::Unchanged);
        assert_eq!(s.handle(Command::ClearFilters).unwrap(), Outcome::Refresh);
        assert_eq!(s.handle(Command::ClearFilters).unwrap(), Outcome::Unchanged);
    }

    #[test]
    fn reconciliation_scenario() {
        let mut s = draft_session();
        let rows = {
            let view = render(&s);
            edited_rows(&view.rows, "A", DraftStatus::MyTeam)
        };
        let outcome = s.commit(&rows).unwrap();
        assert_eq!(outcome.changed_keys(), vec!["A"]);
        assert_eq!(s.dataset().get("A").unwrap().drafted, DraftStatus::MyTeam);
        assert_eq!(s.dataset().get("B").unwrap().drafted, DraftStatus::Undrafted);
        assert_eq!(s.draft_log().len(), 1);

        let view = render(&s);
        let tally = view.tally.unwrap();
        assert_eq!(tally.my_team, 1);
        assert_eq!(tally.undrafted, 1);
    }

    #[test]
    fn commit_with_no_change_is_unchanged() {
        let mut s = draft_session();
        let rows: Vec<PlayerRecord> = s.dataset().records().to_vec();
        assert_eq!(s.handle(Command::CommitEdits(rows)).unwrap(), Outcome::Unchanged);
        assert!(s.draft_log().is_empty());
    }

    #[test]
    fn commit_unknown_key_surfaces_error() {
        let mut s = draft_session();
        let err = s
            .handle(Command::CommitEdits(vec![PlayerRecord::new("Ghost", "K")]))
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::Reconcile(ReconcileError::UnknownPlayerKey("Ghost".into()))
        );
    }

    #[test]
    fn stats_session_rejects_edits() {
        let mut s = SessionContext::new(
            AppKind::Stats,
            Dataset::from_records(vec![PlayerRecord::new("A", "RB")]),
            MetricSpec::stats_defaults(),
        );
        let rows = s.dataset().records().to_vec();
        assert!(matches!(
            s.commit(&rows),
            Err(SessionError::Unsupported { .. })
        ));
        assert!(render(&s).tally.is_none());
        assert_eq!(render(&s).secondary_facet, Facet::Team);
    }

    #[test]
    fn selection_drives_detail_panel() {
        let mut s = draft_session();
        assert!(matches!(render(&s).detail, DetailPanel::Prompt(_)));

        s.handle(Command::Select(Some("A".into()))).unwrap();
        let view = render(&s);
        assert_eq!(view.selected_index, Some(0));
        assert_eq!(
            view.detail,
            DetailPanel::Player {
                name: "A".into(),
                text: "Bell cow.".into()
            }
        );

        s.handle(Command::Select(Some("B".into()))).unwrap();
        assert!(render(&s).detail.is_error());
    }

    #[test]
    fn selection_hidden_by_filter_shows_prompt() {
        let mut s = draft_session();
        s.handle(Command::Select(Some("A".into()))).unwrap();
        s.handle(Command::SetPosition(Some("WR".into()))).unwrap();
        let view = render(&s);
        assert_eq!(view.selected_index, None);
        assert!(matches!(view.detail, DetailPanel::Prompt(_)));
        // The key is remembered and comes back when the filter is cleared.
        s.handle(Command::ClearFilters).unwrap();
        assert_eq!(render(&s).selected_index, Some(0));
    }

    #[test]
    fn selecting_unknown_player_is_ignored() {
        let mut s = draft_session();
        assert_eq!(
            s.handle(Command::Select(Some("Nobody".into()))).unwrap(),
            Outcome::Unchanged
        );
        assert!(s.selection().is_none());
    }

    #[test]
    fn empty_result_renders() {
        let mut s = draft_session();
        s.handle(Command::SetSearch("zzz".into())).unwrap();
        let view = render(&s);
        assert!(view.is_empty());
        assert!(view.summary.is_empty());
        assert_eq!(view.total_players, 2);
    }

    #[test]
    fn render_lists_facet_options() {
        let s = draft_session();
        let view = render(&s);
        assert_eq!(view.position_options, vec!["RB", "WR"]);
        assert_eq!(view.secondary_facet, Facet::Round);
        assert_eq!(view.secondary_options, vec!["1", "2"]);
        assert!(view.draft_log.is_some_and(|log| log.is_empty()));
    }
}
