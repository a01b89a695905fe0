// Merge grid edits of the Drafted column back into the dataset.

use std::collections::HashMap;

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::record::{DraftStatus, PlayerRecord};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    /// The edited view referenced a player the dataset does not contain.
    #[error("edited grid references unknown player `{0}`")]
    UnknownPlayerKey(String),
}

/// One committed change of a player's drafted status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftChange {
    pub player: String,
    pub from: DraftStatus,
    pub to: DraftStatus,
}

/// Result of a reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Changes in the order they appeared in the edited view.
    pub changes: Vec<DraftChange>,
}

impl Reconciliation {
    /// Whether anything was committed. When true the caller must rebuild the
    /// view, since filtered rows and tallies may be stale.
    pub fn changed(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn changed_keys(&self) -> Vec<&str> {
        self.changes.iter().map(|c| c.player.as_str()).collect()
    }
}

/// Commit every `drafted` value in `edited` that differs from the dataset.
///
/// All keys are validated before anything is written, so an unknown key
/// leaves the dataset untouched. Only the drafted field is read from the
/// edited rows. A key repeated in the view takes its last value and is
/// reported at most once.
pub fn reconcile(
    dataset: &mut Dataset,
    edited: &[PlayerRecord],
) -> Result<Reconciliation, ReconcileError> {
    if let Some(unknown) = edited.iter().find(|row| !dataset.contains(&row.name)) {
        return Err(ReconcileError::UnknownPlayerKey(unknown.name.clone()));
    }

    // First-appearance order, last value wins.
    let mut order: Vec<&str> = Vec::with_capacity(edited.len());
    let mut wanted: HashMap<&str, DraftStatus> = HashMap::with_capacity(edited.len());
    for row in edited {
        if wanted.insert(row.name.as_str(), row.drafted).is_none() {
            order.push(row.name.as_str());
        }
    }

    let mut outcome = Reconciliation::default();
    for name in order {
        let Some(&status) = wanted.get(name) else {
            continue;
        };
        if dataset.get(name).map(|r| r.drafted) == Some(status) {
            continue;
        }
        if let Some(previous) = dataset.set_drafted(name, status) {
            info!("{}: {} -> {}", name, previous, status);
            outcome.changes.push(DraftChange {
                player: name.to_string(),
                from: previous,
                to: status,
            });
        }
    }

    if !outcome.changed() {
        debug!("reconciled {} rows, no drafted changes", edited.len());
    }
    Ok(outcome)
}

// ---------------------------------------------------------------------------
// Draft log
// ---------------------------------------------------------------------------

/// A committed change with the local time it was made.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftLogEntry {
    pub change: DraftChange,
    pub at: DateTime<Local>,
}

/// In-memory history of committed drafted changes for the session.
#[derive(Debug, Clone, Default)]
pub struct DraftLog {
    entries: Vec<DraftLogEntry>,
}

impl DraftLog {
    pub fn record(&mut self, outcome: &Reconciliation) {
        let now = Local::now();
        self.entries.extend(outcome.changes.iter().cloned().map(|change| DraftLogEntry {
            change,
            at: now,
        }));
    }

    /// Entries newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &DraftLogEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
