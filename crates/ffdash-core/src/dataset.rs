// The session's player table, keyed by name.

use std::collections::HashMap;

use tracing::warn;

use crate::record::{DraftStatus, PlayerRecord};

/// Ordered player rows with a name index.
///
/// The key space is fixed at construction. Rows can only be changed through
/// [`Dataset::set_drafted`], which the reconciliation step uses; every other
/// field is read-only after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<PlayerRecord>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Build a dataset from loaded rows. Later rows whose name is already
    /// present are skipped so that names stay unique.
    pub fn from_records(rows: Vec<PlayerRecord>) -> Self {
        let mut records = Vec::with_capacity(rows.len());
        let mut index = HashMap::with_capacity(rows.len());
        for row in rows {
            if index.contains_key(&row.name) {
                warn!("duplicate player '{}', keeping the first row", row.name);
                continue;
            }
            index.insert(row.name.clone(), records.len());
            records.push(row);
        }
        Dataset { records, index }
    }

    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&PlayerRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Overwrite the drafted status of `name`, returning the previous value.
    /// Returns `None` when the key is unknown.
    pub(crate) fn set_drafted(&mut self, name: &str, status: DraftStatus) -> Option<DraftStatus> {
        let idx = *self.index.get(name)?;
        let record = &mut self.records[idx];
        let previous = record.drafted;
        record.drafted = status;
        Some(previous)
    }
}
