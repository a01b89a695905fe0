// Filter engine: position / team / round selections plus a name search.

use std::collections::BTreeSet;

use crate::dataset::Dataset;
use crate::record::PlayerRecord;

/// Current filter selections. `None` (or an empty search) means the filter
/// is inactive ("All").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub position: Option<String>,
    pub team: Option<String>,
    pub round: Option<u32>,
    pub search: String,
}

impl FilterCriteria {
    pub fn is_active(&self) -> bool {
        self.position.is_some()
            || self.team.is_some()
            || self.round.is_some()
            || !self.search.trim().is_empty()
    }

    /// Whether a single record passes every active filter.
    pub fn matches(&self, record: &PlayerRecord) -> bool {
        if let Some(pos) = &self.position {
            if record.position != *pos {
                return false;
            }
        }
        if let Some(team) = &self.team {
            if record.team != *team {
                return false;
            }
        }
        if let Some(round) = self.round {
            if record.round != Some(round) {
                return false;
            }
        }
        let needle = self.search.trim();
        if !needle.is_empty() && !contains_ignore_case(&record.name, needle) {
            return false;
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Produce the filtered view: the records that pass `criteria`, in their
/// original order.
///
/// Accepts any sequence of record references so an already filtered view can
/// be filtered again.
pub fn filter_records<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a PlayerRecord>
where
    I: IntoIterator<Item = &'a PlayerRecord>,
{
    records.into_iter().filter(|r| criteria.matches(r)).collect()
}

// ---------------------------------------------------------------------------
// Facet options
// ---------------------------------------------------------------------------

/// A filterable category column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Position,
    Team,
    Round,
}

impl Facet {
    pub fn label(&self) -> &'static str {
        match self {
            Facet::Position => "Position",
            Facet::Team => "Team",
            Facet::Round => "Round",
        }
    }
}

/// Distinct values present in the dataset for `facet`, sorted. Rounds sort
/// numerically. Empty strings are not offered as options.
pub fn facet_options(dataset: &Dataset, facet: Facet) -> Vec<String> {
    match facet {
        Facet::Position => distinct_text(dataset.records().iter().map(|r| r.position.as_str())),
        Facet::Team => distinct_text(dataset.records().iter().map(|r| r.team.as_str())),
        Facet::Round => dataset
            .records()
            .iter()
            .filter_map(|r| r.round)
            .collect::<BTreeSet<u32>>()
            .into_iter()
            .map(|r| r.to_string())
            .collect(),
    }
}

fn distinct_text<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Step a selection through `All -> options[0] -> ... -> options[n-1] -> All`.
/// A current value that is no longer offered wraps back to `All`.
pub fn cycle_option(current: Option<&str>, options: &[String]) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(value) => {
            let idx = options.iter().position(|o| o == value);
            match idx {
                Some(i) if i + 1 < options.len() => Some(options[i + 1].clone()),
                _ => None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
