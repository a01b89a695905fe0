// Per-position summary statistics over the filtered view, and the drafted
// tally for the draft tracker.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::record::{DraftStatus, PlayerRecord};

/// Numeric attributes that can be summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    WeightedMean,
    #[serde(alias = "ci_lower")]
    DiscountedCiLower,
    CiUpper,
    Vbd,
    Value,
}

impl Metric {
    pub fn key(&self) -> &'static str {
        match self {
            Metric::WeightedMean => "weighted_mean",
            Metric::DiscountedCiLower => "discounted_ci_lower",
            Metric::CiUpper => "ci_upper",
            Metric::Vbd => "vbd",
            Metric::Value => "value",
        }
    }

    pub fn read(&self, record: &PlayerRecord) -> Option<f64> {
        match self {
            Metric::WeightedMean => record.weighted_mean,
            Metric::DiscountedCiLower => record.ci_lower,
            Metric::CiUpper => record.ci_upper,
            Metric::Vbd => record.vbd,
            Metric::Value => record.value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    Mean,
    Std,
    Min,
    Max,
}

impl Aggregate {
    pub fn key(&self) -> &'static str {
        match self {
            Aggregate::Mean => "mean",
            Aggregate::Std => "std",
            Aggregate::Min => "min",
            Aggregate::Max => "max",
        }
    }
}

/// Which aggregates to compute for one metric.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetricSpec {
    pub metric: Metric,
    pub aggregates: Vec<Aggregate>,
}

impl MetricSpec {
    pub fn new(metric: Metric, aggregates: &[Aggregate]) -> Self {
        MetricSpec {
            metric,
            aggregates: aggregates.to_vec(),
        }
    }

    /// The stats browser's default set.
    pub fn stats_defaults() -> Vec<MetricSpec> {
        use Aggregate::*;
        vec![
            MetricSpec::new(Metric::WeightedMean, &[Mean, Std, Min, Max]),
            MetricSpec::new(Metric::DiscountedCiLower, &[Mean, Min, Max]),
            MetricSpec::new(Metric::CiUpper, &[Mean, Min, Max]),
            MetricSpec::new(Metric::Vbd, &[Mean, Min, Max]),
        ]
    }

    /// The draft tracker's default set.
    pub fn draft_defaults() -> Vec<MetricSpec> {
        use Aggregate::*;
        vec![
            MetricSpec::new(Metric::Value, &[Mean, Min, Max]),
            MetricSpec::new(Metric::Vbd, &[Mean, Min, Max]),
        ]
    }
}

/// Flattened column labels, e.g. `weighted_mean_std`, in configured order.
pub fn column_labels(specs: &[MetricSpec]) -> Vec<String> {
    specs
        .iter()
        .flat_map(|s| {
            s.aggregates
                .iter()
                .map(move |a| format!("{}_{}", s.metric.key(), a.key()))
        })
        .collect()
}

/// Summary row for one position.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub position: String,
    /// Number of players in the group.
    pub count: usize,
    /// One value per label from [`column_labels`], same order. NaN where a
    /// statistic is undefined.
    pub values: Vec<f64>,
}

/// Group the view by position and compute the configured aggregates.
///
/// Missing metric values are skipped. Std is the sample standard deviation
/// and is NaN for fewer than two values. An empty view yields no groups.
pub fn summarize<'a, I>(view: I, specs: &[MetricSpec]) -> Vec<GroupSummary>
where
    I: IntoIterator<Item = &'a PlayerRecord>,
{
    let mut groups: BTreeMap<&str, Vec<&PlayerRecord>> = BTreeMap::new();
    for record in view {
        groups.entry(record.position.as_str()).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(position, members)| {
            let mut values = Vec::new();
            for spec in specs {
                let samples: Vec<f64> = members
                    .iter()
                    .filter_map(|r| spec.metric.read(r))
                    .filter(|v| v.is_finite())
                    .collect();
                for agg in &spec.aggregates {
                    values.push(aggregate(&samples, *agg));
                }
            }
            GroupSummary {
                position: position.to_string(),
                count: members.len(),
                values,
            }
        })
        .collect()
}

fn aggregate(samples: &[f64], agg: Aggregate) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    match agg {
        Aggregate::Mean => mean(samples),
        Aggregate::Std => sample_std(samples),
        Aggregate::Min => samples.iter().copied().fold(f64::INFINITY, f64::min),
        Aggregate::Max => samples.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}

fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

fn sample_std(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return f64::NAN;
    }
    let m = mean(samples);
    let var = samples.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    var.sqrt()
}

/// Round to `precision` decimal places for display. NaN stays NaN.
pub fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Format a summary value with fixed precision; undefined values show as NaN.
pub fn format_value(value: f64, precision: u32) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.*}", precision as usize, round_to(value, precision))
    }
}

// ---------------------------------------------------------------------------
// Draft tally
// ---------------------------------------------------------------------------

/// Drafted-status counts over the whole dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftTally {
    pub undrafted: usize,
    pub my_team: usize,
    pub other_team: usize,
    /// My-team players per position, ordered by position.
    pub my_team_by_position: BTreeMap<String, usize>,
}

impl DraftTally {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PlayerRecord>,
    {
        let mut tally = DraftTally::default();
        for r in records {
            match r.drafted {
                DraftStatus::Undrafted => tally.undrafted += 1,
                DraftStatus::MyTeam => {
                    tally.my_team += 1;
                    *tally
                        .my_team_by_position
                        .entry(r.position.clone())
                        .or_insert(0) += 1;
                }
                DraftStatus::OtherTeam => tally.other_team += 1,
            }
        }
        tally
    }

    pub fn drafted(&self) -> usize {
        self.my_team + self.other_team
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
