// CSV loading for both dashboards.
//
// The stats app reads a merged ratings export whose name column is the
// dataframe index (`index`). The draft app reads a rankings sheet with
// spreadsheet-style headers ("Analyst Rating") and an optional Drafted column.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::app::AppKind;
use crate::dataset::Dataset;
use crate::record::{DraftStatus, PlayerRecord};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} is missing required column `{column}`")]
    MissingColumn { path: String, column: String },
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

/// Row of the merged player ratings export. Unlisted columns are ignored.
#[derive(Debug, Deserialize)]
struct RawStatsRow {
    #[serde(rename = "index", alias = "name")]
    name: String,
    pos: String,
    #[serde(default)]
    team: Option<String>,
    weighted_mean: Option<f64>,
    discounted_ci_lower: Option<f64>,
    ci_upper: Option<f64>,
    vbd: Option<f64>,
    rating_label: Option<String>,
    #[serde(default)]
    rating: Option<String>,
}

/// Row of the draft rankings sheet. Counting columns are read as f64
/// because spreadsheet exports often write `3.0` for integers.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawDraftRow {
    Rank: Option<f64>,
    Player: String,
    Position: String,
    #[serde(default)]
    Team: Option<String>,
    Value: Option<f64>,
    VBD: Option<f64>,
    Tier: Option<f64>,
    Rating: Option<f64>,
    Rookie: Option<String>,
    Round: Option<f64>,
    #[serde(rename = "Analyst Rating", default)]
    analyst_rating: Option<String>,
    #[serde(default)]
    Drafted: Option<String>,
}

/// Required headers per app. Each entry lists the accepted spellings.
const STATS_COLUMNS: &[&[&str]] = &[
    &["index", "name"],
    &["pos"],
    &["team"],
    &["weighted_mean"],
    &["discounted_ci_lower"],
    &["ci_upper"],
    &["vbd"],
    &["rating_label"],
];

const DRAFT_COLUMNS: &[&[&str]] = &[
    &["Rank"],
    &["Player"],
    &["Position"],
    &["Team"],
    &["Value"],
    &["VBD"],
    &["Tier"],
    &["Rating"],
    &["Rookie"],
    &["Round"],
];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

fn whole(v: Option<f64>) -> Option<u32> {
    finite(v).filter(|x| *x >= 0.0).map(|x| x.round() as u32)
}

fn text(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Some(true),
        "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}

fn check_headers(
    headers: &csv::StringRecord,
    required: &[&[&str]],
    source: &str,
) -> Result<(), LoadError> {
    for spellings in required {
        let present = headers
            .iter()
            .any(|h| spellings.iter().any(|s| h.trim() == *s));
        if !present {
            return Err(LoadError::MissingColumn {
                path: source.to_string(),
                column: spellings[0].to_string(),
            });
        }
    }
    Ok(())
}

fn stats_record(raw: RawStatsRow) -> PlayerRecord {
    let mut record = PlayerRecord::new(raw.name.trim(), raw.pos.trim());
    record.team = text(raw.team).unwrap_or_default();
    record.weighted_mean = finite(raw.weighted_mean);
    record.ci_lower = finite(raw.discounted_ci_lower);
    record.ci_upper = finite(raw.ci_upper);
    record.vbd = finite(raw.vbd);
    record.rating_label = text(raw.rating_label);
    record.narrative = text(raw.rating);
    record
}

fn draft_record(raw: RawDraftRow) -> PlayerRecord {
    let mut record = PlayerRecord::new(raw.Player.trim(), raw.Position.trim());
    record.team = text(raw.Team).unwrap_or_default();
    record.rank = whole(raw.Rank);
    record.value = finite(raw.Value);
    record.vbd = finite(raw.VBD);
    record.tier = whole(raw.Tier);
    record.rating = finite(raw.Rating).map(|x| x.round() as i64);
    record.rookie = raw.Rookie.as_deref().and_then(parse_flag);
    record.round = whole(raw.Round);
    record.narrative = text(raw.analyst_rating);
    record.drafted = raw
        .Drafted
        .as_deref()
        .map(DraftStatus::from_label)
        .unwrap_or_default();
    record
}

// ---------------------------------------------------------------------------
// Reader-based loaders
// ---------------------------------------------------------------------------

/// Parse player rows for `kind` from any reader. `source` names the input in
/// error messages. Malformed rows are logged and skipped; a missing required
/// column fails the whole load.
pub fn rows_from_reader<R: Read>(
    kind: AppKind,
    rdr: R,
    source: &str,
) -> Result<Vec<PlayerRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(rdr);
    let headers = reader.headers().map_err(|e| LoadError::Csv {
        path: source.to_string(),
        source: e,
    })?;

    let mut rows = Vec::new();
    match kind {
        AppKind::Stats => {
            check_headers(headers, STATS_COLUMNS, source)?;
            for result in reader.deserialize::<RawStatsRow>() {
                match result {
                    Ok(raw) if raw.name.trim().is_empty() => {
                        warn!("skipping stats row with empty player name");
                    }
                    Ok(raw) => rows.push(stats_record(raw)),
                    Err(e) => warn!("skipping malformed stats row in {}: {}", source, e),
                }
            }
        }
        AppKind::Draft => {
            check_headers(headers, DRAFT_COLUMNS, source)?;
            for result in reader.deserialize::<RawDraftRow>() {
                match result {
                    Ok(raw) if raw.Player.trim().is_empty() => {
                        warn!("skipping draft row with empty player name");
                    }
                    Ok(raw) => rows.push(draft_record(raw)),
                    Err(e) => warn!("skipping malformed draft row in {}: {}", source, e),
                }
            }
        }
    }
    Ok(rows)
}

/// Load the dataset for `kind` from a CSV file on disk.
pub fn load_dataset(kind: AppKind, path: &Path) -> Result<Dataset, LoadError> {
    let shown = path.display().to_string();
    let file = File::open(path).map_err(|e| LoadError::Io {
        path: shown.clone(),
        source: e,
    })?;
    let rows = rows_from_reader(kind, file, &shown)?;
    let dataset = Dataset::from_records(rows);
    info!("loaded {} {} players from {}", dataset.len(), kind, shown);
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const STATS_CSV: &str = "\
index,pos,team,weighted_mean,discounted_ci_lower,ci_upper,vbd,rating_label,rating
Tom Brady,QB,TB,18.4,15.1,21.0,40.2,bullish,Still slinging it.
Derrick Henry,RB,TEN,16.9,12.0,20.3,88.0,mega bullish,
";

    const DRAFT_CSV: &str = "\
Rank,Player,Position,Team,Value,VBD,Tier,Rating,Rookie,Round,Analyst Rating,Extra
1.0,Christian McCaffrey,RB,SF,62,120.5,1,5,No,1,Locked-in RB1.,x
2,Bijan Robinson,RB,ATL,55,101,1,4,Yes,1.0,,y
";

    #[test]
    fn stats_rows_parse() {
        let rows = rows_from_reader(AppKind::Stats, STATS_CSV.as_bytes(), "stats.csv").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Tom Brady");
        assert_eq!(rows[0].team, "TB");
        assert_eq!(rows[0].rating_label.as_deref(), Some("bullish"));
        assert_eq!(rows[0].narrative.as_deref(), Some("Still slinging it."));
        assert!((rows[1].vbd.unwrap() - 88.0).abs() < f64::EPSILON);
        // Empty narrative cell is absent, not an empty string.
        assert!(rows[1].narrative.is_none());
    }

    #[test]
    fn draft_rows_parse_floats_as_whole_numbers() {
        let rows = rows_from_reader(AppKind::Draft, DRAFT_CSV.as_bytes(), "draft.csv").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rank, Some(1));
        assert_eq!(rows[1].round, Some(1));
        assert_eq!(rows[0].rating, Some(5));
        assert_eq!(rows[0].rookie, Some(false));
        assert_eq!(rows[1].rookie, Some(true));
        assert_eq!(rows[0].narrative.as_deref(), Some("Locked-in RB1."));
        assert_eq!(rows[1].drafted, DraftStatus::Undrafted);
    }

    #[test]
    fn draft_drafted_column_is_parsed() {
        let csv = "\
Rank,Player,Position,Team,Value,VBD,Tier,Rating,Rookie,Round,Drafted
1,A,RB,SF,10,5,1,3,No,1,My Team
2,B,WR,KC,9,4,1,3,No,1,bogus
";
        let rows = rows_from_reader(AppKind::Draft, csv.as_bytes(), "draft.csv").unwrap();
        assert_eq!(rows[0].drafted, DraftStatus::MyTeam);
        assert_eq!(rows[1].drafted, DraftStatus::Undrafted);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "index,pos,team\nTom Brady,QB,TB\n";
        let err = rows_from_reader(AppKind::Stats, csv.as_bytes(), "bad.csv").unwrap_err();
        match err {
            LoadError::MissingColumn { column, .. } => assert_eq!(column, "weighted_mean"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn name_alias_is_accepted() {
        let csv = "\
name,pos,team,weighted_mean,discounted_ci_lower,ci_upper,vbd,rating_label
Tom Brady,QB,TB,18.4,15.1,21.0,40.2,bullish
";
        let rows = rows_from_reader(AppKind::Stats, csv.as_bytes(), "alias.csv").unwrap();
        assert_eq!(rows[0].name, "Tom Brady");
    }

    #[test]
    fn malformed_row_is_skipped() {
        let csv = "\
index,pos,team,weighted_mean,discounted_ci_lower,ci_upper,vbd,rating_label
Good,QB,TB,18.4,15.1,21.0,40.2,bullish
Bad,QB,TB,not-a-number,15.1,21.0,40.2,bullish
";
        let rows = rows_from_reader(AppKind::Stats, csv.as_bytes(), "mixed.csv").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Good");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_dataset(AppKind::Stats, Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn load_dataset_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("ffdash_loader_{}.csv", std::process::id()));
        std::fs::write(&path, STATS_CSV).unwrap();
        let dataset = load_dataset(AppKind::Stats, &path).unwrap();
        assert_eq!(dataset.len(), 2);
        assert!(dataset.contains("Derrick Henry"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn parse_flag_variants() {
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag("?"), None);
    }
}
