//! Monthly Snapshots
//!
//! A snapshot is one month of the public leaderboard, stored as
//! `monthly_YYYY.MM.csv` with at least `organization` and `arena_score`
//! columns (one row per model).

use chrono::NaiveDate;
use regex::Regex;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::PipelineError;

static FILE_NAME_PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

/// `monthly_YYYY.MM.csv`, compiled on first use
fn file_name_pattern() -> Result<&'static Regex, PipelineError> {
    FILE_NAME_PATTERN
        .get_or_init(|| Regex::new(r"^monthly_(\d{4})\.(\d{2})\.csv$"))
        .as_ref()
        .map_err(|e| PipelineError::Internal(format!("Regex error: {}", e)))
}

/// One model's entry in a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRow {
    pub organization: String,
    pub score: f64,
}

/// A snapshot file found on disk
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotFile {
    /// First day of the snapshot's month
    pub month: NaiveDate,
    pub path: PathBuf,
}

impl SnapshotFile {
    /// `YYYY-MM-01` label used on the chart
    pub fn label(&self) -> String {
        self.month.format("%Y-%m-%d").to_string()
    }
}

/// Month encoded in a snapshot file name, if it is one
pub fn parse_file_name(name: &str) -> Result<Option<NaiveDate>, PipelineError> {
    let Some(caps) = file_name_pattern()?.captures(name) else {
        return Ok(None);
    };

    let year: i32 = caps[1]
        .parse()
        .map_err(|_| PipelineError::InvalidFileName(name.to_string()))?;
    let month: u32 = caps[2]
        .parse()
        .map_err(|_| PipelineError::InvalidFileName(name.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, 1)
        .map(Some)
        .ok_or_else(|| PipelineError::InvalidFileName(name.to_string()))
}

/// Find snapshot files in `dir`, oldest month first
pub fn discover(dir: &Path) -> Result<Vec<SnapshotFile>, PipelineError> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        match parse_file_name(name) {
            Ok(Some(month)) => files.push(SnapshotFile {
                month,
                path: entry.path(),
            }),
            Ok(None) => {}
            Err(e) => tracing::warn!(file = %name, error = %e, "Ignoring snapshot file"),
        }
    }

    files.sort_by_key(|f| f.month);
    Ok(files)
}

/// Read the model rows of one snapshot
///
/// Rows whose score is not a number are skipped.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<SnapshotRow>, PipelineError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| PipelineError::MissingColumn(name.to_string()))
    };
    let org_col = column("organization")?;
    let score_col = column("arena_score")?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;

        let organization = record.get(org_col).map(str::trim).unwrap_or_default();
        let score = record
            .get(score_col)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|s| s.is_finite());

        match score {
            Some(score) if !organization.is_empty() => rows.push(SnapshotRow {
                organization: organization.to_string(),
                score,
            }),
            _ => {}
        }
    }

    Ok(rows)
}

/// Read the model rows of a snapshot file
pub fn read_file(path: &Path) -> Result<Vec<SnapshotRow>, PipelineError> {
    let file = std::fs::File::open(path)?;
    read_rows(file)
}
