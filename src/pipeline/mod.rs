//! Monthly Aggregation Pipeline
//!
//! Builds a `Leaderboard` from a directory of monthly leaderboard snapshots:
//! for every month and provider, the best `arena_score` among the models of
//! that provider's organizations.
//!
//! ## Rules
//!
//! 1. Snapshots are processed oldest month first
//! 2. A provider matches rows from any of its organization aliases
//! 3. A provider absent from a month carries its previous value forward;
//!    before its first appearance it has no value
//! 4. An unreadable snapshot is logged and skipped; the month is left out

pub mod snapshot;

pub use snapshot::{SnapshotFile, SnapshotRow};

use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::leaderboard::{
    default_palette, DataPoint, Leaderboard, LeaderboardError, ProviderAliases, SeriesPalette,
};

/// Pipeline errors
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Snapshot is missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid snapshot file name: {0}")]
    InvalidFileName(String),

    #[error("No snapshots found in {0:?}")]
    NoSnapshots(PathBuf),

    #[error("Leaderboard error: {0}")]
    Leaderboard(#[from] LeaderboardError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Outcome of aggregating a snapshot directory
#[derive(Debug)]
pub struct AggregationReport {
    pub leaderboard: Leaderboard,
    pub months_processed: usize,
    /// Skipped snapshot files and why
    pub skipped: Vec<(PathBuf, String)>,
    /// Provider-months filled from the previous month
    pub carried_forward: usize,
}

/// Aggregates monthly snapshots into a leaderboard
#[derive(Debug, Clone)]
pub struct MonthlyAggregator {
    palette: SeriesPalette,
    aliases: ProviderAliases,
}

impl Default for MonthlyAggregator {
    fn default() -> Self {
        Self::new(default_palette(), ProviderAliases::default())
    }
}

impl MonthlyAggregator {
    pub fn new(palette: SeriesPalette, aliases: ProviderAliases) -> Self {
        Self { palette, aliases }
    }

    /// Aggregate every `monthly_YYYY.MM.csv` in `dir`
    pub fn aggregate_dir(&self, dir: &Path) -> Result<AggregationReport, PipelineError> {
        let files = snapshot::discover(dir)?;
        if files.is_empty() {
            return Err(PipelineError::NoSnapshots(dir.to_path_buf()));
        }

        let mut months = Vec::new();
        let mut skipped = Vec::new();

        for file in files {
            tracing::info!(file = ?file.path, month = %file.label(), "Processing snapshot");
            match snapshot::read_file(&file.path) {
                Ok(rows) => months.push((file.month, rows)),
                Err(e) => {
                    tracing::warn!(file = ?file.path, error = %e, "Skipping snapshot");
                    skipped.push((file.path, e.to_string()));
                }
            }
        }

        let months_processed = months.len();
        let (leaderboard, carried_forward) = self.aggregate(months)?;

        Ok(AggregationReport {
            leaderboard,
            months_processed,
            skipped,
            carried_forward,
        })
    }

    /// Aggregate in-memory snapshots, given oldest month first
    ///
    /// Returns the leaderboard and the number of carried-forward values.
    pub fn aggregate(
        &self,
        months: Vec<(NaiveDate, Vec<SnapshotRow>)>,
    ) -> Result<(Leaderboard, usize), PipelineError> {
        let mut previous: HashMap<&str, f64> = HashMap::new();
        let mut carried_forward = 0;
        let mut data = Vec::with_capacity(months.len());

        for (month, rows) in &months {
            let mut point = DataPoint::new(month.format("%Y-%m-%d").to_string());

            for provider in self.palette.providers() {
                let best = rows
                    .iter()
                    .filter(|r| self.aliases.matches(provider, &r.organization))
                    .map(|r| r.score)
                    .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.max(s))));

                let value = match best {
                    Some(score) => {
                        tracing::debug!(%month, provider, score, "Top score");
                        Some(score)
                    }
                    None => {
                        let carried = previous.get(provider).copied();
                        if carried.is_some() {
                            carried_forward += 1;
                        }
                        tracing::debug!(%month, provider, "No models this month");
                        carried
                    }
                };

                if let Some(score) = value {
                    previous.insert(provider, score);
                    point = point.score(provider, score);
                }
            }

            data.push(point);
        }

        let leaderboard = Leaderboard::new(data, self.palette.clone())?;
        Ok((leaderboard, carried_forward))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn row(org: &str, score: f64) -> SnapshotRow {
        SnapshotRow {
            organization: org.to_string(),
            score,
        }
    }

    fn month(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn test_takes_best_score_per_provider() {
        let months = vec![(
            month(2025, 7),
            vec![row("Google", 1460.0), row("Google", 1473.0), row("OpenAI", 1428.0)],
        )];

        let (board, _) = MonthlyAggregator::default().aggregate(months).unwrap();
        assert_eq!(board.data()[0].date, "2025-07-01");
        assert_eq!(board.data()[0].get("Google"), Some(1473.0));
        assert_eq!(board.data()[0].get("OpenAI"), Some(1428.0));
    }

    #[test]
    fn test_aliases_merge_organizations() {
        let months = vec![(
            month(2025, 6),
            vec![row("Mistral AI", 1340.0), row("Mistral", 1343.0)],
        )];

        let (board, _) = MonthlyAggregator::default().aggregate(months).unwrap();
        assert_eq!(board.data()[0].get("Mistral"), Some(1343.0));
    }

    #[test]
    fn test_carry_forward_and_initial_gap() {
        let months = vec![
            (month(2024, 11), vec![row("Google", 1303.0)]),
            (month(2024, 12), vec![row("xAI", 1289.0)]),
            (month(2025, 1), vec![row("Google", 1373.0)]),
        ];

        let (board, carried) = MonthlyAggregator::default().aggregate(months).unwrap();
        let data = board.data();

        assert_eq!(data[0].get("xAI"), None);
        assert_eq!(data[1].get("Google"), Some(1303.0));
        assert_eq!(data[2].get("xAI"), Some(1289.0));
        assert_eq!(data[2].get("Google"), Some(1373.0));
        assert_eq!(data[0].get("OpenAI"), None);
        assert_eq!(data[2].get("OpenAI"), None);
        assert_eq!(carried, 2);
    }

    #[test]
    fn test_aggregate_dir_skips_bad_snapshots() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("monthly_2024.11.csv"),
            "organization,arena_score\nGoogle,1303\nOpenAI,1340\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("monthly_2024.12.csv"), "model,score\nx,1\n").unwrap();
        std::fs::write(
            dir.path().join("monthly_2025.01.csv"),
            "organization,arena_score\nGoogle,1373\n",
        )
        .unwrap();

        let report = MonthlyAggregator::default().aggregate_dir(dir.path()).unwrap();

        assert_eq!(report.months_processed, 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.carried_forward, 1);

        let dates: Vec<_> = report.leaderboard.data().iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-11-01", "2025-01-01"]);
        assert_eq!(report.leaderboard.data()[1].get("OpenAI"), Some(1340.0));
    }

    #[test]
    fn test_aggregate_dir_without_snapshots() {
        let dir = tempdir().unwrap();
        let result = MonthlyAggregator::default().aggregate_dir(dir.path());
        assert!(matches!(result, Err(PipelineError::NoSnapshots(_))));
    }
}
