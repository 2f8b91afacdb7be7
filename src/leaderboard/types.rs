//! Core data types for the leaderboard
//!
//! - `DataPoint`: one monthly record with a score per provider
//! - `SeriesPalette`: ordered provider → color mapping
//! - `Leaderboard`: a dataset paired with its palette

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::{LeaderboardError, LeaderboardResult};

/// One record per calendar month
///
/// A provider without a score for this month is simply absent from
/// `scores`; the chart draws a gap there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Date label, `YYYY-MM-01`
    pub date: String,
    /// Score per provider name
    #[serde(flatten)]
    pub scores: BTreeMap<String, f64>,
}

impl DataPoint {
    /// Create an empty record for a date label
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            scores: BTreeMap::new(),
        }
    }

    /// Builder method: set a provider's score
    pub fn score(mut self, provider: impl Into<String>, value: f64) -> Self {
        self.scores.insert(provider.into(), value);
        self
    }

    /// Score for a provider, if present and finite
    pub fn get(&self, provider: &str) -> Option<f64> {
        self.scores.get(provider).copied().filter(|v| v.is_finite())
    }

    /// A record without a date label cannot be placed on the x-axis
    pub fn is_well_formed(&self) -> bool {
        !self.date.trim().is_empty()
    }
}

/// Display color for one series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesColor {
    pub provider: String,
    pub color: String,
}

/// Ordered mapping from provider name to display color
///
/// Iteration order is legend order and series draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesPalette {
    entries: Vec<SeriesColor>,
}

impl SeriesPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a provider, replacing its color in place if already present
    pub fn insert(&mut self, provider: impl Into<String>, color: impl Into<String>) {
        let provider = provider.into();
        let color = color.into();

        match self.entries.iter_mut().find(|e| e.provider == provider) {
            Some(entry) => entry.color = color,
            None => self.entries.push(SeriesColor { provider, color }),
        }
    }

    /// Builder method: insert a provider
    pub fn with(mut self, provider: impl Into<String>, color: impl Into<String>) -> Self {
        self.insert(provider, color);
        self
    }

    /// Copy of this palette without the given provider
    pub fn without(&self, provider: &str) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|e| e.provider != provider)
                .cloned()
                .collect(),
        }
    }

    pub fn get(&self, provider: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.provider == provider)
            .map(|e| e.color.as_str())
    }

    pub fn contains(&self, provider: &str) -> bool {
        self.get(provider).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesColor> {
        self.entries.iter()
    }

    pub fn providers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.provider.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every color is a hex string
    pub fn validate(&self) -> LeaderboardResult<()> {
        if self.entries.is_empty() {
            return Err(LeaderboardError::EmptyPalette);
        }

        for entry in &self.entries {
            if !is_hex_color(&entry.color) {
                return Err(LeaderboardError::InvalidColor {
                    provider: entry.provider.clone(),
                    color: entry.color.clone(),
                });
            }
        }

        Ok(())
    }
}

fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// A dataset and the palette it is drawn with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboard {
    pub(crate) data: Vec<DataPoint>,
    pub(crate) palette: SeriesPalette,
}

impl Leaderboard {
    /// Build a leaderboard after validating the palette
    ///
    /// Only palette providers are drawn. Scores for any other provider stay
    /// in the records but never reach the chart or legend.
    pub fn new(data: Vec<DataPoint>, palette: SeriesPalette) -> LeaderboardResult<Self> {
        palette.validate()?;
        Ok(Self { data, palette })
    }

    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    pub fn palette(&self) -> &SeriesPalette {
        &self.palette
    }

    /// Records that can be placed on the x-axis, in dataset order
    pub fn plottable(&self) -> impl Iterator<Item = &DataPoint> {
        self.data.iter().filter(|p| p.is_well_formed())
    }

    /// Copy with one provider removed from both palette and records
    pub fn without_provider(&self, provider: &str) -> Self {
        let data = self
            .data
            .iter()
            .map(|point| {
                let mut point = point.clone();
                point.scores.remove(provider);
                point
            })
            .collect();

        Self {
            data,
            palette: self.palette.without(provider),
        }
    }

    /// First and last plottable date labels
    pub fn date_span(&self) -> Option<(&str, &str)> {
        let first = self.plottable().next()?;
        let last = self.plottable().last()?;
        Some((first.date.as_str(), last.date.as_str()))
    }
}
