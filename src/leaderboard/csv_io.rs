//! CSV Import/Export
//!
//! Reads and writes the wide leaderboard table:
//!
//! ```text
//! date,Google,OpenAI,...
//! 2024-11-01,1303,1340,...
//! ```
//!
//! Empty cells are missing scores. Headers resolve to palette keys through
//! `ProviderAliases`, so a `Mistral AI` column feeds the `Mistral` series;
//! columns that resolve to nothing are skipped with a warning.

use std::io::{Read, Write};
use std::path::Path;

use super::aliases::ProviderAliases;
use super::error::{LeaderboardError, LeaderboardResult};
use super::types::{DataPoint, Leaderboard, SeriesPalette};

impl Leaderboard {
    /// Load a leaderboard from a CSV file, drawing it with `palette`
    pub fn from_csv_path(path: &Path, palette: SeriesPalette) -> LeaderboardResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file, palette)
    }

    /// Load a leaderboard from a CSV string
    pub fn from_csv_str(data: &str, palette: SeriesPalette) -> LeaderboardResult<Self> {
        Self::from_csv_reader(data.as_bytes(), palette)
    }

    /// Load a leaderboard from any CSV reader, with the default aliases
    pub fn from_csv_reader<R: Read>(reader: R, palette: SeriesPalette) -> LeaderboardResult<Self> {
        Self::from_csv_reader_with_aliases(reader, palette, &ProviderAliases::default())
    }

    /// Load a leaderboard from any CSV reader
    ///
    /// When two columns resolve to the same provider, the higher score wins.
    pub fn from_csv_reader_with_aliases<R: Read>(
        reader: R,
        palette: SeriesPalette,
        aliases: &ProviderAliases,
    ) -> LeaderboardResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();

        let date_column = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case("date"))
            .ok_or(LeaderboardError::MissingDateColumn)?;

        let mut columns = Vec::new();
        for (idx, header) in headers.iter().enumerate() {
            if idx == date_column {
                continue;
            }
            let header = header.trim();
            match aliases.resolve(&palette, header) {
                Some(provider) => {
                    if provider != header {
                        tracing::debug!(column = %header, provider, "CSV column mapped by alias");
                    }
                    columns.push((idx, provider.to_string()));
                }
                None => {
                    tracing::warn!(column = %header, "Skipping CSV column not in palette");
                }
            }
        }

        let mut data = Vec::new();
        for (line_num, result) in reader.records().enumerate() {
            let line = line_num + 2;
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(line, error = %e, "Skipping unreadable CSV row");
                    continue;
                }
            };

            let date = record.get(date_column).map(str::trim).unwrap_or_default();
            let mut point = DataPoint::new(date);

            for (idx, provider) in &columns {
                let cell = record.get(*idx).map(str::trim).unwrap_or_default();
                if cell.is_empty() {
                    continue;
                }
                match cell.parse::<f64>() {
                    Ok(value) => {
                        let best = point
                            .scores
                            .get(provider)
                            .map_or(value, |existing| existing.max(value));
                        point.scores.insert(provider.clone(), best);
                    }
                    Err(_) => {
                        tracing::warn!(line, provider = %provider, value = %cell, "Ignoring non-numeric score");
                    }
                }
            }

            data.push(point);
        }

        tracing::debug!(records = data.len(), providers = columns.len(), "Loaded leaderboard CSV");

        Self::new(data, palette)
    }

    /// Write the leaderboard as CSV, columns in palette order
    pub fn to_csv_writer<W: Write>(&self, writer: W) -> LeaderboardResult<()> {
        let mut writer = csv::Writer::from_writer(writer);

        let mut header = vec!["date".to_string()];
        header.extend(self.palette.providers().map(String::from));
        writer.write_record(&header)?;

        for point in &self.data {
            let mut row = vec![point.date.clone()];
            row.extend(
                self.palette
                    .providers()
                    .map(|p| point.get(p).map(format_score).unwrap_or_default()),
            );
            writer.write_record(&row)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Write the leaderboard as CSV to a file
    pub fn to_csv_path(&self, path: &Path) -> LeaderboardResult<()> {
        let file = std::fs::File::create(path)?;
        self.to_csv_writer(file)
    }

    /// Render the leaderboard as a CSV string
    pub fn to_csv_string(&self) -> LeaderboardResult<String> {
        let mut buf = Vec::new();
        self.to_csv_writer(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Whole scores print without a fractional part
fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::default_palette;
    use tempfile::tempdir;

    #[test]
    fn test_load_with_missing_values() {
        let csv_data = "date,Google,OpenAI
2025-01-01,1373,
2025-02-01,,1365
2025-03-01,1385,1377";

        let board = Leaderboard::from_csv_str(csv_data, default_palette()).unwrap();

        assert_eq!(board.data().len(), 3);
        assert_eq!(board.data()[0].get("OpenAI"), None);
        assert_eq!(board.data()[1].get("Google"), None);
        assert_eq!(board.data()[2].get("OpenAI"), Some(1377.0));
    }

    #[test]
    fn test_unknown_columns_are_skipped() {
        let csv_data = "Date,Google,Meta
2025-01-01,1373,1290";

        let board = Leaderboard::from_csv_str(csv_data, default_palette()).unwrap();
        assert_eq!(board.data()[0].scores.len(), 1);
    }

    #[test]
    fn test_organization_column_feeds_provider_series() {
        let csv_data = "Date,Google,OpenAI,Anthropic,DeepSeek,xAI,Mistral AI
2024-11-01,1303,1340,1286,1256,1290,1251
2025-09-01,1470,1429,1373,1427,1434,1370";

        let board = Leaderboard::from_csv_str(csv_data, default_palette()).unwrap();

        assert_eq!(board.data()[0].get("Mistral"), Some(1251.0));
        assert_eq!(board.data()[1].get("Mistral"), Some(1370.0));
        assert_eq!(board.data()[0].get("Mistral AI"), None);
        assert_eq!(board.data()[0].scores.len(), 6);
    }

    #[test]
    fn test_aliased_columns_keep_best_score() {
        let csv_data = "date,Mistral,Mistral AI\n2025-06-01,1343,1340";
        let board = Leaderboard::from_csv_str(csv_data, default_palette()).unwrap();
        assert_eq!(board.data()[0].get("Mistral"), Some(1343.0));
    }

    #[test]
    fn test_custom_aliases() {
        let csv_data = "date,Alphabet\n2025-01-01,1373";
        let aliases = ProviderAliases::new().alias("Google", &["Alphabet"]);
        let board =
            Leaderboard::from_csv_reader_with_aliases(csv_data.as_bytes(), default_palette(), &aliases)
                .unwrap();
        assert_eq!(board.data()[0].get("Google"), Some(1373.0));
    }

    #[test]
    fn test_missing_date_column() {
        let csv_data = "month,Google\n2025-01,1373";
        let result = Leaderboard::from_csv_str(csv_data, default_palette());
        assert!(matches!(result, Err(LeaderboardError::MissingDateColumn)));
    }

    #[test]
    fn test_non_numeric_score_is_missing() {
        let csv_data = "date,Google\n2025-01-01,n/a";
        let board = Leaderboard::from_csv_str(csv_data, default_palette()).unwrap();
        assert_eq!(board.data()[0].get("Google"), None);
    }

    #[test]
    fn test_write_uses_palette_order_and_blank_cells() {
        let data = vec![
            DataPoint::new("2025-01-01").score("OpenAI", 1365.0),
            DataPoint::new("2025-02-01").score("Google", 1382.5),
        ];
        let palette = SeriesPalette::new()
            .with("Google", "#fe9e20")
            .with("OpenAI", "#f43e01");
        let board = Leaderboard::new(data, palette).unwrap();

        let csv = board.to_csv_string().unwrap();
        assert_eq!(csv, "date,Google,OpenAI\n2025-01-01,,1365\n2025-02-01,1382.5,\n");
    }

    #[test]
    fn test_builtin_survives_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.csv");

        let board = Leaderboard::builtin();
        board.to_csv_path(&path).unwrap();
        let loaded = Leaderboard::from_csv_path(&path, default_palette()).unwrap();

        assert_eq!(loaded, board);
    }
}
