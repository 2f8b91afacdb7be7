//! Built-in dataset
//!
//! Best LM Arena text score per provider, November 2024 to September 2025.

use super::types::{DataPoint, Leaderboard, SeriesPalette};

/// Provider display colors, in legend order
pub const PROVIDER_COLORS: [(&str, &str); 6] = [
    ("Google", "#fe9e20"),
    ("OpenAI", "#f43e01"),
    ("Anthropic", "#ffd1a3"),
    ("DeepSeek", "#c23101"),
    ("xAI", "#cecebf"),
    ("Mistral", "#69695d"),
];

/// Monthly scores, columns in `PROVIDER_COLORS` order
const MONTHLY_SCORES: [(&str, [f64; 6]); 11] = [
    ("2024-11-01", [1303.0, 1340.0, 1286.0, 1256.0, 1290.0, 1251.0]),
    ("2024-12-01", [1365.0, 1361.0, 1282.0, 1258.0, 1289.0, 1251.0]),
    ("2025-01-01", [1373.0, 1365.0, 1283.0, 1315.0, 1288.0, 1251.0]),
    ("2025-02-01", [1382.0, 1365.0, 1284.0, 1358.0, 1288.0, 1252.0]),
    ("2025-03-01", [1385.0, 1377.0, 1313.0, 1363.0, 1403.0, 1251.0]),
    ("2025-04-01", [1440.0, 1406.0, 1306.0, 1370.0, 1404.0, 1251.0]),
    ("2025-05-01", [1439.0, 1418.0, 1301.0, 1373.0, 1402.0, 1251.0]),
    ("2025-06-01", [1446.0, 1409.0, 1296.0, 1368.0, 1399.0, 1343.0]),
    ("2025-07-01", [1473.0, 1428.0, 1372.0, 1424.0, 1423.0, 1369.0]),
    ("2025-08-01", [1469.0, 1429.0, 1374.0, 1425.0, 1435.0, 1369.0]),
    ("2025-09-01", [1470.0, 1429.0, 1373.0, 1427.0, 1434.0, 1370.0]),
];

/// The dashboard palette
pub fn default_palette() -> SeriesPalette {
    PROVIDER_COLORS
        .iter()
        .fold(SeriesPalette::new(), |palette, (provider, color)| {
            palette.with(*provider, *color)
        })
}

impl Leaderboard {
    /// The constant dataset the dashboard ships with
    pub fn builtin() -> Self {
        let data = MONTHLY_SCORES
            .iter()
            .map(|(date, scores)| {
                PROVIDER_COLORS
                    .iter()
                    .zip(scores.iter())
                    .fold(DataPoint::new(*date), |point, ((provider, _), score)| {
                        point.score(*provider, *score)
                    })
            })
            .collect();

        Self {
            data,
            palette: default_palette(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let board = Leaderboard::builtin();
        assert_eq!(board.data().len(), 11);
        assert_eq!(board.palette().len(), 6);

        for point in board.data() {
            for provider in board.palette().providers() {
                assert!(point.get(provider).is_some(), "{} missing on {}", provider, point.date);
            }
        }
    }

    #[test]
    fn test_builtin_passes_validation() {
        let board = Leaderboard::builtin();
        let rebuilt = Leaderboard::new(board.data().to_vec(), board.palette().clone()).unwrap();
        assert_eq!(rebuilt, board);
    }

    #[test]
    fn test_builtin_known_values() {
        let board = Leaderboard::builtin();
        let july = board.data().iter().find(|p| p.date == "2025-07-01").unwrap();
        assert_eq!(july.get("Google"), Some(1473.0));
        assert_eq!(board.date_span(), Some(("2024-11-01", "2025-09-01")));
    }
}
