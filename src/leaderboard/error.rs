//! Leaderboard error types

use thiserror::Error;

/// Errors raised while building or loading a leaderboard
#[derive(Error, Debug)]
pub enum LeaderboardError {
    /// Palette color is not a `#rgb` or `#rrggbb` hex string
    #[error("Invalid color for provider {provider}: {color}")]
    InvalidColor { provider: String, color: String },

    /// Palette has no entries
    #[error("Palette is empty")]
    EmptyPalette,

    /// CSV header has no date column
    #[error("CSV has no date column")]
    MissingDateColumn,

    /// CSV read or write failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for leaderboard operations
pub type LeaderboardResult<T> = Result<T, LeaderboardError>;
