//! Leaderboard Data
//!
//! The dataset the dashboard draws: monthly records of the best score per
//! provider, and the palette that names and colors each series.
//!
//! - `types`: `DataPoint`, `SeriesPalette`, `Leaderboard`
//! - `dataset`: the built-in constant dataset
//! - `csv_io`: loading and saving the wide CSV table
//! - `aliases`: organization names that map onto palette keys

mod aliases;
mod csv_io;
mod dataset;
mod error;
mod types;

pub use aliases::ProviderAliases;
pub use dataset::{default_palette, PROVIDER_COLORS};
pub use error::{LeaderboardError, LeaderboardResult};
pub use types::{DataPoint, Leaderboard, SeriesColor, SeriesPalette};
