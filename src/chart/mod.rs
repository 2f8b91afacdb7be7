//! Line Chart
//!
//! Renders a `Leaderboard` as a multi-series line chart in SVG: category
//! x-axis of date labels, fixed y domain, dashed grid, one monotone line per
//! palette entry, a legend row, and a native hover tooltip per point.
//!
//! Rendering is pure: the same leaderboard and config always produce the
//! same bytes.
//!
//! # Example
//!
//! ```rust
//! use arenaboard::chart::{render_svg, ChartConfig};
//! use arenaboard::leaderboard::Leaderboard;
//!
//! let svg = render_svg(&Leaderboard::builtin(), &ChartConfig::default());
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod curve;
pub mod layout;
pub mod scale;
pub mod svg;

pub use layout::{ChartLayout, PlotArea, PlottedPoint, SeriesLayout, XTick, YTick};
pub use scale::YDomain;
pub use svg::render_svg;

use serde::{Deserialize, Serialize};

/// Space reserved around the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Chart geometry and styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// ViewBox width
    pub width: f64,
    /// ViewBox height
    pub height: f64,
    pub margin: Margin,
    /// Width reserved left of the plot for y tick labels
    pub y_axis_width: f64,
    /// Height reserved below the plot for x tick labels
    pub x_axis_height: f64,
    /// Height reserved below the axis for the legend row
    pub legend_height: f64,
    /// Fixed y-axis domain
    pub domain: YDomain,
    pub y_tick_count: usize,
    pub stroke_width: f64,
    pub grid_color: String,
    pub grid_dash: String,
    pub axis_color: String,
    pub tick_color: String,
    pub font_size: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1088.0,
            height: 384.0,
            margin: Margin {
                top: 5.0,
                right: 30.0,
                bottom: 5.0,
                left: 0.0,
            },
            y_axis_width: 60.0,
            x_axis_height: 30.0,
            legend_height: 44.0,
            domain: YDomain::default(),
            y_tick_count: 5,
            stroke_width: 2.5,
            grid_color: "#2d2f33".to_string(),
            grid_dash: "3 3".to_string(),
            axis_color: "#69695d".to_string(),
            tick_color: "#cecebf".to_string(),
            font_size: 12.0,
        }
    }
}
