//! Chart layout
//!
//! Turns a `Leaderboard` into pixel geometry: plot area, axis ticks, and
//! one list of contiguous segments per series. A missing score ends the
//! current segment, so the line shows a gap there instead of bridging it.

use serde::Serialize;

use super::curve::Point;
use super::scale::{LinearScale, PointScale, YDomain};
use super::ChartConfig;
use crate::leaderboard::Leaderboard;

/// Rectangle the series are drawn into
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Category tick on the x-axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XTick {
    pub label: String,
    pub x: f64,
}

/// Value tick on the y-axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YTick {
    pub value: f64,
    pub y: f64,
}

/// A plotted score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlottedPoint {
    pub date: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

impl PlottedPoint {
    pub fn position(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}

/// Geometry for one provider's line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesLayout {
    pub provider: String,
    pub color: String,
    /// Contiguous runs of points, split at missing scores
    pub segments: Vec<Vec<PlottedPoint>>,
}

impl SeriesLayout {
    pub fn points(&self) -> impl Iterator<Item = &PlottedPoint> {
        self.segments.iter().flatten()
    }
}

/// Complete chart geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub domain: YDomain,
    pub plot: PlotArea,
    pub x_ticks: Vec<XTick>,
    pub y_ticks: Vec<YTick>,
    pub series: Vec<SeriesLayout>,
}

impl ChartLayout {
    /// Compute the layout of `board` under `config`
    pub fn compute(board: &Leaderboard, config: &ChartConfig) -> Self {
        let margin = config.margin;
        let plot = PlotArea {
            left: margin.left + config.y_axis_width,
            top: margin.top,
            width: (config.width
                - margin.left
                - margin.right
                - config.y_axis_width)
                .max(0.0),
            height: (config.height
                - margin.top
                - margin.bottom
                - config.x_axis_height
                - config.legend_height)
                .max(0.0),
        };

        let records: Vec<_> = board.plottable().collect();
        let x_scale = PointScale::new(records.len(), plot.left, plot.width);
        let y_scale = LinearScale::new(config.domain, plot.top, plot.height);

        let x_ticks = records
            .iter()
            .enumerate()
            .map(|(i, record)| XTick {
                label: record.date.clone(),
                x: x_scale.map(i),
            })
            .collect();

        let y_ticks = config
            .domain
            .ticks(config.y_tick_count)
            .into_iter()
            .map(|value| YTick {
                value,
                y: y_scale.map(value),
            })
            .collect();

        let series = board
            .palette()
            .iter()
            .map(|entry| {
                let mut segments = Vec::new();
                let mut current: Vec<PlottedPoint> = Vec::new();

                for (i, record) in records.iter().enumerate() {
                    match record.get(&entry.provider) {
                        Some(value) => current.push(PlottedPoint {
                            date: record.date.clone(),
                            value,
                            x: x_scale.map(i),
                            y: y_scale.map(value),
                        }),
                        None => {
                            if !current.is_empty() {
                                segments.push(std::mem::take(&mut current));
                            }
                        }
                    }
                }
                if !current.is_empty() {
                    segments.push(current);
                }

                SeriesLayout {
                    provider: entry.provider.clone(),
                    color: entry.color.clone(),
                    segments,
                }
            })
            .collect();

        Self {
            width: config.width,
            height: config.height,
            domain: config.domain,
            plot,
            x_ticks,
            y_ticks,
            series,
        }
    }

    pub fn series(&self, provider: &str) -> Option<&SeriesLayout> {
        self.series.iter().find(|s| s.provider == provider)
    }
}
