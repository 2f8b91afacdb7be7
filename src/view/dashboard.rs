//! Dashboard View
//!
//! Title block, chart card, and the legend grid below it.

use chrono::NaiveDate;
use std::fmt::Write as _;

use super::html::escape;
use crate::chart::{render_svg, ChartConfig};
use crate::leaderboard::Leaderboard;

pub const TITLE: &str = "LM Arena Leaderboard";
pub const SUBTITLE: &str = "AI Model Performance Scores Over Time";
pub const CARD_TITLE: &str = "Model Score Trends";

/// Dashboard over a leaderboard
pub struct Dashboard<'a> {
    board: &'a Leaderboard,
    chart: &'a ChartConfig,
}

impl<'a> Dashboard<'a> {
    pub fn new(board: &'a Leaderboard, chart: &'a ChartConfig) -> Self {
        Self { board, chart }
    }

    /// Render the page content (everything inside `<body>`)
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(32 * 1024);

        out.push_str(r#"<div class="min-h-screen bg-background p-8"><div class="mx-auto max-w-6xl">"#);
        self.write_heading(&mut out);
        self.write_chart_card(&mut out);
        self.write_legend_grid(&mut out);
        out.push_str("</div></div>");

        out
    }

    /// Card description, naming the first and last month shown
    pub fn description(&self) -> String {
        let span = self
            .board
            .date_span()
            .and_then(|(first, last)| Some((month_name(first)?, month_name(last)?)));

        match span {
            Some((first, last)) => {
                format!("Monthly performance metrics from {} to {}", first, last)
            }
            None => "Monthly performance metrics".to_string(),
        }
    }

    fn write_heading(&self, out: &mut String) {
        let _ = write!(
            out,
            r#"<div class="mb-8"><h1 class="text-3xl font-light tracking-tight mb-2" style="letter-spacing: 0.85px">{}</h1><p class="text-sm font-bold font-mono text-muted-foreground">{}</p></div>"#,
            TITLE, SUBTITLE
        );
    }

    fn write_chart_card(&self, out: &mut String) {
        out.push_str(r#"<section class="card bg-card border-border">"#);
        let _ = write!(
            out,
            r#"<header class="card-header"><h2 class="text-sm font-bold" style="line-height: 1.2">{}</h2><p class="text-xs font-bold font-mono uppercase" style="line-height: 1.2">{}</p></header>"#,
            CARD_TITLE,
            escape(&self.description())
        );
        out.push_str(r#"<div class="card-content"><div class="chart w-full h-96">"#);
        out.push_str(&render_svg(self.board, self.chart));
        out.push_str("</div></div></section>");
    }

    fn write_legend_grid(&self, out: &mut String) {
        out.push_str(r#"<div class="legend mt-8 grid grid-cols-2 gap-4 md:grid-cols-3 lg:grid-cols-6">"#);
        for entry in self.board.palette().iter() {
            let provider = escape(&entry.provider);
            let _ = write!(
                out,
                r#"<div class="legend-entry flex items-center gap-2 p-3 rounded-lg bg-card border border-border" data-provider="{}"><div class="legend-swatch w-3 h-3 rounded-full" style="background-color: {}"></div><span class="text-sm font-medium text-foreground">{}</span></div>"#,
                provider,
                escape(&entry.color),
                provider
            );
        }
        out.push_str("</div>");
    }
}

/// `2024-11-01` → `November 2024`
fn month_name(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%B %Y").to_string())
}
