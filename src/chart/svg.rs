//! SVG rendering of a computed `ChartLayout`

use std::fmt::Write as _;

use super::curve::{fmt, monotone_path};
use super::layout::ChartLayout;
use super::ChartConfig;
use crate::leaderboard::Leaderboard;
use crate::view::html::escape;

const CLIP_ID: &str = "plot-area-clip";
const TICK_SIZE: f64 = 6.0;
const LEGEND_ICON: f64 = 14.0;
const LEGEND_GAP: f64 = 10.0;

/// Render the leaderboard as a standalone SVG document fragment
pub fn render_svg(board: &Leaderboard, config: &ChartConfig) -> String {
    let layout = ChartLayout::compute(board, config);
    render_layout(&layout, config)
}

/// Render an already computed layout
pub fn render_layout(layout: &ChartLayout, config: &ChartConfig) -> String {
    let mut out = String::with_capacity(16 * 1024);

    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart-surface" viewBox="0 0 {} {}" width="100%" height="100%" role="img" aria-label="Model score trends">"#,
        fmt(layout.width),
        fmt(layout.height)
    );

    let plot = layout.plot;
    let _ = write!(
        out,
        r#"<defs><clipPath id="{}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
        CLIP_ID,
        fmt(plot.left),
        fmt(plot.top),
        fmt(plot.width),
        fmt(plot.height)
    );

    write_grid(&mut out, layout, config);
    write_x_axis(&mut out, layout, config);
    write_y_axis(&mut out, layout, config);
    write_series(&mut out, layout, config);
    write_legend(&mut out, layout, config);

    out.push_str("</svg>");
    out
}

fn write_grid(out: &mut String, layout: &ChartLayout, config: &ChartConfig) {
    let plot = layout.plot;
    let _ = write!(
        out,
        r#"<g class="chart-grid" stroke="{}" stroke-dasharray="{}" fill="none">"#,
        escape(&config.grid_color),
        escape(&config.grid_dash)
    );
    for tick in &layout.y_ticks {
        let _ = write!(
            out,
            r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}"/>"#,
            fmt(plot.left),
            fmt(plot.right()),
            y = fmt(tick.y)
        );
    }
    for tick in &layout.x_ticks {
        let _ = write!(
            out,
            r#"<line x1="{x}" y1="{}" x2="{x}" y2="{}"/>"#,
            fmt(plot.top),
            fmt(plot.bottom()),
            x = fmt(tick.x)
        );
    }
    out.push_str("</g>");
}

fn write_x_axis(out: &mut String, layout: &ChartLayout, config: &ChartConfig) {
    let plot = layout.plot;
    let axis = escape(&config.axis_color);
    let _ = write!(
        out,
        r#"<g class="chart-x-axis" font-size="{}"><line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{axis}"/>"#,
        fmt(config.font_size),
        fmt(plot.left),
        fmt(plot.right()),
        y = fmt(plot.bottom()),
        axis = axis
    );
    for tick in &layout.x_ticks {
        let _ = write!(
            out,
            r#"<g class="chart-x-tick"><line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="{axis}"/><text x="{x}" y="{}" text-anchor="middle" fill="{}">{}</text></g>"#,
            fmt(plot.bottom()),
            fmt(plot.bottom() + TICK_SIZE),
            fmt(plot.bottom() + TICK_SIZE + config.font_size + 2.0),
            escape(&config.tick_color),
            escape(&tick.label),
            x = fmt(tick.x),
            axis = axis
        );
    }
    out.push_str("</g>");
}

fn write_y_axis(out: &mut String, layout: &ChartLayout, config: &ChartConfig) {
    let plot = layout.plot;
    let axis = escape(&config.axis_color);
    let _ = write!(
        out,
        r#"<g class="chart-y-axis" font-size="{}"><line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="{axis}"/>"#,
        fmt(config.font_size),
        fmt(plot.top),
        fmt(plot.bottom()),
        x = fmt(plot.left),
        axis = axis
    );
    for tick in &layout.y_ticks {
        let _ = write!(
            out,
            r#"<g class="chart-y-tick"><line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{axis}"/><text x="{}" y="{}" text-anchor="end" fill="{}">{}</text></g>"#,
            fmt(plot.left - TICK_SIZE),
            fmt(plot.left),
            fmt(plot.left - TICK_SIZE - 2.0),
            fmt(tick.y + config.font_size / 3.0),
            escape(&config.tick_color),
            fmt(tick.value),
            y = fmt(tick.y),
            axis = axis
        );
    }
    out.push_str("</g>");
}

fn write_series(out: &mut String, layout: &ChartLayout, config: &ChartConfig) {
    let _ = write!(out, r#"<g class="chart-lines" clip-path="url(#{})">"#, CLIP_ID);

    for series in &layout.series {
        let color = escape(&series.color);
        let provider = escape(&series.provider);
        let _ = write!(
            out,
            r#"<g class="chart-series" data-provider="{}">"#,
            provider
        );

        for segment in &series.segments {
            let points: Vec<_> = segment.iter().map(|p| p.position()).collect();
            let _ = write!(
                out,
                r#"<path class="chart-line" d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
                monotone_path(&points),
                color,
                fmt(config.stroke_width)
            );
        }

        for point in series.points() {
            let _ = write!(
                out,
                r#"<circle class="chart-hover" cx="{}" cy="{}" r="6" fill="transparent"><title>{} · {}: {}</title></circle>"#,
                fmt(point.x),
                fmt(point.y),
                escape(&point.date),
                provider,
                fmt(point.value)
            );
        }

        out.push_str("</g>");
    }

    out.push_str("</g>");
}

/// Rough advance width of a label, enough to space legend items
fn text_width(label: &str, font_size: f64) -> f64 {
    label.chars().count() as f64 * font_size * 0.6
}

fn write_legend(out: &mut String, layout: &ChartLayout, config: &ChartConfig) {
    let item_widths: Vec<f64> = layout
        .series
        .iter()
        .map(|s| LEGEND_ICON + 4.0 + text_width(&s.provider, config.font_size))
        .collect();
    let total: f64 = item_widths.iter().sum::<f64>()
        + LEGEND_GAP * item_widths.len().saturating_sub(1) as f64;

    let mut x = layout.plot.left + (layout.plot.width - total).max(0.0) / 2.0;
    let y = layout.height - config.margin.bottom - config.legend_height / 2.0 + 10.0;

    let _ = write!(
        out,
        r#"<g class="chart-legend" font-size="{}">"#,
        fmt(config.font_size)
    );
    for (series, width) in layout.series.iter().zip(item_widths) {
        let color = escape(&series.color);
        let _ = write!(
            out,
            r#"<g class="chart-legend-item" data-provider="{}"><line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{color}" stroke-width="4"/><text x="{}" y="{}" fill="{color}">{}</text></g>"#,
            escape(&series.provider),
            fmt(x),
            fmt(x + LEGEND_ICON),
            fmt(x + LEGEND_ICON + 4.0),
            fmt(y + config.font_size / 3.0),
            escape(&series.provider),
            y = fmt(y),
            color = color
        );
        x += width + LEGEND_GAP;
    }
    out.push_str("</g>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::default_palette;

    fn render(board: &Leaderboard) -> String {
        render_svg(board, &ChartConfig::default())
    }

    #[test]
    fn test_eleven_x_ticks_in_order() {
        let svg = render(&Leaderboard::builtin());
        assert_eq!(svg.matches(r#"class="chart-x-tick""#).count(), 11);

        let positions: Vec<_> = Leaderboard::builtin()
            .data()
            .iter()
            .map(|p| svg.find(&format!(">{}</text>", p.date)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_y_axis_labels_show_fixed_domain() {
        let svg = render(&Leaderboard::builtin());
        assert_eq!(svg.matches(r#"class="chart-y-tick""#).count(), 5);
        for label in ["1000", "1150", "1300", "1450", "1600"] {
            assert!(svg.contains(&format!(">{}</text>", label)));
        }
    }

    #[test]
    fn test_one_line_per_provider() {
        let svg = render(&Leaderboard::builtin());
        assert_eq!(svg.matches(r#"class="chart-series""#).count(), 6);
        assert_eq!(svg.matches(r#"class="chart-line""#).count(), 6);
        for (provider, color) in crate::leaderboard::PROVIDER_COLORS {
            assert!(svg.contains(&format!(r#"data-provider="{}""#, provider)));
            assert!(svg.contains(&format!(r#"stroke="{}" stroke-width="2.5""#, color)));
        }
    }

    #[test]
    fn test_tooltip_per_point() {
        let svg = render(&Leaderboard::builtin());
        assert_eq!(svg.matches("<title>").count(), 66);
        assert!(svg.contains("<title>2025-07-01 · Google: 1473</title>"));
    }

    #[test]
    fn test_gap_adds_segment_for_that_provider() {
        let mut data = Leaderboard::builtin().data().to_vec();
        data[6].scores.remove("DeepSeek");
        let board = Leaderboard::new(data, default_palette()).unwrap();
        let svg = render(&board);

        assert_eq!(svg.matches(r#"class="chart-line""#).count(), 7);
        assert_eq!(svg.matches("<title>").count(), 65);
        assert!(!svg.contains("<title>2025-05-01 · DeepSeek"));
        assert!(svg.contains("<title>2025-05-01 · Google: 1439</title>"));
    }

    #[test]
    fn test_lines_are_clipped_to_plot_area() {
        let svg = render(&Leaderboard::builtin());
        assert!(svg.contains(r#"<clipPath id="plot-area-clip">"#));
        assert!(svg.contains(r#"clip-path="url(#plot-area-clip)""#));
    }

    #[test]
    fn test_render_is_deterministic() {
        let board = Leaderboard::builtin();
        assert_eq!(render(&board), render(&board));
    }

    #[test]
    fn test_removed_provider_draws_no_line() {
        let board = Leaderboard::builtin().without_provider("xAI");
        let svg = render(&board);
        assert_eq!(svg.matches(r#"class="chart-series""#).count(), 5);
        assert!(!svg.contains(r#"data-provider="xAI""#));
    }

    #[test]
    fn test_provider_names_are_escaped() {
        let palette = crate::leaderboard::SeriesPalette::new().with("A&B", "#123456");
        let data = vec![crate::leaderboard::DataPoint::new("2025-01-01").score("A&B", 1200.0)];
        let board = Leaderboard::new(data, palette).unwrap();
        let svg = render(&board);
        assert!(svg.contains("A&amp;B"));
        assert!(!svg.contains("A&B"));
    }
}
