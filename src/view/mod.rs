//! Page Views
//!
//! Server-rendered markup for the single dashboard page:
//!
//! - **Shell**: document root, metadata, fonts, analytics mount
//! - **Dashboard**: heading, chart card, legend grid
//! - **Style**: inline stylesheet for every class the markup uses

pub mod dashboard;
pub mod html;
pub mod shell;
pub mod style;

pub use dashboard::Dashboard;
pub use shell::{render_document, Icon, Metadata};

use crate::chart::ChartConfig;
use crate::leaderboard::Leaderboard;

/// Render the complete dashboard document
pub fn render_page(board: &Leaderboard, chart: &ChartConfig, meta: &Metadata) -> String {
    let content = Dashboard::new(board, chart).render();
    render_document(meta, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_contains_shell_and_dashboard() {
        let page = render_page(
            &Leaderboard::builtin(),
            &ChartConfig::default(),
            &Metadata::default(),
        );

        assert!(page.contains(r#"<html lang="en">"#));
        assert!(page.contains(dashboard::TITLE));
        assert!(page.contains("<svg"));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_page_is_byte_identical_across_renders() {
        let board = Leaderboard::builtin();
        let chart = ChartConfig::default();
        let meta = Metadata::default();
        assert_eq!(
            render_page(&board, &chart, &meta),
            render_page(&board, &chart, &meta)
        );
    }

    /// Class names used by the HTML outside the inline chart
    fn html_classes(page: &str) -> Vec<&str> {
        let start = page.find("<svg").unwrap();
        let end = page.find("</svg>").unwrap();
        let outside = [&page[..start], &page[end..]];

        let mut classes: Vec<&str> = outside
            .into_iter()
            .flat_map(|part| part.split(r#"class=""#).skip(1))
            .filter_map(|rest| rest.split('"').next())
            .flat_map(str::split_whitespace)
            .collect();
        classes.sort_unstable();
        classes.dedup();
        classes
    }

    #[test]
    fn test_every_markup_class_has_a_style_rule() {
        let page = render_page(
            &Leaderboard::builtin(),
            &ChartConfig::default(),
            &Metadata::default(),
        );
        let classes = html_classes(&page);
        assert!(classes.contains(&"lg:grid-cols-6"));
        assert!(classes.contains(&"legend-swatch"));

        let style_start = page.find("<style>").unwrap();
        let style_end = page.find("</style>").unwrap();
        let css = &page[style_start..style_end];

        for class in classes {
            let selector = style::class_selector(class);
            assert!(
                css.contains(&format!("{}{{", selector)) || css.contains(&format!("{} ", selector)),
                "no rule for {}",
                class
            );
        }
    }
}
