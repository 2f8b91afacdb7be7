//! Document Shell
//!
//! The outermost page wrapper: `<html lang="en">`, head metadata and icons,
//! global font classes on `<body>`, the page content, and the analytics
//! mount point. The page-view beacon itself is fired by the server when it
//! serves the document (see `telemetry`); nothing in the markup waits on it.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use super::html::escape;
use super::style::STYLESHEET;

/// Font variable classes applied to `<body>`
pub const BODY_CLASSES: &str = "font-space-grotesk font-ibm-plex-mono font-sans antialiased";

/// Page icon link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub url: String,
    /// Media query, e.g. `(prefers-color-scheme: dark)`
    #[serde(default)]
    pub media: Option<String>,
    /// MIME type, e.g. `image/svg+xml`
    #[serde(default, rename = "type")]
    pub mime: Option<String>,
}

impl Icon {
    fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            media: None,
            mime: None,
        }
    }
}

/// Static document metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub generator: String,
    pub icons: Vec<Icon>,
    pub apple_icon: Option<String>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: "LM Arena Leaderboard".to_string(),
            description: "AI model performance scores over time".to_string(),
            generator: "arenaboard".to_string(),
            icons: vec![
                Icon {
                    media: Some("(prefers-color-scheme: light)".to_string()),
                    ..Icon::new("/icon-light-32x32.png")
                },
                Icon {
                    media: Some("(prefers-color-scheme: dark)".to_string()),
                    ..Icon::new("/icon-dark-32x32.png")
                },
                Icon {
                    mime: Some("image/svg+xml".to_string()),
                    ..Icon::new("/icon.svg")
                },
            ],
            apple_icon: Some("/apple-icon.png".to_string()),
        }
    }
}

/// Wrap page content in the full document
pub fn render_document(meta: &Metadata, content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 2048);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">");
    out.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    let _ = write!(out, "<title>{}</title>", escape(&meta.title));
    let _ = write!(
        out,
        r#"<meta name="description" content="{}"><meta name="generator" content="{}">"#,
        escape(&meta.description),
        escape(&meta.generator)
    );

    for icon in &meta.icons {
        let _ = write!(out, r#"<link rel="icon" href="{}""#, escape(&icon.url));
        if let Some(media) = &icon.media {
            let _ = write!(out, r#" media="{}""#, escape(media));
        }
        if let Some(mime) = &icon.mime {
            let _ = write!(out, r#" type="{}""#, escape(mime));
        }
        out.push('>');
    }
    if let Some(apple) = &meta.apple_icon {
        let _ = write!(out, r#"<link rel="apple-touch-icon" href="{}">"#, escape(apple));
    }

    let _ = write!(out, "<style>{}</style></head>", STYLESHEET);
    let _ = write!(out, r#"<body class="{}">"#, BODY_CLASSES);
    out.push_str(content);
    out.push_str(r#"<div id="analytics" data-beacon="page-view" hidden></div>"#);
    out.push_str("</body></html>\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_structure() {
        let doc = render_document(&Metadata::default(), "<main>hi</main>");

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<html lang="en">"#));
        assert!(doc.contains(&format!(r#"<body class="{}">"#, BODY_CLASSES)));
        assert!(doc.contains("<title>LM Arena Leaderboard</title>"));

        let content = doc.find("<main>hi</main>").unwrap();
        let analytics = doc.find(r#"id="analytics""#).unwrap();
        assert!(content < analytics);
    }

    #[test]
    fn test_icons() {
        let doc = render_document(&Metadata::default(), "");
        assert!(doc.contains(
            r#"<link rel="icon" href="/icon-dark-32x32.png" media="(prefers-color-scheme: dark)">"#
        ));
        assert!(doc.contains(r#"<link rel="icon" href="/icon.svg" type="image/svg+xml">"#));
        assert!(doc.contains(r#"<link rel="apple-touch-icon" href="/apple-icon.png">"#));
    }

    #[test]
    fn test_metadata_is_escaped() {
        let meta = Metadata {
            title: "Scores <beta>".to_string(),
            ..Metadata::default()
        };
        let doc = render_document(&meta, "");
        assert!(doc.contains("<title>Scores &lt;beta&gt;</title>"));
    }
}
