//! Inline Stylesheet
//!
//! The document is served on its own, so every class the dashboard markup
//! uses has a rule here. Breakpoints follow the usual utility widths:
//! `md` from 768px, `lg` from 1024px.

/// Complete stylesheet for the dashboard document
pub const STYLESHEET: &str = concat!(
    // fonts
    r#":root{--font-space-grotesk:"Space Grotesk",ui-sans-serif,system-ui,sans-serif;--font-ibm-plex-mono:"IBM Plex Mono",ui-monospace,monospace}"#,
    "*,::before,::after{box-sizing:border-box;border-width:0;border-style:solid;border-color:#2d2f33}",
    "body{margin:0;background:#1a1b1e;color:#ffffff;line-height:1.5}",
    "h1,h2,p{margin:0;font-size:inherit;font-weight:inherit}",
    ".font-space-grotesk{--font-sans:var(--font-space-grotesk)}",
    ".font-ibm-plex-mono{--font-mono:var(--font-ibm-plex-mono)}",
    ".font-sans{font-family:var(--font-space-grotesk)}",
    ".font-mono{font-family:var(--font-ibm-plex-mono)}",
    ".antialiased{-webkit-font-smoothing:antialiased;-moz-osx-font-smoothing:grayscale}",
    // page frame
    ".min-h-screen{min-height:100vh}",
    ".bg-background{background-color:#1a1b1e}",
    ".p-8{padding:2rem}",
    ".mx-auto{margin-left:auto;margin-right:auto}",
    ".max-w-6xl{max-width:72rem}",
    ".mb-2{margin-bottom:0.5rem}",
    ".mb-8{margin-bottom:2rem}",
    ".mt-8{margin-top:2rem}",
    // type
    ".text-3xl{font-size:1.875rem;line-height:2.25rem}",
    ".text-sm{font-size:0.875rem;line-height:1.25rem}",
    ".text-xs{font-size:0.75rem;line-height:1rem}",
    ".font-light{font-weight:300}",
    ".font-medium{font-weight:500}",
    ".font-bold{font-weight:700}",
    ".tracking-tight{letter-spacing:-0.025em}",
    ".uppercase{text-transform:uppercase}",
    ".text-foreground{color:#ffffff}",
    ".text-muted-foreground{color:#cecebf}",
    // card
    ".card{border-radius:0.75rem;border-width:1px;box-shadow:0 1px 2px rgba(0,0,0,0.3)}",
    ".bg-card{background-color:#212226}",
    ".border{border-width:1px}",
    ".border-border{border-color:#2d2f33}",
    ".card-header{display:flex;flex-direction:column;gap:0.375rem;padding:1.5rem}",
    ".card-content{padding:0 1.5rem 1.5rem}",
    ".chart{position:relative}",
    ".chart svg{display:block}",
    ".w-full{width:100%}",
    ".h-96{height:24rem}",
    // legend
    ".legend{align-items:stretch}",
    ".legend-entry{min-width:0}",
    ".legend-swatch{flex-shrink:0}",
    ".grid{display:grid}",
    ".grid-cols-2{grid-template-columns:repeat(2,minmax(0,1fr))}",
    ".gap-2{gap:0.5rem}",
    ".gap-4{gap:1rem}",
    ".flex{display:flex}",
    ".items-center{align-items:center}",
    ".p-3{padding:0.75rem}",
    ".rounded-lg{border-radius:0.5rem}",
    ".rounded-full{border-radius:9999px}",
    ".w-3{width:0.75rem}",
    ".h-3{height:0.75rem}",
    r"@media (min-width:768px){.md\:grid-cols-3{grid-template-columns:repeat(3,minmax(0,1fr))}}",
    r"@media (min-width:1024px){.lg\:grid-cols-6{grid-template-columns:repeat(6,minmax(0,1fr))}}",
);

/// CSS selector for a class name, with `:` escaped
pub fn class_selector(class: &str) -> String {
    format!(".{}", class.replace(':', r"\:"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_selector_escapes_variants() {
        assert_eq!(class_selector("grid"), ".grid");
        assert_eq!(class_selector("md:grid-cols-3"), r".md\:grid-cols-3");
    }

    #[test]
    fn test_breakpoints() {
        assert!(STYLESHEET.contains(r"@media (min-width:768px){.md\:grid-cols-3{"));
        assert!(STYLESHEET.contains(r"@media (min-width:1024px){.lg\:grid-cols-6{"));
        assert!(STYLESHEET.contains(".grid-cols-2{grid-template-columns:repeat(2,"));
    }

    #[test]
    fn test_swatch_has_size() {
        assert!(STYLESHEET.contains(".w-3{width:0.75rem}"));
        assert!(STYLESHEET.contains(".h-3{height:0.75rem}"));
        assert!(STYLESHEET.contains(".rounded-full{"));
    }
}
