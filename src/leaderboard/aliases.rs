//! Provider aliases
//!
//! Leaderboard exports name some providers by their organization
//! (`Mistral AI`) rather than the palette key (`Mistral`).

use std::collections::HashMap;

use super::types::SeriesPalette;

/// Organizations counted towards each provider
#[derive(Debug, Clone)]
pub struct ProviderAliases {
    aliases: HashMap<String, Vec<String>>,
}

impl Default for ProviderAliases {
    fn default() -> Self {
        Self::new()
            .alias("Google", &["Google"])
            .alias("OpenAI", &["OpenAI"])
            .alias("Anthropic", &["Anthropic"])
            .alias("DeepSeek", &["DeepSeek"])
            .alias("xAI", &["xAI"])
            .alias("Mistral", &["Mistral AI", "Mistral"])
    }
}

impl ProviderAliases {
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Builder method: set the organizations for a provider
    pub fn alias(mut self, provider: &str, organizations: &[&str]) -> Self {
        self.aliases.insert(
            provider.to_string(),
            organizations.iter().map(|o| o.to_string()).collect(),
        );
        self
    }

    /// Does `organization` count towards `provider`?
    ///
    /// A provider without aliases matches its own name only.
    pub fn matches(&self, provider: &str, organization: &str) -> bool {
        match self.aliases.get(provider) {
            Some(orgs) => orgs.iter().any(|o| o == organization),
            None => provider == organization,
        }
    }

    /// Palette key for a column or organization name
    ///
    /// An exact palette key wins; otherwise the first provider, in palette
    /// order, whose aliases include `name`.
    pub fn resolve<'p>(&self, palette: &'p SeriesPalette, name: &str) -> Option<&'p str> {
        palette
            .providers()
            .find(|p| *p == name)
            .or_else(|| palette.providers().find(|p| self.matches(p, name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::default_palette;

    #[test]
    fn test_resolve_exact_and_alias() {
        let aliases = ProviderAliases::default();
        let palette = default_palette();

        assert_eq!(aliases.resolve(&palette, "Google"), Some("Google"));
        assert_eq!(aliases.resolve(&palette, "Mistral"), Some("Mistral"));
        assert_eq!(aliases.resolve(&palette, "Mistral AI"), Some("Mistral"));
        assert_eq!(aliases.resolve(&palette, "Meta"), None);
    }

    #[test]
    fn test_unaliased_provider_matches_itself() {
        let aliases = ProviderAliases::new();
        assert!(aliases.matches("Qwen", "Qwen"));
        assert!(!aliases.matches("Qwen", "Alibaba"));
    }

    #[test]
    fn test_alias_outside_palette_does_not_resolve() {
        let aliases = ProviderAliases::default();
        let palette = default_palette().without("Mistral");
        assert_eq!(aliases.resolve(&palette, "Mistral AI"), None);
    }
}
