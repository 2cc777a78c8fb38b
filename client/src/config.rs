use std::time::Duration;

use pokedex_domain::ARTWORK_BASE_URL;

/// Default PokeAPI host
pub const POKEAPI_URL: &str = "https://pokeapi.co";

pub const DEFAULT_PAGE_SIZE: u32 = 20;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Client configuration.
///
/// `Default` targets the public API; [`ClientConfig::from_env`] layers
/// `POKEDEX_BASE_URL`, `POKEDEX_PAGE_SIZE` and `POKEDEX_LANGUAGE` on top.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub artwork_base_url: String,
    pub page_size: u32,
    pub request_timeout: Duration,
    /// Flavor text language code
    pub language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            artwork_base_url: ARTWORK_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(10),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key/value source. Invalid values are
    /// logged and ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("POKEDEX_BASE_URL").filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup("POKEDEX_PAGE_SIZE") {
            match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => self.page_size = size,
                _ => tracing::warn!(value = %raw, "Ignoring invalid POKEDEX_PAGE_SIZE"),
            }
        }

        if let Some(language) = lookup("POKEDEX_LANGUAGE").filter(|v| !v.trim().is_empty()) {
            self.language = language.trim().to_lowercase();
        }

        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Page size, clamped to at least 1
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://pokeapi.co");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::default().with_overrides(lookup(&[
            ("POKEDEX_BASE_URL", "http://localhost:8080"),
            ("POKEDEX_PAGE_SIZE", "50"),
            ("POKEDEX_LANGUAGE", "FR"),
        ]));

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.language, "fr");
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let config = ClientConfig::default().with_overrides(lookup(&[
            ("POKEDEX_BASE_URL", "  "),
            ("POKEDEX_PAGE_SIZE", "0"),
        ]));
        assert_eq!(config, ClientConfig::default());

        let config = ClientConfig::default()
            .with_overrides(lookup(&[("POKEDEX_PAGE_SIZE", "lots")]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_size_is_at_least_one() {
        assert_eq!(ClientConfig::default().with_page_size(0).page_size, 1);
    }
}
