use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::reveal::RevealOptions;
use crate::theme::Theme;

/// Tunables for the page's behavior.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Storage key holding the theme preference.
    pub storage_key: String,
    /// Theme used when nothing usable is stored.
    pub default_theme: Theme,
    /// Added to the scroll position before matching it against sections.
    pub scroll_offset: f64,
    /// Simulated delay of a contact form submission.
    pub send_delay_ms: u64,
    /// How long a success message stays visible.
    pub success_hide_ms: u64,
    pub reveal: RevealOptions,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            default_theme: Theme::Light,
            scroll_offset: 100.0,
            send_delay_ms: 1500,
            success_hide_ms: 5000,
            reveal: RevealOptions::default(),
        }
    }
}

impl PageConfig {
    /// Builds the config from values baked in at compile time, falling back
    /// to the defaults.
    ///
    /// # Build-time variables
    /// - `SITE_DEFAULT_THEME`: "light" or "dark".
    /// - `SITE_SCROLL_OFFSET`: pixels, e.g. "80".
    /// - `SITE_SEND_DELAY_MS`: milliseconds.
    /// - `SITE_SUCCESS_HIDE_MS`: milliseconds.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| match name {
            "SITE_DEFAULT_THEME" => option_env!("SITE_DEFAULT_THEME"),
            "SITE_SCROLL_OFFSET" => option_env!("SITE_SCROLL_OFFSET"),
            "SITE_SEND_DELAY_MS" => option_env!("SITE_SEND_DELAY_MS"),
            "SITE_SUCCESS_HIDE_MS" => option_env!("SITE_SUCCESS_HIDE_MS"),
            _ => None,
        })
    }

    /// Parses a JSON document. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Applies overrides from `lookup`. Values that fail to parse are ignored.
    pub fn with_overrides<'a>(mut self, lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        fn parsed<T: FromStr>(value: Option<&str>) -> Option<T> {
            value.and_then(|v| v.trim().parse().ok())
        }

        if let Some(theme) = parsed(lookup("SITE_DEFAULT_THEME")) {
            self.default_theme = theme;
        }
        if let Some(offset) = parsed(lookup("SITE_SCROLL_OFFSET")) {
            self.scroll_offset = offset;
        }
        if let Some(ms) = parsed(lookup("SITE_SEND_DELAY_MS")) {
            self.send_delay_ms = ms;
        }
        if let Some(ms) = parsed(lookup("SITE_SUCCESS_HIDE_MS")) {
            self.success_hide_ms = ms;
        }
        self
    }

    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    pub fn success_hide_delay(&self) -> Duration {
        Duration::from_millis(self.success_hide_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.default_theme, Theme::Light);
        assert_eq!(config.scroll_offset, 100.0);
        assert_eq!(config.send_delay(), Duration::from_millis(1500));
        assert_eq!(config.success_hide_delay(), Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let config = PageConfig::default().with_overrides(|name| match name {
            "SITE_DEFAULT_THEME" => Some("dark"),
            "SITE_SCROLL_OFFSET" => Some(" 64 "),
            "SITE_SEND_DELAY_MS" => Some("soon"),
            _ => None,
        });
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.scroll_offset, 64.0);
        // unparsable, keeps default
        assert_eq!(config.send_delay_ms, 1500);
        assert_eq!(config.success_hide_ms, 5000);
    }

    #[test]
    fn test_from_json_partial() {
        let config = PageConfig::from_json(r#"{ "default_theme": "dark", "send_delay_ms": 10 }"#)
            .unwrap();
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.send_delay_ms, 10);
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.reveal, RevealOptions::default());
    }

    #[test]
    fn test_from_json_rejects_bad_theme() {
        assert!(PageConfig::from_json(r#"{ "default_theme": "blue" }"#).is_err());
    }
}
