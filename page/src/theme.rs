use dioxus_logger::tracing::{info, warn};
use serde::{Deserialize, Serialize};

use crate::context::PageContext;
use crate::event::PageEvent;
use crate::storage::{KeyValueStore, StorageError};

/// Id of the control that flips the theme.
pub const TOGGLE_ID: &str = "themeToggle";
/// Body attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// The page's color scheme.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The glyph shown on the toggle: a sun while dark, a moon while light.
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    /// Reads the persisted theme. Anything missing, unknown or unreadable
    /// yields `default`.
    pub fn load(store: &dyn KeyValueStore, key: &str, default: Theme) -> Theme {
        match store.get_item(key) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!("ignoring unknown stored theme {raw:?}");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                warn!("could not read theme preference: {e}");
                default
            }
        }
    }

    pub fn save(self, store: &mut dyn KeyValueStore, key: &str) -> Result<(), StorageError> {
        store.set_item(key, self.into())
    }
}

pub(crate) fn on_load(ctx: &mut PageContext<'_>, _event: &PageEvent) {
    let config = &ctx.state.config;
    ctx.state.theme = Theme::load(&*ctx.store, &config.storage_key, config.default_theme);
    info!("theme: {}", ctx.state.theme);
}

pub(crate) fn on_toggle(ctx: &mut PageContext<'_>, _event: &PageEvent) {
    let theme = ctx.state.theme.toggled();
    ctx.state.theme = theme;
    if let Err(e) = theme.save(&mut *ctx.store, &ctx.state.config.storage_key) {
        warn!("theme preference not persisted: {e}");
    }
    info!("theme toggled to {theme}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_glyphs() {
        assert_eq!(Theme::Light.glyph(), "🌙");
        assert_eq!(Theme::Dark.glyph(), "☀️");
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("solarized".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(<&'static str>::from(Theme::Light), "light");
    }

    #[test]
    fn test_load_falls_back_to_default() {
        let empty = MemoryStore::new();
        assert_eq!(Theme::load(&empty, "theme", Theme::Light), Theme::Light);

        let junk = MemoryStore::new().with_item("theme", "sepia");
        assert_eq!(Theme::load(&junk, "theme", Theme::Light), Theme::Light);

        let broken = MemoryStore::unavailable();
        assert_eq!(Theme::load(&broken, "theme", Theme::Dark), Theme::Dark);

        let stored = MemoryStore::new().with_item("theme", "dark");
        assert_eq!(Theme::load(&stored, "theme", Theme::Light), Theme::Dark);
    }

    #[test]
    fn test_save_writes_lowercase_value() {
        let mut store = MemoryStore::new();
        Theme::Dark.save(&mut store, "theme").unwrap();
        assert_eq!(store.get("theme"), Some("dark"));
    }
}
