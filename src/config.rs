//! User preferences: narrative language and color theme.
//!
//! Preferences are read from the environment (and `.env`) once at startup and
//! passed explicitly to whatever presents results. `reload` re-reads them.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Locale;

/// Environment variable holding the preferred language (`en` / `ar`).
pub const LANG_VAR: &str = "VALUATE_LANG";
/// Environment variable holding the preferred theme (`light` / `dark`).
pub const THEME_VAR: &str = "VALUATE_THEME";

/// Color theme for the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Theme> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub locale: Locale,
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            theme: Theme::Light,
        }
    }
}

impl Preferences {
    /// Load from the process environment, after `.env` if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Unrecognized values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut prefs = Self::default();
        if let Some(raw) = lookup(LANG_VAR) {
            match Locale::parse(&raw) {
                Some(locale) => prefs.locale = locale,
                None => debug!(value = %raw, "ignoring unrecognized {LANG_VAR}"),
            }
        }
        if let Some(raw) = lookup(THEME_VAR) {
            match Theme::parse(&raw) {
                Some(theme) => prefs.theme = theme,
                None => debug!(value = %raw, "ignoring unrecognized {THEME_VAR}"),
            }
        }
        prefs
    }

    /// Re-read the environment; `.env` values override the current ones.
    pub fn reload(&mut self) {
        dotenvy::dotenv_override().ok();
        self.reload_from(|key| std::env::var(key).ok());
    }

    pub fn reload_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        *self = Self::from_lookup(lookup);
        debug!(locale = %self.locale, theme = ?self.theme, "preferences reloaded");
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}
