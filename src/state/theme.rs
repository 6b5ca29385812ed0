// Light/dark preference; the only thing the site persists.
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored choice first, then the OS preference, then dark.
    pub fn resolve(stored: Option<&str>, prefers_dark: Option<bool>) -> Self {
        if let Some(t) = stored.and_then(Theme::parse) {
            return t;
        }
        match prefers_dark {
            Some(false) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}
