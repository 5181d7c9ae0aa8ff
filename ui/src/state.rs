//! Global application state

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use std::str::FromStr;

const STORAGE_KEY_THEME: &str = "softsell_theme";

/// Colour scheme selected from the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Next theme when the toggle is pressed
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    /// Whether the `dark` class should be on the document
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => system_prefers_dark,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Selected colour scheme
    pub theme: RwSignal<Theme>,
    /// Origin of the SoftSell server
    pub api_base: String,
}

impl AppState {
    pub fn new() -> Self {
        let theme = LocalStorage::get::<String>(STORAGE_KEY_THEME)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let api_base = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();

        let state = Self {
            theme: RwSignal::new(theme),
            api_base,
        };
        apply_theme(theme);
        state
    }

    /// Select, persist and apply a theme
    pub fn set_theme(&self, theme: Theme) {
        if let Err(e) = LocalStorage::set(STORAGE_KEY_THEME, theme.as_str()) {
            tracing::warn!("Could not persist theme: {}", e);
        }
        self.theme.set(theme);
        apply_theme(theme);
    }

    pub fn cycle_theme(&self) {
        self.set_theme(self.theme.get_untracked().next());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let result = if theme.is_dark(system_prefers_dark()) {
        root.class_list().add_1("dark")
    } else {
        root.class_list().remove_1("dark")
    };
    if let Err(e) = result {
        tracing::warn!("Could not apply theme: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycles_through_all_three() {
        let start = Theme::Light;
        assert_eq!(start.next(), Theme::Dark);
        assert_eq!(start.next().next(), Theme::System);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_theme_string_round_trip() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_system_theme_follows_preference() {
        assert!(Theme::System.is_dark(true));
        assert!(!Theme::System.is_dark(false));
        assert!(Theme::Dark.is_dark(false));
        assert!(!Theme::Light.is_dark(true));
    }
}
