//! Display Mode
//!
//! Two visual themes; the choice survives reloads via `localStorage`.

use tracing::warn;

const STORAGE_KEY: &str = "taskclock.theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
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

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Class set on the root element
    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Light => "app theme-light",
            Theme::Dark => "app theme-dark",
        }
    }

    /// Label for the button that switches away from this theme
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            warn!(?err, "localStorage unavailable");
            None
        }
    }
}

/// Theme saved by a previous session, `Light` if none
pub fn load_theme() -> Theme {
    local_storage()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .map(|value| Theme::parse(&value))
        .unwrap_or_default()
}

pub fn save_theme(theme: Theme) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(err) = storage.set_item(STORAGE_KEY, theme.as_str()) {
        warn!(?err, theme = theme.as_str(), "failed to persist theme");
    }
}
