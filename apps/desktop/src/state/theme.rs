//! # Theme State
//!
//! The light/dark preference. Process-wide, independent of item data, and
//! only ever read by the frontend for styling.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Managed theme preference.
#[derive(Debug, Clone)]
pub struct ThemeState {
    theme: Arc<Mutex<Theme>>,
}

impl ThemeState {
    /// Creates the state with an initial theme.
    pub fn new(theme: Theme) -> Self {
        ThemeState {
            theme: Arc::new(Mutex::new(theme)),
        }
    }

    /// Current theme.
    pub fn get(&self) -> Theme {
        *self.theme.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Flips the theme and returns the new value.
    pub fn toggle(&self) -> Theme {
        let mut theme = self.theme.lock().unwrap_or_else(PoisonError::into_inner);
        *theme = theme.toggled();
        *theme
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
