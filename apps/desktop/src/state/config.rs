//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`WARDROBE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use super::theme::Theme;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConfigState {
    /// Title shown in the header
    pub app_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Theme the session starts with
    pub theme: Theme,

    /// Start the session with the sample wardrobe
    pub seed_samples: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Title: "Cost Per Wear"
    /// - Currency: $
    /// - Theme: light
    /// - Sample wardrobe: on
    fn default() -> Self {
        ConfigState {
            app_name: "Cost Per Wear".to_string(),
            currency_symbol: "$".to_string(),
            theme: Theme::Light,
            seed_samples: true,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `WARDROBE_APP_NAME`: Override the header title
    /// - `WARDROBE_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `WARDROBE_THEME`: `light` or `dark`
    /// - `WARDROBE_SEED_SAMPLES`: `true`/`false` (also `1`/`0`, `yes`/`no`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Unparseable values are logged and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(app_name) = lookup("WARDROBE_APP_NAME") {
            config.app_name = app_name;
        }

        if let Some(symbol) = lookup("WARDROBE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(theme) = lookup("WARDROBE_THEME") {
            match theme.parse::<Theme>() {
                Ok(theme) => config.theme = theme,
                Err(e) => warn!(error = %e, "Ignoring WARDROBE_THEME"),
            }
        }

        if let Some(seed) = lookup("WARDROBE_SEED_SAMPLES") {
            match parse_flag(&seed) {
                Some(seed) => config.seed_samples = seed,
                None => warn!(value = %seed, "Ignoring WARDROBE_SEED_SAMPLES"),
            }
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            (cents / 100).abs(),
            (cents % 100).abs()
        )
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
