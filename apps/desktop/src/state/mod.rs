//! # State Module
//!
//! Manages application state for the desktop backend.
//!
//! ## Why Multiple State Types?
//! Instead of one struct holding everything behind a single lock, each
//! concern gets its own state type and commands declare exactly what they
//! need:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      AppContext                                 │   │
//! │  │  built once at startup, borrowed by every command              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  ItemsState  │  │  ThemeState  │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  app_name        │              │
//! │  │   ItemStore  │  │    Theme     │  │  currency_symbol │              │
//! │  │  >>          │  │  >>          │  │  seed_samples    │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ItemsState: every command runs to completion under the lock         │
//! │  • ThemeState: independent of item data, separate lock                 │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod items;
mod theme;

pub use config::ConfigState;
pub use items::ItemsState;
pub use theme::{Theme, ThemeState};

use wardrobe_core::ItemStore;

/// All managed state, owned by the application root.
#[derive(Debug)]
pub struct AppContext {
    pub items: ItemsState,
    pub theme: ThemeState,
    pub config: ConfigState,
}

impl AppContext {
    /// Builds the state objects from configuration.
    ///
    /// The store starts with the sample wardrobe unless
    /// `config.seed_samples` is off.
    pub fn new(config: ConfigState) -> Self {
        let store = if config.seed_samples {
            ItemStore::with_samples()
        } else {
            ItemStore::new()
        };

        AppContext {
            items: ItemsState::new(store),
            theme: ThemeState::new(config.theme),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_samples_by_default() {
        let ctx = AppContext::new(ConfigState::default());
        assert_eq!(ctx.items.with_store(|s| s.len()), 3);
    }

    #[test]
    fn test_seed_can_be_disabled() {
        let config = ConfigState {
            seed_samples: false,
            ..ConfigState::default()
        };
        let ctx = AppContext::new(config);
        assert!(ctx.items.with_store(|s| s.is_empty()));
    }

    #[test]
    fn test_theme_starts_from_config() {
        let config = ConfigState {
            theme: Theme::Dark,
            ..ConfigState::default()
        };
        let ctx = AppContext::new(config);
        assert_eq!(ctx.theme.get(), Theme::Dark);
    }
}
