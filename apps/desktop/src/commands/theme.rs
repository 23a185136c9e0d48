//! # Theme Commands
//!
//! Light/dark toggle in the header. Touches no item data.

use tracing::{debug, info};

use crate::state::{Theme, ThemeState};

/// Gets the current theme.
pub fn get_theme(theme: &ThemeState) -> Theme {
    debug!("get_theme command");
    theme.get()
}

/// Switches between light and dark.
pub fn toggle_theme(theme: &ThemeState) -> Theme {
    let next = theme.toggle();
    info!(theme = %next, "Theme toggled");
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_theme() {
        let theme = ThemeState::default();
        assert_eq!(get_theme(&theme), Theme::Light);
        assert_eq!(toggle_theme(&theme), Theme::Dark);
        assert_eq!(get_theme(&theme), Theme::Dark);
    }
}
