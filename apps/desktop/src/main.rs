//! # Cost Per Wear Desktop Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cost Per Wear Desktop                            │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Frontend                                    │  │
//! │  │  • Summary cards        • Items table with [-] n [+]             │  │
//! │  │  • Add/Edit dialog      • Delete confirmation                    │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 │ JSON lines on stdin                   │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Starts the runtime                               │  │
//! │  │  lib.rs ─────► Logging, config, state, IPC loop                 │  │
//! │  │  commands/ ──► add_item, increment_wears, toggle_theme, ...     │  │
//! │  │  state/ ─────► ItemsState, ThemeState, ConfigState              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Everything lives in memory; closing the app discards the data.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // The actual setup is in lib.rs for better testability
    wardrobe_desktop_lib::run().await
}
