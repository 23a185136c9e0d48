//! # Cost Per Wear Desktop Library
//!
//! Backend for the Cost Per Wear wardrobe tracker.
//! This is the main entry point that builds state and runs the IPC loop.
//!
//! ## Module Organization
//! ```text
//! wardrobe_desktop_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── ipc.rs          ◄─── Line-delimited JSON over stdin/stdout
//! ├── state/
//! │   ├── mod.rs      ◄─── AppContext and state exports
//! │   ├── items.rs    ◄─── Item store behind a mutex
//! │   ├── theme.rs    ◄─── Light/dark preference
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch by command name
//! │   ├── item.rs     ◄─── List/add/edit/delete commands
//! │   ├── wears.rs    ◄─── Wear counter commands
//! │   ├── theme.rs    ◄─── Theme commands
//! │   └── config.rs   ◄─── Config retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Streams
//! stdout carries only responses. Logs go to stderr.

pub mod commands;
pub mod error;
pub mod ipc;
pub mod state;

use tokio::io::{stdin, stdout, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{AppContext, ConfigState};

/// Runs the backend until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • WARDROBE_* environment variables over defaults                    │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • ItemsState: sample wardrobe unless WARDROBE_SEED_SAMPLES=false    │
/// │     • ThemeState: theme from config                                     │
/// │                                                                         │
/// │  4. Serve ────────────────────────────────────────────────────────────► │
/// │     • One JSON request per stdin line, one response per stdout line     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> std::io::Result<()> {
    init_tracing();

    info!("Starting Cost Per Wear backend");

    let config = ConfigState::from_env();
    info!(
        app_name = %config.app_name,
        theme = %config.theme,
        seed_samples = config.seed_samples,
        "Configuration loaded"
    );

    let ctx = AppContext::new(config);
    info!(items = ctx.items.with_store(|s| s.len()), "State initialized");

    ipc::serve(&ctx, BufReader::new(stdin()), stdout()).await?;

    info!("Shutting down");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=wardrobe=trace` - Show trace for wardrobe crates only
/// - Default: INFO, DEBUG for wardrobe crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wardrobe=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
