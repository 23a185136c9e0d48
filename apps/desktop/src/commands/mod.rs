//! # Commands Module
//!
//! All commands exposed to the frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch by name)
//! ├── item.rs     ◄─── List, add, edit, delete
//! ├── wears.rs    ◄─── Inline wear counter
//! ├── theme.rs    ◄─── Light/dark toggle
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  {"id": 3, "cmd": "increment_wears", "args": {"id": "9f1c..."}}         │
//! │         │                                                               │
//! │         │ (stdin, one line)                                             │
//! │         ▼                                                               │
//! │  invoke(ctx, "increment_wears", args)                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  wears::increment_wears(&ctx.items, &ctx.config, id)                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  {"id": 3, "ok": {"items": [...], "stats": {...}}}                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the theme
//! fn toggle_theme(theme: &ThemeState)
//!
//! // Needs items and config (for currency display)
//! fn add_item(items: &ItemsState, config: &ConfigState, form: ItemForm)
//! ```

pub mod config;
pub mod item;
pub mod theme;
pub mod wears;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ErrorCode};
use crate::state::AppContext;
use wardrobe_core::validation::ItemForm;
use wears::WearsValue;

/// A command body: decodes its own arguments, returns its JSON result.
pub type Handler = fn(&AppContext, Value) -> Result<Value, ApiError>;

#[derive(Debug, Deserialize)]
struct IdArgs {
    id: String,
}

#[derive(Debug, Deserialize)]
struct FormArgs {
    form: ItemForm,
}

#[derive(Debug, Deserialize)]
struct UpdateArgs {
    id: String,
    form: ItemForm,
}

#[derive(Debug, Deserialize)]
struct SetWearsArgs {
    id: String,
    value: WearsValue,
}

/// Registered commands. Commands without arguments ignore `args`.
pub const COMMANDS: &[(&str, Handler)] = &[
    ("list_items", |ctx: &AppContext, _: Value| {
        to_value(item::list_items(&ctx.items, &ctx.config))
    }),
    ("get_stats", |ctx: &AppContext, _: Value| {
        to_value(item::get_stats(&ctx.items, &ctx.config))
    }),
    ("add_item", |ctx: &AppContext, args: Value| {
        let FormArgs { form } = parse_args(args)?;
        to_value(item::add_item(&ctx.items, &ctx.config, form)?)
    }),
    ("update_item", |ctx: &AppContext, args: Value| {
        let UpdateArgs { id, form } = parse_args(args)?;
        to_value(item::update_item(&ctx.items, &ctx.config, id, form)?)
    }),
    ("increment_wears", |ctx: &AppContext, args: Value| {
        let IdArgs { id } = parse_args(args)?;
        to_value(wears::increment_wears(&ctx.items, &ctx.config, id))
    }),
    ("decrement_wears", |ctx: &AppContext, args: Value| {
        let IdArgs { id } = parse_args(args)?;
        to_value(wears::decrement_wears(&ctx.items, &ctx.config, id))
    }),
    ("set_wears", |ctx: &AppContext, args: Value| {
        let SetWearsArgs { id, value } = parse_args(args)?;
        to_value(wears::set_wears(&ctx.items, &ctx.config, id, value))
    }),
    ("delete_prompt", |ctx: &AppContext, args: Value| {
        let IdArgs { id } = parse_args(args)?;
        to_value(item::delete_prompt(&ctx.items, id)?)
    }),
    ("delete_item", |ctx: &AppContext, args: Value| {
        let IdArgs { id } = parse_args(args)?;
        to_value(item::delete_item(&ctx.items, &ctx.config, id))
    }),
    ("get_theme", |ctx: &AppContext, _: Value| {
        to_value(theme::get_theme(&ctx.theme))
    }),
    ("toggle_theme", |ctx: &AppContext, _: Value| {
        to_value(theme::toggle_theme(&ctx.theme))
    }),
    ("get_config", |ctx: &AppContext, _: Value| {
        to_value(config::get_config(&ctx.config))
    }),
];

/// Runs the command called `cmd` with JSON `args`.
pub fn invoke(ctx: &AppContext, cmd: &str, args: Value) -> Result<Value, ApiError> {
    let (_, handler) = COMMANDS
        .iter()
        .find(|(name, _)| *name == cmd)
        .ok_or_else(|| ApiError::unknown_command(cmd))?;

    handler(ctx, args).map_err(|mut e| {
        if e.code == ErrorCode::InvalidRequest {
            e.message = format!("{}: {}", cmd, e.message);
        }
        e
    })
}

fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ApiError> {
    serde_json::from_value(args)
        .map_err(|e| ApiError::invalid_request(format!("invalid arguments: {}", e)))
}

fn to_value<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}
