//! # Wear Commands
//!
//! The inline `[-] 25 [+]` control in each table row.
//!
//! ```text
//! [-]  decrement_wears  → wears - 1, stays at 0 when already 0
//! [+]  increment_wears  → wears + 1
//! box  set_wears        → typed value; negative ignored, garbage reads as 0
//! ```
//!
//! Unknown ids return the unchanged inventory.

use serde::Deserialize;
use tracing::debug;

use super::item::InventoryResponse;
use crate::state::{ConfigState, ItemsState};

/// What the wear box sent: the raw text, or a number if the frontend
/// already parsed it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WearsValue {
    Number(i64),
    Text(String),
}

impl WearsValue {
    fn as_input(&self) -> String {
        match self {
            WearsValue::Number(n) => n.to_string(),
            WearsValue::Text(text) => text.clone(),
        }
    }
}

/// Adds one wear.
pub fn increment_wears(items: &ItemsState, config: &ConfigState, id: String) -> InventoryResponse {
    debug!(id = %id, "increment_wears command");
    items.with_store_mut(|s| {
        s.increment_wears(&id);
        InventoryResponse::new(s, config)
    })
}

/// Removes one wear, never going below zero.
pub fn decrement_wears(items: &ItemsState, config: &ConfigState, id: String) -> InventoryResponse {
    debug!(id = %id, "decrement_wears command");
    items.with_store_mut(|s| {
        s.decrement_wears(&id);
        InventoryResponse::new(s, config)
    })
}

/// Applies a value typed into the wear box.
pub fn set_wears(
    items: &ItemsState,
    config: &ConfigState,
    id: String,
    value: WearsValue,
) -> InventoryResponse {
    let input = value.as_input();
    debug!(id = %id, input = %input, "set_wears command");

    items.with_store_mut(|s| {
        if s.set_wears_from_input(&id, &input).is_none() {
            debug!(id = %id, input = %input, "set_wears ignored");
        }
        InventoryResponse::new(s, config)
    })
}
