//! # Inventory Statistics
//!
//! The four dashboard figures, recomputed from a snapshot on every call.
//!
//! ```text
//! ┌──────────────────┬──────────────────┬──────────────────┬──────────────────┐
//! │  Most Worn Item  │   Total Items    │   Total Spent    │  Avg Cost/Wear   │
//! │  Running Shoes   │        3         │     $500.00      │      $4.35       │
//! │  50 wears        │                  │                  │                  │
//! └──────────────────┴──────────────────┴──────────────────┴──────────────────┘
//! ```
//!
//! There is no cache to invalidate; a personal wardrobe is small enough that
//! a full pass per render costs nothing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Item;

/// Aggregates over the current item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryStats {
    /// Number of items.
    pub total_items: usize,

    /// Sum of every item's cost.
    pub total_spent: Money,

    /// Sum of every item's wears.
    pub total_wears: u64,

    /// `total_spent / total_wears`, or zero when nothing has been worn.
    pub average_cost_per_wear: Money,

    /// First item in list order with the highest wear count.
    pub most_worn: Option<Item>,
}

impl InventoryStats {
    /// Computes the statistics for `items`.
    pub fn from_items(items: &[Item]) -> Self {
        let total_spent: Money = items.iter().map(Item::cost).sum();
        let total_wears: u64 = items.iter().map(|i| u64::from(i.wears)).sum();

        InventoryStats {
            total_items: items.len(),
            total_spent,
            total_wears,
            average_cost_per_wear: total_spent.divide_by_count(total_wears),
            most_worn: most_worn(items).cloned(),
        }
    }
}

/// Left-to-right scan keeping the first maximum.
///
/// `Iterator::max_by_key` returns the *last* maximum, so ties would pick
/// the wrong item.
pub fn most_worn(items: &[Item]) -> Option<&Item> {
    items
        .iter()
        .reduce(|most, item| if item.wears > most.wears { item } else { most })
}
