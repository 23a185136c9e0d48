//! # wardrobe-core: Pure Business Logic for Cost Per Wear
//!
//! This crate holds the wardrobe item store and every derived figure the
//! dashboard shows, as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cost Per Wear Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend                                     │   │
//! │  │    Summary Cards ──► Items Table ──► Item Form ──► Theme       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ stdio JSON IPC                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Desktop Commands                             │   │
//! │  │    list_items, add_item, increment_wears, delete_item, etc.    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ wardrobe-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   store   │  │   stats   │  │   │
//! │  │   │   Item    │  │   Money   │  │ ItemStore │  │ Inventory │  │   │
//! │  │   │ ItemPatch │  │  rounding │  │   CRUD    │  │   Stats   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, NewItem, ItemPatch)
//! - [`money`] - Money type with integer arithmetic
//! - [`store`] - The in-memory item store
//! - [`stats`] - Derived statistics over a snapshot
//! - [`validation`] - Form boundary parsing and rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use wardrobe_core::{ItemStore, Money, NewItem};
//!
//! let mut store = ItemStore::new();
//! store.add(NewItem::new("Running Shoes", Money::from_cents(12_000), 50));
//! store.add(NewItem::new("Denim Jeans", Money::from_cents(8_000), 40));
//!
//! let stats = store.stats();
//! assert_eq!(stats.total_items, 2);
//! assert_eq!(stats.total_spent.cents(), 20_000);
//! // $200.00 over 90 wears = $2.22
//! assert_eq!(stats.average_cost_per_wear.cents(), 222);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod stats;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use stats::InventoryStats;
pub use store::{sample_items, ItemStore};
pub use types::*;
