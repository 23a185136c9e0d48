//! # Domain Types
//!
//! Core domain types used throughout Cost Per Wear.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    NewItem      │   │      Item       │   │   ItemPatch     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  id (UUID)      │◄──│  name?          │       │
//! │  │  cost_cents     │add│  name           │upd│  cost_cents?    │       │
//! │  │  wears          │   │  cost_cents     │   │  wears?         │       │
//! │  │  category?      │   │  wears          │   │  category??     │       │
//! │  │  image_url?     │   │  category?      │   │  image_url??    │       │
//! │  └─────────────────┘   │  image_url?     │   └─────────────────┘       │
//! │                        │  created_at     │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is a UUID v4 string assigned by the store on add and never changed.
//! Nothing else about an item is unique; two items may share a name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A tracked wardrobe piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the table.
    pub name: String,

    /// Purchase cost in cents.
    pub cost_cents: i64,

    /// How many times the item has been worn.
    pub wears: u32,

    /// Free-form category badge (e.g. "Outerwear").
    pub category: Option<String>,

    /// Image shown next to the name. Never fetched or checked.
    pub image_url: Option<String>,

    /// When the item was added.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Returns the cost as a Money type.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }

    /// Cost divided by wears, or zero for an item that was never worn.
    pub fn cost_per_wear(&self) -> Money {
        self.cost().divide_by_count(u64::from(self.wears))
    }

    /// Adds one wear.
    pub fn increment_wears(&mut self) {
        self.wears = self.wears.saturating_add(1);
    }

    /// Removes one wear. Returns `false` and leaves the count alone when it
    /// is already zero.
    pub fn decrement_wears(&mut self) -> bool {
        match self.wears.checked_sub(1) {
            Some(wears) => {
                self.wears = wears;
                true
            }
            None => false,
        }
    }

    /// Merges a patch into this item. Fields the patch leaves as `None`
    /// keep their current value. The id and creation time never change.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(cost_cents) = patch.cost_cents {
            self.cost_cents = cost_cents;
        }
        if let Some(wears) = patch.wears {
            self.wears = wears;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }
}

// =============================================================================
// New Item
// =============================================================================

/// An item as submitted by the add form, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewItem {
    pub name: String,
    pub cost_cents: i64,
    pub wears: u32,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl NewItem {
    /// Creates a new item with no category or image.
    pub fn new(name: impl Into<String>, cost: Money, wears: u32) -> Self {
        NewItem {
            name: name.into(),
            cost_cents: cost.cents(),
            wears,
            category: None,
            image_url: None,
        }
    }

    /// Turns this into a stored item with the given identity.
    pub fn into_item(self, id: String, created_at: DateTime<Utc>) -> Item {
        Item {
            id,
            name: self.name,
            cost_cents: self.cost_cents,
            wears: self.wears,
            category: self.category,
            image_url: self.image_url,
            created_at,
        }
    }
}

// =============================================================================
// Item Patch
// =============================================================================

/// Partial update for an existing item.
///
/// `None` means "leave as is". The optional metadata fields are doubly
/// wrapped so a patch can also clear them: `Some(None)` removes the
/// category, `Some(Some(..))` replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub cost_cents: Option<i64>,
    pub wears: Option<u32>,
    pub category: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
}

impl ItemPatch {
    /// A patch that only sets the wear count.
    pub fn wears(wears: u32) -> Self {
        ItemPatch {
            wears: Some(wears),
            ..Default::default()
        }
    }
}

/// A full edit-form submission overwrites every field it carries.
impl From<NewItem> for ItemPatch {
    fn from(item: NewItem) -> Self {
        ItemPatch {
            name: Some(item.name),
            cost_cents: Some(item.cost_cents),
            wears: Some(item.wears),
            category: Some(item.category),
            image_url: Some(item.image_url),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
