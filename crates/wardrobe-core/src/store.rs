//! # Item Store
//!
//! The authoritative, in-memory list of wardrobe items.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Item Store Operations                                │
//! │                                                                         │
//! │  Frontend Action          Command                 Store Change          │
//! │  ───────────────          ───────                 ────────────          │
//! │                                                                         │
//! │  Submit add form ────────► add_item() ──────────► items.push(item)      │
//! │                                                                         │
//! │  Submit edit form ───────► update_item() ───────► item.apply(patch)     │
//! │  Click + / - ────────────► increment/decrement ─► item.wears ± 1        │
//! │  Type in wears box ──────► set_wears() ─────────► item.wears = n        │
//! │                                                                         │
//! │  Confirm delete ─────────► delete_item() ───────► items.remove(i)       │
//! │                                                                         │
//! │  Render ─────────────────► list_items() ────────► (read only)           │
//! │                                                                         │
//! │  NOTE: Unknown ids are silent no-ops, never errors.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Ids are unique (UUID v4 per add)
//! - Order is insertion order; nothing ever sorts the list
//! - The store performs no validation; the form boundary does

use chrono::Utc;
use uuid::Uuid;

use crate::money::Money;
use crate::stats::InventoryStats;
use crate::types::{Item, ItemPatch, NewItem};
use crate::validation::parse_wears_input;

/// Ordered collection of wardrobe items.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ItemStore { items: Vec::new() }
    }

    /// Creates a store pre-filled with [`sample_items`].
    pub fn with_samples() -> Self {
        let mut store = ItemStore::new();
        for item in sample_items() {
            store.add(item);
        }
        store
    }

    /// Appends a new item and returns it with its freshly assigned id.
    pub fn add(&mut self, new_item: NewItem) -> Item {
        let item = new_item.into_item(Uuid::new_v4().to_string(), Utc::now());
        self.items.push(item.clone());
        item
    }

    /// Merges `patch` into the item with `id`.
    ///
    /// Returns the updated item, or `None` when no item has that id (in
    /// which case nothing changes).
    pub fn update(&mut self, id: &str, patch: ItemPatch) -> Option<&Item> {
        let item = self.get_mut(id)?;
        item.apply(patch);
        Some(&*item)
    }

    /// Removes the item with `id`, returning it if it was present.
    pub fn delete(&mut self, id: &str) -> Option<Item> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(index))
    }

    /// Current ordered snapshot.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one wear to the item with `id`.
    pub fn increment_wears(&mut self, id: &str) -> Option<&Item> {
        let item = self.get_mut(id)?;
        item.increment_wears();
        Some(&*item)
    }

    /// Removes one wear from the item with `id`, stopping at zero.
    pub fn decrement_wears(&mut self, id: &str) -> Option<&Item> {
        let item = self.get_mut(id)?;
        item.decrement_wears();
        Some(&*item)
    }

    /// Applies text typed into an item's wear box.
    ///
    /// Unparseable text counts as zero; a negative number is ignored.
    /// Returns the wear count that was applied, if any.
    pub fn set_wears_from_input(&mut self, id: &str, input: &str) -> Option<u32> {
        let wears = parse_wears_input(input)?;
        self.update(id, ItemPatch::wears(wears))?;
        Some(wears)
    }

    /// Dashboard statistics for the current snapshot.
    pub fn stats(&self) -> InventoryStats {
        InventoryStats::from_items(&self.items)
    }
}

/// The starter wardrobe a fresh session opens with.
pub fn sample_items() -> Vec<NewItem> {
    vec![
        NewItem::new("Leather Jacket", Money::from_cents(30_000), 25),
        NewItem::new("Running Shoes", Money::from_cents(12_000), 50),
        NewItem::new("Denim Jeans", Money::from_cents(8_000), 40),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn shirt(wears: u32) -> NewItem {
        NewItem::new("Oxford Shirt", Money::from_cents(4_500), wears)
    }

    #[test]
    fn test_add_appends_with_fresh_id() {
        let mut store = ItemStore::with_samples();
        let existing: HashSet<String> = store.list().iter().map(|i| i.id.clone()).collect();

        let added = store.add(shirt(2));

        assert_eq!(store.len(), 4);
        assert_eq!(store.list().last(), Some(&added));
        assert!(!existing.contains(&added.id));
        assert_eq!(added.name, "Oxford Shirt");
        assert_eq!(added.wears, 2);
    }

    #[test]
    fn test_ids_unique_under_rapid_creation() {
        let mut store = ItemStore::new();
        for _ in 0..1000 {
            store.add(shirt(0));
        }
        let ids: HashSet<&str> = store.list().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let store = ItemStore::with_samples();
        let names: Vec<&str> = store.list().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Leather Jacket", "Running Shoes", "Denim Jeans"]);
    }

    #[test]
    fn test_update_wears_touches_only_that_item() {
        let mut store = ItemStore::with_samples();
        let before = store.list().to_vec();
        let target = before[1].id.clone();

        store.update(&target, ItemPatch::wears(7));

        let after = store.list();
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(after) {
            if old.id == target {
                assert_eq!(new.wears, 7);
                assert_eq!(Item { wears: old.wears, ..new.clone() }, *old);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = ItemStore::with_samples();
        let before = store.list().to_vec();

        assert!(store.update("missing", ItemPatch::wears(99)).is_none());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = ItemStore::with_samples();
        let target = store.list()[0].id.clone();

        let removed = store.delete(&target);

        assert_eq!(removed.map(|i| i.name), Some("Leather Jacket".to_string()));
        assert_eq!(store.len(), 2);
        assert!(store.get(&target).is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = ItemStore::with_samples();
        let before = store.list().to_vec();

        assert!(store.delete("missing").is_none());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_decrement_at_zero_stays_zero() {
        let mut store = ItemStore::new();
        let id = store.add(shirt(0)).id;

        store.decrement_wears(&id);

        assert_eq!(store.get(&id).map(|i| i.wears), Some(0));
    }

    #[test]
    fn test_increment_then_decrement() {
        let mut store = ItemStore::new();
        let id = store.add(shirt(1)).id;

        store.increment_wears(&id);
        store.increment_wears(&id);
        assert_eq!(store.get(&id).map(|i| i.wears), Some(3));

        store.decrement_wears(&id);
        assert_eq!(store.get(&id).map(|i| i.wears), Some(2));
    }

    #[test]
    fn test_set_wears_from_input() {
        let mut store = ItemStore::new();
        let id = store.add(shirt(5)).id;

        assert_eq!(store.set_wears_from_input(&id, "12"), Some(12));
        assert_eq!(store.get(&id).map(|i| i.wears), Some(12));

        // Negative input is ignored
        assert_eq!(store.set_wears_from_input(&id, "-3"), None);
        assert_eq!(store.get(&id).map(|i| i.wears), Some(12));

        // Unparseable input reads as zero
        assert_eq!(store.set_wears_from_input(&id, "abc"), Some(0));
        assert_eq!(store.get(&id).map(|i| i.wears), Some(0));
    }

    #[test]
    fn test_set_wears_from_huge_input() {
        let mut store = ItemStore::new();
        let id = store.add(shirt(12)).id;

        assert_eq!(store.set_wears_from_input(&id, "-99999999999999999999"), None);
        assert_eq!(store.get(&id).map(|i| i.wears), Some(12));

        assert_eq!(
            store.set_wears_from_input(&id, "99999999999999999999"),
            Some(u32::MAX)
        );
        assert_eq!(store.get(&id).map(|i| i.wears), Some(u32::MAX));
    }

    #[test]
    fn test_set_wears_unknown_id() {
        let mut store = ItemStore::new();
        assert_eq!(store.set_wears_from_input("missing", "4"), None);
        assert!(store.is_empty());
    }
}
