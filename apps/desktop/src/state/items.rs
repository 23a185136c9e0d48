//! # Items State
//!
//! Holds the session's [`ItemStore`].
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` so that each command sees and
//! leaves a whole snapshot: the frontend never observes a half-applied
//! mutation.

use std::sync::{Arc, Mutex, PoisonError};

use wardrobe_core::ItemStore;

/// Managed item store.
#[derive(Debug, Clone)]
pub struct ItemsState {
    store: Arc<Mutex<ItemStore>>,
}

impl ItemsState {
    /// Wraps an existing store.
    pub fn new(store: ItemStore) -> Self {
        ItemsState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let stats = items.with_store(|store| store.stats());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ItemStore) -> R,
    {
        // Store mutations are single-step; a poisoned lock still guards a
        // valid list.
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// items.with_store_mut(|store| store.increment_wears(&id));
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ItemStore) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

impl Default for ItemsState {
    fn default() -> Self {
        Self::new(ItemStore::new())
    }
}
