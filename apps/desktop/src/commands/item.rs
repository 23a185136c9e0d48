//! # Item Commands
//!
//! Listing, adding, editing and deleting wardrobe items.
//!
//! ## Render Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every mutating command returns the full InventoryResponse, so the     │
//! │  frontend rerenders from exactly the snapshot the command produced.    │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Most Worn: Running Shoes │ Items: 3 │ Spent: $500.00 │ $4.35   │  │
//! │  ├──────────────────────────────────────────────────────────────────┤  │
//! │  │  Leather Jacket   Outerwear   $12.00   $300.00   [-] 25 [+]  ✎ 🗑 │  │
//! │  │  Running Shoes                $2.40    $120.00   [-] 50 [+]  ✎ 🗑 │  │
//! │  │  Denim Jeans                  $2.00    $80.00    [-] 40 [+]  ✎ 🗑 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::{ConfigState, ItemsState};
use wardrobe_core::validation::{validate_edit_form, validate_item_form, ItemForm};
use wardrobe_core::{CoreError, InventoryStats, Item, ItemStore};

/// One table row.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemDto {
    pub id: String,
    pub name: String,
    pub cost_cents: i64,
    pub wears: u32,
    pub category: Option<String>,
    pub image_url: Option<String>,
    /// Zero for an item that was never worn.
    pub cost_per_wear_cents: i64,
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        ItemDto {
            id: item.id.clone(),
            name: item.name.clone(),
            cost_cents: item.cost_cents,
            wears: item.wears,
            category: item.category.clone(),
            image_url: item.image_url.clone(),
            cost_per_wear_cents: item.cost_per_wear().cents(),
        }
    }
}

/// The summary panel, with raw values and ready-to-show strings.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StatsDto {
    pub total_items: usize,
    pub total_spent_cents: i64,
    pub total_wears: u64,
    pub average_cost_per_wear_cents: i64,
    pub most_worn_id: Option<String>,

    pub total_spent_display: String,
    pub average_cost_per_wear_display: String,
    /// Item name, or "N/A" when there are no items.
    pub most_worn_label: String,
    /// e.g. "50 wears"; empty when there are no items.
    pub most_worn_detail: String,
}

impl StatsDto {
    pub fn new(stats: &InventoryStats, config: &ConfigState) -> Self {
        let (most_worn_label, most_worn_detail) = match &stats.most_worn {
            Some(item) => (item.name.clone(), format!("{} wears", item.wears)),
            None => ("N/A".to_string(), String::new()),
        };

        StatsDto {
            total_items: stats.total_items,
            total_spent_cents: stats.total_spent.cents(),
            total_wears: stats.total_wears,
            average_cost_per_wear_cents: stats.average_cost_per_wear.cents(),
            most_worn_id: stats.most_worn.as_ref().map(|i| i.id.clone()),
            total_spent_display: config.format_currency(stats.total_spent.cents()),
            average_cost_per_wear_display: config
                .format_currency(stats.average_cost_per_wear.cents()),
            most_worn_label,
            most_worn_detail,
        }
    }
}

/// Items plus statistics: everything one render needs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryResponse {
    pub items: Vec<ItemDto>,
    pub stats: StatsDto,
}

impl InventoryResponse {
    pub fn new(store: &ItemStore, config: &ConfigState) -> Self {
        InventoryResponse {
            items: store.list().iter().map(ItemDto::from).collect(),
            stats: StatsDto::new(&store.stats(), config),
        }
    }
}

/// Text for the delete confirmation dialog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeletePrompt {
    pub id: String,
    pub title: String,
    pub message: String,
}

/// Gets the current inventory.
pub fn list_items(items: &ItemsState, config: &ConfigState) -> InventoryResponse {
    debug!("list_items command");
    items.with_store(|s| InventoryResponse::new(s, config))
}

/// Gets only the summary statistics.
pub fn get_stats(items: &ItemsState, config: &ConfigState) -> StatsDto {
    debug!("get_stats command");
    items.with_store(|s| StatsDto::new(&s.stats(), config))
}

/// Adds an item from the add dialog.
///
/// ## Behavior
/// - Name blank, cost blank or not a number: `VALIDATION_ERROR`, nothing added
/// - Wears blank or not a number: stored as 0
/// - Otherwise appended at the end of the list
pub fn add_item(
    items: &ItemsState,
    config: &ConfigState,
    form: ItemForm,
) -> Result<InventoryResponse, ApiError> {
    debug!(name = %form.name, cost = %form.cost, "add_item command");

    let new_item = validate_item_form(&form)?;

    Ok(items.with_store_mut(|s| {
        let item = s.add(new_item);
        info!(item_id = %item.id, name = %item.name, cost_cents = item.cost_cents, "Item added");
        InventoryResponse::new(s, config)
    }))
}

/// Saves the edit dialog for an existing item.
///
/// An unknown id leaves the inventory unchanged.
pub fn update_item(
    items: &ItemsState,
    config: &ConfigState,
    id: String,
    form: ItemForm,
) -> Result<InventoryResponse, ApiError> {
    debug!(id = %id, "update_item command");

    let patch = validate_edit_form(&form)?;

    Ok(items.with_store_mut(|s| {
        match s.update(&id, patch) {
            Some(item) => info!(item_id = %item.id, "Item updated"),
            None => debug!(id = %id, "update_item: no such item"),
        }
        InventoryResponse::new(s, config)
    }))
}

/// Returns the confirmation text shown before deleting.
pub fn delete_prompt(items: &ItemsState, id: String) -> Result<DeletePrompt, ApiError> {
    debug!(id = %id, "delete_prompt command");

    let name = items
        .with_store(|s| s.get(&id).map(|i| i.name.clone()))
        .ok_or_else(|| CoreError::ItemNotFound(id.clone()))?;

    Ok(DeletePrompt {
        message: format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            name
        ),
        title: "Delete Item".to_string(),
        id,
    })
}

/// Deletes an item. Called only after the user confirmed the prompt.
///
/// An unknown id leaves the inventory unchanged.
pub fn delete_item(items: &ItemsState, config: &ConfigState, id: String) -> InventoryResponse {
    debug!(id = %id, "delete_item command");

    items.with_store_mut(|s| {
        match s.delete(&id) {
            Some(item) => info!(item_id = %item.id, name = %item.name, "Item deleted"),
            None => debug!(id = %id, "delete_item: no such item"),
        }
        InventoryResponse::new(s, config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn setup() -> (ItemsState, ConfigState) {
        (ItemsState::new(ItemStore::with_samples()), ConfigState::default())
    }

    fn form(name: &str, cost: &str, wears: &str) -> ItemForm {
        ItemForm {
            name: name.to_string(),
            cost: cost.to_string(),
            wears: Some(wears.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_list_items_sample_dashboard() {
        let (items, config) = setup();

        let response = list_items(&items, &config);

        assert_eq!(response.items.len(), 3);
        assert_eq!(response.items[0].cost_per_wear_cents, 1200);
        assert_eq!(response.items[1].cost_per_wear_cents, 240);
        assert_eq!(response.items[2].cost_per_wear_cents, 200);

        let stats = response.stats;
        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.total_spent_display, "$500.00");
        assert_eq!(stats.average_cost_per_wear_display, "$4.35");
        assert_eq!(stats.most_worn_label, "Running Shoes");
        assert_eq!(stats.most_worn_detail, "50 wears");
    }

    #[test]
    fn test_empty_dashboard_labels() {
        let items = ItemsState::default();
        let stats = get_stats(&items, &ConfigState::default());

        assert_eq!(stats.most_worn_label, "N/A");
        assert_eq!(stats.most_worn_detail, "");
        assert_eq!(stats.total_spent_display, "$0.00");
        assert_eq!(stats.average_cost_per_wear_display, "$0.00");
        assert_eq!(stats.most_worn_id, None);
    }

    #[test]
    fn test_add_item_appends() {
        let (items, config) = setup();

        let response = add_item(&items, &config, form(" Wool Coat ", "250", "")).unwrap();

        let last = response.items.last().unwrap();
        assert_eq!(last.name, "Wool Coat");
        assert_eq!(last.cost_cents, 25_000);
        assert_eq!(last.wears, 0);
        assert_eq!(last.cost_per_wear_cents, 0);
        assert_eq!(response.stats.total_items, 4);
    }

    #[test]
    fn test_add_item_rejects_blank_name() {
        let (items, config) = setup();

        let err = add_item(&items, &config, form("  ", "10", "0")).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(items.with_store(|s| s.len()), 3);
    }

    #[test]
    fn test_add_item_rejects_non_numeric_cost() {
        let (items, config) = setup();

        let err = add_item(&items, &config, form("Hat", "cheap", "0")).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_update_item_overwrites_form_fields() {
        let (items, config) = setup();
        let id = list_items(&items, &config).items[2].id.clone();

        let response = update_item(&items, &config, id.clone(), form("Black Jeans", "90", "41"))
            .unwrap();

        let row = response.items.iter().find(|i| i.id == id).unwrap();
        assert_eq!(row.name, "Black Jeans");
        assert_eq!(row.cost_cents, 9_000);
        assert_eq!(row.wears, 41);
        assert_eq!(response.items.len(), 3);
    }

    #[test]
    fn test_update_unknown_item_is_silent() {
        let (items, config) = setup();
        let before = list_items(&items, &config);

        let after = update_item(&items, &config, "nope".to_string(), form("X", "1", "1")).unwrap();

        let names = |r: &InventoryResponse| r.items.iter().map(|i| i.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&after), names(&before));
    }

    #[test]
    fn test_delete_prompt_names_item() {
        let (items, config) = setup();
        let id = list_items(&items, &config).items[0].id.clone();

        let prompt = delete_prompt(&items, id).unwrap();

        assert_eq!(prompt.title, "Delete Item");
        assert_eq!(
            prompt.message,
            "Are you sure you want to delete \"Leather Jacket\"? This action cannot be undone."
        );
    }

    #[test]
    fn test_delete_prompt_unknown_item() {
        let (items, _) = setup();
        let err = delete_prompt(&items, "nope".to_string()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_delete_item() {
        let (items, config) = setup();
        let id = list_items(&items, &config).items[1].id.clone();

        let response = delete_item(&items, &config, id.clone());

        assert_eq!(response.items.len(), 2);
        assert!(response.items.iter().all(|i| i.id != id));
        // Running Shoes is gone; Denim Jeans (40) leads
        assert_eq!(response.stats.most_worn_label, "Denim Jeans");
    }

    #[test]
    fn test_delete_unknown_item_is_silent() {
        let (items, config) = setup();
        let response = delete_item(&items, &config, "nope".to_string());
        assert_eq!(response.items.len(), 3);
    }
}
