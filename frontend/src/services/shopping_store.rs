//! Persistence bridge for the day-scoped shopping list. The whole list is
//! written back after every mutation; on load, a list stored under a
//! different day key is discarded and the day starts empty.

use gloo::storage::{LocalStorage, Storage};
use shared::StoredShoppingList;
use uuid::Uuid;

const STORAGE_KEY: &str = "crm_shopping_list";

pub fn load(today_key: &str) -> StoredShoppingList {
    match LocalStorage::get::<StoredShoppingList>(STORAGE_KEY) {
        Ok(stored) if !stored.is_stale(today_key) => stored,
        _ => StoredShoppingList::empty(today_key),
    }
}

pub fn save(list: &StoredShoppingList) {
    if let Err(e) = LocalStorage::set(STORAGE_KEY, list) {
        crate::services::Logger::error("shopping", &format!("failed to persist list: {e}"));
    }
}

pub fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}
