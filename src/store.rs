//! Menu Page Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: filter changes
//! never notify cart subscribers and vice versa.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::menu_state::{FilterState, MenuState, MenuStateStoreFields};

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Create a fresh store and provide it to the menu page's children
pub fn provide_menu_store() -> MenuStore {
    let store = Store::new(MenuState::default());
    provide_context(store);
    store
}

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_category(store: &MenuStore, category: String) {
    log::debug!("[MENU] Category -> {:?}", category);
    store.filter().write().set_category(category);
}

pub fn store_set_search_term(store: &MenuStore, text: String) {
    store.filter().write().set_search_term(text);
}

/// Back to "All" with an empty search
pub fn store_clear_filter(store: &MenuStore) {
    *store.filter().write() = FilterState::default();
}

pub fn store_add_to_cart(store: &MenuStore, item_id: u32) {
    store.cart().write().add(item_id);
    log::debug!("[MENU] Added item {} (cart: {})", item_id, store.cart().read_untracked().total_count());
}

pub fn store_remove_from_cart(store: &MenuStore, item_id: u32) {
    store.cart().write().remove(item_id);
}

/// Quantity of one item, tracked
pub fn store_quantity(store: &MenuStore, item_id: u32) -> u32 {
    store.cart().read().quantity(item_id)
}
