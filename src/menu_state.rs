//! Menu View-Model
//!
//! Filter and cart state for the menu page. Derivation is a pure function
//! of (catalog, filter); mutations are small reducers on the state record.
//! Nothing in here touches the DOM.

use std::collections::BTreeMap;

use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ALL_CATEGORY};
use crate::models::{MenuItem, Price};

/// Current category selection and search text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_category: String,
    pub search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORY.to_string(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    /// Any value is accepted; unknown categories just match nothing
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    /// Stored verbatim, no trimming
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    fn matches_category(&self, item: &MenuItem) -> bool {
        self.selected_category == ALL_CATEGORY || item.category == self.selected_category
    }
}

/// `needle` must already be lowercase
fn search_matches(needle: &str, item: &MenuItem) -> bool {
    needle.is_empty()
        || item.name.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
}

/// Items visible under `filter`, in catalog order
pub fn derive_visible_items(items: &[MenuItem], filter: &FilterState) -> Vec<MenuItem> {
    let needle = filter.search_term.to_lowercase();
    items
        .iter()
        .filter(|item| filter.matches_category(item) && search_matches(&needle, item))
        .cloned()
        .collect()
}

/// Quantity per item id. A missing key means 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    quantities: BTreeMap<u32, u32>,
}

impl CartState {
    /// Unknown ids are accepted and get their own entry
    pub fn add(&mut self, item_id: u32) {
        let quantity = self.quantities.entry(item_id).or_insert(0);
        *quantity = quantity.saturating_add(1);
    }

    /// Floors at 0 and keeps the key; absent ids are a no-op
    pub fn remove(&mut self, item_id: u32) {
        if let Some(quantity) = self.quantities.get_mut(&item_id) {
            *quantity = quantity.saturating_sub(1);
        }
    }

    pub fn quantity(&self, item_id: u32) -> u32 {
        self.quantities.get(&item_id).copied().unwrap_or(0)
    }

    pub fn total_count(&self) -> u32 {
        self.quantities.values().fold(0u32, |total, q| total.saturating_add(*q))
    }

    /// Price of everything in the cart; ids missing from the catalog cost nothing
    pub fn subtotal(&self, catalog: &Catalog) -> Price {
        let cents = self
            .quantities
            .iter()
            .filter_map(|(id, quantity)| catalog.get(*id).map(|item| item.price.cents().saturating_mul(*quantity)))
            .fold(0u32, u32::saturating_add);
        Price::from_cents(cents)
    }

    /// Count shown on the cart badge; hidden while the cart is empty
    pub fn badge(&self) -> Option<u32> {
        match self.total_count() {
            0 => None,
            count => Some(count),
        }
    }

    pub fn label(&self) -> String {
        format!("Cart ({})", self.total_count())
    }
}

/// Menu page state: what is filtered and what is in the cart.
/// The store hands out each half separately so filter edits never
/// notify cart readers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Store)]
pub struct MenuState {
    pub filter: FilterState,
    pub cart: CartState,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str, category: &str, description: &str) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            price: Price::from_cents(100 * id),
            rating: 4.5,
            image: String::new(),
            popular: false,
        }
    }

    fn two_item_catalog() -> Catalog {
        Catalog::new(
            vec!["Signature Coffee".to_string(), "Specialty Drinks".to_string()],
            vec![
                make_item(1, "Latte", "Specialty Drinks", "Steamed milk and espresso"),
                make_item(2, "Espresso", "Signature Coffee", "A short, strong shot"),
            ],
        )
        .unwrap()
    }

    fn ids(items: &[MenuItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    fn visible(state: &MenuState, catalog: &Catalog) -> Vec<MenuItem> {
        derive_visible_items(catalog.items(), &state.filter)
    }

    #[test]
    fn test_default_filter_shows_whole_catalog_in_order() {
        let catalog = crate::catalog::builtin();
        let state = MenuState::default();
        assert!(state.filter.is_default());
        assert_eq!(visible(&state, catalog), catalog.items().to_vec());
    }

    #[test]
    fn test_category_filter() {
        let mut state = MenuState::default();
        state.filter.set_category("Signature Coffee");
        assert_eq!(ids(&visible(&state, &two_item_catalog())), vec![2]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut state = MenuState::default();
        state.filter.set_search_term("latte");
        assert_eq!(ids(&visible(&state, &two_item_catalog())), vec![1]);

        state.filter.set_search_term("STRONG");
        assert_eq!(ids(&visible(&state, &two_item_catalog())), vec![2]);
    }

    #[test]
    fn test_category_and_search_combine() {
        let mut state = MenuState::default();
        state.filter.set_category("Signature Coffee");
        state.filter.set_search_term("latte");
        assert!(visible(&state, &two_item_catalog()).is_empty());
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let mut state = MenuState::default();
        state.filter.set_category("Nonexistent");
        assert!(visible(&state, &two_item_catalog()).is_empty());
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let mut state = MenuState::default();
        state.filter.set_search_term(" latte");
        assert_eq!(state.filter.search_term, " latte");
        // "Latte" at the start of the name has no leading space
        assert!(visible(&state, &two_item_catalog()).is_empty());
    }

    #[test]
    fn test_search_soundness_and_completeness() {
        let catalog = crate::catalog::builtin();
        for term in ["", "a", "CHOCOLATE", "cold", "espresso", "perfection", "zzz", "é"] {
            let filter = FilterState {
                selected_category: ALL_CATEGORY.to_string(),
                search_term: term.to_string(),
            };
            let visible = derive_visible_items(catalog.items(), &filter);
            let needle = term.to_lowercase();
            let predicate = |item: &MenuItem| {
                item.name.to_lowercase().contains(&needle) || item.description.to_lowercase().contains(&needle)
            };

            assert!(visible.iter().all(predicate), "unsound result for {:?}", term);
            let expected: Vec<u32> = catalog.items().iter().filter(|i| predicate(*i)).map(|i| i.id).collect();
            assert_eq!(ids(&visible), expected, "incomplete result for {:?}", term);
        }
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let catalog = crate::catalog::builtin();
        let mut state = MenuState::default();
        state.filter.set_category("Signature Desserts");
        state.filter.set_search_term("e");
        assert_eq!(visible(&state, catalog), visible(&state, catalog));
    }

    #[test]
    fn test_add_then_remove() {
        let mut state = MenuState::default();
        state.cart.add(1);
        state.cart.add(1);
        state.cart.remove(1);
        assert_eq!(state.cart.quantity(1), 1);
        assert_eq!(state.cart.total_count(), 1);
    }

    #[test]
    fn test_quantity_never_goes_negative() {
        for n in 0..4u32 {
            for m in 0..7u32 {
                let mut cart = CartState::default();
                (0..n).for_each(|_| cart.add(5));
                (0..m).for_each(|_| cart.remove(5));
                assert_eq!(cart.quantity(5), n.saturating_sub(m));
            }
        }
    }

    #[test]
    fn test_remove_on_empty_cart_is_noop() {
        let mut state = MenuState::default();
        state.cart.remove(99);
        assert_eq!(state.cart, CartState::default());
        assert_eq!(state.cart.total_count(), 0);
    }

    #[test]
    fn test_remove_to_zero_keeps_entry() {
        let mut cart = CartState::default();
        cart.add(3);
        cart.remove(3);
        assert_eq!(cart.quantity(3), 0);
        assert_eq!(cart.total_count(), 0);
        assert_ne!(cart, CartState::default());
    }

    #[test]
    fn test_items_are_independent_and_total_is_sum() {
        let mut cart = CartState::default();
        cart.add(1);
        cart.add(2);
        cart.add(2);
        cart.add(2);
        assert_eq!(cart.quantity(1), 1);
        assert_eq!(cart.quantity(2), 3);
        assert_eq!(cart.total_count(), cart.quantity(1) + cart.quantity(2));
        assert_eq!(cart.total_count(), 4);
    }

    #[test]
    fn test_filter_does_not_touch_cart() {
        let mut state = MenuState::default();
        state.cart.add(1);
        state.filter.set_category("Signature Coffee");
        state.filter.set_search_term("espresso");
        assert_eq!(state.cart.quantity(1), 1);
    }

    #[test]
    fn test_orphan_id_counts_but_costs_nothing() {
        let catalog = two_item_catalog();
        let mut cart = CartState::default();
        cart.add(42);
        cart.add(2);
        cart.add(2);
        assert_eq!(cart.total_count(), 3);
        assert_eq!(cart.subtotal(&catalog), Price::from_cents(400));
    }

    #[test]
    fn test_cart_badge_follows_count() {
        let mut cart = CartState::default();
        assert_eq!(cart.badge(), None);
        assert_eq!(cart.label(), "Cart (0)");

        cart.add(1);
        cart.add(4);
        assert_eq!(cart.badge(), Some(2));
        assert_eq!(cart.label(), "Cart (2)");

        cart.remove(1);
        cart.remove(4);
        assert_eq!(cart.badge(), None);
        assert_eq!(cart.label(), "Cart (0)");
    }

    #[test]
    fn test_unicode_search_and_exact_category() {
        let catalog = crate::catalog::builtin();
        let mut state = MenuState::default();
        state.filter.set_search_term("FRAPPÉ");
        assert_eq!(ids(&visible(&state, catalog)), vec![4]);

        // The sentinel is matched exactly
        state.filter.set_search_term("");
        state.filter.set_category("all");
        assert!(visible(&state, catalog).is_empty());
    }

    #[test]
    fn test_extreme_orphan_ids() {
        let catalog = crate::catalog::builtin();
        let mut cart = CartState::default();
        (0..3).for_each(|_| cart.add(u32::MAX));
        cart.remove(0);
        assert_eq!(cart.total_count(), 3);
        assert_eq!(cart.subtotal(catalog).to_string(), "$0.00");
        assert_eq!(cart.badge(), Some(3));
    }

    #[test]
    fn test_state_serializes() {
        let mut state = MenuState::default();
        state.cart.add(7);
        state.filter.set_category("Cold Brew");
        let json = serde_json::to_string(&state).unwrap();
        let back: MenuState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
