//! Menu Catalog
//!
//! The compiled-in list of menu items. Parsed and validated once, then
//! shared read-only for the lifetime of the app.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::models::MenuItem;

/// Sentinel category that matches every item
pub const ALL_CATEGORY: &str = "All";

const MENU_JSON: &str = include_str!("../assets/menu.json");

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Menu item {name:?} has id 0, ids must be positive")]
    ZeroId { name: String },

    #[error("Duplicate menu item id {0}")]
    DuplicateId(u32),

    #[error("Rating {rating} of item {id} is outside 0.0..=5.0")]
    RatingOutOfRange { id: u32, rating: f32 },

    #[error("Item {id} uses unknown category {category:?}")]
    UnknownCategory { id: u32, category: String },
}

/// Validated menu catalog in declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<String>,
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(categories: Vec<String>, items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.id == 0 {
                return Err(CatalogError::ZeroId { name: item.name.clone() });
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if !(0.0..=5.0).contains(&item.rating) {
                return Err(CatalogError::RatingOutOfRange { id: item.id, rating: item.rating });
            }
            if !categories.contains(&item.category) {
                return Err(CatalogError::UnknownCategory {
                    id: item.id,
                    category: item.category.clone(),
                });
            }
        }
        Ok(Self { categories, items })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Catalog = serde_json::from_str(json)?;
        Self::new(raw.categories, raw.items)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Known categories, without the "All" sentinel
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Category buttons in display order: "All" first
    pub fn filter_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORY.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The catalog shipped with the site. An invalid embedded catalog is
/// logged and replaced by an empty one.
pub fn builtin() -> &'static Catalog {
    BUILTIN.get_or_init(|| match Catalog::from_json(MENU_JSON) {
        Ok(catalog) => {
            log::info!("[CATALOG] Loaded {} items in {} categories", catalog.len(), catalog.categories().len());
            catalog
        }
        Err(err) => {
            log::error!("[CATALOG] {}", err);
            Catalog::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;

    fn make_item(id: u32, category: &str, rating: f32) -> MenuItem {
        MenuItem {
            id,
            name: format!("Item {}", id),
            description: String::new(),
            category: category.to_string(),
            price: Price::from_cents(100),
            rating,
            image: String::new(),
            popular: false,
        }
    }

    fn categories() -> Vec<String> {
        vec!["Cold Brew".to_string(), "Signature Coffee".to_string()]
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::from_json(MENU_JSON).unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.categories().len(), 8);
        assert_eq!(catalog.items()[0].id, 1);
        assert_eq!(catalog.get(8).map(|i| i.price), Some(Price::from_cents(1250)));
        assert_eq!(builtin().len(), 10);
        assert!(!builtin().is_empty());
    }

    #[test]
    fn test_filter_options_start_with_all() {
        let catalog = Catalog::new(categories(), vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.filter_options(), vec!["All", "Cold Brew", "Signature Coffee"]);
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let items = vec![make_item(1, "Cold Brew", 4.0), make_item(1, "Cold Brew", 4.5)];
        let err = Catalog::new(categories(), items).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn test_rejects_zero_id() {
        let err = Catalog::new(categories(), vec![make_item(0, "Cold Brew", 4.0)]).unwrap_err();
        assert!(matches!(err, CatalogError::ZeroId { .. }));
    }

    #[test]
    fn test_rejects_bad_rating() {
        let err = Catalog::new(categories(), vec![make_item(2, "Cold Brew", 5.5)]).unwrap_err();
        assert!(matches!(err, CatalogError::RatingOutOfRange { id: 2, .. }));

        let err = Catalog::new(categories(), vec![make_item(3, "Cold Brew", f32::NAN)]).unwrap_err();
        assert!(matches!(err, CatalogError::RatingOutOfRange { id: 3, .. }));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let err = Catalog::new(categories(), vec![make_item(4, "Smoothies", 4.0)]).unwrap_err();
        assert_eq!(err.to_string(), "Item 4 uses unknown category \"Smoothies\"");
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Catalog::from_json("{ \"items\": 3 }").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
