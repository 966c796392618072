//! Frontend Models
//!
//! Menu catalog data structures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Currency amount in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u32);

impl Price {
    pub fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Menu item (immutable once the catalog is loaded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "price_cents")]
    pub price: Price,
    pub rating: f32,
    pub image: String,
    #[serde(default)]
    pub popular: bool,
}

impl MenuItem {
    /// Number of filled stars out of five
    pub fn full_stars(&self) -> usize {
        self.rating.floor().clamp(0.0, 5.0) as usize
    }

    /// Rating with one decimal, as shown on cards
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(rating: f32) -> MenuItem {
        MenuItem {
            id: 1,
            name: "Latte".to_string(),
            description: "Steamed milk".to_string(),
            category: "Specialty Drinks".to_string(),
            price: Price::from_cents(575),
            rating,
            image: "/latte.jpg".to_string(),
            popular: false,
        }
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::from_cents(650).to_string(), "$6.50");
        assert_eq!(Price::from_cents(1250).to_string(), "$12.50");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
        assert_eq!(Price::default().to_string(), "$0.00");
    }

    #[test]
    fn test_full_stars() {
        assert_eq!(make_item(4.9).full_stars(), 4);
        assert_eq!(make_item(5.0).full_stars(), 5);
        assert_eq!(make_item(0.4).full_stars(), 0);
        assert_eq!(make_item(4.9).rating_label(), "4.9");
    }

    #[test]
    fn test_item_deserialize() {
        let json = r#"{
            "id": 3,
            "name": "Nitro Cold Cascade",
            "description": "Nitrogen-infused cold brew",
            "category": "Cold Brew",
            "price_cents": 525,
            "rating": 4.7,
            "image": "/cold-brew.jpg"
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, Price::from_cents(525));
        assert!(!item.popular);
    }
}
