//! Café Menu Domain Models
//!
//! This module contains all data structures related to the menu
//! business domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Menu Domain Models
// =============================================================================

/// Returns the default availability (true) for menu items
fn default_available() -> bool {
    true
}

/// Broad product category of a menu item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Coffee,
    Tea,
    Pastry,
    Other,
}

/// Serving size of a menu item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Small,
    Medium,
    Large,
}

/// Represents a single café product listing.
///
/// Once stored an item is never mutated in place; updates replace the whole
/// value under the same `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Store-assigned identifier, strictly increasing, never reused
    pub id: u64,

    /// Name of the product
    pub name: String,

    /// Price in currency units, non-negative
    pub price: f64,

    /// Optional free-form description
    pub description: Option<String>,

    /// Product category
    pub category: Category,

    /// Serving size
    pub size: Size,

    /// Whether the item is currently orderable (defaults to true)
    pub available: bool,
}

/// Payload for create and update operations: a MenuItem minus its `id`
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemRequest {
    /// Name of the product
    pub name: String,

    /// Price in currency units
    pub price: f64,

    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Product category
    pub category: Category,

    /// Serving size
    pub size: Size,

    /// Availability flag (defaults to true when omitted)
    #[serde(default = "default_available")]
    pub available: bool,
}

impl MenuItemRequest {
    /// Builds the stored representation under the given id
    pub fn into_item(self, id: u64) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            category: self.category,
            size: self.size,
            available: self.available,
        }
    }
}

/// Optional query filters for listing menu items.
///
/// Absent fields mean "no constraint"; supplied fields are combined with
/// logical AND.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Keep only items of this category
    pub category: Option<Category>,

    /// Keep only items priced at or above this amount
    pub min_price: Option<f64>,

    /// Keep only items priced at or below this amount
    pub max_price: Option<f64>,

    /// Keep only items with this availability
    pub available: Option<bool>,
}

impl ListQuery {
    /// Whether `item` passes every supplied filter
    pub fn matches(&self, item: &MenuItem) -> bool {
        if let Some(category) = self.category {
            if item.category != category {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if item.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if item.price > max {
                return false;
            }
        }
        if let Some(available) = self.available {
            if item.available != available {
                return false;
            }
        }
        true
    }
}
