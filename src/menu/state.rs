//! Menu Item Store
//!
//! This module manages the application state for the menu: an in-memory
//! item store keyed by a monotonically increasing id sequence.

use super::errors::MenuError;
use super::models::{Category, ListQuery, MenuItem, MenuItemRequest, Size};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the item store and its id sequence
pub struct AppState {
    /// In-memory storage for menu items, keyed by id.
    /// DashMap allows concurrent access without external Mutexes.
    items: DashMap<u64, MenuItem>,

    /// Next id to hand out. Ids start at 1 and are never reused,
    /// even after deletion.
    next_id: AtomicU64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an empty store with the id sequence starting at 1
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a store pre-seeded with the two demo items the service
    /// starts with ("Latte" id=1, "Green Tea" id=2)
    pub fn with_demo_items() -> Self {
        let state = Self::new();
        state.create(MenuItemRequest {
            name: "Latte".to_string(),
            price: 3.50,
            description: Some("Espresso with steamed milk".to_string()),
            category: Category::Coffee,
            size: Size::Medium,
            available: true,
        });
        state.create(MenuItemRequest {
            name: "Green Tea".to_string(),
            price: 2.75,
            description: Some("Loose-leaf sencha".to_string()),
            category: Category::Tea,
            size: Size::Small,
            available: true,
        });
        state
    }

    /// Allocates the next id, inserts the new item and returns it.
    ///
    /// The fetch-add guarantees no two concurrent callers observe the same
    /// id, and since the allocated id is fresh the insert cannot collide
    /// with another writer.
    pub fn create(&self, request: MenuItemRequest) -> MenuItem {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = request.into_item(id);
        self.items.insert(id, item.clone());
        item
    }

    /// Returns the item for `id`, or NotFound if absent
    pub fn get(&self, id: u64) -> Result<MenuItem, MenuError> {
        self.items
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or(MenuError::NotFound(id))
    }

    /// Replaces the stored item wholesale, keeping its id.
    ///
    /// The replacement happens under the map's per-entry lock, so readers
    /// never observe a partially written item.
    pub fn update(&self, id: u64, request: MenuItemRequest) -> Result<MenuItem, MenuError> {
        let mut entry = self.items.get_mut(&id).ok_or(MenuError::NotFound(id))?;
        let item = request.into_item(id);
        *entry = item.clone();
        Ok(item)
    }

    /// Removes the item for `id`, or NotFound if absent.
    /// Deletion is permanent; the id is never handed out again.
    pub fn delete(&self, id: u64) -> Result<(), MenuError> {
        self.items
            .remove(&id)
            .map(|_| ())
            .ok_or(MenuError::NotFound(id))
    }

    /// Returns all items passing every supplied filter, ascending by id.
    ///
    /// Each call walks the map fresh; concurrent mutations may or may not
    /// be reflected, but every returned item is a consistent value.
    pub fn list(&self, query: &ListQuery) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self
            .items
            .iter()
            .filter(|entry| query.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by_key(|item| item.id);
        items
    }
}
