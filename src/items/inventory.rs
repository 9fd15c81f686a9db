//! Ordered item storage owned by a single player.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::character::stats::CombatStats;
use crate::items::types::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("no item at index {index} (inventory holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// An acquisition-ordered sequence of items. Duplicate ids are allowed
/// and counted separately; there is no capacity limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Appends an item. Always succeeds.
    pub fn add_item(&mut self, item: Item) {
        debug!(item = %item.id, "item added to inventory");
        self.items.push(item);
    }

    /// Removes and returns the item at a 0-based position. An invalid
    /// index leaves the inventory untouched.
    pub fn remove_item(&mut self, index: usize) -> Result<Item, InventoryError> {
        if index >= self.items.len() {
            return Err(InventoryError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(index);
        debug!(item = %item.id, "item removed from inventory");
        Ok(item)
    }

    /// Applies the effect of the item at `index` to `stats`, then
    /// consumes the item. Consumption is unconditional once the effect
    /// has run; there are no reusable items in this model.
    pub fn use_item(
        &mut self,
        index: usize,
        stats: &mut CombatStats,
    ) -> Result<Item, InventoryError> {
        if index >= self.items.len() {
            return Err(InventoryError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let effect = self.items[index].effect;
        effect.apply(stats);
        let item = self.items.remove(index);
        debug!(item = %item.id, "item consumed");
        Ok(item)
    }

    /// First item with a matching id. Linear scan; inventories are small
    /// and no index is maintained.
    pub fn find_item_by_id(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn has_item(&self, item_id: &str) -> bool {
        self.items.iter().any(|item| item.id == item_id)
    }

    pub fn count_items(&self, item_id: &str) -> usize {
        self.items.iter().filter(|item| item.id == item_id).count()
    }

    /// Numbered listing for presentation. Pure formatting, never mutates.
    pub fn listing(&self) -> String {
        if self.items.is_empty() {
            return "Inventory is empty".to_string();
        }
        let mut out = String::from("=== Inventory ===\n");
        for (i, item) in self.items.iter().enumerate() {
            out.push_str(&format!("{}. {} - {}\n", i + 1, item.name, item.description));
        }
        out.push_str(&format!("Total items: {}", self.items.len()));
        out
    }
}
