//! Shop with a wired gold economy.
//!
//! Buying checks and debits the player's gold before handing over a
//! copy of the stocked item; selling removes an item from the player's
//! inventory and credits the buyback price (a fixed fraction of the
//! item's listed value). No console flow here -- callers drive the
//! trades and render the results.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::character::Player;
use crate::constants::SHOP_BUYBACK_RATIO;
use crate::items::{InventoryError, Item};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("no listing at index {index} (shop stocks {len})")]
    InvalidSelection { index: usize, len: usize },
    #[error("not enough gold: price {price}, carrying {gold}")]
    NotEnoughGold { price: u32, gold: u32 },
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopEntry {
    pub item: Item,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    pub description: String,
    stock: Vec<ShopEntry>,
}

impl Shop {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            stock: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: Item, price: u32) {
        self.stock.push(ShopEntry { item, price });
    }

    pub fn stock(&self) -> &[ShopEntry] {
        &self.stock
    }

    /// What the shop pays when buying an item back.
    pub fn buyback_price(value: u32) -> u32 {
        (value as f64 * SHOP_BUYBACK_RATIO) as u32
    }

    /// Buys the listing at `index`. On success the player is debited
    /// and receives a copy of the item; on failure nothing changes.
    pub fn buy(&self, index: usize, player: &mut Player) -> Result<&Item, ShopError> {
        let entry = self
            .stock
            .get(index)
            .ok_or(ShopError::InvalidSelection {
                index,
                len: self.stock.len(),
            })?;
        if player.gold < entry.price {
            return Err(ShopError::NotEnoughGold {
                price: entry.price,
                gold: player.gold,
            });
        }
        player.gold -= entry.price;
        player.inventory.add_item(entry.item.clone());
        info!(shop = %self.name, item = %entry.item.id, price = entry.price, "item bought");
        Ok(&entry.item)
    }

    /// Sells the item at `inventory_index` out of the player's
    /// inventory. Returns the gold credited.
    pub fn sell(&self, inventory_index: usize, player: &mut Player) -> Result<u32, ShopError> {
        let item = player.inventory.remove_item(inventory_index)?;
        let paid = Self::buyback_price(item.value);
        player.gold = player.gold.saturating_add(paid);
        info!(shop = %self.name, item = %item.id, paid, "item sold");
        Ok(paid)
    }

    /// Price list for presentation. Pure formatting.
    pub fn price_list(&self) -> String {
        if self.stock.is_empty() {
            return "Nothing for sale".to_string();
        }
        let mut out = format!("=== {} ===\n", self.name);
        for (i, entry) in self.stock.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} - {} | {} gold\n",
                i + 1,
                entry.item.name,
                entry.item.description,
                entry.price
            ));
        }
        out.pop();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::catalog::{health_potion, mystery_herb};

    fn potion_shop() -> Shop {
        let mut shop = Shop::new("The Gilded Flask", "Potions and oddities");
        shop.add_item(health_potion(), 30);
        shop
    }

    #[test]
    fn test_buy_debits_gold_and_adds_item() {
        let shop = potion_shop();
        let mut player = Player::new("Roland", 100, 15).with_gold(50);
        shop.buy(0, &mut player).unwrap();
        assert_eq!(player.gold, 20);
        assert!(player.inventory.has_item("health_potion"));
    }

    #[test]
    fn test_buy_without_gold_changes_nothing() {
        let shop = potion_shop();
        let mut player = Player::new("Roland", 100, 15).with_gold(10);
        let err = shop.buy(0, &mut player).unwrap_err();
        assert_eq!(err, ShopError::NotEnoughGold { price: 30, gold: 10 });
        assert_eq!(player.gold, 10);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_buy_invalid_selection() {
        let shop = potion_shop();
        let mut player = Player::new("Roland", 100, 15).with_gold(100);
        assert_eq!(
            shop.buy(4, &mut player).unwrap_err(),
            ShopError::InvalidSelection { index: 4, len: 1 }
        );
    }

    #[test]
    fn test_sell_credits_buyback_price() {
        let shop = potion_shop();
        let mut player = Player::new("Roland", 100, 15);
        player.pick_up_item(mystery_herb()); // value 15
        let paid = shop.sell(0, &mut player).unwrap();
        assert_eq!(paid, 9); // 15 * 0.6
        assert_eq!(player.gold, 9);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_sell_invalid_index_surfaces_inventory_error() {
        let shop = potion_shop();
        let mut player = Player::new("Roland", 100, 15);
        let err = shop.sell(2, &mut player).unwrap_err();
        assert_eq!(
            err,
            ShopError::Inventory(InventoryError::IndexOutOfRange { index: 2, len: 0 })
        );
    }
}
