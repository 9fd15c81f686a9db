//! Item content definitions.

use crate::constants::HEALTH_POTION_ID;
use crate::items::types::{Item, ItemEffect};

pub fn mystery_herb() -> Item {
    Item::new(
        "mystery_herb",
        "Mystery Herb",
        "A rare plant with healing properties",
        15,
    )
}

pub fn ancient_amulet() -> Item {
    Item::new(
        "ancient_amulet",
        "Ancient Amulet",
        "An old amulet humming with magic",
        100,
    )
}

pub fn health_potion() -> Item {
    Item::new(HEALTH_POTION_ID, "Health Potion", "Restores 10 HP", 25)
        .with_effect(ItemEffect::RestoreHealth(10))
}

pub fn apple() -> Item {
    Item::new("apple", "Apple", "Restores 10 HP", 0).with_effect(ItemEffect::RestoreHealth(10))
}

pub fn whetstone() -> Item {
    Item::new("whetstone", "Whetstone", "Hones a blade, +2 attack", 40)
        .with_effect(ItemEffect::BoostAttack(2))
}
