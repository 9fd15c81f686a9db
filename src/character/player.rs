//! The player aggregate: stats, gold, inventory, and the quest log.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::character::stats::CombatStats;
use crate::constants::HEALTH_POTION_ID;
use crate::items::{Inventory, InventoryError, Item};
use crate::quests::{QuestCompletion, QuestManager};

/// Root of the entity graph. The inventory and the quest manager are
/// owned exclusively by their player and have no identity outside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub stats: CombatStats,
    /// Currency balance. Quest gold rewards and shop trades settle here.
    pub gold: u32,
    pub inventory: Inventory,
    pub quests: QuestManager,
}

impl Player {
    pub fn new(name: impl Into<String>, max_health: u32, attack: u32) -> Self {
        Self {
            name: name.into(),
            stats: CombatStats::new(max_health, attack),
            gold: 0,
            inventory: Inventory::new(),
            quests: QuestManager::new(),
        }
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    pub fn pick_up_item(&mut self, item: Item) {
        self.inventory.add_item(item);
    }

    /// Uses the item at `index`: applies its effect to this player's
    /// stats and consumes it.
    pub fn use_item(&mut self, index: usize) -> Result<Item, InventoryError> {
        self.inventory.use_item(index, &mut self.stats)
    }

    /// Quick-use shortcut: consumes the first health potion, if any.
    pub fn use_potion(&mut self) -> Option<Item> {
        let index = self
            .inventory
            .items()
            .iter()
            .position(|item| item.id == HEALTH_POTION_ID)?;
        // Index was just looked up, the use cannot be out of range
        self.inventory.use_item(index, &mut self.stats).ok()
    }

    /// Runs the bulk completion check and applies every reward that
    /// fired: gold is credited and reward items are appended to the
    /// inventory. Returns the completions for the caller to present.
    pub fn check_quests(&mut self) -> Vec<QuestCompletion> {
        let completions = self.quests.check_all_quests(&self.inventory);
        for completion in &completions {
            self.gold = self.gold.saturating_add(completion.reward_gold);
            if let Some(item) = &completion.reward_item {
                self.inventory.add_item(item.clone());
            }
            info!(
                player = %self.name,
                quest = %completion.quest_id,
                gold = completion.reward_gold,
                "quest reward applied"
            );
        }
        completions
    }

    /// Attacks another character. Pure combat: only health changes,
    /// never inventory or quest state.
    pub fn attack(&self, target: &mut CombatStats, rng: &mut impl Rng) -> Option<u32> {
        self.stats.attack_target(target, rng)
    }

    pub fn take_damage(&mut self, damage: u32) {
        self.stats.take_damage(damage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::catalog::{health_potion, mystery_herb};
    use crate::quests::catalog::herb_quest;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_pick_up_item() {
        let mut player = Player::new("Roland", 100, 15);
        player.pick_up_item(mystery_herb());
        assert!(player.inventory.has_item("mystery_herb"));
    }

    #[test]
    fn test_use_potion_heals_and_consumes() {
        let mut player = Player::new("Roland", 100, 15);
        player.take_damage(30);
        player.pick_up_item(health_potion());

        let used = player.use_potion().unwrap();
        assert_eq!(used.id, HEALTH_POTION_ID);
        assert_eq!(player.stats.health, 80);
        assert!(!player.inventory.has_item(HEALTH_POTION_ID));
    }

    #[test]
    fn test_use_potion_without_potion() {
        let mut player = Player::new("Roland", 100, 15);
        assert!(player.use_potion().is_none());
    }

    #[test]
    fn test_check_quests_applies_gold_and_reward_item() {
        let mut player = Player::new("Roland", 100, 15);
        player.quests.add_quest(herb_quest());
        player.quests.start_quest("find_herbs").unwrap();

        // Precondition not met yet
        assert!(player.check_quests().is_empty());
        assert_eq!(player.gold, 0);

        player.pick_up_item(mystery_herb());
        let completions = player.check_quests();
        assert_eq!(completions.len(), 1);
        assert_eq!(player.gold, 50);
        assert!(player.inventory.has_item("ancient_amulet"));
    }

    #[test]
    fn test_quest_gold_credit_saturates_at_cap() {
        let mut player = Player::new("Roland", 100, 15).with_gold(u32::MAX - 10);
        player.quests.add_quest(herb_quest());
        player.quests.start_quest("find_herbs").unwrap();
        player.pick_up_item(mystery_herb());

        let completions = player.check_quests();
        assert_eq!(completions.len(), 1);
        assert_eq!(player.gold, u32::MAX);
    }

    #[test]
    fn test_combat_leaves_inventory_and_quests_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut player = Player::new("Roland", 100, 15);
        player.quests.add_quest(herb_quest());
        player.quests.start_quest("find_herbs").unwrap();
        player.pick_up_item(health_potion());
        let inventory_before = player.inventory.clone();
        let quests_before = player.quests.clone();

        let mut enemy = CombatStats::new(60, 8);
        let dealt = player.attack(&mut enemy, &mut rng);
        assert!(dealt.is_some());
        player.take_damage(12);

        assert_eq!(player.inventory, inventory_before);
        assert_eq!(player.quests, quests_before);
    }
}
