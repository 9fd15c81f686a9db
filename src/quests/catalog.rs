//! Quest content definitions.

use crate::items::catalog::ancient_amulet;
use crate::quests::types::Quest;

/// Fetch quest: bring back the mystery herb, rewarded with gold and the
/// ancient amulet.
pub fn herb_quest() -> Quest {
    Quest::new(
        "find_herbs",
        "Gather Healing Herbs",
        "Find the mystery herb deep in the forest",
    )
    .with_required_item("mystery_herb")
    .with_reward_gold(50)
    .with_reward_item(ancient_amulet())
}

/// Kill-count quest. Has no item precondition, so it only completes
/// through the explicit `complete_quest` path once the caller's kill
/// tally is satisfied.
pub fn monster_cull_quest() -> Quest {
    Quest::new("cull_monsters", "Clear the Forest", "Slay 3 forest beasts").with_reward_gold(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_herb_quest_shape() {
        let quest = herb_quest();
        assert_eq!(quest.required_item_id.as_deref(), Some("mystery_herb"));
        assert_eq!(quest.reward_gold, 50);
        assert_eq!(quest.reward_item.as_ref().unwrap().id, "ancient_amulet");
    }

    #[test]
    fn test_monster_cull_has_no_item_gate() {
        let quest = monster_cull_quest();
        assert!(quest.required_item_id.is_none());
        assert!(quest.reward_item.is_none());
    }
}
