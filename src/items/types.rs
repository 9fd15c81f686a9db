use serde::{Deserialize, Serialize};

use crate::character::stats::CombatStats;

/// Effect applied to the consuming character when an item is used.
///
/// Effects are plain data so items stay serializable; every variant is
/// total (applying one cannot fail), which makes consumption safe to
/// commit unconditionally once the effect has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemEffect {
    /// No effect; the item is flavor or quest cargo.
    #[default]
    None,
    /// Restore up to the given amount of health, capped at max health.
    RestoreHealth(u32),
    /// Permanently raise the attack stat.
    BoostAttack(u32),
}

impl ItemEffect {
    pub fn apply(&self, stats: &mut CombatStats) {
        match self {
            ItemEffect::None => {}
            ItemEffect::RestoreHealth(amount) => stats.heal(*amount),
            ItemEffect::BoostAttack(amount) => {
                stats.attack = stats.attack.saturating_add(*amount)
            }
        }
    }
}

/// Immutable item descriptor. Identity is the `id` string, stable and
/// unique within a catalog (uniqueness is not enforced globally).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub value: u32,
    #[serde(default)]
    pub effect: ItemEffect,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        value: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            value,
            effect: ItemEffect::None,
        }
    }

    pub fn with_effect(mut self, effect: ItemEffect) -> Self {
        self.effect = effect;
        self
    }

    /// One-line description for menus and logs. Pure formatting.
    pub fn info_line(&self) -> String {
        format!("{} - {} (value: {})", self.name, self.description, self.value)
    }
}
