//! Insertion-ordered quest registry owned by a single player.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::items::Inventory;
use crate::quests::types::{Quest, QuestCompletion, QuestError};

/// Registry of quests keyed by id. Kept as a vector so registration
/// order is preserved; bulk checks walk quests in that order, which
/// keeps multi-completion runs deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestManager {
    quests: Vec<Quest>,
}

impl QuestManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Registers a quest. A duplicate id overwrites the existing entry
    /// in place (last insert wins, position preserved).
    pub fn add_quest(&mut self, quest: Quest) {
        debug!(quest = %quest.id, "quest registered");
        match self.quests.iter_mut().find(|q| q.id == quest.id) {
            Some(slot) => *slot = quest,
            None => self.quests.push(quest),
        }
    }

    pub fn get_quest(&self, quest_id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == quest_id)
    }

    fn get_quest_mut(&mut self, quest_id: &str) -> Option<&mut Quest> {
        self.quests.iter_mut().find(|q| q.id == quest_id)
    }

    /// Starts the quest with the given id. Unknown ids report
    /// `NotFound` and alter nothing.
    pub fn start_quest(&mut self, quest_id: &str) -> Result<(), QuestError> {
        match self.get_quest_mut(quest_id) {
            Some(quest) => quest.start(),
            None => Err(QuestError::NotFound {
                id: quest_id.to_string(),
            }),
        }
    }

    /// Explicitly completes a quest that has no item precondition
    /// (delegates the state rules to [`Quest::complete`]).
    pub fn complete_quest(&mut self, quest_id: &str) -> Result<QuestCompletion, QuestError> {
        match self.get_quest_mut(quest_id) {
            Some(quest) => quest.complete(),
            None => Err(QuestError::NotFound {
                id: quest_id.to_string(),
            }),
        }
    }

    /// Evaluates every active quest against the inventory, in
    /// registration order, and returns the completions that fired.
    /// Rewards are not applied here; see `Player::check_quests`.
    pub fn check_all_quests(&mut self, inventory: &Inventory) -> Vec<QuestCompletion> {
        self.quests
            .iter_mut()
            .filter(|q| q.is_active())
            .filter_map(|q| q.check_completion(inventory))
            .collect()
    }

    /// Snapshot of the currently active quests. Clones, never a live
    /// view: later state changes do not retroactively alter it.
    pub fn active_quests(&self) -> Vec<Quest> {
        self.quests.iter().filter(|q| q.is_active()).cloned().collect()
    }

    /// Journal text for presentation. Pure formatting.
    pub fn journal(&self) -> String {
        if self.quests.is_empty() {
            return "The quest journal is empty".to_string();
        }
        let mut out = String::from("=== Quest Journal ===\n");
        for quest in &self.quests {
            out.push_str(&quest.status_line());
            out.push('\n');
        }
        out.pop();
        out
    }
}
