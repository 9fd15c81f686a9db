use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::items::{Inventory, Item};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestError {
    #[error("quest '{id}' not found")]
    NotFound { id: String },
    #[error("quest '{id}' is already completed")]
    AlreadyCompleted { id: String },
    #[error("quest '{id}' is not active")]
    NotActive { id: String },
}

/// Quest lifecycle. `Completed` is terminal: no transition leads out of
/// it and a completed quest never re-evaluates its condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuestStatus {
    #[default]
    Inactive,
    Active,
    Completed,
}

impl QuestStatus {
    pub fn name(&self) -> &'static str {
        match self {
            QuestStatus::Inactive => "Inactive",
            QuestStatus::Active => "Active",
            QuestStatus::Completed => "Completed",
        }
    }
}

/// Reward record emitted when a quest completes. The caller (normally
/// `Player::check_quests`) applies the gold and the reward item; the
/// quest itself never touches the inventory it inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestCompletion {
    pub quest_id: String,
    pub quest_name: String,
    pub reward_gold: u32,
    pub reward_item: Option<Item>,
}

/// A quest gated on inventory contents.
///
/// A quest with `required_item_id == None` is never satisfied by the
/// generic inventory check; it completes only through the explicit
/// [`Quest::complete`] path (kill counts and the like are tracked by
/// the caller).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub required_item_id: Option<String>,
    pub reward_gold: u32,
    pub reward_item: Option<Item>,
    status: QuestStatus,
}

impl Quest {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            required_item_id: None,
            reward_gold: 0,
            reward_item: None,
            status: QuestStatus::Inactive,
        }
    }

    pub fn with_required_item(mut self, item_id: impl Into<String>) -> Self {
        self.required_item_id = Some(item_id.into());
        self
    }

    pub fn with_reward_gold(mut self, gold: u32) -> Self {
        self.reward_gold = gold;
        self
    }

    pub fn with_reward_item(mut self, item: Item) -> Self {
        self.reward_item = Some(item);
        self
    }

    pub fn status(&self) -> QuestStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == QuestStatus::Active
    }

    pub fn is_completed(&self) -> bool {
        self.status == QuestStatus::Completed
    }

    /// `Inactive -> Active`. Starting an already-active quest is an
    /// accepted no-op; a completed quest refuses.
    pub fn start(&mut self) -> Result<(), QuestError> {
        match self.status {
            QuestStatus::Completed => Err(QuestError::AlreadyCompleted {
                id: self.id.clone(),
            }),
            QuestStatus::Inactive => {
                self.status = QuestStatus::Active;
                info!(quest = %self.id, "quest started");
                Ok(())
            }
            QuestStatus::Active => Ok(()),
        }
    }

    /// Evaluates the item precondition against `inventory` and, when
    /// satisfied, transitions to `Completed` and returns the reward
    /// record. Fires only while `Active`; repeated calls after
    /// completion never change state or re-emit the reward.
    pub fn check_completion(&mut self, inventory: &Inventory) -> Option<QuestCompletion> {
        if self.status != QuestStatus::Active {
            return None;
        }
        let required = self.required_item_id.as_deref()?;
        if !inventory.has_item(required) {
            return None;
        }
        Some(self.finish())
    }

    /// Explicit completion for quests without an item precondition.
    pub fn complete(&mut self) -> Result<QuestCompletion, QuestError> {
        match self.status {
            QuestStatus::Completed => Err(QuestError::AlreadyCompleted {
                id: self.id.clone(),
            }),
            QuestStatus::Inactive => Err(QuestError::NotActive {
                id: self.id.clone(),
            }),
            QuestStatus::Active => Ok(self.finish()),
        }
    }

    fn finish(&mut self) -> QuestCompletion {
        self.status = QuestStatus::Completed;
        info!(quest = %self.id, gold = self.reward_gold, "quest completed");
        QuestCompletion {
            quest_id: self.id.clone(),
            quest_name: self.name.clone(),
            reward_gold: self.reward_gold,
            reward_item: self.reward_item.clone(),
        }
    }

    /// Journal line for presentation. Pure formatting.
    pub fn status_line(&self) -> String {
        format!("[{}] {}: {}", self.status.name(), self.name, self.description)
    }
}
