//! Questline - an RPG domain core library.
//!
//! Items with data-driven effects, an ordered inventory, a quest state
//! machine gated on inventory contents, and the `Player` aggregate that
//! owns both -- plus NPC dialogue data, a shop economy, and a versioned
//! save layer. The binary in `main.rs` wires a scripted demo; all game
//! logic lives here so it can be tested without a terminal.

pub mod build_info;
pub mod character;
pub mod constants;
pub mod items;
pub mod npc;
pub mod quests;
pub mod save_manager;
pub mod shop;

pub use character::{CombatStats, Player};
pub use items::{Inventory, InventoryError, Item, ItemEffect};
pub use npc::Npc;
pub use quests::{Quest, QuestCompletion, QuestError, QuestManager, QuestStatus};
pub use save_manager::SaveManager;
pub use shop::{Shop, ShopError};
