//! Versioned JSON save files, one per player.
//!
//! Saves live under the platform data directory (via `directories`),
//! or under any directory handed to [`SaveManager::with_dir`] -- tests
//! point this at a temp dir. Corrupt or mismatched files surface as
//! `io::Error` with `InvalidData`; nothing in here panics.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::character::{CombatStats, Player};
use crate::constants::SAVE_VERSION;
use crate::items::Inventory;
use crate::quests::QuestManager;

#[derive(Serialize, Deserialize)]
struct PlayerSaveData {
    version: u32,
    /// Unix timestamp of the save, for display in a load menu.
    saved_at: i64,
    name: String,
    stats: CombatStats,
    gold: u32,
    inventory: Inventory,
    quests: QuestManager,
}

pub struct SaveManager {
    save_dir: PathBuf,
}

impl SaveManager {
    /// Uses the platform data directory for this game.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "questline").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
        })?;
        Self::with_dir(project_dirs.data_dir().to_path_buf())
    }

    /// Uses an explicit directory, creating it if missing.
    pub fn with_dir(save_dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    fn save_path(&self, player_name: &str) -> PathBuf {
        let slug: String = player_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        self.save_dir.join(format!("save_{slug}.json"))
    }

    pub fn save(&self, player: &Player) -> io::Result<PathBuf> {
        let data = PlayerSaveData {
            version: SAVE_VERSION,
            saved_at: chrono::Utc::now().timestamp(),
            name: player.name.clone(),
            stats: player.stats,
            gold: player.gold,
            inventory: player.inventory.clone(),
            quests: player.quests.clone(),
        };
        let json = serde_json::to_string_pretty(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let path = self.save_path(&player.name);
        fs::write(&path, json)?;
        info!(player = %player.name, path = %path.display(), "game saved");
        Ok(path)
    }

    pub fn load(&self, player_name: &str) -> io::Result<Player> {
        let path = self.save_path(player_name);
        let json = fs::read_to_string(&path)?;
        let data: PlayerSaveData =
            serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if data.version != SAVE_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "unsupported save version {} (expected {})",
                    data.version, SAVE_VERSION
                ),
            ));
        }

        info!(player = %data.name, "game loaded");
        Ok(Player {
            name: data.name,
            stats: data.stats,
            gold: data.gold,
            inventory: data.inventory,
            quests: data.quests,
        })
    }

    /// Names of players with a save file in this directory.
    pub fn list_saves(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.save_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let json = match fs::read_to_string(&path) {
                Ok(json) => json,
                Err(_) => continue,
            };
            if let Ok(data) = serde_json::from_str::<PlayerSaveData>(&json) {
                names.push(data.name);
            }
        }
        names.sort();
        Ok(names)
    }
}
