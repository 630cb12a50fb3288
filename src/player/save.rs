//! Persisted player shape and the lenient loader behind it.
//!
//! Saves come from older app versions and occasionally from hand edits, so
//! loading never rejects a structurally valid JSON object. Unreadable gear and
//! inventory entries are dropped slot by slot. Missing stats are
//! derived from level, `hp` is clamped to `maxHp`, the inventory is resized to
//! its fixed capacity, and equipment sitting in the wrong slot is moved into the
//! inventory.

use super::{BaseStats, Inventory, Player};
use crate::core::constants::{DEFAULT_PLAYER_ID, DEFAULT_PLAYER_NAME, STARTING_LEVEL};
use crate::error::EngineResult;
use crate::items::Equipment;
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    #[serde(default = "default_id")]
    pub id: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub experience: u64,
    #[serde(default)]
    pub attack: Option<u32>,
    #[serde(default)]
    pub defense: Option<u32>,
    #[serde(default)]
    pub hp: Option<u32>,
    #[serde(default)]
    pub max_hp: Option<u32>,
    #[serde(default)]
    pub total_distance: f64,
    #[serde(default)]
    pub total_encounters: u32,
    #[serde(default)]
    pub creatures_caught: u32,
    #[serde(default)]
    pub creatures_defeated: u32,
    #[serde(default)]
    pub equipment: Option<Equipment>,
    #[serde(default)]
    pub inventory: Inventory,
}

fn default_id() -> String {
    DEFAULT_PLAYER_ID.to_string()
}

fn default_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}

fn default_level() -> u32 {
    STARTING_LEVEL
}

impl Player {
    /// Snapshot for storage. The inventory is cloned, never shared.
    pub fn to_data(&self) -> PlayerData {
        PlayerData {
            id: self.id.clone(),
            name: self.name.clone(),
            level: self.level,
            experience: self.experience,
            attack: Some(self.attack),
            defense: Some(self.defense),
            hp: Some(self.hp),
            max_hp: Some(self.max_hp),
            total_distance: self.total_distance,
            total_encounters: self.total_encounters,
            creatures_caught: self.creatures_caught,
            creatures_defeated: self.creatures_defeated,
            equipment: Some(self.equipment.clone()),
            inventory: self.inventory.clone(),
        }
    }

    /// Rebuilds a player from stored data, normalizing anything out of shape.
    pub fn from_data(data: PlayerData) -> Self {
        let level = if data.level == 0 {
            warn!("Save for {} had level 0, treating as level 1", data.id);
            STARTING_LEVEL
        } else {
            data.level
        };
        let base = BaseStats::for_level(level);
        let max_hp = data.max_hp.unwrap_or(base.max_hp);
        let hp = data.hp.unwrap_or(max_hp).min(max_hp);

        let total_distance = if data.total_distance.is_finite() && data.total_distance >= 0.0 {
            data.total_distance
        } else {
            warn!("Save for {} had invalid distance, resetting", data.id);
            0.0
        };

        let mut equipment = data.equipment.unwrap_or_default();
        let mut inventory = data.inventory;
        for item in equipment.take_misplaced() {
            warn!("Moving misplaced {} from equipment to inventory", item.name);
            if let Err(item) = inventory.add(item) {
                warn!("Inventory full, discarding misplaced {}", item.name);
            }
        }

        Self {
            id: data.id,
            name: data.name,
            level,
            experience: data.experience,
            attack: data.attack.unwrap_or(base.attack),
            defense: data.defense.unwrap_or(base.defense),
            hp,
            max_hp,
            total_distance,
            total_encounters: data.total_encounters,
            creatures_caught: data.creatures_caught,
            creatures_defeated: data.creatures_defeated,
            equipment,
            inventory,
        }
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(&self.to_data())?)
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        let data: PlayerData = serde_json::from_str(json)?;
        Ok(Self::from_data(data))
    }
}
