//! Player progression state: stats, counters, equipment and inventory.

pub mod inventory;
pub mod progression;
pub mod save;

pub use inventory::Inventory;
pub use progression::*;
pub use save::PlayerData;

use crate::core::constants::{DEFAULT_PLAYER_NAME, MIN_DAMAGE};
use crate::items::{Equipment, EquipmentSlot, Item, ItemStats};
use log::warn;
use serde::Serialize;

/// Why an equip or unequip request was refused. Nothing is moved on refusal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EquipError {
    #[error("inventory slot {0} is empty")]
    EmptyInventorySlot(usize),
    #[error("{item} cannot be equipped in the {slot:?} slot")]
    WrongSlot { item: String, slot: EquipmentSlot },
    #[error("requires level {required}, player is level {current}")]
    LevelTooLow { required: u32, current: u32 },
    #[error("nothing equipped in the {0:?} slot")]
    NothingEquipped(EquipmentSlot),
    #[error("inventory is full")]
    InventoryFull,
}

/// The root aggregate persisted between app launches.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub experience: u64,
    pub attack: u32,
    pub defense: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub total_distance: f64,
    pub total_encounters: u32,
    pub creatures_caught: u32,
    pub creatures_defeated: u32,
    pub equipment: Equipment,
    pub inventory: Inventory,
}

/// Read-only snapshot for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub experience: u64,
    pub experience_for_next_level: u64,
    pub attack: u32,
    pub defense: u32,
    pub effective_attack: u32,
    pub effective_defense: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub total_distance: f64,
    pub total_encounters: u32,
    pub creatures_caught: u32,
    pub creatures_defeated: u32,
    pub inventory_used: usize,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME.to_string())
    }
}

impl Player {
    /// Creates a fresh level-1 player with a random id.
    pub fn new(name: String) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), name)
    }

    pub fn with_id(id: String, name: String) -> Self {
        Self::at_level(id, name, 1)
    }

    /// Creates a player at `level` with level-derived stats and full HP.
    pub fn at_level(id: String, name: String, level: u32) -> Self {
        let level = level.max(1);
        let base = BaseStats::for_level(level);
        Self {
            id,
            name,
            level,
            experience: 0,
            attack: base.attack,
            defense: base.defense,
            hp: base.max_hp,
            max_hp: base.max_hp,
            total_distance: 0.0,
            total_encounters: 0,
            creatures_caught: 0,
            creatures_defeated: 0,
            equipment: Equipment::new(),
            inventory: Inventory::new(),
        }
    }

    // === Combat ===

    pub fn equipment_bonuses(&self) -> ItemStats {
        self.equipment.total_bonuses()
    }

    /// Level attack plus equipped attack bonuses.
    pub fn effective_attack(&self) -> u32 {
        self.attack + self.equipment_bonuses().attack.unwrap_or(0)
    }

    /// Level defense plus equipped defense bonuses.
    pub fn effective_defense(&self) -> u32 {
        self.defense + self.equipment_bonuses().defense.unwrap_or(0)
    }

    /// Damage dealt to a target: `max(1, floor((attack - defense) * multiplier))`.
    pub fn calculate_damage(&self, target_defense: u32, multiplier: f64) -> u32 {
        let base = self.effective_attack() as f64 - target_defense as f64;
        let damage = (base * multiplier).floor();
        if damage < MIN_DAMAGE as f64 {
            MIN_DAMAGE
        } else {
            damage as u32
        }
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    pub fn restore_hp(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn full_heal(&mut self) {
        self.hp = self.max_hp;
    }

    // === Counters ===

    pub fn add_distance(&mut self, meters: f64) {
        if meters.is_finite() && meters > 0.0 {
            self.total_distance += meters;
        }
    }

    pub fn increment_encounters(&mut self) {
        self.total_encounters += 1;
    }

    pub fn catch_creature(&mut self) {
        self.creatures_caught += 1;
    }

    pub fn defeat_creature(&mut self) {
        self.creatures_defeated += 1;
    }

    // === Inventory ===

    /// Stores an item in the first free slot, handing it back when full.
    pub fn add_item_to_inventory(&mut self, item: Item) -> Result<usize, Item> {
        self.inventory.add(item)
    }

    pub fn remove_item_from_inventory(&mut self, index: usize) -> Option<Item> {
        self.inventory.remove(index)
    }

    pub fn empty_inventory_slots(&self) -> usize {
        self.inventory.empty_slots()
    }

    pub fn used_inventory_slots(&self) -> usize {
        self.inventory.used_slots()
    }

    pub fn is_inventory_full(&self) -> bool {
        self.inventory.is_full()
    }

    // === Equipment ===

    /// Equips the item at inventory `index`.
    ///
    /// `slot` defaults to the item's own slot; accessories prefer an empty
    /// accessory slot. A displaced item goes back into the same inventory slot.
    pub fn equip_from_inventory(
        &mut self,
        index: usize,
        slot: Option<EquipmentSlot>,
    ) -> Result<EquipmentSlot, EquipError> {
        let item = self
            .inventory
            .get(index)
            .ok_or(EquipError::EmptyInventorySlot(index))?;

        let slot = slot.unwrap_or_else(|| self.preferred_slot(item));
        if !item.can_equip_in(slot) {
            return Err(EquipError::WrongSlot {
                item: item.name.clone(),
                slot,
            });
        }
        if item.level > self.level {
            return Err(EquipError::LevelTooLow {
                required: item.level,
                current: self.level,
            });
        }

        let item = self
            .inventory
            .remove(index)
            .ok_or(EquipError::EmptyInventorySlot(index))?;
        match self.equipment.place(slot, item) {
            Ok(Some(previous)) => {
                if let Err(previous) = self.stow(index, previous) {
                    warn!("No inventory room for unequipped {}, discarding it", previous.name);
                }
            }
            Ok(None) => {}
            Err(item) => {
                let name = item.name.clone();
                if let Err(item) = self.stow(index, item) {
                    warn!("No inventory room to return {}, discarding it", item.name);
                }
                return Err(EquipError::WrongSlot { item: name, slot });
            }
        }
        Ok(slot)
    }

    /// Puts `item` back at `preferred`, or in the first free slot if that one
    /// is taken. A full inventory hands the item back.
    fn stow(&mut self, preferred: usize, item: Item) -> Result<usize, Item> {
        match self.inventory.put(preferred, item) {
            Ok(()) => Ok(preferred),
            Err(item) => self.inventory.add(item),
        }
    }

    /// Moves the item in `slot` to the first free inventory slot.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Result<usize, EquipError> {
        if self.equipment.get(slot).is_none() {
            return Err(EquipError::NothingEquipped(slot));
        }
        if self.inventory.is_full() {
            return Err(EquipError::InventoryFull);
        }
        let item = self
            .equipment
            .take(slot)
            .ok_or(EquipError::NothingEquipped(slot))?;
        self.inventory.add(item).map_err(|_| EquipError::InventoryFull)
    }

    fn preferred_slot(&self, item: &Item) -> EquipmentSlot {
        match item.kind.fixed_slot() {
            Some(slot) => slot,
            None if self.equipment.accessory1.is_some() && self.equipment.accessory2.is_none() => {
                EquipmentSlot::Accessory2
            }
            None => EquipmentSlot::Accessory1,
        }
    }

    pub fn stats(&self) -> PlayerStats {
        PlayerStats {
            id: self.id.clone(),
            name: self.name.clone(),
            level: self.level,
            experience: self.experience,
            experience_for_next_level: self.experience_for_next_level(),
            attack: self.attack,
            defense: self.defense,
            effective_attack: self.effective_attack(),
            effective_defense: self.effective_defense(),
            hp: self.hp,
            max_hp: self.max_hp,
            total_distance: self.total_distance,
            total_encounters: self.total_encounters,
            creatures_caught: self.creatures_caught,
            creatures_defeated: self.creatures_defeated,
            inventory_used: self.inventory.used_slots(),
        }
    }
}
