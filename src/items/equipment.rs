use super::types::{EquipmentSlot, Item, ItemStats};
use log::warn;
use serde::{Deserialize, Serialize};

/// Player equipment slots.
///
/// IMPORTANT: loading goes through `serde_json::Value` slot by slot. Missing
/// slots (saves written before a slot existed) and unreadable items load as
/// empty instead of failing the whole save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub offhand: Option<Item>,
    pub head: Option<Item>,
    pub chest: Option<Item>,
    pub legs: Option<Item>,
    pub boots: Option<Item>,
    pub gloves: Option<Item>,
    pub accessory1: Option<Item>,
    pub accessory2: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> &Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Offhand => &self.offhand,
            EquipmentSlot::Head => &self.head,
            EquipmentSlot::Chest => &self.chest,
            EquipmentSlot::Legs => &self.legs,
            EquipmentSlot::Boots => &self.boots,
            EquipmentSlot::Gloves => &self.gloves,
            EquipmentSlot::Accessory1 => &self.accessory1,
            EquipmentSlot::Accessory2 => &self.accessory2,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Offhand => &mut self.offhand,
            EquipmentSlot::Head => &mut self.head,
            EquipmentSlot::Chest => &mut self.chest,
            EquipmentSlot::Legs => &mut self.legs,
            EquipmentSlot::Boots => &mut self.boots,
            EquipmentSlot::Gloves => &mut self.gloves,
            EquipmentSlot::Accessory1 => &mut self.accessory1,
            EquipmentSlot::Accessory2 => &mut self.accessory2,
        }
    }

    /// Puts `item` into `slot` if it fits, returning whatever was there.
    /// A non-fitting item is handed back untouched as `Err`.
    pub fn place(&mut self, slot: EquipmentSlot, item: Item) -> Result<Option<Item>, Item> {
        if !item.can_equip_in(slot) {
            return Err(item);
        }
        Ok(self.slot_mut(slot).replace(item))
    }

    pub fn take(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        EquipmentSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).as_ref())
    }

    /// Summed stat bonuses over all equipped items.
    pub fn total_bonuses(&self) -> ItemStats {
        let sum = |f: fn(&ItemStats) -> Option<u32>| -> Option<u32> {
            let total: u32 = self.iter_equipped().filter_map(|i| f(&i.stats)).sum();
            (total > 0).then_some(total)
        };
        ItemStats {
            attack: sum(|s| s.attack),
            defense: sum(|s| s.defense),
            hp: sum(|s| s.hp),
            max_hp: sum(|s| s.max_hp),
        }
    }

    /// Removes every item sitting in a slot it cannot occupy.
    ///
    /// Used when loading save data that may have been hand-edited.
    pub fn take_misplaced(&mut self) -> Vec<Item> {
        let mut misplaced = Vec::new();
        for slot in EquipmentSlot::ALL {
            let fits = self.get(slot).as_ref().map_or(true, |i| i.can_equip_in(slot));
            if !fits {
                misplaced.extend(self.take(slot));
            }
        }
        misplaced
    }
}

impl From<serde_json::Value> for Equipment {
    fn from(raw: serde_json::Value) -> Self {
        let mut equipment = Equipment::new();
        let mut fields = match raw {
            serde_json::Value::Object(fields) => fields,
            serde_json::Value::Null => return equipment,
            other => {
                warn!("Ignoring equipment that is not an object: {}", other);
                return equipment;
            }
        };
        for slot in EquipmentSlot::ALL {
            let Some(value) = fields.remove(slot.key()) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            match serde_json::from_value::<Item>(value) {
                Ok(item) => *equipment.slot_mut(slot) = Some(item),
                Err(e) => warn!("Dropping unreadable {} equipment: {}", slot.key(), e),
            }
        }
        equipment
    }
}
