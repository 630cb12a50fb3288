//! Fixed-size bag of item slots.
//!
//! The slot count is always exactly `INVENTORY_SIZE`, whatever shape the
//! stored data had.

use crate::core::constants::INVENTORY_SIZE;
use crate::items::Item;
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "Option<Vec<serde_json::Value>>",
    into = "Vec<Option<Item>>"
)]
pub struct Inventory {
    slots: Vec<Option<Item>>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            slots: vec![None; INVENTORY_SIZE],
        }
    }

    /// Builds an inventory from slots of any length, padding with empty slots
    /// or truncating as needed.
    pub fn from_slots(mut slots: Vec<Option<Item>>) -> Self {
        if slots.len() > INVENTORY_SIZE {
            let dropped = slots[INVENTORY_SIZE..].iter().flatten().count();
            if dropped > 0 {
                warn!(
                    "Inventory had {} slots, discarding {} items past slot {}",
                    slots.len(),
                    dropped,
                    INVENTORY_SIZE
                );
            }
        }
        slots.resize(INVENTORY_SIZE, None);
        Self { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<Item>] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_none())
    }

    /// Stores `item` in the first empty slot and returns its index.
    ///
    /// When the inventory is full the item is handed back so the caller can
    /// decide what to do with it.
    pub fn add(&mut self, item: Item) -> Result<usize, Item> {
        match self.first_empty() {
            Some(index) => {
                self.slots[index] = Some(item);
                Ok(index)
            }
            None => Err(item),
        }
    }

    /// Stores `item` at `index` only if that slot exists and is empty.
    pub fn put(&mut self, index: usize, item: Item) -> Result<(), Item> {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(item);
                Ok(())
            }
            _ => Err(item),
        }
    }

    /// Takes the item at `index`. Out-of-range or empty slots yield `None`.
    pub fn remove(&mut self, index: usize) -> Option<Item> {
        self.slots.get_mut(index).and_then(|slot| slot.take())
    }

    pub fn used_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn empty_slots(&self) -> usize {
        self.capacity() - self.used_slots()
    }

    pub fn is_full(&self) -> bool {
        self.empty_slots() == 0
    }

    pub fn iter_items(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|item| (i, item)))
    }
}

impl From<Vec<Option<Item>>> for Inventory {
    fn from(slots: Vec<Option<Item>>) -> Self {
        Self::from_slots(slots)
    }
}

impl From<Option<Vec<serde_json::Value>>> for Inventory {
    /// Lenient load: a missing array is empty, unreadable entries become
    /// empty slots.
    fn from(raw: Option<Vec<serde_json::Value>>) -> Self {
        let slots = raw
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                if value.is_null() {
                    return None;
                }
                match serde_json::from_value::<Item>(value) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        warn!("Dropping unreadable inventory slot {}: {}", index, e);
                        None
                    }
                }
            })
            .collect();
        Self::from_slots(slots)
    }
}

impl From<Inventory> for Vec<Option<Item>> {
    fn from(inventory: Inventory) -> Self {
        inventory.slots
    }
}
