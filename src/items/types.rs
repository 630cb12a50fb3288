use crate::core::Rarity;
use serde::{Deserialize, Serialize};

/// The nine named equipment slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Weapon,
    Offhand,
    Head,
    Chest,
    Legs,
    Boots,
    Gloves,
    Accessory1,
    Accessory2,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 9] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Offhand,
        EquipmentSlot::Head,
        EquipmentSlot::Chest,
        EquipmentSlot::Legs,
        EquipmentSlot::Boots,
        EquipmentSlot::Gloves,
        EquipmentSlot::Accessory1,
        EquipmentSlot::Accessory2,
    ];

    /// Field name used in saved equipment objects.
    pub fn key(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Offhand => "offhand",
            EquipmentSlot::Head => "head",
            EquipmentSlot::Chest => "chest",
            EquipmentSlot::Legs => "legs",
            EquipmentSlot::Boots => "boots",
            EquipmentSlot::Gloves => "gloves",
            EquipmentSlot::Accessory1 => "accessory1",
            EquipmentSlot::Accessory2 => "accessory2",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Offhand => "Offhand",
            EquipmentSlot::Head => "Head",
            EquipmentSlot::Chest => "Chest",
            EquipmentSlot::Legs => "Legs",
            EquipmentSlot::Boots => "Boots",
            EquipmentSlot::Gloves => "Gloves",
            EquipmentSlot::Accessory1 => "Accessory 1",
            EquipmentSlot::Accessory2 => "Accessory 2",
        }
    }
}

/// Item subtype. Every kind but `Accessory` is pinned to one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Weapon,
    Offhand,
    Head,
    Chest,
    Legs,
    Boots,
    Gloves,
    Accessory,
}

impl ItemKind {
    pub const ALL: [ItemKind; 8] = [
        ItemKind::Weapon,
        ItemKind::Offhand,
        ItemKind::Head,
        ItemKind::Chest,
        ItemKind::Legs,
        ItemKind::Boots,
        ItemKind::Gloves,
        ItemKind::Accessory,
    ];

    /// The single slot this kind is pinned to, `None` for accessories.
    pub fn fixed_slot(&self) -> Option<EquipmentSlot> {
        match self {
            ItemKind::Weapon => Some(EquipmentSlot::Weapon),
            ItemKind::Offhand => Some(EquipmentSlot::Offhand),
            ItemKind::Head => Some(EquipmentSlot::Head),
            ItemKind::Chest => Some(EquipmentSlot::Chest),
            ItemKind::Legs => Some(EquipmentSlot::Legs),
            ItemKind::Boots => Some(EquipmentSlot::Boots),
            ItemKind::Gloves => Some(EquipmentSlot::Gloves),
            ItemKind::Accessory => None,
        }
    }

    pub fn fits(&self, slot: EquipmentSlot) -> bool {
        match self.fixed_slot() {
            Some(fixed) => fixed == slot,
            None => matches!(slot, EquipmentSlot::Accessory1 | EquipmentSlot::Accessory2),
        }
    }

    /// Preferred slot; accessories default to the first accessory slot.
    pub fn default_slot(&self) -> EquipmentSlot {
        self.fixed_slot().unwrap_or(EquipmentSlot::Accessory1)
    }
}

/// Optional stat bonuses carried by an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hp: Option<u32>,
}

impl ItemStats {
    pub fn is_empty(&self) -> bool {
        *self == ItemStats::default()
    }

    /// Short summary such as "+12 ATK +5 DEF".
    pub fn summary(&self) -> String {
        let parts: Vec<String> = [
            (self.attack, "ATK"),
            (self.defense, "DEF"),
            (self.hp, "HP"),
            (self.max_hp, "Max HP"),
        ]
        .into_iter()
        .filter_map(|(value, label)| value.map(|v| format!("+{v} {label}")))
        .collect();
        parts.join(" ")
    }
}

/// An immutable item value. Copies are handed out; catalog entries stay pristine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub rarity: Rarity,
    /// Minimum player level required to equip
    #[serde(default = "default_item_level")]
    pub level: u32,
    #[serde(flatten)]
    pub stats: ItemStats,
    #[serde(default)]
    pub drop_chance: f64,
}

fn default_item_level() -> u32 {
    1
}

impl Item {
    pub fn can_equip_in(&self, slot: EquipmentSlot) -> bool {
        self.kind.fits(slot)
    }

    pub fn slot(&self) -> EquipmentSlot {
        self.kind.default_slot()
    }

    pub fn attack_bonus(&self) -> u32 {
        self.stats.attack.unwrap_or(0)
    }

    pub fn defense_bonus(&self) -> u32 {
        self.stats.defense.unwrap_or(0)
    }
}
