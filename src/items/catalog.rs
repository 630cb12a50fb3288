//! Static item catalog: five items per kind, one per rarity tier.
//!
//! Entries are read-only templates. Every lookup returns an owned `Item`.

use super::types::{Item, ItemKind, ItemStats};
use crate::core::Rarity;

pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ItemKind,
    pub rarity: Rarity,
    pub level: u32,
    pub stats: ItemStats,
    pub drop_chance: f64,
}

impl CatalogEntry {
    pub fn to_item(&self) -> Item {
        Item {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            kind: self.kind,
            rarity: self.rarity,
            level: self.level,
            stats: self.stats,
            drop_chance: self.drop_chance,
        }
    }
}

const fn stats(attack: u32, defense: u32, hp: u32, max_hp: u32) -> ItemStats {
    const fn opt(v: u32) -> Option<u32> {
        if v == 0 {
            None
        } else {
            Some(v)
        }
    }
    ItemStats {
        attack: opt(attack),
        defense: opt(defense),
        hp: opt(hp),
        max_hp: opt(max_hp),
    }
}

macro_rules! entry {
    ($id:expr, $name:expr, $desc:expr, $kind:ident, $rarity:ident, $level:expr,
     atk: $atk:expr, def: $def:expr, hp: $hp:expr, max_hp: $max_hp:expr, drop: $drop:expr) => {
        CatalogEntry {
            id: $id,
            name: $name,
            description: $desc,
            kind: ItemKind::$kind,
            rarity: Rarity::$rarity,
            level: $level,
            stats: stats($atk, $def, $hp, $max_hp),
            drop_chance: $drop,
        }
    };
}

pub static CATALOG: [CatalogEntry; 40] = [
    // Weapons
    entry!("weapon_wooden_sword", "Wooden Sword", "A basic wooden training sword. Simple but reliable.",
        Weapon, Common, 1, atk: 5, def: 0, hp: 0, max_hp: 0, drop: 0.3),
    entry!("weapon_iron_blade", "Iron Blade", "A well-crafted iron sword with a sharp edge.",
        Weapon, Uncommon, 5, atk: 12, def: 0, hp: 0, max_hp: 0, drop: 0.15),
    entry!("weapon_steel_rapier", "Steel Rapier", "An elegant steel rapier favored by skilled duelists.",
        Weapon, Rare, 8, atk: 18, def: 0, hp: 0, max_hp: 0, drop: 0.08),
    entry!("weapon_flamebrand", "Flamebrand", "A magical sword wreathed in eternal flames. Burns enemies with each strike.",
        Weapon, Epic, 12, atk: 28, def: 0, hp: 0, max_hp: 0, drop: 0.05),
    entry!("weapon_dragon_fang", "Dragon Fang", "A legendary blade forged from a dragon's fang. Extremely rare and powerful.",
        Weapon, Legendary, 15, atk: 35, def: 0, hp: 0, max_hp: 0, drop: 0.02),
    // Offhand
    entry!("offhand_wooden_shield", "Wooden Shield", "A simple wooden shield that provides basic protection.",
        Offhand, Common, 1, atk: 0, def: 5, hp: 0, max_hp: 0, drop: 0.3),
    entry!("offhand_steel_buckler", "Steel Buckler", "A sturdy steel shield that offers excellent defense.",
        Offhand, Uncommon, 5, atk: 0, def: 12, hp: 0, max_hp: 0, drop: 0.15),
    entry!("offhand_tower_shield", "Tower Shield", "A massive tower shield that provides formidable defense.",
        Offhand, Rare, 8, atk: 0, def: 18, hp: 0, max_hp: 0, drop: 0.08),
    entry!("offhand_guardian_aegis", "Guardian Aegis", "An ancient shield blessed by the guardians. Provides exceptional protection.",
        Offhand, Epic, 12, atk: 0, def: 25, hp: 20, max_hp: 0, drop: 0.05),
    entry!("offhand_shield_of_eternity", "Shield of Eternity", "A legendary shield said to have protected the gods themselves. Grants immense power.",
        Offhand, Legendary, 15, atk: 0, def: 35, hp: 30, max_hp: 30, drop: 0.02),
    // Head
    entry!("head_leather_cap", "Leather Cap", "A simple leather cap that offers minimal protection.",
        Head, Common, 1, atk: 0, def: 3, hp: 0, max_hp: 0, drop: 0.3),
    entry!("head_iron_helmet", "Iron Helmet", "A sturdy iron helmet that protects your head in battle.",
        Head, Uncommon, 5, atk: 0, def: 8, hp: 0, max_hp: 0, drop: 0.15),
    entry!("head_crown_of_wisdom", "Crown of Wisdom", "A mystical crown that enhances your combat abilities.",
        Head, Rare, 10, atk: 5, def: 15, hp: 0, max_hp: 0, drop: 0.08),
    entry!("head_helmet_of_valor", "Helmet of Valor", "An epic helmet worn by legendary warriors. Inspires courage and strength.",
        Head, Epic, 12, atk: 8, def: 20, hp: 15, max_hp: 0, drop: 0.05),
    entry!("head_crown_of_kings", "Crown of Kings", "The legendary crown of ancient rulers. Bestows incredible power upon its wearer.",
        Head, Legendary, 15, atk: 12, def: 25, hp: 0, max_hp: 25, drop: 0.02),
    // Chest
    entry!("chest_cloth_robe", "Cloth Robe", "A basic cloth robe that provides minimal protection.",
        Chest, Common, 1, atk: 0, def: 4, hp: 0, max_hp: 0, drop: 0.3),
    entry!("chest_chainmail", "Chainmail", "A flexible chainmail armor that offers good protection.",
        Chest, Uncommon, 5, atk: 0, def: 10, hp: 0, max_hp: 0, drop: 0.15),
    entry!("chest_plate_armor", "Plate Armor", "Heavy plate armor that provides excellent defense at the cost of mobility.",
        Chest, Rare, 10, atk: 0, def: 20, hp: 0, max_hp: 15, drop: 0.08),
    entry!("chest_dragon_scale_mail", "Dragon Scale Mail", "Armor crafted from the scales of a dragon. Provides exceptional protection.",
        Chest, Epic, 12, atk: 5, def: 28, hp: 0, max_hp: 25, drop: 0.05),
    entry!("chest_armor_of_the_titans", "Armor of the Titans", "Legendary armor forged by the titans themselves. Grants godlike protection.",
        Chest, Legendary, 15, atk: 10, def: 40, hp: 0, max_hp: 40, drop: 0.02),
    // Legs
    entry!("legs_cloth_pants", "Cloth Pants", "Simple cloth pants that offer minimal protection.",
        Legs, Common, 1, atk: 0, def: 3, hp: 0, max_hp: 0, drop: 0.3),
    entry!("legs_leather_leggings", "Leather Leggings", "Durable leather leggings that provide decent protection.",
        Legs, Uncommon, 5, atk: 0, def: 8, hp: 0, max_hp: 0, drop: 0.15),
    entry!("legs_plated_greaves", "Plated Greaves", "Heavy plated leg armor that offers excellent protection.",
        Legs, Rare, 10, atk: 0, def: 15, hp: 0, max_hp: 0, drop: 0.08),
    entry!("legs_dragonhide_leggings", "Dragonhide Leggings", "Leggings made from the hide of a dragon. Extremely durable and protective.",
        Legs, Epic, 12, atk: 0, def: 22, hp: 0, max_hp: 20, drop: 0.05),
    entry!("legs_greaves_of_immortality", "Greaves of Immortality", "Legendary greaves that grant near-immortal protection to the wearer.",
        Legs, Legendary, 15, atk: 0, def: 32, hp: 0, max_hp: 30, drop: 0.02),
    // Boots
    entry!("boots_leather_boots", "Leather Boots", "Basic leather boots that provide minimal protection.",
        Boots, Common, 1, atk: 0, def: 2, hp: 0, max_hp: 0, drop: 0.3),
    entry!("boots_iron_greaves", "Iron Greaves", "Sturdy iron boots that offer good protection for your feet.",
        Boots, Uncommon, 5, atk: 0, def: 7, hp: 0, max_hp: 0, drop: 0.15),
    entry!("boots_boots_of_swiftness", "Boots of Swiftness", "Enchanted boots that enhance your speed and agility.",
        Boots, Rare, 8, atk: 3, def: 10, hp: 0, max_hp: 0, drop: 0.08),
    entry!("boots_windwalkers", "Windwalkers", "Epic boots that allow you to move like the wind itself.",
        Boots, Epic, 12, atk: 6, def: 15, hp: 0, max_hp: 0, drop: 0.05),
    entry!("boots_boots_of_the_gods", "Boots of the Gods", "Legendary boots blessed by the gods. Grants incredible speed and power.",
        Boots, Legendary, 15, atk: 10, def: 20, hp: 0, max_hp: 20, drop: 0.02),
    // Gloves
    entry!("gloves_cloth_gloves", "Cloth Gloves", "Simple cloth gloves that offer minimal protection.",
        Gloves, Common, 1, atk: 0, def: 2, hp: 0, max_hp: 0, drop: 0.3),
    entry!("gloves_leather_gauntlets", "Leather Gauntlets", "Durable leather gauntlets that provide decent hand protection.",
        Gloves, Uncommon, 5, atk: 2, def: 6, hp: 0, max_hp: 0, drop: 0.15),
    entry!("gloves_iron_fists", "Iron Fists", "Heavy iron gauntlets that pack a powerful punch.",
        Gloves, Rare, 8, atk: 5, def: 8, hp: 0, max_hp: 0, drop: 0.08),
    entry!("gloves_power_gauntlets", "Power Gauntlets", "Magical gauntlets that enhance your striking power.",
        Gloves, Epic, 12, atk: 8, def: 10, hp: 0, max_hp: 0, drop: 0.05),
    entry!("gloves_gauntlets_of_destruction", "Gauntlets of Destruction", "Legendary gauntlets that can shatter mountains with a single strike.",
        Gloves, Legendary, 15, atk: 15, def: 15, hp: 15, max_hp: 0, drop: 0.02),
    // Accessories
    entry!("accessory_copper_ring", "Copper Ring", "A simple copper ring that provides a small stat boost.",
        Accessory, Common, 1, atk: 2, def: 2, hp: 0, max_hp: 0, drop: 0.3),
    entry!("accessory_silver_amulet", "Silver Amulet", "A silver amulet that enhances your combat abilities.",
        Accessory, Uncommon, 5, atk: 5, def: 5, hp: 10, max_hp: 0, drop: 0.15),
    entry!("accessory_golden_medallion", "Golden Medallion", "A rare golden medallion that provides substantial stat boosts.",
        Accessory, Rare, 8, atk: 8, def: 8, hp: 0, max_hp: 15, drop: 0.08),
    entry!("accessory_amulet_of_the_ancients", "Amulet of the Ancients", "An epic amulet from an ancient civilization. Grants immense power.",
        Accessory, Epic, 12, atk: 12, def: 12, hp: 25, max_hp: 25, drop: 0.05),
    entry!("accessory_ring_of_power", "Ring of Power", "A legendary ring that significantly boosts all your stats.",
        Accessory, Legendary, 15, atk: 15, def: 15, hp: 0, max_hp: 30, drop: 0.02),
];

pub fn all_items() -> Vec<Item> {
    CATALOG.iter().map(CatalogEntry::to_item).collect()
}

pub fn item_by_id(id: &str) -> Option<Item> {
    CATALOG.iter().find(|e| e.id == id).map(CatalogEntry::to_item)
}

pub fn items_by_kind(kind: ItemKind) -> Vec<Item> {
    CATALOG
        .iter()
        .filter(|e| e.kind == kind)
        .map(CatalogEntry::to_item)
        .collect()
}

pub fn items_by_rarity(rarity: Rarity) -> Vec<Item> {
    CATALOG
        .iter()
        .filter(|e| e.rarity == rarity)
        .map(CatalogEntry::to_item)
        .collect()
}
