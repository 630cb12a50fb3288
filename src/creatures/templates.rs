use super::types::CreatureTemplate;
use crate::core::Rarity;

pub const CREATURE_TEMPLATES: [CreatureTemplate; 5] = [
    CreatureTemplate {
        id: "forest_sprite",
        name: "Forest Sprite",
        creature_type: "Nature",
        max_hp: 50,
        attack: 15,
        defense: 5,
        speed: 20,
        rarity: Rarity::Common,
        description: "A small nature spirit found in wooded areas",
        encounter_rate: 0.6,
    },
    CreatureTemplate {
        id: "urban_phantom",
        name: "Urban Phantom",
        creature_type: "Shadow",
        max_hp: 60,
        attack: 18,
        defense: 8,
        speed: 25,
        rarity: Rarity::Common,
        description: "A mysterious entity that appears in city areas",
        encounter_rate: 0.5,
    },
    CreatureTemplate {
        id: "coastal_spirit",
        name: "Coastal Spirit",
        creature_type: "Water",
        max_hp: 70,
        attack: 20,
        defense: 10,
        speed: 15,
        rarity: Rarity::Uncommon,
        description: "A spirit drawn to bodies of water",
        encounter_rate: 0.3,
    },
    CreatureTemplate {
        id: "mountain_guardian",
        name: "Mountain Guardian",
        creature_type: "Earth",
        max_hp: 100,
        attack: 25,
        defense: 20,
        speed: 10,
        rarity: Rarity::Rare,
        description: "A powerful guardian of elevated terrain",
        encounter_rate: 0.15,
    },
    CreatureTemplate {
        id: "wind_dancer",
        name: "Wind Dancer",
        creature_type: "Air",
        max_hp: 55,
        attack: 22,
        defense: 6,
        speed: 35,
        rarity: Rarity::Uncommon,
        description: "An agile creature that moves with the wind",
        encounter_rate: 0.35,
    },
];

pub fn template_by_id(id: &str) -> Option<&'static CreatureTemplate> {
    CREATURE_TEMPLATES.iter().find(|t| t.id == id)
}
