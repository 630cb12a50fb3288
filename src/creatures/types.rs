use crate::core::constants::{CREATURE_BASE_XP_PER_LEVEL, MIN_DAMAGE};
use crate::core::Rarity;
use serde::{Deserialize, Serialize};

/// Immutable definition a wild creature is stamped from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatureTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub creature_type: &'static str,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub rarity: Rarity,
    pub description: &'static str,
    /// Base encounter weight per meter
    pub encounter_rate: f64,
}

/// A wild opponent. Owned by exactly one `Encounter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub creature_type: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub rarity: Rarity,
    pub description: String,
    pub encounter_rate: f64,
}

impl Creature {
    /// Builds a full-health level-1 creature straight from a template.
    pub fn from_template(template: &CreatureTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            name: template.name.to_string(),
            creature_type: template.creature_type.to_string(),
            level: 1,
            hp: template.max_hp,
            max_hp: template.max_hp,
            attack: template.attack,
            defense: template.defense,
            speed: template.speed,
            rarity: template.rarity,
            description: template.description.to_string(),
            encounter_rate: template.encounter_rate,
        }
    }

    pub fn rarity_multiplier(&self) -> f64 {
        self.rarity.reward_multiplier()
    }

    /// Experience granted for defeating or catching this creature.
    pub fn experience_reward(&self) -> u64 {
        (CREATURE_BASE_XP_PER_LEVEL * self.level as f64 * self.rarity_multiplier()).floor() as u64
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Applies already-mitigated damage.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Damage this creature deals to a target with the given defense.
    pub fn calculate_damage(&self, target_defense: u32) -> u32 {
        let raw = self.attack as i64 - target_defense as i64;
        raw.max(MIN_DAMAGE as i64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creatures::templates::CREATURE_TEMPLATES;

    fn sprite() -> Creature {
        Creature::from_template(&CREATURE_TEMPLATES[0])
    }

    #[test]
    fn test_from_template_starts_at_full_hp() {
        let creature = sprite();
        assert_eq!(creature.name, "Forest Sprite");
        assert_eq!(creature.level, 1);
        assert_eq!(creature.hp, creature.max_hp);
        assert!(!creature.is_defeated());
    }

    #[test]
    fn test_take_damage_saturates_at_zero() {
        let mut creature = sprite();
        creature.take_damage(20);
        assert_eq!(creature.hp, 30);
        creature.take_damage(1_000);
        assert_eq!(creature.hp, 0);
        assert!(creature.is_defeated());
    }

    #[test]
    fn test_experience_reward_scales_with_level_and_rarity() {
        let mut creature = sprite();
        creature.level = 4;
        assert_eq!(creature.experience_reward(), 40);

        creature.rarity = Rarity::Uncommon;
        creature.level = 3;
        assert_eq!(creature.experience_reward(), 45);

        creature.rarity = Rarity::Legendary;
        creature.level = 7;
        assert_eq!(creature.experience_reward(), 350);
    }

    #[test]
    fn test_calculate_damage_has_floor_of_one() {
        let creature = sprite();
        assert_eq!(creature.calculate_damage(5), 10);
        assert_eq!(creature.calculate_damage(15), 1);
        assert_eq!(creature.calculate_damage(500), 1);
    }

    #[test]
    fn test_creature_json_uses_type_field() {
        let json = serde_json::to_value(sprite()).unwrap();
        assert_eq!(json["type"], "Nature");
        assert_eq!(json["maxHp"], 50);
    }
}
