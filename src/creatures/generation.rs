use super::templates::CREATURE_TEMPLATES;
use super::types::{Creature, CreatureTemplate};
use crate::core::constants::{CREATURE_LEVEL_VARIANCE, CREATURE_STAT_GROWTH_PER_LEVEL};
use rand::Rng;

/// Scales a base stat for the given creature level.
pub fn scale_stat(base: u32, level: u32) -> u32 {
    let multiplier = 1.0 + (level.saturating_sub(1)) as f64 * CREATURE_STAT_GROWTH_PER_LEVEL;
    (base as f64 * multiplier).floor() as u32
}

/// Rolls a creature level within ±2 of the player's, never below 1.
pub fn roll_creature_level(player_level: u32, rng: &mut impl Rng) -> u32 {
    let variation = rng.gen_range(-CREATURE_LEVEL_VARIANCE..=CREATURE_LEVEL_VARIANCE);
    (player_level as i64 + variation as i64).max(1) as u32
}

/// Stamps a leveled creature out of a template.
pub fn create_creature_from_template(
    template: &CreatureTemplate,
    player_level: u32,
    rng: &mut impl Rng,
) -> Creature {
    let level = roll_creature_level(player_level, rng);
    create_creature_at_level(template, level)
}

pub fn create_creature_at_level(template: &CreatureTemplate, level: u32) -> Creature {
    let level = level.max(1);
    let max_hp = scale_stat(template.max_hp, level);
    Creature {
        level,
        hp: max_hp,
        max_hp,
        attack: scale_stat(template.attack, level),
        defense: scale_stat(template.defense, level),
        speed: scale_stat(template.speed, level),
        ..Creature::from_template(template)
    }
}

/// Picks one template uniformly; rarity plays no part in selection.
pub fn random_template(rng: &mut impl Rng) -> &'static CreatureTemplate {
    &CREATURE_TEMPLATES[rng.gen_range(0..CREATURE_TEMPLATES.len())]
}
