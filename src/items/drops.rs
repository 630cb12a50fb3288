use super::catalog::CATALOG;
use super::types::Item;
use crate::config::LootConfig;
use rand::Rng;

/// Rolls the flat drop chance.
pub fn should_drop_item(config: &LootConfig, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < config.drop_chance
}

/// Picks one catalog entry uniformly. Rarity is a property of the result,
/// not a selection weight.
pub fn select_random_item(rng: &mut impl Rng) -> Option<Item> {
    if CATALOG.is_empty() {
        return None;
    }
    Some(CATALOG[rng.gen_range(0..CATALOG.len())].to_item())
}

/// Try to drop an item after a victory.
pub fn roll_loot(config: &LootConfig, rng: &mut impl Rng) -> Option<Item> {
    if should_drop_item(config, rng) {
        select_random_item(rng)
    } else {
        None
    }
}
