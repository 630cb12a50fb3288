//! Property tests for the progression, damage, inventory, generator and
//! victory invariants.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wayfarer::combat::handle_victory;
use wayfarer::config::{EncounterConfig, LootConfig};
use wayfarer::core::constants::INVENTORY_SIZE;
use wayfarer::creatures::{create_creature_at_level, CREATURE_TEMPLATES};
use wayfarer::encounter::{DistanceUpdate, Encounter, EncounterGenerator, Location};
use wayfarer::items::{all_items, item_by_id};
use wayfarer::player::{xp_for_next_level, Player};

const T0: i64 = 1_700_000_000_000;

fn walker(level: u32) -> Player {
    Player::at_level("prop".to_string(), "Prop".to_string(), level)
}

fn progress(player: &Player) -> (u32, u64, u32, u32, u32, u32) {
    (
        player.level,
        player.experience,
        player.attack,
        player.defense,
        player.max_hp,
        player.hp,
    )
}

// =========================================================================
// Progression
// =========================================================================

proptest! {
    #[test]
    fn prop_xp_curve_matches_formula_and_increases(level in 1u32..10_000) {
        let expected = (100.0 * (level as f64).powf(1.5)).floor() as u64;
        prop_assert_eq!(xp_for_next_level(level), expected);
        prop_assert!(xp_for_next_level(level + 1) > xp_for_next_level(level));
    }

    #[test]
    fn prop_one_big_grant_equals_sequential_grants(start in 1u32..40, levels in 1u32..6) {
        let total: u64 = (start..start + levels).map(xp_for_next_level).sum();

        let mut bulk = walker(start);
        prop_assert_eq!(bulk.add_experience(total), levels);

        let mut stepwise = walker(start);
        for _ in 0..levels {
            let needed = stepwise.experience_for_next_level();
            prop_assert_eq!(stepwise.add_experience(needed), 1);
        }

        prop_assert_eq!(progress(&bulk), progress(&stepwise));
    }
}

// =========================================================================
// Damage
// =========================================================================

proptest! {
    #[test]
    fn prop_damage_is_at_least_one(
        attack in 0u32..2_000,
        defense in 0u32..2_000,
        multiplier in 0.01f64..10.0,
    ) {
        let mut player = walker(1);
        player.attack = attack;
        prop_assert!(player.calculate_damage(defense, multiplier) >= 1);
    }

    #[test]
    fn prop_creature_retaliation_is_at_least_one(attack in 0u32..2_000, defense in 0u32..2_000) {
        let mut creature = create_creature_at_level(&CREATURE_TEMPLATES[0], 1);
        creature.attack = attack;
        prop_assert!(creature.calculate_damage(defense) >= 1);
    }
}

// =========================================================================
// Inventory
// =========================================================================

proptest! {
    #[test]
    fn prop_loaded_inventory_always_has_fixed_size(len in 0usize..300, filled_every in 1usize..10) {
        let sword = serde_json::to_value(item_by_id("weapon_wooden_sword").unwrap()).unwrap();
        let slots: Vec<serde_json::Value> = (0..len)
            .map(|i| if i % filled_every == 0 { sword.clone() } else { serde_json::Value::Null })
            .collect();
        let json = serde_json::json!({ "level": 2, "inventory": slots }).to_string();

        let player = Player::from_json(&json).unwrap();
        prop_assert_eq!(player.inventory.slots().len(), INVENTORY_SIZE);
        let kept = (0..len.min(INVENTORY_SIZE)).filter(|i| i % filled_every == 0).count();
        prop_assert_eq!(player.used_inventory_slots(), kept);
    }

    #[test]
    fn prop_full_inventory_rejects_and_is_unchanged(pick in 0usize..40) {
        let catalog = all_items();
        let mut player = walker(1);
        for i in 0..INVENTORY_SIZE {
            player.add_item_to_inventory(catalog[i % catalog.len()].clone()).unwrap();
        }
        let before = player.inventory.clone();

        let extra = catalog[pick % catalog.len()].clone();
        prop_assert_eq!(player.add_item_to_inventory(extra.clone()), Err(extra));
        prop_assert_eq!(&player.inventory, &before);
        prop_assert!(player.is_inventory_full());
    }
}

// =========================================================================
// Encounter generator
// =========================================================================

proptest! {
    #[test]
    fn prop_zero_chance_never_generates(
        steps in prop::collection::vec((0.0f64..100_000.0, 0i64..600_000), 1..50),
        seed in any::<u64>(),
    ) {
        let mut generator = EncounterGenerator::new(EncounterConfig::never());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut now = T0;
        let mut total = 0.0;
        for (meters, dt) in steps {
            now += dt;
            total += meters;
            let update = DistanceUpdate::new(meters, total, Location::fallback());
            prop_assert!(generator.process_distance_update(&update, 5, now, &mut rng).is_none());
        }
    }

    #[test]
    fn prop_time_gate_holds_after_any_encounter(
        forced in any::<bool>(),
        incremental in 0.0f64..1.0e9,
        dt in 0i64..30_000,
        seed in any::<u64>(),
    ) {
        let config = EncounterConfig {
            encounter_chance_per_meter: 1.0,
            ..Default::default()
        };
        let mut generator = EncounterGenerator::new(config);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let here = Location::fallback();

        if forced {
            generator.force_encounter(here, 3, T0, &mut rng);
        } else {
            let update = DistanceUpdate::new(100.0, 100.0, here);
            prop_assert!(generator.process_distance_update(&update, 3, T0, &mut rng).is_some());
        }
        prop_assert_eq!(generator.distance_since_last_encounter(), 0.0);

        let update = DistanceUpdate::new(incremental, incremental, here);
        prop_assert!(generator.process_distance_update(&update, 3, T0 + dt, &mut rng).is_none());
    }
}

// =========================================================================
// Victory
// =========================================================================

proptest! {
    #[test]
    fn prop_victory_rewards_granted_once(
        template in 0usize..CREATURE_TEMPLATES.len(),
        level in 1u32..30,
        seed in any::<u64>(),
    ) {
        let creature = create_creature_at_level(&CREATURE_TEMPLATES[template], level);
        let reward = creature.experience_reward();
        let mut encounter = Encounter::new(creature, Location::fallback(), level, T0);
        encounter.creature.hp = 0;

        let mut player = walker(1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let loot = LootConfig { drop_chance: 1.0 };

        let first = handle_victory(&mut player, &mut encounter, &loot, &mut rng);
        prop_assert!(first.is_some());
        let after_first = player.clone();

        prop_assert!(handle_victory(&mut player, &mut encounter, &loot, &mut rng).is_none());
        prop_assert_eq!(&player, &after_first);
        prop_assert_eq!(player.creatures_defeated, 1);
        prop_assert_eq!(player.total_encounters, 1);
        prop_assert_eq!(first.map(|report| report.experience), Some(reward));
    }
}
