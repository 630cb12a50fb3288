//! Integration test: walk -> encounter -> fight/catch/flee through GameSession
//!
//! Uses a manual clock, an in-memory store and a recording notifier so every
//! collaborator the session talks to can be inspected.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wayfarer::combat::{AttackOutcome, AttackRejection, AttackType, LootOutcome};
use wayfarer::config::{EncounterConfig, EngineConfig, LootConfig};
use wayfarer::core::{Clock, ManualClock};
use wayfarer::encounter::{DistanceUpdate, Location};
use wayfarer::items::{item_by_id, EquipmentSlot};
use wayfarer::notify::RecordingNotifier;
use wayfarer::player::{EquipError, Player};
use wayfarer::session::GameSession;
use wayfarer::storage::{MemoryStore, PlayerStore};

const T0: i64 = 1_700_000_000_000;

type TestSession = GameSession<MemoryStore, RecordingNotifier, ManualClock, ChaCha8Rng>;

fn certain_config(drop_chance: f64) -> EngineConfig {
    EngineConfig {
        encounter: EncounterConfig {
            encounter_chance_per_meter: 1.0,
            ..Default::default()
        },
        loot: LootConfig { drop_chance },
    }
}

/// A level-30 walker outclasses every creature within two levels of them.
fn veteran_session(seed: u64) -> (TestSession, ManualClock, RecordingNotifier) {
    let clock = ManualClock::new(T0);
    let notifier = RecordingNotifier::new();
    let player = Player::at_level("vet".to_string(), "Veteran".to_string(), 30);
    let session = GameSession::with_player(
        certain_config(1.0),
        player,
        MemoryStore::new(),
        notifier.clone(),
        clock.clone(),
        ChaCha8Rng::seed_from_u64(seed),
    );
    (session, clock, notifier)
}

fn walk(meters: f64) -> DistanceUpdate {
    DistanceUpdate::new(meters, meters, Location::fallback())
}

// =========================================================================
// Walking and notification
// =========================================================================

#[test]
fn test_walking_generates_and_announces_encounter() {
    let (mut session, _clock, notifier) = veteran_session(1);

    let (key, name) = {
        let encounter = session
            .process_distance_update(&walk(60.0))
            .expect("certain config past the minimum distance");
        (encounter.key(), encounter.creature.name.clone())
    };

    assert_eq!(key, T0);
    assert_eq!(session.encounter().map(|e| e.key()), Some(T0));
    assert!((session.player().total_distance - 60.0).abs() < 1e-9);
    assert_eq!(session.store().writes(), 1, "distance is saved before the roll");

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Creature Encounter!");
    assert_eq!(notices[0].body, format!("A {} appeared! Tap to view.", name));
    assert_eq!(notices[0].encounter_key, T0);
}

#[test]
fn test_short_walk_only_saves_distance() {
    let (mut session, _clock, notifier) = veteran_session(2);
    assert!(session.process_distance_update(&walk(20.0)).is_none());
    assert!(session.encounter().is_none());
    assert!(notifier.notices().is_empty());
    assert_eq!(session.generator_status().distance_since_last_encounter, 20.0);
}

#[test]
fn test_new_encounter_replaces_unresolved_one() {
    let (mut session, clock, notifier) = veteran_session(3);
    let first = session.force_encounter(None).key();
    clock.advance(1);
    let second = session.force_encounter(None).key();

    assert_ne!(first, second);
    assert_eq!(session.encounter().map(|e| e.key()), Some(second));
    assert_eq!(notifier.notices().len(), 2);
    // The abandoned one never counted as an encounter
    assert_eq!(session.player().total_encounters, 0);
}

#[test]
fn test_same_millisecond_encounter_gets_fresh_cooldowns() {
    let (mut session, _clock, _notifier) = veteran_session(3);
    let first = session.force_encounter(None).key();
    assert!(session.attack(AttackType::Basic).is_ok());
    assert!(session.cooldown_remaining(AttackType::Basic) > 0);

    // Clock has not moved
    let second = session.force_encounter(None).key();
    assert_ne!(first, second);
    assert_eq!(session.cooldown_remaining(AttackType::Basic), 0);
    assert!(session.attack(AttackType::Basic).is_ok());
}

#[test]
fn test_force_encounter_arms_time_gate() {
    let (mut session, clock, _notifier) = veteran_session(4);
    session.force_encounter(None);

    assert_eq!(session.time_remaining_until_encounter(), 30);
    assert_eq!(session.current_probability(), 0.0);
    assert!(session.process_distance_update(&walk(500.0)).is_none());

    clock.advance(30_000);
    assert_eq!(session.time_remaining_until_encounter(), 0);
    assert!(session.process_distance_update(&walk(1.0)).is_some());
}

// =========================================================================
// Fighting
// =========================================================================

#[test]
fn test_heavy_attacks_win_and_grant_rewards_once() {
    let (mut session, clock, _notifier) = veteran_session(5);
    session.force_encounter(None);

    let mut victory = None;
    for _ in 0..20 {
        match session.attack(AttackType::Heavy) {
            Ok(AttackOutcome::Continue(exchange)) => {
                assert!(exchange.damage_taken.is_some());
                clock.advance(AttackType::Heavy.cooldown_ms());
            }
            Ok(AttackOutcome::Victory(exchange, report)) => {
                assert_eq!(exchange.creature_hp, 0);
                assert_eq!(exchange.damage_taken, None);
                victory = Some(report);
                break;
            }
            other => panic!("Veteran should not lose or be rejected: {other:?}"),
        }
    }

    let report = victory.expect("fight should end within 20 heavy attacks");
    assert!(report.experience > 0);
    let player = session.player();
    assert_eq!(player.creatures_defeated, 1);
    assert_eq!(player.total_encounters, 1);
    assert!(player.hp > 0);
    assert!(session.encounter().is_none());

    // Drop chance is 1.0 and the bag is empty
    match report.loot {
        LootOutcome::Stored { index, item } => {
            assert_eq!(player.inventory.get(index), Some(&item));
        }
        other => panic!("Expected a stored drop, got {other:?}"),
    }

    // Nothing left to hit
    assert_eq!(
        session.attack(AttackType::Basic),
        Err(AttackRejection::EncounterClosed)
    );
    assert_eq!(session.player().creatures_defeated, 1);
}

#[test]
fn test_cooldowns_are_per_attack_and_rejections_change_nothing() {
    let (mut session, clock, _notifier) = veteran_session(6);
    session.force_encounter(None);

    // No creature within two levels of 30 falls to a single basic hit
    let first = session.attack(AttackType::Basic).unwrap();
    assert!(!first.is_terminal());
    let creature_hp = first.exchange().creature_hp;
    let player_hp = session.player().hp;

    assert_eq!(
        session.attack(AttackType::Basic),
        Err(AttackRejection::OnCooldown {
            attack: AttackType::Basic,
            remaining_ms: 1_000,
        })
    );
    assert_eq!(session.encounter().map(|e| e.creature.hp), Some(creature_hp));
    assert_eq!(session.player().hp, player_hp);

    assert_eq!(session.cooldown_remaining(AttackType::Basic), 1_000);
    assert_eq!(session.cooldown_remaining(AttackType::Heavy), 0);
    clock.advance(400);
    assert_eq!(session.cooldown_remaining(AttackType::Basic), 600);
    clock.advance(600);
    assert_eq!(session.cooldown_remaining(AttackType::Basic), 0);
}

#[test]
fn test_new_encounter_starts_with_fresh_cooldowns() {
    let (mut session, clock, _notifier) = veteran_session(7);
    session.force_encounter(None);
    session.attack(AttackType::Basic).unwrap();
    assert_eq!(session.cooldown_remaining(AttackType::Basic), 1_000);

    clock.advance(1);
    session.force_encounter(None);
    assert_eq!(session.cooldown_remaining(AttackType::Basic), 0);
    assert!(session.attack(AttackType::Basic).is_ok());
}

#[test]
fn test_weak_walker_loses_and_is_sent_home_healed() {
    let clock = ManualClock::new(T0);
    let mut player = Player::at_level("weak".to_string(), "Weakling".to_string(), 20);
    // Stats of a level-1 walker against level-18+ creatures
    player.attack = 1;
    player.defense = 0;
    player.max_hp = 10;
    player.hp = 10;
    let mut session = GameSession::with_player(
        certain_config(1.0),
        player,
        MemoryStore::new(),
        RecordingNotifier::new(),
        clock.clone(),
        ChaCha8Rng::seed_from_u64(8),
    );
    session.force_encounter(None);

    let outcome = session.attack(AttackType::Basic).unwrap();
    let AttackOutcome::Defeat(exchange) = outcome else {
        panic!("Expected a defeat, got {outcome:?}");
    };
    assert_eq!(exchange.player_hp, 0);

    let player = session.player();
    assert_eq!(player.hp, player.max_hp);
    assert_eq!(player.total_encounters, 1);
    assert_eq!(player.creatures_defeated, 0);
    assert_eq!(player.experience, 0);
    assert!(player.inventory.iter_items().next().is_none());
    assert!(session.encounter().is_none());
}

// =========================================================================
// Catch and flee
// =========================================================================

#[test]
fn test_catch_grants_experience_and_closes() {
    let (mut session, _clock, _notifier) = veteran_session(9);
    let expected = session.force_encounter(None).creature.experience_reward();

    let report = session.catch().expect("active encounter can be caught");
    assert_eq!(report.experience, expected);
    let player = session.player();
    assert_eq!(player.creatures_caught, 1);
    assert_eq!(player.total_encounters, 1);
    assert!(session.encounter().is_none());

    assert!(session.catch().is_none());
    assert!(!session.flee());
    assert_eq!(session.player().total_encounters, 1);
}

#[test]
fn test_flee_counts_encounter_without_rewards() {
    let (mut session, _clock, _notifier) = veteran_session(10);
    session.force_encounter(None);
    let experience = session.player().experience;

    assert!(session.flee());
    let player = session.player();
    assert_eq!(player.total_encounters, 1);
    assert_eq!(player.experience, experience);
    assert_eq!(player.creatures_caught + player.creatures_defeated, 0);
    assert!(!session.flee());
}

// =========================================================================
// Gear and persistence through the session
// =========================================================================

#[test]
fn test_equip_through_session_changes_damage_and_saves() {
    let (mut session, _clock, _notifier) = veteran_session(11);
    let base_attack = session.player().effective_attack();
    let writes = session.store().writes();

    let index = session
        .add_item(item_by_id("weapon_iron_blade").unwrap())
        .unwrap();
    assert_eq!(session.equip(index, None), Ok(EquipmentSlot::Weapon));
    assert_eq!(session.player().effective_attack(), base_attack + 12);
    assert_eq!(session.store().writes(), writes + 2);

    let saved = session.store().load().unwrap().unwrap();
    assert_eq!(&saved, session.player());

    assert_eq!(
        session.equip(index, None),
        Err(EquipError::EmptyInventorySlot(index))
    );
    let back = session.unequip(EquipmentSlot::Weapon).unwrap();
    assert_eq!(session.player().effective_attack(), base_attack);
    assert!(session.discard_item(back).is_some());
    assert_eq!(session.player().used_inventory_slots(), 0);
}

#[test]
fn test_session_restores_saved_player() {
    let saved = Player::at_level("p-7".to_string(), "Returning".to_string(), 7);
    let store = MemoryStore::with_blob(saved.to_json().unwrap());
    let session = GameSession::new(
        EngineConfig::default(),
        store,
        RecordingNotifier::new(),
        ManualClock::new(T0),
        ChaCha8Rng::seed_from_u64(12),
    );
    assert_eq!(session.player(), &saved);
}

#[test]
fn test_corrupt_save_starts_fresh_player() {
    let mut session = GameSession::new(
        EngineConfig::default(),
        MemoryStore::with_blob("{not json"),
        RecordingNotifier::new(),
        ManualClock::new(T0),
        ChaCha8Rng::seed_from_u64(13),
    );
    assert_eq!(session.player().level, 1);
    assert_eq!(session.player().name, "Adventurer");

    // The unreadable blob stays put while play continues
    session.process_distance_update(&walk(10.0));
    assert_eq!(session.store().writes(), 0);
    assert_eq!(session.store().blob(), Some("{not json"));

    session.reset_player();
    assert_eq!(session.store().writes(), 1);
    assert!(session.store().load().unwrap().is_some());
}

#[test]
fn test_failing_store_does_not_stop_play() {
    let clock = ManualClock::new(T0);
    let mut session = GameSession::with_player(
        certain_config(0.0),
        Player::at_level("x".to_string(), "Offline".to_string(), 30),
        MemoryStore::failing(),
        RecordingNotifier::new(),
        clock.clone(),
        ChaCha8Rng::seed_from_u64(14),
    );

    assert!(session.process_distance_update(&walk(60.0)).is_some());
    assert!(session.flee());
    assert!((session.player().total_distance - 60.0).abs() < 1e-9);
    assert_eq!(session.player().total_encounters, 1);
    assert_eq!(session.store().writes(), 0);
    assert_eq!(clock.now_ms(), T0);
}

#[test]
fn test_debug_level_controls() {
    let (mut session, _clock, _notifier) = veteran_session(15);

    session.reset_level();
    let player = session.player();
    assert_eq!((player.level, player.attack, player.defense), (1, 20, 5));
    assert_eq!(player.hp, player.max_hp);

    session.force_level_up();
    let player = session.player();
    assert_eq!((player.level, player.attack, player.defense, player.max_hp), (2, 23, 7, 110));

    session.force_encounter(None);
    session.reset_player();
    assert!(session.encounter().is_none());
    assert_eq!(session.player().level, 1);
    assert_eq!(session.generator().last_encounter_time(), None);
    let saved = session.store().load().unwrap().unwrap();
    assert_eq!(saved.id, session.player().id);
}
