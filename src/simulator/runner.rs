//! Walks simulated players through `GameSession`, the same engine the app
//! drives, and tallies what happens.

use super::config::SimConfig;
use super::report::SimReport;
use crate::combat::{AttackOutcome, AttackRejection, AttackType, LootOutcome};
use crate::core::{Clock, ManualClock};
use crate::encounter::{DistanceUpdate, Location};
use crate::items::{EquipmentSlot, Item};
use crate::notify::NoopNotifier;
use crate::player::Player;
use crate::session::GameSession;
use crate::storage::MemoryStore;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Simulated start time, so encounter keys look like real timestamps
const SIM_EPOCH_MS: i64 = 1_700_000_000_000;

// Safety valve for a single fight; real fights end long before this
const MAX_EXCHANGES_PER_FIGHT: u32 = 10_000;

type SimSession = GameSession<MemoryStore, NoopNotifier, ManualClock, ChaCha8Rng>;

/// Statistics from one simulated walker.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct RunStats {
    pub final_level: u32,
    pub final_experience: u64,
    pub total_distance: f64,
    pub simulated_ms: i64,
    pub encounters: u32,
    pub victories: u32,
    pub defeats: u32,
    pub catches: u32,
    pub exchanges: u64,
    pub items_dropped: u32,
    pub items_lost_inventory_full: u32,
    pub upgrades_equipped: u32,
    /// Distance walked when each level was reached; index 0 is the first
    /// level gained
    pub level_up_distances: Vec<f64>,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, Encounters {}, Wins {}, Losses {}, Catches {}, Items {}",
                run_idx + 1,
                config.num_runs,
                run.final_level,
                run.encounters,
                run.victories,
                run.defeats,
                run.catches,
                run.items_dropped
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs, config.walk_distance_meters)
}

/// One walker from start to `walk_distance_meters`.
pub fn simulate_single_run(config: &SimConfig, rng: &mut impl Rng) -> RunStats {
    let clock = ManualClock::new(SIM_EPOCH_MS);
    let player = Player::at_level(
        "sim".to_string(),
        "Simulated Walker".to_string(),
        config.starting_level,
    );
    let mut session = GameSession::with_player(
        config.engine,
        player,
        MemoryStore::new(),
        NoopNotifier,
        clock.clone(),
        ChaCha8Rng::seed_from_u64(rng.gen()),
    );

    let mut stats = RunStats::default();
    let mut last_level = session.player().level;
    let location = Location::fallback();
    let step = config.step_meters.max(0.1);
    let mut walked = 0.0;

    while walked < config.walk_distance_meters {
        clock.advance(config.step_interval_ms);
        walked += step;
        let update = DistanceUpdate::new(step, walked, location);
        if session.process_distance_update(&update).is_none() {
            continue;
        }

        stats.encounters += 1;
        if rng.gen::<f64>() < config.catch_rate {
            if session.catch().is_some() {
                stats.catches += 1;
            }
        } else {
            fight(&mut session, &clock, config, &mut stats);
        }

        let level = session.player().level;
        for _ in last_level..level {
            stats.level_up_distances.push(walked);
        }
        last_level = level;
    }

    let player = session.player();
    stats.final_level = player.level;
    stats.final_experience = player.experience;
    stats.total_distance = player.total_distance;
    stats.simulated_ms = clock.now_ms() - SIM_EPOCH_MS;
    stats
}

/// Attacks with the strongest ready attack until the fight ends, waiting out
/// cooldowns on the simulated clock.
fn fight(session: &mut SimSession, clock: &ManualClock, config: &SimConfig, stats: &mut RunStats) {
    for _ in 0..MAX_EXCHANGES_PER_FIGHT {
        let attack = AttackType::ALL
            .into_iter()
            .rev()
            .find(|attack| session.cooldown_remaining(*attack) == 0);
        let Some(attack) = attack else {
            let wait = AttackType::ALL
                .into_iter()
                .map(|attack| session.cooldown_remaining(attack))
                .min()
                .unwrap_or(0);
            clock.advance(wait.max(1));
            continue;
        };

        match session.attack(attack) {
            Ok(AttackOutcome::Continue(_)) => stats.exchanges += 1,
            Ok(AttackOutcome::Victory(_, report)) => {
                stats.exchanges += 1;
                stats.victories += 1;
                match report.loot {
                    LootOutcome::NoDrop => {}
                    LootOutcome::Stored { index, item } => {
                        stats.items_dropped += 1;
                        if config.auto_equip && try_upgrade(session, index, &item) {
                            stats.upgrades_equipped += 1;
                        }
                    }
                    LootOutcome::InventoryFull(_) => {
                        stats.items_dropped += 1;
                        stats.items_lost_inventory_full += 1;
                    }
                }
                return;
            }
            Ok(AttackOutcome::Defeat(_)) => {
                stats.exchanges += 1;
                stats.defeats += 1;
                return;
            }
            Err(AttackRejection::OnCooldown { remaining_ms, .. }) => clock.advance(remaining_ms),
            Err(_) => return,
        }
    }
}

fn gear_score(item: Option<&Item>) -> u32 {
    item.map_or(0, |item| item.attack_bonus() + item.defense_bonus())
}

/// Equips the item at `index` if it beats what it would replace.
fn try_upgrade(session: &mut SimSession, index: usize, item: &Item) -> bool {
    let equipment = &session.player().equipment;
    let slot = match item.kind.fixed_slot() {
        Some(slot) => slot,
        None => {
            let first = gear_score(equipment.accessory1.as_ref());
            let second = gear_score(equipment.accessory2.as_ref());
            if equipment.accessory1.is_none() || (equipment.accessory2.is_some() && first <= second)
            {
                EquipmentSlot::Accessory1
            } else {
                EquipmentSlot::Accessory2
            }
        }
    };
    if gear_score(Some(item)) <= gear_score(equipment.get(slot).as_ref()) {
        return false;
    }
    session.equip(index, Some(slot)).is_ok()
}
