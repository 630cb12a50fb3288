use super::types::{AttackRejection, AttackType, CombatSession};
use crate::config::LootConfig;
use crate::creatures::Creature;
use crate::encounter::Encounter;
use crate::items::{roll_loot, Item};
use crate::player::Player;
use log::{debug, info};
use rand::Rng;

/// Damage numbers from one player attack and the creature's answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exchange {
    pub attack: AttackType,
    pub damage_dealt: u32,
    /// `None` when the creature fell before it could strike back
    pub damage_taken: Option<u32>,
    pub creature_hp: u32,
    pub player_hp: u32,
}

/// What happened to a dropped item.
#[derive(Debug, Clone, PartialEq)]
pub enum LootOutcome {
    NoDrop,
    Stored { index: usize, item: Item },
    /// The item dropped but the inventory had no room. Never silently lost:
    /// the caller gets it back to show or discard explicitly.
    InventoryFull(Item),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VictoryReport {
    pub experience: u64,
    pub levels_gained: u32,
    pub loot: LootOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchReport {
    pub experience: u64,
    pub levels_gained: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttackOutcome {
    /// Both combatants still standing
    Continue(Exchange),
    Victory(Exchange, VictoryReport),
    /// Player fell; healed and sent home without rewards
    Defeat(Exchange),
}

impl AttackOutcome {
    pub fn exchange(&self) -> &Exchange {
        match self {
            AttackOutcome::Continue(exchange)
            | AttackOutcome::Victory(exchange, _)
            | AttackOutcome::Defeat(exchange) => exchange,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, AttackOutcome::Continue(_))
    }
}

/// Damage the given attack would deal right now, for button previews.
pub fn expected_damage(player: &Player, creature: &Creature, attack: AttackType) -> u32 {
    player.calculate_damage(creature.defense, attack.multiplier())
}

/// Resolves one player attack as a single synchronous exchange.
///
/// The cooldown check and the cooldown start happen together inside
/// `CombatSession::try_begin_attack`, so a second request for the same attack
/// in the same instant always sees the first one's cooldown.
pub fn resolve_attack(
    session: &mut CombatSession,
    player: &mut Player,
    encounter: &mut Encounter,
    attack: AttackType,
    now_ms: i64,
    loot: &LootConfig,
    rng: &mut impl Rng,
) -> Result<AttackOutcome, AttackRejection> {
    if !encounter.is_active() {
        return Err(AttackRejection::EncounterClosed);
    }
    if encounter.creature.is_defeated() {
        return Err(AttackRejection::CreatureDefeated);
    }
    if player.is_defeated() {
        return Err(AttackRejection::PlayerDefeated);
    }

    session.bind(encounter.key());
    session.try_begin_attack(attack, now_ms)?;

    let damage_dealt = player.calculate_damage(encounter.creature.defense, attack.multiplier());
    encounter.creature.take_damage(damage_dealt);

    let damage_taken = if encounter.creature.is_defeated() {
        None
    } else {
        let damage = encounter.creature.calculate_damage(player.effective_defense());
        player.take_damage(damage);
        Some(damage)
    };

    let exchange = Exchange {
        attack,
        damage_dealt,
        damage_taken,
        creature_hp: encounter.creature.hp,
        player_hp: player.hp,
    };
    debug!(
        "{} hits {} for {} ({} HP left), takes {:?}",
        attack.name(),
        encounter.creature.name,
        damage_dealt,
        encounter.creature.hp,
        damage_taken
    );

    if encounter.creature.is_defeated() {
        return Ok(match handle_victory(player, encounter, loot, rng) {
            Some(report) => AttackOutcome::Victory(exchange, report),
            None => AttackOutcome::Continue(exchange),
        });
    }
    if player.is_defeated() {
        handle_defeat(player, encounter);
        return Ok(AttackOutcome::Defeat(exchange));
    }
    Ok(AttackOutcome::Continue(exchange))
}

/// Grants the rewards for a defeated creature.
///
/// Returns `None` if the encounter was already closed, so rewards are granted
/// exactly once per encounter however often this is called.
pub fn handle_victory(
    player: &mut Player,
    encounter: &mut Encounter,
    loot: &LootConfig,
    rng: &mut impl Rng,
) -> Option<VictoryReport> {
    if !encounter.defeat() {
        return None;
    }

    let experience = encounter.creature.experience_reward();
    let levels_gained = player.add_experience(experience);
    player.defeat_creature();
    player.increment_encounters();

    let loot = match roll_loot(loot, rng) {
        None => LootOutcome::NoDrop,
        Some(item) => match player.add_item_to_inventory(item.clone()) {
            Ok(index) => LootOutcome::Stored { index, item },
            Err(item) => LootOutcome::InventoryFull(item),
        },
    };

    info!(
        "Defeated {} (+{} XP){}",
        encounter.creature.name,
        experience,
        match &loot {
            LootOutcome::NoDrop => String::new(),
            LootOutcome::Stored { item, .. } => format!(", looted {}", item.name),
            LootOutcome::InventoryFull(item) => format!(", no room for {}", item.name),
        }
    );

    Some(VictoryReport {
        experience,
        levels_gained,
        loot,
    })
}

/// Player lost the fight: full heal, count the encounter, no rewards.
/// Returns false if the encounter was already closed.
pub fn handle_defeat(player: &mut Player, encounter: &mut Encounter) -> bool {
    if !encounter.flee() {
        return false;
    }
    player.full_heal();
    player.increment_encounters();
    info!("{} was defeated by {}", player.name, encounter.creature.name);
    true
}

/// Catches the creature, granting its experience reward.
pub fn catch_encounter(player: &mut Player, encounter: &mut Encounter) -> Option<CatchReport> {
    if !encounter.catch() {
        return None;
    }
    let experience = encounter.creature.experience_reward();
    player.catch_creature();
    player.increment_encounters();
    let levels_gained = player.add_experience(experience);
    info!("Caught {} (+{} XP)", encounter.creature.name, experience);
    Some(CatchReport {
        experience,
        levels_gained,
    })
}

/// Leaves the encounter without rewards. Still counts as an encounter.
pub fn flee_encounter(player: &mut Player, encounter: &mut Encounter) -> bool {
    if !encounter.flee() {
        return false;
    }
    player.increment_encounters();
    info!("Fled from {}", encounter.creature.name);
    true
}
