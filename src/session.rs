//! One running game: the player, the encounter generator and whatever fight
//! is on screen, wired to storage, notifications and a clock.
//!
//! Every mutation that matters for persistence is followed by a whole-player
//! save. A failed save is logged and play continues; the next successful save
//! catches up. A save that could not be read is never overwritten: saving stays
//! off until `reset_player` is called.

use crate::combat::{
    catch_encounter, flee_encounter, resolve_attack, AttackOutcome, AttackRejection, AttackType,
    CatchReport, CombatSession,
};
use crate::config::{EncounterConfigUpdate, EngineConfig, LootConfig};
use crate::core::Clock;
use crate::encounter::{DistanceUpdate, Encounter, EncounterGenerator, GeneratorStatus, Location};
use crate::items::{EquipmentSlot, Item};
use crate::notify::{EncounterNotice, EncounterNotifier};
use crate::player::{EquipError, Player};
use crate::storage::PlayerStore;
use log::{debug, info, warn};
use rand::Rng;

pub struct GameSession<S, N, C, R> {
    player: Player,
    generator: EncounterGenerator,
    combat: CombatSession,
    encounter: Option<Encounter>,
    loot: LootConfig,
    store: S,
    notifier: N,
    clock: C,
    rng: R,
    load_failed: bool,
}

impl<S, N, C, R> GameSession<S, N, C, R>
where
    S: PlayerStore,
    N: EncounterNotifier,
    C: Clock,
    R: Rng,
{
    /// Restores the saved player, or starts a fresh one if there is no save or
    /// the save cannot be read. An unreadable save is left untouched; see
    /// [`GameSession::load_failed`].
    pub fn new(config: EngineConfig, store: S, notifier: N, clock: C, rng: R) -> Self {
        let (player, load_failed) = match store.load() {
            Ok(Some(player)) => {
                info!("Loaded {} at level {}", player.name, player.level);
                (player, false)
            }
            Ok(None) => (Player::default(), false),
            Err(e) => {
                warn!(
                    "Could not load saved player, playing unsaved until reset: {}",
                    e
                );
                (Player::default(), true)
            }
        };
        let mut session = Self::with_player(config, player, store, notifier, clock, rng);
        session.load_failed = load_failed;
        session
    }

    pub fn with_player(
        config: EngineConfig,
        player: Player,
        store: S,
        notifier: N,
        clock: C,
        rng: R,
    ) -> Self {
        Self {
            player,
            generator: EncounterGenerator::new(config.encounter),
            combat: CombatSession::new(),
            encounter: None,
            loot: config.loot,
            store,
            notifier,
            clock,
            rng,
            load_failed: false,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn generator(&self) -> &EncounterGenerator {
        &self.generator
    }

    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// True when the stored save could not be read at startup. Nothing is
    /// written until `reset_player` confirms the old save can go.
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    // === Walking ===

    /// Credits walked distance and rolls for an encounter.
    ///
    /// A new encounter replaces any unresolved one still on screen.
    pub fn process_distance_update(&mut self, update: &DistanceUpdate) -> Option<&Encounter> {
        self.player.add_distance(update.incremental);
        self.save();

        let now = self.clock.now_ms();
        let encounter =
            self.generator
                .process_distance_update(update, self.player.level, now, &mut self.rng)?;
        Some(self.present(encounter))
    }

    /// Debug: spawns an encounter now. Uses the fallback position when no
    /// location is known.
    pub fn force_encounter(&mut self, location: Option<Location>) -> &Encounter {
        let now = self.clock.now_ms();
        let location = location.unwrap_or_else(Location::fallback);
        let encounter =
            self.generator
                .force_encounter(location, self.player.level, now, &mut self.rng);
        self.present(encounter)
    }

    fn present(&mut self, encounter: Encounter) -> &Encounter {
        if let Some(previous) = &self.encounter {
            if previous.is_active() {
                info!("{} wandered off unresolved", previous.creature.name);
            }
        }
        self.notifier
            .notify(&EncounterNotice::for_encounter(&encounter));
        self.encounter.insert(encounter)
    }

    pub fn generator_status(&self) -> GeneratorStatus {
        self.generator.status(self.clock.now_ms())
    }

    pub fn time_remaining_until_encounter(&self) -> u64 {
        self.generator
            .time_remaining_until_encounter(self.clock.now_ms())
    }

    pub fn current_probability(&self) -> f64 {
        self.generator.current_probability(self.clock.now_ms())
    }

    pub fn configure_encounters(&mut self, update: EncounterConfigUpdate) {
        self.generator.configure(update);
    }

    pub fn reset_encounters(&mut self) {
        self.generator.reset();
    }

    // === Fighting ===

    pub fn attack(&mut self, attack: AttackType) -> Result<AttackOutcome, AttackRejection> {
        let encounter = self
            .encounter
            .as_mut()
            .ok_or(AttackRejection::EncounterClosed)?;
        let outcome = resolve_attack(
            &mut self.combat,
            &mut self.player,
            encounter,
            attack,
            self.clock.now_ms(),
            &self.loot,
            &mut self.rng,
        )?;
        if outcome.is_terminal() {
            self.encounter = None;
        }
        self.save();
        Ok(outcome)
    }

    pub fn cooldown_remaining(&self, attack: AttackType) -> i64 {
        match &self.encounter {
            Some(encounter) if self.combat.encounter_key() == Some(encounter.key()) => {
                self.combat.cooldown_remaining(attack, self.clock.now_ms())
            }
            _ => 0,
        }
    }

    pub fn catch(&mut self) -> Option<CatchReport> {
        let report = catch_encounter(&mut self.player, self.encounter.as_mut()?)?;
        self.encounter = None;
        self.save();
        Some(report)
    }

    pub fn flee(&mut self) -> bool {
        let Some(encounter) = self.encounter.as_mut() else {
            return false;
        };
        if !flee_encounter(&mut self.player, encounter) {
            return false;
        }
        self.encounter = None;
        self.save();
        true
    }

    // === Gear ===

    pub fn equip(
        &mut self,
        inventory_index: usize,
        slot: Option<EquipmentSlot>,
    ) -> Result<EquipmentSlot, EquipError> {
        let slot = self.player.equip_from_inventory(inventory_index, slot)?;
        self.save();
        Ok(slot)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Result<usize, EquipError> {
        let index = self.player.unequip(slot)?;
        self.save();
        Ok(index)
    }

    pub fn add_item(&mut self, item: Item) -> Result<usize, Item> {
        let index = self.player.add_item_to_inventory(item)?;
        self.save();
        Ok(index)
    }

    pub fn discard_item(&mut self, inventory_index: usize) -> Option<Item> {
        let item = self.player.remove_item_from_inventory(inventory_index)?;
        self.save();
        Some(item)
    }

    // === Debug ===

    pub fn force_level_up(&mut self) {
        self.player.force_level_up();
        self.save();
    }

    pub fn reset_level(&mut self) {
        self.player.reset_level();
        self.save();
    }

    /// Wipes the save and starts over with a new player.
    pub fn reset_player(&mut self) {
        self.load_failed = false;
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear saved player: {}", e);
        }
        self.player = Player::default();
        self.encounter = None;
        self.combat = CombatSession::new();
        self.generator.reset();
        self.save();
    }

    fn save(&mut self) {
        if self.load_failed {
            debug!("Skipping save, stored player could not be read");
            return;
        }
        if let Err(e) = self.store.save(&self.player) {
            warn!("Failed to save player {}: {}", self.player.id, e);
        }
    }
}
