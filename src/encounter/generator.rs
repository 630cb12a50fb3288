//! Distance-driven encounter roll.
//!
//! Each distance tick is a single Bernoulli trial. Two independent gates must
//! both be open before the trial happens: enough meters since the last
//! encounter, and enough time since it. Once open, the chance grows linearly
//! with the meters beyond the minimum and is capped at 1.
//!
//! Time is always passed in as Unix milliseconds so the same generator can run
//! against a wall clock or a simulated one.

use super::types::{DistanceUpdate, Encounter, Location};
use crate::config::{EncounterConfig, EncounterConfigUpdate};
use log::{debug, info};
use rand::Rng;
use serde::Serialize;

/// Readiness snapshot for debug displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorStatus {
    pub distance_since_last_encounter: f64,
    pub min_encounter_distance: f64,
    pub probability: f64,
    pub time_since_last_encounter: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct EncounterGenerator {
    config: EncounterConfig,
    distance_since_last_encounter: f64,
    last_encounter_time: Option<i64>,
    /// Timestamp of the newest encounter handed out; survives `reset`
    last_issued_timestamp: Option<i64>,
}

impl EncounterGenerator {
    pub fn new(config: EncounterConfig) -> Self {
        Self {
            config,
            distance_since_last_encounter: 0.0,
            last_encounter_time: None,
            last_issued_timestamp: None,
        }
    }

    pub fn config(&self) -> &EncounterConfig {
        &self.config
    }

    pub fn distance_since_last_encounter(&self) -> f64 {
        self.distance_since_last_encounter
    }

    pub fn last_encounter_time(&self) -> Option<i64> {
        self.last_encounter_time
    }

    /// Accumulates the tick's distance and rolls for an encounter if both
    /// gates are open. Undrawn distance carries over to the next tick.
    pub fn process_distance_update(
        &mut self,
        update: &DistanceUpdate,
        player_level: u32,
        now_ms: i64,
        rng: &mut impl Rng,
    ) -> Option<Encounter> {
        if update.incremental.is_finite() {
            self.distance_since_last_encounter += update.incremental;
        }

        if !self.distance_gate_open(self.distance_since_last_encounter)
            || self.is_time_constraint_blocking(now_ms)
        {
            return None;
        }

        let probability = self.probability_for(self.distance_since_last_encounter);
        let roll: f64 = rng.gen();
        debug!(
            "Encounter roll {:.4} vs {:.4} at {:.1}m",
            roll, probability, self.distance_since_last_encounter
        );
        if roll >= probability {
            return None;
        }

        let timestamp = self.issue_timestamp(now_ms);
        let encounter = Encounter::create_random(update.location, player_level, timestamp, rng);
        info!(
            "Encounter: level {} {} after {:.1}m",
            encounter.creature.level, encounter.creature.name, self.distance_since_last_encounter
        );
        self.mark_encounter(now_ms);
        Some(encounter)
    }

    /// Generates an encounter immediately, bypassing both gates, and resets
    /// state exactly as a rolled encounter would.
    pub fn force_encounter(
        &mut self,
        location: Location,
        player_level: u32,
        now_ms: i64,
        rng: &mut impl Rng,
    ) -> Encounter {
        let timestamp = self.issue_timestamp(now_ms);
        let encounter = Encounter::create_random(location, player_level, timestamp, rng);
        info!(
            "Forced encounter: level {} {}",
            encounter.creature.level, encounter.creature.name
        );
        self.mark_encounter(now_ms);
        encounter
    }

    /// Forgets accumulated distance and the last encounter time.
    pub fn reset(&mut self) {
        self.distance_since_last_encounter = 0.0;
        self.last_encounter_time = None;
    }

    pub fn configure(&mut self, update: EncounterConfigUpdate) {
        self.config.apply(update);
    }

    pub fn is_time_constraint_blocking(&self, now_ms: i64) -> bool {
        match self.last_encounter_time {
            Some(last) => now_ms - last < self.config.min_time_between_encounters,
            None => false,
        }
    }

    /// Whole seconds, rounded up, until the time gate opens. Zero when open.
    pub fn time_remaining_until_encounter(&self, now_ms: i64) -> u64 {
        let Some(last) = self.last_encounter_time else {
            return 0;
        };
        let remaining_ms = self.config.min_time_between_encounters - (now_ms - last);
        if remaining_ms <= 0 {
            0
        } else {
            (remaining_ms as u64).div_ceil(1_000)
        }
    }

    /// Chance the next roll would use, honoring both gates.
    pub fn current_probability(&self, now_ms: i64) -> f64 {
        if self.is_time_constraint_blocking(now_ms) {
            return 0.0;
        }
        self.distance_based_probability()
    }

    /// Chance from accumulated distance alone, ignoring the time gate.
    pub fn distance_based_probability(&self) -> f64 {
        self.gated_probability(self.distance_since_last_encounter)
    }

    /// Like `current_probability`, as if `incremental` more meters had been
    /// walked. Does not change state.
    pub fn probability_after_incremental(&self, incremental: f64, now_ms: i64) -> f64 {
        if self.is_time_constraint_blocking(now_ms) {
            return 0.0;
        }
        self.distance_based_probability_after_incremental(incremental)
    }

    pub fn distance_based_probability_after_incremental(&self, incremental: f64) -> f64 {
        self.gated_probability(self.distance_since_last_encounter + incremental)
    }

    pub fn status(&self, now_ms: i64) -> GeneratorStatus {
        GeneratorStatus {
            distance_since_last_encounter: self.distance_since_last_encounter,
            min_encounter_distance: self.config.min_encounter_distance,
            probability: self.current_probability(now_ms),
            time_since_last_encounter: self.last_encounter_time.map(|last| now_ms - last),
        }
    }

    fn distance_gate_open(&self, distance: f64) -> bool {
        distance >= self.config.min_encounter_distance
    }

    fn gated_probability(&self, distance: f64) -> f64 {
        if !self.distance_gate_open(distance) {
            return 0.0;
        }
        self.probability_for(distance)
    }

    fn probability_for(&self, distance: f64) -> f64 {
        let extra = distance - self.config.min_encounter_distance;
        (extra * self.config.encounter_chance_per_meter).min(1.0)
    }

    /// Encounter timestamps double as keys, so two encounters created within
    /// the same millisecond get consecutive timestamps.
    fn issue_timestamp(&mut self, now_ms: i64) -> i64 {
        let timestamp = match self.last_issued_timestamp {
            Some(last) if now_ms <= last => last.saturating_add(1),
            _ => now_ms,
        };
        self.last_issued_timestamp = Some(timestamp);
        timestamp
    }

    fn mark_encounter(&mut self, now_ms: i64) {
        self.distance_since_last_encounter = 0.0;
        self.last_encounter_time = Some(now_ms);
    }
}
