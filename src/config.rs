//! Engine configuration.
//!
//! Every field has a default from `core::constants`, so a config file only
//! needs to name the values it overrides.

use crate::core::constants::*;
use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tuning for the distance-driven encounter roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EncounterConfig {
    /// Meters that must accumulate before any roll happens
    pub min_encounter_distance: f64,

    /// Probability added per meter beyond the minimum distance
    pub encounter_chance_per_meter: f64,

    /// Cooldown after an encounter before the next roll, in milliseconds
    pub min_time_between_encounters: i64,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            min_encounter_distance: MIN_ENCOUNTER_DISTANCE_METERS,
            encounter_chance_per_meter: ENCOUNTER_CHANCE_PER_METER,
            min_time_between_encounters: MIN_TIME_BETWEEN_ENCOUNTERS_MS,
        }
    }
}

impl EncounterConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if !self.min_encounter_distance.is_finite() || self.min_encounter_distance < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "minEncounterDistance must be a non-negative number, got {}",
                self.min_encounter_distance
            )));
        }
        if !self.encounter_chance_per_meter.is_finite() || self.encounter_chance_per_meter < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "encounterChancePerMeter must be a non-negative number, got {}",
                self.encounter_chance_per_meter
            )));
        }
        if self.min_time_between_encounters < 0 {
            return Err(EngineError::InvalidConfig(format!(
                "minTimeBetweenEncounters must be non-negative, got {}",
                self.min_time_between_encounters
            )));
        }
        Ok(())
    }

    /// Quick config for tests that should never roll an encounter.
    pub fn never() -> Self {
        Self {
            encounter_chance_per_meter: 0.0,
            ..Default::default()
        }
    }
}

/// Partial override applied by `EncounterGenerator::configure`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EncounterConfigUpdate {
    pub min_encounter_distance: Option<f64>,
    pub encounter_chance_per_meter: Option<f64>,
    pub min_time_between_encounters: Option<i64>,
}

impl EncounterConfig {
    pub fn apply(&mut self, update: EncounterConfigUpdate) {
        if let Some(distance) = update.min_encounter_distance {
            self.min_encounter_distance = distance;
        }
        if let Some(chance) = update.encounter_chance_per_meter {
            self.encounter_chance_per_meter = chance;
        }
        if let Some(ms) = update.min_time_between_encounters {
            self.min_time_between_encounters = ms;
        }
    }
}

/// Tuning for post-victory item drops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LootConfig {
    /// Flat chance that a defeated creature drops an item (0.0 to 1.0)
    pub drop_chance: f64,
}

impl Default for LootConfig {
    fn default() -> Self {
        Self {
            drop_chance: BASE_LOOT_DROP_CHANCE,
        }
    }
}

impl LootConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if !(0.0..=1.0).contains(&self.drop_chance) {
            return Err(EngineError::InvalidConfig(format!(
                "dropChance must be within 0.0..=1.0, got {}",
                self.drop_chance
            )));
        }
        Ok(())
    }
}

/// Top-level configuration handed to a `GameSession`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub encounter: EncounterConfig,
    pub loot: LootConfig,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON config file.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> EngineResult<()> {
        self.encounter.validate()?;
        self.loot.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.encounter.min_encounter_distance, 50.0);
        assert_eq!(config.encounter.encounter_chance_per_meter, 0.001);
        assert_eq!(config.encounter.min_time_between_encounters, 30_000);
        assert_eq!(config.loot.drop_chance, 0.3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            EngineConfig::from_json(r#"{"encounter": {"minEncounterDistance": 10}}"#).unwrap();
        assert_eq!(config.encounter.min_encounter_distance, 10.0);
        assert_eq!(config.encounter.encounter_chance_per_meter, 0.001);
        assert_eq!(config.loot, LootConfig::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_negative_values_rejected() {
        let err = EngineConfig::from_json(r#"{"encounter": {"encounterChancePerMeter": -1}}"#)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));

        let err = EngineConfig::from_json(r#"{"loot": {"dropChance": 1.5}}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_apply_update_only_touches_given_fields() {
        let mut config = EncounterConfig::default();
        config.apply(EncounterConfigUpdate {
            min_time_between_encounters: Some(0),
            ..Default::default()
        });
        assert_eq!(config.min_time_between_encounters, 0);
        assert_eq!(config.min_encounter_distance, 50.0);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = EngineConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }
}
