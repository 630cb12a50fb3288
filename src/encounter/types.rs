use crate::core::constants::{FALLBACK_LATITUDE, FALLBACK_LONGITUDE};
use crate::creatures::{create_creature_from_template, random_template, Creature};
use crate::error::{EngineError, EngineResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A validated WGS-84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawLocation> for Location {
    type Error = EngineError;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Location::new(raw.latitude, raw.longitude)
    }
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> EngineResult<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(EngineError::InvalidLocation {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Stand-in position for debug encounters before the first GPS fix.
    pub fn fallback() -> Self {
        Self {
            latitude: FALLBACK_LATITUDE,
            longitude: FALLBACK_LONGITUDE,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// One tick from the location collaborator. `incremental` is already filtered
/// for implausible jumps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceUpdate {
    pub incremental: f64,
    pub total: f64,
    pub location: Location,
}

impl DistanceUpdate {
    pub fn new(incremental: f64, total: f64, location: Location) -> Self {
        Self {
            incremental,
            total,
            location,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncounterStatus {
    Active,
    Caught,
    Defeated,
    Fled,
}

impl EncounterStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EncounterStatus::Active)
    }
}

/// A single meeting with a wild creature. The creature is owned here and
/// dropped with the encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    pub creature: Creature,
    pub location: Location,
    /// Creation time in Unix ms, doubles as the encounter's identity key
    pub timestamp: i64,
    pub player_level: u32,
    status: EncounterStatus,
}

impl Encounter {
    pub fn new(creature: Creature, location: Location, player_level: u32, timestamp: i64) -> Self {
        Self {
            creature,
            location,
            timestamp,
            player_level,
            status: EncounterStatus::Active,
        }
    }

    /// Picks a template uniformly and levels it around `player_level`.
    pub fn create_random(
        location: Location,
        player_level: u32,
        timestamp: i64,
        rng: &mut impl Rng,
    ) -> Self {
        let template = random_template(rng);
        let creature = create_creature_from_template(template, player_level, rng);
        Self::new(creature, location, player_level, timestamp)
    }

    pub fn key(&self) -> i64 {
        self.timestamp
    }

    pub fn status(&self) -> EncounterStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == EncounterStatus::Active
    }

    pub fn catch(&mut self) -> bool {
        self.close(EncounterStatus::Caught)
    }

    pub fn defeat(&mut self) -> bool {
        self.close(EncounterStatus::Defeated)
    }

    pub fn flee(&mut self) -> bool {
        self.close(EncounterStatus::Fled)
    }

    /// One-way transition out of `Active`. Returns false if already closed.
    fn close(&mut self, status: EncounterStatus) -> bool {
        if !self.is_active() {
            return false;
        }
        self.status = status;
        true
    }
}
