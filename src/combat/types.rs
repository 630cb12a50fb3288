use crate::core::constants::{BASIC_ATTACK, HEAVY_ATTACK, STRONG_ATTACK};
use serde::{Deserialize, Serialize};

/// The fixed attack table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackType {
    Basic,
    Strong,
    Heavy,
}

impl AttackType {
    pub const ALL: [AttackType; 3] = [AttackType::Basic, AttackType::Strong, AttackType::Heavy];

    pub fn name(&self) -> &'static str {
        match self {
            AttackType::Basic => "Basic Attack",
            AttackType::Strong => "Strong Attack",
            AttackType::Heavy => "Heavy Attack",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AttackType::Basic => "⚔️",
            AttackType::Strong => "💥",
            AttackType::Heavy => "🔥",
        }
    }

    pub fn multiplier(&self) -> f64 {
        self.table_entry().0
    }

    pub fn cooldown_ms(&self) -> i64 {
        self.table_entry().1
    }

    fn table_entry(&self) -> (f64, i64) {
        match self {
            AttackType::Basic => BASIC_ATTACK,
            AttackType::Strong => STRONG_ATTACK,
            AttackType::Heavy => HEAVY_ATTACK,
        }
    }

    fn index(&self) -> usize {
        match self {
            AttackType::Basic => 0,
            AttackType::Strong => 1,
            AttackType::Heavy => 2,
        }
    }
}

/// Why an attack request did nothing. No state changes on rejection.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum AttackRejection {
    #[error("the encounter is already over")]
    EncounterClosed,
    #[error("the creature is already defeated")]
    CreatureDefeated,
    #[error("the player is already defeated")]
    PlayerDefeated,
    #[error("{} is on cooldown for {remaining_ms}ms", .attack.name())]
    OnCooldown {
        attack: AttackType,
        remaining_ms: i64,
    },
}

/// Cooldown store for one combat screen.
///
/// Bound to an encounter by its key. Rebinding to the same key keeps the
/// cooldowns, so reopening a minimized fight cannot be used to skip them;
/// binding a different key clears them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatSession {
    encounter_key: Option<i64>,
    ready_at_ms: [i64; 3],
}

impl CombatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encounter_key(&self) -> Option<i64> {
        self.encounter_key
    }

    /// Returns true if the binding changed and cooldowns were cleared.
    pub fn bind(&mut self, encounter_key: i64) -> bool {
        if self.encounter_key == Some(encounter_key) {
            return false;
        }
        self.encounter_key = Some(encounter_key);
        self.ready_at_ms = [0; 3];
        true
    }

    pub fn cooldown_remaining(&self, attack: AttackType, now_ms: i64) -> i64 {
        (self.ready_at_ms[attack.index()] - now_ms).max(0)
    }

    pub fn is_ready(&self, attack: AttackType, now_ms: i64) -> bool {
        self.cooldown_remaining(attack, now_ms) == 0
    }

    /// Fraction of the cooldown still to run, 0.0 when ready.
    pub fn cooldown_fraction(&self, attack: AttackType, now_ms: i64) -> f64 {
        let total = attack.cooldown_ms();
        if total <= 0 {
            return 0.0;
        }
        self.cooldown_remaining(attack, now_ms) as f64 / total as f64
    }

    /// Checks the cooldown and, if clear, starts it in the same step.
    pub fn try_begin_attack(&mut self, attack: AttackType, now_ms: i64) -> Result<(), AttackRejection> {
        let remaining_ms = self.cooldown_remaining(attack, now_ms);
        if remaining_ms > 0 {
            return Err(AttackRejection::OnCooldown {
                attack,
                remaining_ms,
            });
        }
        self.ready_at_ms[attack.index()] = now_ms + attack.cooldown_ms();
        Ok(())
    }
}
