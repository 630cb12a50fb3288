use serde::{Deserialize, Serialize};

/// Ordinal tier shared by creatures and items.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Multiplier applied to creature experience rewards.
    pub fn reward_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.5,
            Rarity::Rare => 2.0,
            Rarity::Epic => 3.0,
            Rarity::Legendary => 5.0,
        }
    }

    /// Relative weight of this tier in the creature pool.
    ///
    /// Encounter selection is uniform over templates, so these weights are
    /// informational only.
    pub fn creature_weight(&self) -> u32 {
        match self {
            Rarity::Common => 50,
            Rarity::Uncommon => 30,
            Rarity::Rare => 15,
            Rarity::Epic => 4,
            Rarity::Legendary => 1,
        }
    }
}
