//! Experience curve and level-up bookkeeping.

use super::Player;
use crate::core::constants::*;
use log::info;

/// XP needed to advance from `level` to `level + 1`.
pub fn xp_for_next_level(level: u32) -> u64 {
    (XP_CURVE_BASE * f64::powf(level as f64, XP_CURVE_EXPONENT)) as u64
}

/// Level-derived combat stats, before any equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    pub attack: u32,
    pub defense: u32,
    pub max_hp: u32,
}

impl BaseStats {
    pub fn for_level(level: u32) -> Self {
        let gained = level.max(1) - 1;
        Self {
            attack: STARTING_ATTACK + gained * ATTACK_PER_LEVEL,
            defense: STARTING_DEFENSE + gained * DEFENSE_PER_LEVEL,
            max_hp: STARTING_HP + gained * HP_PER_LEVEL,
        }
    }
}

impl Player {
    pub fn experience_for_next_level(&self) -> u64 {
        xp_for_next_level(self.level)
    }

    /// Adds XP and applies every level-up it pays for. Returns levels gained.
    pub fn add_experience(&mut self, amount: u64) -> u32 {
        self.experience = self.experience.saturating_add(amount);

        let mut levels_gained = 0;
        loop {
            let xp_needed = self.experience_for_next_level();
            if self.experience < xp_needed {
                break;
            }
            self.experience -= xp_needed;
            self.apply_level_up();
            levels_gained += 1;
        }

        if levels_gained > 0 {
            info!(
                "{} reached level {} (+{} levels)",
                self.name, self.level, levels_gained
            );
        }
        levels_gained
    }

    /// Debug shortcut: one level without touching experience.
    pub fn force_level_up(&mut self) {
        self.apply_level_up();
        info!("{} forced to level {}", self.name, self.level);
    }

    /// Debug shortcut: back to the level-1 baseline with full HP.
    pub fn reset_level(&mut self) {
        let base = BaseStats::for_level(STARTING_LEVEL);
        self.level = STARTING_LEVEL;
        self.experience = STARTING_EXPERIENCE;
        self.attack = base.attack;
        self.defense = base.defense;
        self.max_hp = base.max_hp;
        self.hp = self.max_hp;
    }

    fn apply_level_up(&mut self) {
        self.level += 1;
        self.attack += ATTACK_PER_LEVEL;
        self.defense += DEFENSE_PER_LEVEL;
        self.max_hp += HP_PER_LEVEL;
        self.hp = (self.hp + HP_PER_LEVEL).min(self.max_hp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Player {
        Player::with_id("p".to_string(), "Tester".to_string())
    }

    #[test]
    fn test_xp_curve_values() {
        assert_eq!(xp_for_next_level(1), 100);
        assert_eq!(xp_for_next_level(2), 282);
        assert_eq!(xp_for_next_level(3), 519);
        assert_eq!(xp_for_next_level(10), 3_162);
    }

    #[test]
    fn test_xp_curve_strictly_increasing() {
        for level in 1..500 {
            assert!(xp_for_next_level(level + 1) > xp_for_next_level(level));
        }
    }

    #[test]
    fn test_base_stats_for_level() {
        assert_eq!(
            BaseStats::for_level(1),
            BaseStats { attack: 20, defense: 5, max_hp: 100 }
        );
        assert_eq!(
            BaseStats::for_level(5),
            BaseStats { attack: 32, defense: 13, max_hp: 140 }
        );
        assert_eq!(BaseStats::for_level(0), BaseStats::for_level(1));
    }

    #[test]
    fn test_add_experience_below_threshold() {
        let mut player = fresh();
        assert_eq!(player.add_experience(99), 0);
        assert_eq!(player.level, 1);
        assert_eq!(player.experience, 99);
    }

    #[test]
    fn test_add_experience_single_level() {
        let mut player = fresh();
        player.take_damage(50);
        assert_eq!(player.add_experience(150), 1);
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 50);
        assert_eq!(player.attack, 23);
        assert_eq!(player.defense, 7);
        assert_eq!(player.max_hp, 110);
        assert_eq!(player.hp, 60);
    }

    #[test]
    fn test_add_experience_multiple_levels() {
        let mut player = fresh();
        // 100 + 282 + 519 = 901 reaches level 4
        assert_eq!(player.add_experience(901), 3);
        assert_eq!(player.level, 4);
        assert_eq!(player.experience, 0);
        assert_eq!(player.attack, 29);
        assert_eq!(player.max_hp, 130);
        assert_eq!(player.hp, 130);
    }

    #[test]
    fn test_level_up_hp_clamped() {
        let mut player = fresh();
        player.add_experience(100);
        assert_eq!(player.hp, player.max_hp);
    }

    #[test]
    fn test_force_level_up_keeps_experience() {
        let mut player = fresh();
        player.add_experience(40);
        player.force_level_up();
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 40);
        assert_eq!(player.attack, 23);
    }

    #[test]
    fn test_reset_level() {
        let mut player = fresh();
        player.add_experience(5_000);
        player.take_damage(30);
        player.reset_level();
        assert_eq!(player.level, 1);
        assert_eq!(player.experience, 0);
        assert_eq!(BaseStats::for_level(1).attack, player.attack);
        assert_eq!(player.hp, 100);
        assert_eq!(player.max_hp, 100);
    }
}
