//! Level-derived combat stats.
//!
//! Level is the only stored stat. Health, attack and turn count are computed
//! from it once, when a combatant is constructed.

use crate::env::RngOracle;

/// Stats derived from a level, fixed for the lifetime of a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelStats {
    pub health: i32,
    pub attack: u32,
    pub turns: u32,
}

impl LevelStats {
    /// Player formula
    ///
    /// ```text
    /// health = 6L + 15
    /// attack = 3L
    /// turns  = L / 5 + 1
    /// ```
    pub fn for_player(level: u32) -> Self {
        let level = level.max(1);
        Self {
            health: saturating_i32(6 * u64::from(level) + 15),
            attack: level.saturating_mul(3),
            turns: level / 5 + 1,
        }
    }

    /// Enemy formula, `r` drawn independently from {1, 2} for health and attack.
    ///
    /// ```text
    /// health = 5L + r·L
    /// attack = L + r·L
    /// turns  = L / 8 + 1
    /// ```
    pub fn for_enemy(level: u32, rng: &mut dyn RngOracle) -> Self {
        let level = level.max(1);
        let health_roll = rng.range(1, 2);
        let attack_roll = rng.range(1, 2);
        Self {
            health: saturating_i32(u64::from(level) * (5 + u64::from(health_roll))),
            attack: level.saturating_mul(1 + attack_roll),
            turns: level / 8 + 1,
        }
    }
}

fn saturating_i32(value: u64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn player_stats_follow_formula(level in 1u32..500) {
            let stats = LevelStats::for_player(level);
            prop_assert_eq!(stats.health, (6 * level + 15) as i32);
            prop_assert_eq!(stats.attack, 3 * level);
            prop_assert_eq!(stats.turns, level / 5 + 1);
        }

        #[test]
        fn enemy_stats_follow_formula(level in 1u32..500, seed in any::<u64>()) {
            let mut rng = PcgRng::new(seed);
            let stats = LevelStats::for_enemy(level, &mut rng);
            let health = stats.health as u32;
            prop_assert!(health == 6 * level || health == 7 * level);
            prop_assert!(stats.attack == 2 * level || stats.attack == 3 * level);
            prop_assert_eq!(stats.turns, level / 8 + 1);
        }
    }

    #[test]
    fn level_one_player() {
        assert_eq!(
            LevelStats::for_player(1),
            LevelStats {
                health: 21,
                attack: 3,
                turns: 1
            }
        );
    }

    #[test]
    fn turn_counts_step_at_level_thresholds() {
        assert_eq!(LevelStats::for_player(4).turns, 1);
        assert_eq!(LevelStats::for_player(5).turns, 2);
        let mut rng = PcgRng::new(3);
        assert_eq!(LevelStats::for_enemy(7, &mut rng).turns, 1);
        assert_eq!(LevelStats::for_enemy(8, &mut rng).turns, 2);
    }
}
