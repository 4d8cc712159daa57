//! Damage rolls.

use crate::env::RngOracle;

/// Roll basic attack damage uniformly from `[attack / 2, attack]`.
///
/// For `attack < 2` the range collapses towards `[0, attack]`; it never errors.
pub fn roll_basic_damage(attack: u32, rng: &mut dyn RngOracle) -> u32 {
    rng.range(attack / 2, attack)
}

/// Apply damage to a health value. Health may go below zero.
pub fn apply_damage(current_health: i32, damage: u32) -> i32 {
    current_health.saturating_sub(i32::try_from(damage).unwrap_or(i32::MAX))
}
