//! Attack resolution.

use crate::combat::damage::{apply_damage, roll_basic_damage};
use crate::combat::{CombatError, Skill};
use crate::env::RngOracle;
use crate::state::{Combatant, EntityId};

/// One resolved hit: who struck whom, for how much, and the line to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackResult {
    pub attacker: String,
    pub target: String,
    pub target_id: EntityId,
    pub damage: u32,
    pub narration: String,
}

/// Resolve a basic attack. Every enemy attacks this way.
pub fn resolve_attack(
    attacker: &Combatant,
    target: &mut Combatant,
    rng: &mut dyn RngOracle,
) -> Result<AttackResult, CombatError> {
    ensure_standing(target)?;

    let damage = roll_basic_damage(attacker.attack(), rng);
    let narration = format!(
        "{} attacked {} for `b{} `ndamage.",
        attacker.name(),
        target.name(),
        damage
    );
    Ok(land_hit(attacker, target, damage, narration))
}

/// Resolve a named skill through the skill table.
pub fn resolve_skill(
    user: &Combatant,
    skill: Skill,
    target: &mut Combatant,
    rng: &mut dyn RngOracle,
) -> Result<AttackResult, CombatError> {
    if !user.knows(skill) {
        return Err(CombatError::SkillNotUnlocked {
            combatant: user.name().to_owned(),
            skill,
        });
    }
    ensure_standing(target)?;

    let roll = (skill.spec().resolve)(user, target, rng);
    Ok(land_hit(user, target, roll.damage, roll.narration))
}

fn ensure_standing(target: &Combatant) -> Result<(), CombatError> {
    if target.is_defeated() {
        return Err(CombatError::TargetDefeated {
            target: target.name().to_owned(),
        });
    }
    Ok(())
}

fn land_hit(
    attacker: &Combatant,
    target: &mut Combatant,
    damage: u32,
    narration: String,
) -> AttackResult {
    let before = target.health();
    target.set_health(apply_damage(before, damage));
    tracing::debug!(
        attacker = attacker.name(),
        target = target.name(),
        damage,
        before,
        after = target.health(),
        "hit resolved"
    );

    AttackResult {
        attacker: attacker.name().to_owned(),
        target: target.name().to_owned(),
        target_id: target.id(),
        damage,
        narration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::LevelStats;

    struct Low;

    impl RngOracle for Low {
        fn next_u32(&mut self) -> u32 {
            0
        }
    }

    fn fighter(id: EntityId, name: &str) -> Combatant {
        let stats = LevelStats {
            health: 30,
            attack: 4,
            turns: 1,
        };
        Combatant::with_stats(id, name, 1, stats, vec![Skill::Punch])
    }

    #[test]
    fn hits_carry_the_target_id_not_just_its_name() {
        let mut player = fighter(EntityId::PLAYER, Combatant::PLAYER_NAME);
        let mut impostor = fighter(EntityId(7), Combatant::PLAYER_NAME);

        let hit = resolve_skill(&player, Skill::Punch, &mut impostor, &mut Low).unwrap();
        assert_eq!(hit.target, "you");
        assert_eq!(hit.target_id, EntityId(7));
        assert!(!hit.target_id.is_player());

        let hit = resolve_attack(&impostor, &mut player, &mut Low).unwrap();
        assert!(hit.target_id.is_player());
        assert_eq!(player.health(), 30 - i32::try_from(hit.damage).unwrap());
    }
}
