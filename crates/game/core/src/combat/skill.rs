//! Named player skills and their dispatch table.

use std::str::FromStr;

use crate::combat::CombatError;
use crate::env::RngOracle;
use crate::state::Combatant;

/// Skills a player can learn. Display names double as save-file identifiers.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Skill {
    #[strum(serialize = "Punch")]
    Punch,
    #[strum(serialize = "Sword Strike")]
    SwordStrike,
}

impl Skill {
    /// Parses a display name, failing loudly on names no skill carries.
    pub fn from_name(name: &str) -> Result<Self, CombatError> {
        Skill::from_str(name).map_err(|_| CombatError::UnknownSkill(name.to_owned()))
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Looks up the dispatch entry for this skill.
    pub fn spec(self) -> &'static SkillSpec {
        // Entries are declared in enum order.
        &SKILL_TABLE[self as usize]
    }
}

/// Damage and narration produced by one skill use, before it is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillRoll {
    pub damage: u32,
    pub narration: String,
}

/// One row of the skill dispatch table.
#[derive(Debug)]
pub struct SkillSpec {
    pub skill: Skill,
    pub resolve: fn(&Combatant, &Combatant, &mut dyn RngOracle) -> SkillRoll,
}

static SKILL_TABLE: [SkillSpec; 2] = [
    SkillSpec {
        skill: Skill::Punch,
        resolve: punch,
    },
    SkillSpec {
        skill: Skill::SwordStrike,
        resolve: sword_strike,
    },
];

/// atk + U(0, 3)
fn punch(user: &Combatant, target: &Combatant, rng: &mut dyn RngOracle) -> SkillRoll {
    let damage = user.attack().saturating_add(rng.range(0, 3));
    SkillRoll {
        damage,
        narration: format!("You punched {} for {} damage.", target.name(), damage),
    }
}

/// 2·atk + U(0, 3)
fn sword_strike(user: &Combatant, target: &Combatant, rng: &mut dyn RngOracle) -> SkillRoll {
    let damage = user
        .attack()
        .saturating_mul(2)
        .saturating_add(rng.range(0, 3));
    SkillRoll {
        damage,
        narration: format!(
            "You attacked {} with your sword for `b{} `ndamage.",
            target.name(),
            damage
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn table_is_in_enum_order() {
        for skill in Skill::iter() {
            assert_eq!(skill.spec().skill, skill);
        }
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(Skill::from_name("Punch").unwrap(), Skill::Punch);
        assert_eq!(Skill::from_name("Sword Strike").unwrap(), Skill::SwordStrike);
        assert_eq!(Skill::SwordStrike.name(), "Sword Strike");
        assert_eq!(Skill::Punch.to_string(), "Punch");
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            Skill::from_name("Fireball"),
            Err(CombatError::UnknownSkill("Fireball".into()))
        );
        assert!(Skill::from_name("punch").is_err());
    }
}
