//! Combat resolution system.
//!
//! Resolution only ever mutates the declared target's health. Everything else
//! about a combatant is fixed when it is constructed.
//!
//! # Core Functions
//!
//! - `resolve_attack`: basic attack, damage in `[atk / 2, atk]`
//! - `resolve_skill`: named player skill dispatched through the skill table
//! - `apply_damage`: health reduction (may go negative)

pub mod damage;
pub mod result;
pub mod skill;

pub use damage::{apply_damage, roll_basic_damage};
pub use result::{AttackResult, resolve_attack, resolve_skill};
pub use skill::{Skill, SkillRoll, SkillSpec};

use crate::error::{ErrorSeverity, GameError};

/// Contract violations raised while resolving an attack.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("unknown skill '{0}'")]
    UnknownSkill(String),

    #[error("{combatant} has not unlocked {skill}")]
    SkillNotUnlocked { combatant: String, skill: Skill },

    #[error("{target} is already defeated")]
    TargetDefeated { target: String },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Names come from save files and story scripts.
            CombatError::UnknownSkill(_) => ErrorSeverity::Validation,
            CombatError::SkillNotUnlocked { .. } | CombatError::TargetDefeated { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CombatError::UnknownSkill(_) => "COMBAT_UNKNOWN_SKILL",
            CombatError::SkillNotUnlocked { .. } => "COMBAT_SKILL_NOT_UNLOCKED",
            CombatError::TargetDefeated { .. } => "COMBAT_TARGET_DEFEATED",
        }
    }
}
