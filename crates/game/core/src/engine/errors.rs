//! Error types for battle resolution.

use crate::combat::CombatError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Contract violations surfaced by the battle engine.
///
/// The presentation layer only offers legal choices, so every variant is a
/// caller bug rather than a user-facing condition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("target {target} is not in the roster")]
    TargetNotInRoster { target: EntityId },

    #[error("combat failed: {0}")]
    Combat(#[from] CombatError),

    #[error("battle already resolved")]
    AlreadyResolved,
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BattleError::Combat(err) => err.severity(),
            BattleError::TargetNotInRoster { .. } | BattleError::AlreadyResolved => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            BattleError::TargetNotInRoster { .. } => "BATTLE_TARGET_NOT_IN_ROSTER",
            BattleError::Combat(err) => err.error_code(),
            BattleError::AlreadyResolved => "BATTLE_ALREADY_RESOLVED",
        }
    }
}

/// Failure of a full encounter run: either the rules or the driver gave up.
#[derive(Debug, thiserror::Error)]
pub enum RunError<E> {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error("battle driver failed: {0}")]
    Driver(E),
}
