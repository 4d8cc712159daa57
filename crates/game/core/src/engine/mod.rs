//! Battle engine: resolves one encounter between the player and an enemy
//! roster, synchronously, to a win or a loss.

pub mod battle;
pub mod errors;

pub use battle::{
    Battle, BattleChoice, BattleDriver, BattleEvent, BattleOutcome, RoundReport, build_roster, run,
};
pub use errors::{BattleError, RunError};
