//! Rules of the game, free of I/O.
//!
//! `game-core` owns the interactive state machine of the game: tile-map
//! navigation ([`action::step`]) and turn-based battle resolution
//! ([`engine::Battle`]). Content loading, saving and drawing live in other
//! crates and only hand data in and out of the types re-exported here.
pub mod action;
pub mod combat;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use action::{CardinalDirection, Step, TileEffect, step};
pub use combat::{AttackResult, CombatError, Skill};
pub use engine::{
    Battle, BattleChoice, BattleDriver, BattleError, BattleEvent, BattleOutcome, RoundReport,
    RunError, build_roster,
};
pub use env::{MapDimensions, MapError, PcgRng, RngOracle, SemanticTile, TileMap};
pub use error::{ErrorSeverity, GameError};
pub use state::{Combatant, EntityId, GameSession, Position, SaveRecord, SessionError};
pub use stats::LevelStats;
