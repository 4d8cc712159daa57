//! Mutable game state: battle participants and the session that owns the
//! player.

mod combatant;
mod common;
mod session;

pub use combatant::Combatant;
pub use common::{EntityId, Position};
pub use session::{GameSession, SaveRecord, SessionError};
