//! The one live game session: story progress plus the player.

use crate::combat::{CombatError, Skill};
use crate::error::{ErrorSeverity, GameError};
use crate::state::Combatant;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("save record has invalid skill list: {0}")]
    InvalidSkill(#[from] CombatError),

    #[error("save record has player level {level}, expected 1..={max}", max = GameSession::MAX_LEVEL)]
    LevelOutOfRange { level: u32 },
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            SessionError::InvalidSkill(_) => "SESSION_INVALID_SKILL",
            SessionError::LevelOutOfRange { .. } => "SESSION_LEVEL_OUT_OF_RANGE",
        }
    }
}

/// Flat persisted form of a session.
///
/// Only the level is stored for the player; health is rederived on load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveRecord {
    pub story_progress: u32,
    pub player_level: u32,
    pub skills: Vec<String>,
}

/// Story progress marker and the player, owned by the main interaction loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    story_progress: u32,
    player: Combatant,
}

impl GameSession {
    pub const STARTING_LEVEL: u32 = 1;
    /// Highest level a save record may carry.
    pub const MAX_LEVEL: u32 = 999;

    /// Fresh session: progress 0, level-1 player who only knows Punch.
    pub fn new() -> Self {
        Self {
            story_progress: 0,
            player: Combatant::player(Self::STARTING_LEVEL, vec![Skill::Punch]),
        }
    }

    pub fn from_record(record: &SaveRecord) -> Result<Self, SessionError> {
        let level = record.player_level;
        if !(Self::STARTING_LEVEL..=Self::MAX_LEVEL).contains(&level) {
            return Err(SessionError::LevelOutOfRange { level });
        }

        let skills = record
            .skills
            .iter()
            .map(|name| Skill::from_name(name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            story_progress: record.story_progress,
            player: Combatant::player(level, skills),
        })
    }

    pub fn to_record(&self) -> SaveRecord {
        SaveRecord {
            story_progress: self.story_progress,
            player_level: self.player.level(),
            skills: self
                .player
                .skills()
                .iter()
                .map(|skill| skill.name().to_owned())
                .collect(),
        }
    }

    pub fn story_progress(&self) -> u32 {
        self.story_progress
    }

    /// Moves the story on by one scene.
    pub fn advance(&mut self) {
        self.story_progress += 1;
        tracing::debug!(progress = self.story_progress, "story advanced");
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Combatant {
        &mut self.player
    }

    /// Adds a skill to the player's set. Returns false if it was already known.
    pub fn unlock_skill(&mut self, skill: Skill) -> bool {
        let learned = self.player.learn(skill);
        if learned {
            tracing::info!(skill = skill.name(), "skill unlocked");
        }
        learned
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
