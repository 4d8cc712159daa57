//! Scene progression: advance, autosave, and retry after a lost battle.
//!
//! Each scene runs to completion, then the session advances and is written to
//! the `autosave` slot. A lost battle replays the scene from the state it
//! began in. That is the autosave when the last write to it landed, and the
//! in-memory checkpoint taken at scene start otherwise.

use anyhow::Result;
use game_content::{Interaction, SaveStore, Scene, Story};
use game_core::{BattleOutcome, GameSession, SaveRecord};

pub const AUTOSAVE: &str = "autosave";
pub const DEFEAT_LINE: &str = "You have been defeated!";

/// Everything a scene asks of the player.
pub trait ScenePlayer {
    fn narrate(&mut self, line: &str, session: &GameSession) -> Result<()>;

    /// Free movement on `map` until the player steps on an exit tile.
    fn explore(
        &mut self,
        map: &str,
        interaction: Option<&Interaction>,
        session: &mut GameSession,
    ) -> Result<()>;

    fn battle(
        &mut self,
        enemy: &str,
        level: u32,
        count: u32,
        session: &mut GameSession,
    ) -> Result<BattleOutcome>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SceneEnd {
    Completed,
    Defeated,
}

pub struct StoryDriver {
    story: Story,
    saves: SaveStore,
}

impl StoryDriver {
    pub fn new(story: Story, saves: SaveStore) -> Self {
        Self { story, saves }
    }

    /// Plays from the session's current progress through the ending.
    pub fn play(&self, mut session: GameSession, player: &mut impl ScenePlayer) -> Result<()> {
        tracing::info!(progress = session.story_progress(), "story started");
        let mut autosave_current = self.autosave(&session);

        loop {
            let Some(scene) = self.story.scene(session.story_progress()) else {
                player.narrate(&self.story.ending, &session)?;
                tracing::info!("story finished");
                return Ok(());
            };

            let checkpoint = session.to_record();
            match run_scene(scene, &mut session, player)? {
                SceneEnd::Completed => {
                    session.advance();
                    autosave_current = self.autosave(&session);
                }
                SceneEnd::Defeated => {
                    session = self.reload_after_defeat(&checkpoint, autosave_current)?;
                }
            }
        }
    }

    /// Returns whether the slot now holds `session`.
    fn autosave(&self, session: &GameSession) -> bool {
        match self.saves.save(AUTOSAVE, &session.to_record()) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "autosave failed");
                false
            }
        }
    }

    fn reload_after_defeat(
        &self,
        checkpoint: &SaveRecord,
        autosave_current: bool,
    ) -> Result<GameSession> {
        if autosave_current {
            match restore(&self.saves, AUTOSAVE) {
                Ok(session) => return Ok(session),
                Err(err) => {
                    tracing::warn!(error = %err, "autosave unreadable, retrying from scene start");
                }
            }
        } else {
            tracing::warn!("autosave is stale, retrying from scene start");
        }
        Ok(GameSession::from_record(checkpoint)?)
    }
}

/// Loads a named save into a fresh session.
pub fn restore(saves: &SaveStore, name: &str) -> Result<GameSession> {
    let record = saves.load(name)?;
    let session = GameSession::from_record(&record)?;
    tracing::info!(save = name, progress = session.story_progress(), "save loaded");
    Ok(session)
}

/// Applies an accepted interaction's skill grant. Returns the map to swap in.
pub fn accept_interaction<'i>(
    interaction: &'i Interaction,
    session: &mut GameSession,
) -> Option<&'i str> {
    if let Some(skill) = interaction.grant_skill {
        session.unlock_skill(skill);
    }
    interaction.replace_map.as_deref()
}

fn run_scene(
    scene: &Scene,
    session: &mut GameSession,
    player: &mut impl ScenePlayer,
) -> Result<SceneEnd> {
    match scene {
        Scene::Narration { lines } => {
            for line in lines {
                player.narrate(line, session)?;
            }
            Ok(SceneEnd::Completed)
        }
        Scene::Explore { map, interaction } => {
            player.explore(map, interaction.as_ref(), session)?;
            Ok(SceneEnd::Completed)
        }
        Scene::Battle {
            enemy,
            level,
            count,
        } => match player.battle(enemy, *level, *count, session)? {
            BattleOutcome::Victory => Ok(SceneEnd::Completed),
            BattleOutcome::Defeat => {
                player.narrate(DEFEAT_LINE, session)?;
                Ok(SceneEnd::Defeated)
            }
        },
    }
}
