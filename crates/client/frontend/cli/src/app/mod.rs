//! The terminal application: main menu, then the story.

mod battle;
mod console;
mod progress;
mod scenes;

use anyhow::{Context, Result};
use game_content::{ContentFactory, SaveStore};
use game_core::GameSession;
use thiserror::Error;

use crate::config::CliConfig;
use crate::presentation::terminal::Tui;
use crate::presentation::widgets::menu::{Menu, MenuSignal};
use crate::presentation::{Body, Screen};
use crate::rng;
use console::Console;
use progress::StoryDriver;
use scenes::TerminalScenes;

pub use progress::AUTOSAVE;

/// Raised by the escape menu's Exit option and unwound to `main`.
#[derive(Debug, Error)]
#[error("player quit the game")]
pub struct QuitRequested;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MainChoice {
    NewGame,
    LoadSave,
    Exit,
}

impl MainChoice {
    const ALL: [MainChoice; 3] = [MainChoice::NewGame, MainChoice::LoadSave, MainChoice::Exit];

    fn label(self) -> &'static str {
        match self {
            MainChoice::NewGame => "New Game",
            MainChoice::LoadSave => "Load Save",
            MainChoice::Exit => "Exit",
        }
    }
}

pub struct CliApp<'t> {
    scenes: TerminalScenes<'t>,
    driver: StoryDriver,
}

impl<'t> CliApp<'t> {
    /// Loads and validates the story before the first frame is drawn.
    pub fn new(terminal: &'t mut Tui, config: CliConfig) -> Result<Self> {
        let content = ContentFactory::new(&config.content_dir);
        let story = content.load_validated_story()?;
        let saves = SaveStore::new(&config.save_dir).with_context(|| {
            format!("failed to open save directory {}", config.save_dir.display())
        })?;
        tracing::info!(
            content = %config.content_dir.display(),
            saves = %config.save_dir.display(),
            scenes = story.scenes.len(),
            "content loaded"
        );

        Ok(Self {
            scenes: TerminalScenes::new(
                Console::new(terminal, config.ui, saves.clone()),
                content,
                rng::build_rng(config.seed),
            ),
            driver: StoryDriver::new(story, saves),
        })
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            let console = &mut self.scenes.console;
            console.ensure_size()?;

            let mut menu = Menu::new("Main Menu", MainChoice::ALL.map(MainChoice::label));
            let index = console.choose(Screen::new(None, Body::Title), &mut menu)?;
            match MainChoice::ALL[index] {
                MainChoice::NewGame => {
                    return self.driver.play(GameSession::new(), &mut self.scenes);
                }
                MainChoice::LoadSave => {
                    if let Some(session) = self.load_menu()? {
                        return self.driver.play(session, &mut self.scenes);
                    }
                }
                MainChoice::Exit => return Ok(()),
            }
        }
    }

    /// Picks a save file. `None` sends the player back to the main menu.
    fn load_menu(&mut self) -> Result<Option<GameSession>> {
        let console = &mut self.scenes.console;
        let names = console.saves().list()?;
        if names.is_empty() {
            console.error_screen("No save files found.")?;
            return Ok(None);
        }

        let mut menu = Menu::new("Load Save", names.clone());
        let index = match console.menu(Screen::new(None, Body::Title), &mut menu)? {
            MenuSignal::Chosen(index) => index,
            MenuSignal::Pending | MenuSignal::Cancelled => return Ok(None),
        };
        let name = &names[index];

        match progress::restore(console.saves(), name) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                tracing::warn!(save = %name, error = %err, "failed to load save");
                console.error_screen(&format!("Could not load '{name}': {err:#}"))?;
                Ok(None)
            }
        }
    }
}
