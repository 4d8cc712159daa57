//! Blocking terminal I/O shared by every screen.
//!
//! The console owns the terminal and the save store so that any screen,
//! battle narration included, can open the escape menu and write a save.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use game_content::SaveStore;
use game_core::SaveRecord;

use crate::app::QuitRequested;
use crate::config::UiConfig;
use crate::input::{self, KeyAction};
use crate::presentation::terminal::Tui;
use crate::presentation::widgets::menu::{Menu, MenuSignal};
use crate::presentation::widgets::text_input::{InputSignal, TextInput};
use crate::presentation::{Body, Header, Overlay, Screen, markup, ui};

const BLINK_INTERVAL: Duration = Duration::from_millis(700);
const MAX_SAVE_NAME: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EscapeChoice {
    Resume,
    Save,
    Exit,
}

impl EscapeChoice {
    const ALL: [EscapeChoice; 3] = [EscapeChoice::Resume, EscapeChoice::Save, EscapeChoice::Exit];

    fn label(self) -> &'static str {
        match self {
            EscapeChoice::Resume => "Resume",
            EscapeChoice::Save => "Save",
            EscapeChoice::Exit => "Exit",
        }
    }
}

pub struct Console<'t> {
    terminal: &'t mut Tui,
    ui: UiConfig,
    saves: SaveStore,
}

impl<'t> Console<'t> {
    pub fn new(terminal: &'t mut Tui, ui: UiConfig, saves: SaveStore) -> Self {
        Self {
            terminal,
            ui,
            saves,
        }
    }

    pub fn saves(&self) -> &SaveStore {
        &self.saves
    }

    pub fn draw(&mut self, screen: &Screen) -> Result<()> {
        self.terminal.draw(|frame| ui::render(frame, screen))?;
        Ok(())
    }

    /// Blocks until a key press. Resizes yield `KeyAction::None` so the
    /// caller redraws.
    pub fn next_action(&mut self) -> Result<KeyAction> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    return Ok(input::handle_key(key));
                }
                Event::Resize(..) => return Ok(KeyAction::None),
                _ => {}
            }
        }
    }

    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    fn wait_for_key(&mut self) -> Result<()> {
        while self.next_key()?.is_none() {}
        Ok(())
    }

    /// Runs `menu` over `backdrop` until an option is chosen or it is
    /// cancelled.
    pub fn menu(&mut self, backdrop: Screen<'_>, menu: &mut Menu) -> Result<MenuSignal> {
        loop {
            self.draw(&backdrop.with_overlay(Overlay::Menu(&*menu)))?;
            match menu.handle(self.next_action()?) {
                MenuSignal::Pending => {}
                signal => return Ok(signal),
            }
        }
    }

    /// Like [`Console::menu`] but cannot be dismissed.
    pub fn choose(&mut self, backdrop: Screen<'_>, menu: &mut Menu) -> Result<usize> {
        loop {
            if let MenuSignal::Chosen(index) = self.menu(backdrop, menu)? {
                return Ok(index);
            }
        }
    }

    pub fn text_input(
        &mut self,
        backdrop: Screen<'_>,
        input: &mut TextInput,
    ) -> Result<Option<String>> {
        loop {
            self.draw(&backdrop.with_overlay(Overlay::Input(&*input)))?;
            let Some(key) = self.next_key()? else {
                continue;
            };
            match input.handle(key) {
                InputSignal::Pending => {}
                InputSignal::Submitted(value) => return Ok(Some(value)),
                InputSignal::Cancelled => return Ok(None),
            }
        }
    }

    /// Shows one narration line with the typewriter effect, then waits for a
    /// key. Any key during the reveal skips to the full line.
    ///
    /// With a save record, `q`/Esc opens the escape menu instead of
    /// advancing.
    pub fn story_line(
        &mut self,
        header: Option<Header>,
        line: &str,
        save: Option<&SaveRecord>,
    ) -> Result<()> {
        let screen = |revealed, waiting| {
            Screen::new(
                header,
                Body::Narration {
                    line,
                    revealed,
                    waiting,
                },
            )
        };

        let total = markup::visible_len(line);
        let mut revealed = 0;
        while revealed < total {
            revealed += 1;
            self.draw(&screen(revealed, false))?;
            if event::poll(self.ui.text_delay)? && self.next_key()?.is_some() {
                revealed = total;
            }
        }

        let mut dots = true;
        loop {
            self.draw(&screen(total, dots))?;
            if !event::poll(BLINK_INTERVAL)? {
                dots = !dots;
                continue;
            }
            let Some(key) = self.next_key()? else {
                continue;
            };
            match (input::handle_key(key), save) {
                (KeyAction::Escape, Some(record)) => {
                    self.escape_menu(screen(total, false), record)?;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Resume, save under a typed name, or quit the game.
    ///
    /// Exit surfaces as a [`QuitRequested`] error.
    pub fn escape_menu(&mut self, backdrop: Screen<'_>, record: &SaveRecord) -> Result<()> {
        loop {
            let mut menu = Menu::new("Escape Menu", EscapeChoice::ALL.map(EscapeChoice::label));
            let choice = match self.menu(backdrop, &mut menu)? {
                MenuSignal::Chosen(index) => EscapeChoice::ALL[index],
                MenuSignal::Pending | MenuSignal::Cancelled => EscapeChoice::Resume,
            };

            match choice {
                EscapeChoice::Resume => return Ok(()),
                EscapeChoice::Save => self.save_prompt(backdrop, record)?,
                EscapeChoice::Exit => {
                    tracing::info!("exit requested from escape menu");
                    return Err(QuitRequested.into());
                }
            }
        }
    }

    fn save_prompt(&mut self, backdrop: Screen<'_>, record: &SaveRecord) -> Result<()> {
        let mut input = TextInput::new("Save Name: ", MAX_SAVE_NAME);
        let Some(name) = self.text_input(backdrop, &mut input)? else {
            return Ok(());
        };

        if let Err(err) = self.saves.save(&name, record) {
            tracing::warn!(save = %name, error = %err, "save failed");
            self.error_screen(&format!("Could not save '{name}': {err}"))?;
        }
        Ok(())
    }

    /// Full-screen notice dismissed by any key.
    pub fn error_screen(&mut self, message: &str) -> Result<()> {
        self.draw(&Screen::new(None, Body::Notice(message)))?;
        self.wait_for_key()
    }

    /// Blocks with a notice until the terminal is at least the configured
    /// size.
    pub fn ensure_size(&mut self) -> Result<()> {
        let notice = format!(
            "Please resize your terminal to at least {} lines and {} columns.",
            self.ui.min_rows, self.ui.min_columns
        );
        loop {
            let (columns, rows) = crossterm::terminal::size()?;
            if columns >= self.ui.min_columns && rows >= self.ui.min_rows {
                return Ok(());
            }
            self.draw(&Screen::new(None, Body::Notice(&notice)))?;
            event::read()?;
        }
    }
}
