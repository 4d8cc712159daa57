//! Scenes played out on the terminal.

use anyhow::Result;
use game_content::{ContentFactory, Interaction};
use game_core::{
    Battle, BattleOutcome, GameSession, RngOracle, RunError, TileEffect, build_roster, engine,
};

use crate::app::battle::BattleScreen;
use crate::app::console::Console;
use crate::app::progress::{ScenePlayer, accept_interaction};
use crate::input::KeyAction;
use crate::presentation::widgets::menu::Menu;
use crate::presentation::{Body, Header, Screen};

pub struct TerminalScenes<'t> {
    pub(super) console: Console<'t>,
    content: ContentFactory,
    rng: Box<dyn RngOracle>,
}

impl<'t> TerminalScenes<'t> {
    pub fn new(console: Console<'t>, content: ContentFactory, rng: Box<dyn RngOracle>) -> Self {
        Self {
            console,
            content,
            rng,
        }
    }

    /// Offers an interaction, plus its reward dialog once accepted.
    /// Returns whether the player accepted.
    fn offer(&mut self, backdrop: Screen<'_>, interaction: &Interaction) -> Result<bool> {
        let mut offer = Menu::new(
            interaction.prompt.clone(),
            [interaction.accept.clone(), interaction.decline.clone()],
        );
        if self.console.choose(backdrop, &mut offer)? != 0 {
            return Ok(false);
        }

        if let Some(reward) = &interaction.reward {
            let mut dialog = Menu::new(reward.prompt.clone(), reward.options.clone());
            let picked = self.console.choose(backdrop, &mut dialog)?;
            let reply = reward
                .options
                .get(picked)
                .and_then(|option| reward.reply_to(option));
            if let Some(reply) = reply {
                let mut ack = Menu::new(reply, ["Continue"]);
                self.console.choose(backdrop, &mut ack)?;
            }
        }
        Ok(true)
    }
}

impl ScenePlayer for TerminalScenes<'_> {
    fn narrate(&mut self, line: &str, session: &GameSession) -> Result<()> {
        let header = Header::from_player(session.player());
        self.console
            .story_line(Some(header), line, Some(&session.to_record()))
    }

    fn explore(
        &mut self,
        map_name: &str,
        interaction: Option<&Interaction>,
        session: &mut GameSession,
    ) -> Result<()> {
        let mut map = self.content.load_map(map_name)?;
        let mut position = map.starting_position();
        tracing::info!(map = map_name, start = %position, "exploring");

        loop {
            let header = Some(Header::from_player(session.player()));
            let screen = Screen::new(
                header,
                Body::Map {
                    map: &map,
                    player: position,
                },
            );
            self.console.draw(&screen)?;

            let direction = match self.console.next_action()? {
                KeyAction::Direction(direction) => direction,
                KeyAction::Escape => {
                    self.console.escape_menu(screen, &session.to_record())?;
                    continue;
                }
                KeyAction::Confirm | KeyAction::None => continue,
            };

            let step = game_core::step(&map, position, direction);
            position = step.position;
            match step.effect {
                TileEffect::Special => {
                    let Some(interaction) = interaction else {
                        continue;
                    };
                    let backdrop = Screen::new(
                        header,
                        Body::Map {
                            map: &map,
                            player: position,
                        },
                    );
                    if self.offer(backdrop, interaction)?
                        && let Some(replacement) = accept_interaction(interaction, session)
                    {
                        map = self.content.load_map(replacement)?;
                    }
                }
                TileEffect::Exit => {
                    tracing::debug!(map = map_name, exit = %position, "left map");
                    return Ok(());
                }
                TileEffect::Blocked | TileEffect::Normal => {}
            }
        }
    }

    fn battle(
        &mut self,
        enemy: &str,
        level: u32,
        count: u32,
        session: &mut GameSession,
    ) -> Result<BattleOutcome> {
        let record = session.to_record();
        let roster = build_roster(enemy, level, count, self.rng.as_mut());
        tracing::info!(enemy, level, count, "encounter scene");

        let mut battle = Battle::new(session.player_mut(), roster);
        let mut driver = BattleScreen::new(&mut self.console, battle.player(), record);
        let outcome = match engine::run(&mut battle, &mut driver, self.rng.as_mut()) {
            Ok(outcome) => outcome,
            Err(RunError::Driver(err)) => return Err(err),
            Err(RunError::Battle(err)) => return Err(err.into()),
        };

        tracing::info!(?outcome, rounds = battle.rounds(), "battle finished");
        Ok(outcome)
    }
}
