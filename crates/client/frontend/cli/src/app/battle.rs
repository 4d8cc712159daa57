//! Terminal side of an encounter: menus for the player's choice and
//! narration for every event.

use anyhow::{Context, Result, bail};
use game_core::{BattleChoice, BattleDriver, BattleEvent, Combatant, SaveRecord};

use crate::app::console::Console;
use crate::presentation::widgets::menu::Menu;
use crate::presentation::{Body, Header, Screen};

pub struct BattleScreen<'c, 't> {
    console: &'c mut Console<'t>,
    /// Saved from the escape menu mid-fight; the state the battle began in.
    record: SaveRecord,
    header: Header,
}

impl<'c, 't> BattleScreen<'c, 't> {
    pub fn new(console: &'c mut Console<'t>, player: &Combatant, record: SaveRecord) -> Self {
        Self {
            console,
            record,
            header: Header::from_player(player),
        }
    }
}

impl BattleDriver for BattleScreen<'_, '_> {
    type Error = anyhow::Error;

    fn choose(&mut self, player: &Combatant, roster: &[Combatant]) -> Result<BattleChoice> {
        self.header = Header::from_player(player);
        if player.skills().is_empty() {
            bail!("{player} has no skills to fight with");
        }
        let backdrop = Screen::new(Some(self.header), Body::Battle { roster });

        let mut skills = Menu::new(
            "Choose an action",
            player.skills().iter().map(|skill| skill.name()),
        );
        let index = self.console.choose(backdrop, &mut skills)?;
        let skill = *player.skills().get(index).context("skill index out of range")?;

        let mut targets = Menu::new(
            "Choose an enemy",
            roster.iter().map(|enemy| enemy.to_string()),
        );
        let index = self.console.choose(backdrop, &mut targets)?;
        let target = roster.get(index).context("target index out of range")?.id();

        tracing::debug!(%skill, %target, "battle choice");
        Ok(BattleChoice::new(skill, target))
    }

    fn narrate(&mut self, event: &BattleEvent) -> Result<()> {
        match event {
            BattleEvent::Attack(result) if result.target_id.is_player() => {
                let damage = i32::try_from(result.damage).unwrap_or(i32::MAX);
                self.header.health = self.header.health.saturating_sub(damage);
            }
            BattleEvent::PlayerStatus { health } => self.header.health = *health,
            _ => {}
        }
        self.console
            .story_line(Some(self.header), &event.narration(), Some(&self.record))
    }
}
