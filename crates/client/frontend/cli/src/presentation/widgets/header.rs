//! Player status bar along the top of the screen.

use game_core::{Combatant, LevelStats};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

/// Snapshot of the numbers the status bar shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub level: u32,
    pub health: i32,
    pub max_health: i32,
    pub attack: u32,
}

impl Header {
    pub fn from_player(player: &Combatant) -> Self {
        Self {
            level: player.level(),
            health: player.health(),
            max_health: LevelStats::for_player(player.level()).health,
            attack: player.attack(),
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, header: &Header) {
    let line = Line::from(vec![
        Span::raw(format!(" Lvl {}  ", header.level)),
        Span::raw("HP "),
        Span::styled(
            format!("{}/{}", header.health, header.max_health),
            theme::health(header.health, header.max_health),
        ),
        Span::raw(format!("  ATK {}", header.attack)),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border()),
    );
    frame.render_widget(paragraph, area);
}
