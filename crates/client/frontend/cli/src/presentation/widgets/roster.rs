//! Enemy list shown while picking a battle action.

use game_core::Combatant;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, roster: &[Combatant]) {
    let lines: Vec<Line> = roster
        .iter()
        .map(|enemy| {
            Line::from(vec![
                Span::raw(format!("{enemy}  ")),
                Span::styled(format!("HP {}", enemy.health()), theme::hint()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border())
            .title(" Enemies ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(paragraph, area);
}
