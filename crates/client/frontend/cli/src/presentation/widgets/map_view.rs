//! Exploration view: the display grid with the player drawn on top.

use game_core::{Position, TileMap};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::{theme, widgets::centered};

pub const PLAYER_GLYPH: char = '@';

/// One ratatui line per map row, with the player glyph at `player`.
pub fn lines(map: &TileMap, player: Position) -> Vec<Line<'static>> {
    map.display_rows()
        .enumerate()
        .map(|(row, text)| {
            if row != player.row {
                return Line::from(text);
            }
            let before: String = text.chars().take(player.col).collect();
            let after: String = text.chars().skip(player.col + 1).collect();
            Line::from(vec![
                Span::raw(before),
                Span::styled(PLAYER_GLYPH.to_string(), theme::player_glyph()),
                Span::raw(after),
            ])
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, map: &TileMap, player: Position) {
    let dims = map.dimensions();
    let width = u16::try_from(dims.cols).unwrap_or(u16::MAX);
    let height = u16::try_from(dims.rows).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines(map, player)), centered(area, width, height));
}
