//! Individual screen parts, each with a `render` entry point.
pub mod header;
pub mod map_view;
pub mod menu;
pub mod narration;
pub mod notice;
pub mod roster;
pub mod text_input;
pub mod title;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
