//! Title banner behind the main menu.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let [banner, _] = Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);

    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("ISEKAI", theme::title())),
        Line::from(Span::styled("A story in a cave", theme::hint())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border()),
    );

    frame.render_widget(title, banner);
}
