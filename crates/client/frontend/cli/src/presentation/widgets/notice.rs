//! Centered one-line notice in standout style, used for errors.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::presentation::{theme, widgets::centered};

pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let width = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let rows = width / area.width.max(1) + 1;
    let spot = centered(area, width, rows);

    let paragraph = Paragraph::new(Line::from(Span::styled(message.to_owned(), theme::notice())))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, spot);
}
