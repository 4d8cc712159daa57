//! One narration line at a time, revealed by the typewriter.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::presentation::{markup, theme};

pub fn render(frame: &mut Frame, area: Rect, line: &str, revealed: usize, waiting: bool) {
    let [text_area, prompt_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let paragraph = Paragraph::new(markup::render(line, revealed)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, text_area);

    if waiting {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("...", theme::hint()))),
            prompt_area,
        );
    }
}
