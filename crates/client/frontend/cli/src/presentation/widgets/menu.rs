//! Vertical option menu drawn as a centered popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::input::KeyAction;
use crate::presentation::{theme, widgets::centered};
use game_core::CardinalDirection;

/// What a key press did to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSignal {
    Pending,
    Chosen(usize),
    Cancelled,
}

/// Menu state: a prompt, its options and the highlighted index.
///
/// The cursor stops at both ends rather than wrapping.
#[derive(Clone, Debug)]
pub struct Menu {
    prompt: String,
    options: Vec<String>,
    selected: usize,
}

impl Menu {
    pub fn new<I, S>(prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            selected: 0,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn handle(&mut self, action: KeyAction) -> MenuSignal {
        match action {
            KeyAction::Direction(CardinalDirection::Up) => {
                self.selected = self.selected.saturating_sub(1);
                MenuSignal::Pending
            }
            KeyAction::Direction(CardinalDirection::Down) => {
                if self.selected + 1 < self.options.len() {
                    self.selected += 1;
                }
                MenuSignal::Pending
            }
            KeyAction::Confirm if !self.options.is_empty() => MenuSignal::Chosen(self.selected),
            KeyAction::Escape => MenuSignal::Cancelled,
            _ => MenuSignal::Pending,
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, menu: &Menu) {
    let widest = menu
        .options
        .iter()
        .map(|option| option.chars().count())
        .chain(std::iter::once(menu.prompt.chars().count()))
        .max()
        .unwrap_or(0);
    let width = u16::try_from(widest + 6).unwrap_or(u16::MAX);
    let height = u16::try_from(menu.options.len() + 3).unwrap_or(u16::MAX);
    let popup = centered(area, width, height);

    let mut lines = vec![Line::from(Span::styled(menu.prompt.clone(), theme::title()))];
    for (index, option) in menu.options.iter().enumerate() {
        let line = if index == menu.selected {
            Line::from(Span::styled(option.clone(), theme::selected()))
        } else {
            Line::from(option.clone())
        };
        lines.push(line);
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border()),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
