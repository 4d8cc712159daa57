//! Single-line text entry popup, used for save names.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::presentation::{theme, widgets::centered};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSignal {
    Pending,
    Submitted(String),
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct TextInput {
    prompt: String,
    value: String,
    max_len: usize,
}

impl TextInput {
    pub fn new(prompt: impl Into<String>, max_len: usize) -> Self {
        Self {
            prompt: prompt.into(),
            value: String::new(),
            max_len,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Edits the buffer. Enter submits the trimmed value unless it is empty;
    /// Esc cancels.
    pub fn handle(&mut self, key: KeyEvent) -> InputSignal {
        if key.kind == KeyEventKind::Release {
            return InputSignal::Pending;
        }
        match key.code {
            KeyCode::Enter => {
                let trimmed = self.value.trim();
                if trimmed.is_empty() {
                    InputSignal::Pending
                } else {
                    InputSignal::Submitted(trimmed.to_owned())
                }
            }
            KeyCode::Esc => InputSignal::Cancelled,
            KeyCode::Backspace => {
                self.value.pop();
                InputSignal::Pending
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.value.chars().count() < self.max_len && !ch.is_control() {
                    self.value.push(ch);
                }
                InputSignal::Pending
            }
            _ => InputSignal::Pending,
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, input: &TextInput) {
    let width = u16::try_from(input.prompt.chars().count() + input.max_len + 4)
        .unwrap_or(u16::MAX)
        .max(area.width / 2);
    let popup = centered(area, width, 3);

    let line = Line::from(vec![
        Span::styled(input.prompt.clone(), theme::title()),
        Span::raw(input.value.clone()),
        Span::styled("_", theme::hint()),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border()),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
