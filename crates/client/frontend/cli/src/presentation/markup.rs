//! Inline style tags in narration text.
//!
//! A backtick followed by one tag character switches the style for the rest
//! of the line until the next tag:
//!
//! | tag      | style     |
//! |----------|-----------|
//! | `` `b `` | bold      |
//! | `` `i `` | italic    |
//! | `` `u `` | underline |
//! | `` `n `` | normal    |
//!
//! Tags replace the current style rather than stacking. An unknown tag falls
//! back to normal.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const TAG_MARK: char = '`';

/// A run of text drawn with one style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledRun {
    pub style: Style,
    pub text: String,
}

/// Splits `raw` into styled runs, dropping the tags themselves.
pub fn parse(raw: &str) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    let mut style = Style::default();
    let mut text = String::new();
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != TAG_MARK {
            text.push(ch);
            continue;
        }
        // A trailing backtick has no tag; drop it.
        let Some(tag) = chars.next() else { break };
        if !text.is_empty() {
            runs.push(StyledRun {
                style,
                text: std::mem::take(&mut text),
            });
        }
        style = style_for(tag);
    }

    if !text.is_empty() {
        runs.push(StyledRun { style, text });
    }
    runs
}

/// Number of characters a line shows once its tags are removed.
pub fn visible_len(raw: &str) -> usize {
    parse(raw).iter().map(|run| run.text.chars().count()).sum()
}

/// Builds a ratatui line showing the first `revealed` visible characters.
pub fn render(raw: &str, revealed: usize) -> Line<'static> {
    let mut remaining = revealed;
    let mut spans = Vec::new();

    for run in parse(raw) {
        if remaining == 0 {
            break;
        }
        let count = run.text.chars().count();
        if count <= remaining {
            remaining -= count;
            spans.push(Span::styled(run.text, run.style));
        } else {
            let shown: String = run.text.chars().take(remaining).collect();
            spans.push(Span::styled(shown, run.style));
            remaining = 0;
        }
    }

    Line::from(spans)
}

fn style_for(tag: char) -> Style {
    match tag {
        'b' => Style::default().add_modifier(Modifier::BOLD),
        'i' => Style::default().add_modifier(Modifier::ITALIC),
        'u' => Style::default().add_modifier(Modifier::UNDERLINED),
        'n' => Style::default(),
        other => {
            tracing::warn!(tag = %other, "unknown style tag");
            Style::default()
        }
    }
}
