//! Shared colors and styles.
use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Cyan;

pub fn border() -> Style {
    Style::default().fg(ACCENT)
}

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn hint() -> Style {
    Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC)
}

pub fn selected() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn player_glyph() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Health turns red once it drops to a quarter of `max` or below.
pub fn health(current: i32, max: i32) -> Style {
    if i64::from(current) * 4 <= i64::from(max) {
        Style::default().fg(Color::LightRed)
    } else {
        Style::default().fg(Color::Green)
    }
}

pub fn notice() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_turns_red_at_a_quarter() {
        assert_eq!(health(5, 20).fg, Some(Color::LightRed));
        assert_eq!(health(6, 20).fg, Some(Color::Green));
        assert_eq!(health(-3, 20).fg, Some(Color::LightRed));
    }

    #[test]
    fn health_handles_the_largest_pool() {
        assert_eq!(health(i32::MAX, i32::MAX).fg, Some(Color::Green));
        assert_eq!(health(i32::MAX / 4, i32::MAX).fg, Some(Color::LightRed));
    }
}
