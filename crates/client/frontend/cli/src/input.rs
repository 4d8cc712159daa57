//! Keyboard-to-command mapping.
//!
//! Every screen reads keys through [`KeyAction`], so the bindings live in one
//! place and the rest of the client never matches on `crossterm` codes.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use game_core::CardinalDirection;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Arrow keys, `hjkl` or `wasd`. Menus use up/down for the cursor.
    Direction(CardinalDirection),
    /// Enter or space.
    Confirm,
    /// `q` or Esc: opens the escape menu.
    Escape,
    /// Key has no binding.
    None,
}

/// Converts a raw key event into a command.
pub fn handle_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Up => KeyAction::Direction(CardinalDirection::Up),
        KeyCode::Down => KeyAction::Direction(CardinalDirection::Down),
        KeyCode::Left => KeyAction::Direction(CardinalDirection::Left),
        KeyCode::Right => KeyAction::Direction(CardinalDirection::Right),
        KeyCode::Enter => KeyAction::Confirm,
        KeyCode::Esc => KeyAction::Escape,
        KeyCode::Char(ch) => handle_char(ch),
        _ => KeyAction::None,
    }
}

fn handle_char(raw: char) -> KeyAction {
    match raw.to_ascii_lowercase() {
        'k' | 'w' => KeyAction::Direction(CardinalDirection::Up),
        'j' | 's' => KeyAction::Direction(CardinalDirection::Down),
        'h' | 'a' => KeyAction::Direction(CardinalDirection::Left),
        'l' | 'd' => KeyAction::Direction(CardinalDirection::Right),
        ' ' => KeyAction::Confirm,
        'q' => KeyAction::Escape,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn movement_keys_share_directions() {
        let up = KeyAction::Direction(CardinalDirection::Up);
        assert_eq!(handle_key(press(KeyCode::Up)), up);
        assert_eq!(handle_key(press(KeyCode::Char('k'))), up);
        assert_eq!(handle_key(press(KeyCode::Char('w'))), up);

        let left = KeyAction::Direction(CardinalDirection::Left);
        assert_eq!(handle_key(press(KeyCode::Left)), left);
        assert_eq!(handle_key(press(KeyCode::Char('h'))), left);
        assert_eq!(handle_key(press(KeyCode::Char('A'))), left);

        assert_eq!(
            handle_key(press(KeyCode::Char('j'))),
            KeyAction::Direction(CardinalDirection::Down)
        );
        assert_eq!(
            handle_key(press(KeyCode::Char('d'))),
            KeyAction::Direction(CardinalDirection::Right)
        );
    }

    #[test]
    fn confirm_and_escape() {
        assert_eq!(handle_key(press(KeyCode::Enter)), KeyAction::Confirm);
        assert_eq!(handle_key(press(KeyCode::Char(' '))), KeyAction::Confirm);
        assert_eq!(handle_key(press(KeyCode::Esc)), KeyAction::Escape);
        assert_eq!(handle_key(press(KeyCode::Char('q'))), KeyAction::Escape);
        assert_eq!(handle_key(press(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handle_key(press(KeyCode::Tab)), KeyAction::None);
    }

    #[test]
    fn key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key(release), KeyAction::None);
    }
}
