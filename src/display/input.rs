use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::Action;

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Key has no meaning on the keypad.
    None,
    /// Key maps to a calculator action.
    Calc(Action),
    /// User pressed `q`, Ctrl-C or Ctrl-D.
    Quit,
}

/// Translate a terminal key event into what the calculator should do.
pub fn map_key(event: &KeyEvent) -> InputAction {
    if event.kind == KeyEventKind::Release {
        return InputAction::None;
    }

    match event.code {
        KeyCode::Char('c' | 'd') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::Quit
        }
        KeyCode::Char('q' | 'Q') => InputAction::Quit,
        KeyCode::Char(c) => Action::from_char(c).map_or(InputAction::None, InputAction::Calc),
        KeyCode::Enter => InputAction::Calc(Action::Equals),
        KeyCode::Backspace => InputAction::Calc(Action::Backspace),
        KeyCode::Esc | KeyCode::Delete => InputAction::Calc(Action::Clear),
        _ => InputAction::None,
    }
}
