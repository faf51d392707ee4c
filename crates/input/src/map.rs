//! Key mapping from terminal events to stop requests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Ctrl-C. In raw mode this arrives as a key event instead of SIGINT.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key should stop the animation.
pub fn should_quit(key: KeyEvent) -> bool {
    is_interrupt(key) || matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
