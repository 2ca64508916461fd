//! Key mapping from terminal events to player actions.

use crate::types::PlayerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to player actions.
pub fn handle_key_event(key: KeyEvent) -> Option<PlayerAction> {
    if should_quit(key) {
        return Some(PlayerAction::Quit);
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(PlayerAction::TogglePause)
        }

        // Frame stepping
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('n') | KeyCode::Char('N') => {
            Some(PlayerAction::Next)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('b') | KeyCode::Char('B') => {
            Some(PlayerAction::Previous)
        }

        KeyCode::Home | KeyCode::Char('r') | KeyCode::Char('R') => Some(PlayerAction::Restart),

        _ => None,
    }
}

/// Check if key should stop playback.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
