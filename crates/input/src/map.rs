//! Key mapping from terminal events to garden actions.

use crate::types::GardenAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to garden actions.
pub fn map_key(key: KeyEvent) -> Option<GardenAction> {
    if should_quit(key) {
        return Some(GardenAction::Quit);
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(GardenAction::TogglePause)
        }
        KeyCode::Char('v') | KeyCode::Char('V') | KeyCode::Tab => Some(GardenAction::CycleVariant),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(GardenAction::Faster),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(GardenAction::Slower),
        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
