use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::message::AppMessage;

pub struct InputHandler;

impl InputHandler {
    /// Global fallback keys, consulted only after the active panel declined
    /// the key.
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Char('1'), _) => Some(AppMessage::SetPanel(0)),
            (KeyCode::Char('2'), _) => Some(AppMessage::SetPanel(1)),
            _ => None,
        }
    }
}
