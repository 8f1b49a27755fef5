use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::interaction::Intent;

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let intent = match key.code {
            KeyCode::Char('a') => Some(Intent::ShowAddForm),
            KeyCode::Char('t') => Some(Intent::ShowTracker),
            KeyCode::Char('q') | KeyCode::Char('c') => Some(Intent::Quit),
            _ => None,
        };
        if let Some(intent) = intent {
            intent.apply(app);
        }
    } else {
        app.on_key(key.code);
    }
}
