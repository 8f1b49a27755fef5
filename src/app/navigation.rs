use crossterm::event::KeyCode;

use crate::interaction::Intent;

use super::{App, View};

impl App {
    pub fn on_key(&mut self, code: KeyCode) {
        match self.view {
            View::AddCharacter => self.handle_form_key(code),
            View::Tracker => {
                if let Some(intent) = tracker_intent(code) {
                    intent.apply(self);
                }
            }
        }
    }
}

fn tracker_intent(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Intent::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::SelectNext),
        KeyCode::Char('a') => Some(Intent::ShowAddForm),
        KeyCode::Char('d') | KeyCode::Delete => Some(Intent::RemoveSelected),
        KeyCode::Char('r') => Some(Intent::Refresh),
        KeyCode::PageUp => Some(Intent::AdjustScroll { delta: -1 }),
        KeyCode::PageDown => Some(Intent::AdjustScroll { delta: 1 }),
        _ => None,
    }
}
