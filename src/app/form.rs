use crossterm::event::KeyCode;

use super::{App, FormFocus, View};

impl App {
    pub(super) fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.form.error = None;
                self.view = View::Tracker;
            }
            KeyCode::Tab => {
                self.form.focus = next_focus(self.form.focus);
            }
            KeyCode::BackTab => {
                self.form.focus = prev_focus(self.form.focus);
            }
            KeyCode::Enter => self.submit_form(),
            KeyCode::Left => match self.form.focus {
                FormFocus::Region => {
                    self.form.region = crate::region::prev_region(self.form.region);
                }
                FormFocus::Realm | FormFocus::Name => {
                    if let Some((text, cursor)) = self.form_active_text_mut() {
                        move_cursor_left(text, cursor);
                    }
                }
            },
            KeyCode::Right => match self.form.focus {
                FormFocus::Region => {
                    self.form.region = crate::region::next_region(self.form.region);
                }
                FormFocus::Realm | FormFocus::Name => {
                    if let Some((text, cursor)) = self.form_active_text_mut() {
                        move_cursor_right(text, cursor);
                    }
                }
            },
            KeyCode::Up => self.step_realm(false),
            KeyCode::Down => self.step_realm(true),
            KeyCode::Home => {
                if let Some((_text, cursor)) = self.form_active_text_mut() {
                    *cursor = 0;
                }
            }
            KeyCode::End => {
                if let Some((text, cursor)) = self.form_active_text_mut() {
                    *cursor = text.chars().count();
                }
            }
            KeyCode::Backspace => {
                if let Some((text, cursor)) = self.form_active_text_mut() {
                    backspace_at_cursor(text, cursor);
                }
            }
            KeyCode::Delete => {
                if let Some((text, cursor)) = self.form_active_text_mut() {
                    delete_at_cursor(text, cursor);
                }
            }
            KeyCode::Char(c) => {
                if let Some((text, cursor)) = self.form_active_text_mut() {
                    insert_char_at_cursor(text, cursor, c);
                }
            }
            _ => {}
        }
    }

    pub fn open_form(&mut self) {
        self.view = View::AddCharacter;
        self.form.error = None;
        if let Some(character) = self.selected_character() {
            let region = character.region.clone();
            if let Some(known) = crate::region::REGION_CYCLE
                .iter()
                .find(|r| r.eq_ignore_ascii_case(&region))
            {
                self.form.region = *known;
            }
        }
        self.clamp_form_cursors();
    }

    fn form_active_text_mut(&mut self) -> Option<(&mut String, &mut usize)> {
        match self.form.focus {
            FormFocus::Realm => Some((&mut self.form.realm_input, &mut self.form.realm_cursor)),
            FormFocus::Name => Some((&mut self.form.name_input, &mut self.form.name_cursor)),
            FormFocus::Region => None,
        }
    }

    fn step_realm(&mut self, forward: bool) {
        if self.form.focus != FormFocus::Realm {
            return;
        }
        if let Some(realm) = self.realms.step(&self.form.realm_input, forward) {
            self.form.realm_input = realm.slug.clone();
            self.form.realm_cursor = self.form.realm_input.chars().count();
        }
    }

    fn clamp_form_cursors(&mut self) {
        self.form.realm_cursor = self
            .form
            .realm_cursor
            .min(self.form.realm_input.chars().count());
        self.form.name_cursor = self
            .form
            .name_cursor
            .min(self.form.name_input.chars().count());
    }
}

fn next_focus(current: FormFocus) -> FormFocus {
    match current {
        FormFocus::Region => FormFocus::Realm,
        FormFocus::Realm => FormFocus::Name,
        FormFocus::Name => FormFocus::Region,
    }
}

fn prev_focus(current: FormFocus) -> FormFocus {
    match current {
        FormFocus::Region => FormFocus::Name,
        FormFocus::Realm => FormFocus::Region,
        FormFocus::Name => FormFocus::Realm,
    }
}

fn move_cursor_left(text: &str, cursor: &mut usize) {
    *cursor = (*cursor).min(text.chars().count()).saturating_sub(1);
}

fn move_cursor_right(text: &str, cursor: &mut usize) {
    if *cursor < text.chars().count() {
        *cursor += 1;
    }
}

fn char_byte_offset(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

fn insert_char_at_cursor(text: &mut String, cursor: &mut usize, c: char) {
    let idx = (*cursor).min(text.chars().count());
    let offset = char_byte_offset(text, idx);
    text.insert(offset, c);
    *cursor = idx + 1;
}

fn backspace_at_cursor(text: &mut String, cursor: &mut usize) {
    let idx = (*cursor).min(text.chars().count());
    if idx == 0 {
        *cursor = 0;
        return;
    }
    let offset = char_byte_offset(text, idx - 1);
    text.remove(offset);
    *cursor = idx - 1;
}

fn delete_at_cursor(text: &mut String, cursor: &mut usize) {
    let idx = (*cursor).min(text.chars().count());
    if idx < text.chars().count() {
        let offset = char_byte_offset(text, idx);
        text.remove(offset);
    }
    *cursor = idx;
}
