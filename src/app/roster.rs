use crate::rating::RatingDisplay;
use crate::roster::{AddOutcome, RosterError};

use super::state::TrackerState;
use super::{App, View};

impl App {
    /// Selects the saved character at `idx` and queues a fetch for it.
    pub fn select_character(&mut self, idx: usize) {
        let Some(character) = self.roster.get(idx).cloned() else {
            return;
        };
        self.tracker.selected = Some(idx);
        self.tracker.pending = Some(character);
        self.tracker.profile = None;
        self.tracker.cards.clear();
        self.tracker.rating = RatingDisplay::Loading;
        self.tracker.message = Some("Loading...".to_string());
        self.tracker.scroll = 0;
    }

    pub fn select_next(&mut self) {
        if self.roster.is_empty() {
            return;
        }
        let next = match self.tracker.selected {
            Some(idx) => (idx + 1) % self.roster.len(),
            None => 0,
        };
        self.select_character(next);
    }

    pub fn select_prev(&mut self) {
        if self.roster.is_empty() {
            return;
        }
        let len = self.roster.len();
        let prev = match self.tracker.selected {
            Some(idx) => (idx + len - 1) % len,
            None => len - 1,
        };
        self.select_character(prev);
    }

    pub fn refresh_selected(&mut self) {
        if let Some(idx) = self.tracker.selected {
            self.select_character(idx);
        }
    }

    pub fn remove_selected(&mut self) {
        let Some(idx) = self.tracker.selected else {
            return;
        };
        match self.roster.remove(idx) {
            Ok(Some(removed)) => {
                tracing::info!(character = %removed.label(), "removed saved character");
                self.clear_selection();
                self.status = Some(format!("Removed {}", removed.label()));
            }
            Ok(None) => self.clear_selection(),
            Err(err) => {
                tracing::error!(error = %err, "failed to save roster");
                self.status = Some(crate::error::render_error_message(&err));
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.tracker = TrackerState::default();
    }

    pub fn submit_form(&mut self) {
        let result = self.roster.add(
            self.form.region,
            &self.form.realm_input,
            &self.form.name_input,
        );
        match result {
            Ok(outcome) => {
                if let AddOutcome::Added(_) = outcome {
                    self.form.name_input.clear();
                    self.form.name_cursor = 0;
                }
                self.form.error = None;
                self.view = View::Tracker;
                self.select_character(outcome.index());
            }
            Err(RosterError::MissingFields) => {
                self.form.error = Some(RosterError::MissingFields.to_string());
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save roster");
                self.form.error = Some(crate::error::render_error_message(&err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, FormFocus, View};
    use crate::rating::RatingDisplay;
    use crate::realms::RealmDirectory;
    use crate::roster::RosterStore;

    fn app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let roster = RosterStore::load(dir.path().join("characters.json")).unwrap();
        (dir, App::new(roster, RealmDirectory::default()))
    }

    fn fill(app: &mut App, realm: &str, name: &str) {
        app.form.realm_input = realm.to_string();
        app.form.name_input = name.to_string();
    }

    #[test]
    fn submit_adds_selects_and_queues_fetch() {
        let (_dir, mut app) = app();
        app.view = View::AddCharacter;
        fill(&mut app, "Draenor", "Thrallina");
        app.submit_form();

        assert_eq!(app.view, View::Tracker);
        assert_eq!(app.roster.len(), 1);
        assert_eq!(app.tracker.selected, Some(0));
        assert_eq!(app.tracker.pending.as_ref().unwrap().name, "Thrallina");
        assert_eq!(app.tracker.rating, RatingDisplay::Loading);
        assert!(app.form.name_input.is_empty());
    }

    #[test]
    fn submit_existing_selects_without_duplicating() {
        let (_dir, mut app) = app();
        fill(&mut app, "Draenor", "Thrallina");
        app.submit_form();
        fill(&mut app, "Illidan", "Jaina");
        app.submit_form();
        fill(&mut app, "draenor", "thrallina");
        app.submit_form();

        assert_eq!(app.roster.len(), 2);
        assert_eq!(app.tracker.selected, Some(0));
    }

    #[test]
    fn submit_with_missing_fields_stays_on_form() {
        let (_dir, mut app) = app();
        app.view = View::AddCharacter;
        app.form.focus = FormFocus::Realm;
        fill(&mut app, "", "Thrallina");
        app.submit_form();

        assert_eq!(app.view, View::AddCharacter);
        assert_eq!(app.form.error.as_deref(), Some("Fill all fields!"));
        assert!(app.roster.is_empty());
        assert!(app.tracker.pending.is_none());
    }

    #[test]
    fn remove_resets_tracker() {
        let (_dir, mut app) = app();
        fill(&mut app, "Draenor", "Thrallina");
        app.submit_form();
        app.remove_selected();

        assert!(app.roster.is_empty());
        assert_eq!(app.tracker.selected, None);
        assert_eq!(app.tracker.rating, RatingDisplay::NoCharacter);
        assert_eq!(app.tracker.message.as_deref(), Some("No character is selected."));
    }

    #[test]
    fn failed_save_keeps_form_and_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(
            RosterStore::empty(dir.path().to_path_buf()),
            RealmDirectory::default(),
        );
        app.view = View::AddCharacter;
        fill(&mut app, "Draenor", "Thrallina");
        app.submit_form();

        assert!(app.roster.is_empty());
        assert_eq!(app.view, View::AddCharacter);
        assert!(app.form.error.as_deref().unwrap().starts_with("write roster"));
        assert_eq!(app.form.name_input, "Thrallina");
        assert_eq!(app.tracker.selected, None);
    }

    #[test]
    fn failed_remove_keeps_selected_character() {
        let (dir, mut app) = app();
        fill(&mut app, "Draenor", "A");
        app.submit_form();
        fill(&mut app, "Draenor", "B");
        app.submit_form();
        app.select_character(0);

        let path = dir.path().join("characters.json");
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        app.remove_selected();

        assert_eq!(app.roster.len(), 2);
        assert_eq!(app.tracker.selected, Some(0));
        assert_eq!(app.selected_character().unwrap().name, "A");
        assert!(app.status.as_deref().unwrap().starts_with("write roster"));
    }

    #[test]
    fn selection_wraps() {
        let (_dir, mut app) = app();
        fill(&mut app, "Draenor", "A");
        app.submit_form();
        fill(&mut app, "Draenor", "B");
        app.submit_form();
        assert_eq!(app.tracker.selected, Some(1));

        app.select_next();
        assert_eq!(app.tracker.selected, Some(0));
        app.select_prev();
        assert_eq!(app.tracker.selected, Some(1));
        assert_eq!(app.selected_character().unwrap().name, "B");
    }
}
