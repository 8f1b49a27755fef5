use chrono::{DateTime, Local};

use crate::dungeons::DungeonCard;
use crate::profile::CharacterProfile;
use crate::rating::RatingDisplay;
use crate::realms::RealmDirectory;
use crate::region::REGION_CYCLE;
use crate::roster::{Character, RosterStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Tracker,
    AddCharacter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Region,
    Realm,
    Name,
}

#[derive(Debug)]
pub struct FormState {
    pub focus: FormFocus,
    pub region: &'static str,
    pub realm_input: String,
    pub realm_cursor: usize,
    pub name_input: String,
    pub name_cursor: usize,
    pub error: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            focus: FormFocus::Name,
            region: REGION_CYCLE[0],
            realm_input: String::new(),
            realm_cursor: 0,
            name_input: String::new(),
            name_cursor: 0,
            error: None,
        }
    }
}

pub const NO_CHARACTER_TEXT: &str = "No character is selected.";
pub const FETCH_ERROR_TEXT: &str = "ERROR at reading data.";

#[derive(Debug)]
pub struct TrackerState {
    pub selected: Option<usize>,
    pub pending: Option<Character>,
    pub profile: Option<CharacterProfile>,
    pub cards: Vec<DungeonCard>,
    pub rating: RatingDisplay,
    pub message: Option<String>,
    pub last_error: Option<String>,
    pub fetched_at: Option<DateTime<Local>>,
    pub scroll: u16,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            selected: None,
            pending: None,
            profile: None,
            cards: Vec::new(),
            rating: RatingDisplay::NoCharacter,
            message: Some(NO_CHARACTER_TEXT.to_string()),
            last_error: None,
            fetched_at: None,
            scroll: 0,
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub view: View,
    pub roster: RosterStore,
    pub realms: RealmDirectory,
    pub form: FormState,
    pub tracker: TrackerState,
    pub status: Option<String>,
}

impl App {
    pub fn new(roster: RosterStore, realms: RealmDirectory) -> Self {
        Self {
            should_quit: false,
            view: View::Tracker,
            roster,
            realms,
            form: FormState::default(),
            tracker: TrackerState::default(),
            status: None,
        }
    }

    pub fn selected_character(&self) -> Option<&Character> {
        self.tracker.selected.and_then(|idx| self.roster.get(idx))
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.pending.is_some()
    }
}
