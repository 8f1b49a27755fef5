mod form;
mod navigation;
mod roster;
mod state;

pub use state::{App, FETCH_ERROR_TEXT, FormFocus, NO_CHARACTER_TEXT, View};
