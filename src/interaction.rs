use crate::app::{App, View};
use crate::dungeons::card_rows;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Quit,
    ShowTracker,
    ShowAddForm,
    SelectNext,
    SelectPrev,
    RemoveSelected,
    Refresh,
    AdjustScroll { delta: i32 },
}

impl Intent {
    pub fn apply(self, app: &mut App) {
        match self {
            Intent::Quit => {
                app.should_quit = true;
            }
            Intent::ShowTracker => {
                app.view = View::Tracker;
            }
            Intent::ShowAddForm => {
                app.open_form();
            }
            Intent::SelectNext => app.select_next(),
            Intent::SelectPrev => app.select_prev(),
            Intent::RemoveSelected => app.remove_selected(),
            Intent::Refresh => app.refresh_selected(),
            Intent::AdjustScroll { delta } => {
                if app.view == View::Tracker {
                    let max = card_rows(app.tracker.cards.len()).saturating_sub(1);
                    let max = i32::try_from(max).unwrap_or(i32::MAX).min(u16::MAX as i32);
                    let current = app.tracker.scroll as i32;
                    app.tracker.scroll = (current + delta).clamp(0, max) as u16;
                }
            }
        }
    }
}
