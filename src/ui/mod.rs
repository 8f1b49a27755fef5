use ratatui::layout::{Constraint, Direction, Layout};

mod cards;
mod footer;
mod form_view;
mod roster_view;
mod status;

use crate::app::{App, View};

pub fn render(frame: &mut ratatui::Frame, app: &mut App) {
    let size = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(size);

    status::render_status(frame, layout[0], app);

    match app.view {
        View::Tracker => {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(34), Constraint::Min(0)])
                .split(layout[1]);
            roster_view::render_roster(frame, body[0], app);
            cards::render_cards(frame, body[1], app);
        }
        View::AddCharacter => form_view::render_form(frame, layout[1], app),
    }

    footer::render_footer(frame, layout[2], app.view);
}
