use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

pub fn render_status(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    let character_line = match app.selected_character() {
        Some(character) => Line::from(vec![
            Span::styled(
                character.name.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " • {} • {}",
                character.realm,
                crate::region::label(&character.region)
            )),
        ]),
        None => Line::from(Span::styled(
            crate::app::NO_CHARACTER_TEXT,
            Style::default().fg(Color::DarkGray),
        )),
    };
    lines.push(character_line);

    if let Some(profile) = &app.tracker.profile {
        lines.push(Line::from(Span::raw(profile.info_line())));
    }

    let rating = app.tracker.rating;
    lines.push(Line::from(Span::styled(
        rating.text(),
        Style::default()
            .fg(rating.tier().color())
            .add_modifier(Modifier::BOLD),
    )));

    if let Some(err) = app.tracker.last_error.as_ref().or(app.status.as_ref()) {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(at) = app.tracker.fetched_at {
        lines.push(Line::from(Span::styled(
            format!("Updated {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        "Mythic+ Tracker",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Left).block(block),
        area,
    );
}
