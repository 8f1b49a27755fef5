use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::app::App;

pub fn render_roster(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = if app.roster.is_empty() {
        vec![
            Line::from(Span::styled(
                "No saved characters.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Press a to add one.",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else {
        app.roster
            .characters()
            .iter()
            .enumerate()
            .map(|(idx, character)| {
                let selected = app.tracker.selected == Some(idx);
                let (marker, style) = if selected {
                    (
                        "› ",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ("  ", Style::default().fg(Color::Gray))
                };
                Line::from(vec![Span::raw(marker), Span::styled(character.label(), style)])
            })
            .collect()
    };

    let title = format!("Characters ({})", app.roster.len());
    let list = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .padding(Padding::new(1, 1, 0, 0)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(list, area);
}
