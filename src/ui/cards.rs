use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::dungeons::{CARD_COLUMNS, DungeonCard};

const CARD_HEIGHT: u16 = 7;

/// Writes the clamped scroll offset back to the tracker state.
pub fn render_cards(frame: &mut ratatui::Frame, area: Rect, app: &mut App) {
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        "Dungeons",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.tracker.cards.is_empty() {
        let message = app.tracker.message.clone().unwrap_or_default();
        let style = if app.tracker.last_error.is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(message, style))).wrap(Wrap { trim: true }),
            inner,
        );
        return;
    }

    let rows: Vec<&[DungeonCard]> = app.tracker.cards.chunks(CARD_COLUMNS).collect();
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let max_skip = rows.len().saturating_sub(visible_rows);
    let skip = (app.tracker.scroll as usize).min(max_skip);
    app.tracker.scroll = u16::try_from(skip).unwrap_or(u16::MAX);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat_n(Constraint::Length(CARD_HEIGHT), visible_rows)
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(inner);

    for (row_area, row) in row_areas.iter().zip(rows.iter().skip(skip)) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(std::iter::repeat_n(
                Constraint::Ratio(1, CARD_COLUMNS as u32),
                CARD_COLUMNS,
            ))
            .split(*row_area);
        for (card_area, card) in cols.iter().zip(row.iter()) {
            render_card(frame, *card_area, card);
        }
    }
}

fn render_card(frame: &mut ratatui::Frame, area: Rect, card: &DungeonCard) {
    let muted = card.is_muted();
    let border_style = if muted {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let title_style = if muted {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines: Vec<Line> = Vec::new();
    match &card.run {
        Some(run) => {
            lines.push(Line::from(vec![
                Span::styled(
                    run.level.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(run.score.clone()),
            ]));
            let time_style = if run.time == "UNFINISHED" {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(run.time.clone(), time_style)));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Not completed",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    let backdrop = card.asset.as_deref().unwrap_or("no backdrop");
    lines.push(Line::from(Span::styled(
        format!("bg: {backdrop}"),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    let title = card
        .run
        .as_ref()
        .map(|run| run.title.clone())
        .unwrap_or_else(|| card.name.clone());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, title_style));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
