use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, FormFocus};

const PREFIX_COLS: u16 = 2;

pub fn render_form(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(0)])
        .split(area);

    let field = |focus: FormFocus, label: &'static str, value: String| -> Line<'static> {
        let active = app.form.focus == focus;
        let prefix = if active { "→ " } else { "  " };
        let value_style = if active {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(prefix),
            Span::styled(label, Style::default().fg(Color::Gray)),
            Span::styled(value, value_style),
        ])
    };

    let realm_hint = if app.realms.is_empty() {
        String::new()
    } else {
        format!("  ({} known realms, ↑/↓)", app.realms.realms().len())
    };

    let mut lines = vec![
        Line::from(Span::raw("Add a character to track")),
        Line::from(Span::raw("")),
        field(
            FormFocus::Region,
            "Region: ",
            format!(
                "{} ({})",
                app.form.region,
                crate::region::label(app.form.region)
            ),
        ),
        field(
            FormFocus::Realm,
            "Realm:  ",
            format!("{}{}", app.form.realm_input, realm_hint),
        ),
        field(FormFocus::Name, "Name:   ", app.form.name_input.clone()),
    ];
    if let Some(err) = &app.form.error {
        lines.push(Line::from(Span::raw("")));
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        "Add Character",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    let inner = block.inner(rows[0]);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Left).block(block),
        rows[0],
    );

    let (text, cursor, row) = match app.form.focus {
        FormFocus::Realm => (&app.form.realm_input, app.form.realm_cursor, 3u16),
        FormFocus::Name => (&app.form.name_input, app.form.name_cursor, 4u16),
        FormFocus::Region => return,
    };
    let label_cols = "Realm:  ".len() as u16;
    let text_cols = cursor.min(text.chars().count()) as u16;
    let max_x = inner.x.saturating_add(inner.width.saturating_sub(1));
    let x = inner
        .x
        .saturating_add(PREFIX_COLS)
        .saturating_add(label_cols)
        .saturating_add(text_cols)
        .min(max_x);
    frame.set_cursor_position((x, inner.y.saturating_add(row)));
}
