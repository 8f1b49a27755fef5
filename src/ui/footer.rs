use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::View;

pub fn render_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, view: View) {
    let hints = match view {
        View::Tracker => "↑/↓ select • a add • d remove • r refresh • PgUp/PgDn scroll • q quit",
        View::AddCharacter => "Tab focus • ←/→ region • ↑/↓ realm • Enter save • Esc back",
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(hints, Style::default().fg(Color::Gray)),
        Span::styled(
            format!("   mplus-tracker v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
