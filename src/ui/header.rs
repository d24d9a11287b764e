// Top header bar.
// Render-only: logo, decorative search box, center nav glyphs, action
// badges, and the signed-in user chip.

use ratatui::{prelude::*, widgets::*};

use super::avatar_chip;
use crate::app::App;

/// Unread message count shown on the header envelope.
const MESSAGE_BADGE: u32 = 8;
/// Notification count shown on the header bell.
const NOTIFICATION_BADGE: u32 = 36;

pub fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30), // Logo and search
            Constraint::Min(20),    // Center nav
            Constraint::Length(36), // Actions and profile
        ])
        .split(inner);

    let left = Line::from(vec![
        Span::styled(
            " ◉ feeddeck ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" 🔍 Search ", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(left), sections[0]);

    // Home is the active tab, the rest are decorative.
    let nav = Line::from(vec![
        Span::styled(
            " 🏠 ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        Span::raw("  👥   📺   🏪   👪 "),
    ]);
    frame.render_widget(Paragraph::new(nav).alignment(Alignment::Center), sections[1]);

    let right = Line::from(vec![
        Span::styled("➕ Create  ", Style::default().fg(Color::DarkGray)),
        Span::raw("💬"),
        Span::styled(
            format!("{MESSAGE_BADGE} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" 🔔"),
        Span::styled(
            format!("{NOTIFICATION_BADGE} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        avatar_chip(&app.data.current_user.name, Color::Cyan),
        Span::raw(format!(" {}", app.data.current_user.name)),
    ]);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), sections[2]);
}
