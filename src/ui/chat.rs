// Floating chat widget.
// Anchored to the bottom-right corner of the page body, drawn over whatever
// sits underneath. Collapsed it is just the header row.

use ratatui::{prelude::*, widgets::*};

use super::avatar_chip;
use crate::app::{App, Focus};
use crate::data::Contact;
use crate::state::unread_total;

const CHAT_WIDTH: u16 = 32;
const CHAT_OPEN_HEIGHT: u16 = 16;
const CHAT_CLOSED_HEIGHT: u16 = 3;

pub fn draw_chat(frame: &mut Frame, app: &mut App, body: Rect) {
    let focused = app.focus == Focus::Chat;
    let open = app.chat.is_open();

    let width = CHAT_WIDTH.min(body.width);
    let height = if open {
        CHAT_OPEN_HEIGHT
    } else {
        CHAT_CLOSED_HEIGHT
    }
    .min(body.height);
    if width < 3 || height < 3 {
        return;
    }

    let x = body
        .right()
        .saturating_sub(width + 1)
        .max(body.x);
    let y = body.bottom().saturating_sub(height);
    let rect = Rect::new(x, y, width, height);

    frame.render_widget(Clear, rect);
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    if open {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header row
                Constraint::Length(1), // Search box
                Constraint::Min(1),    // Contact list
            ])
            .split(inner);
        draw_header_row(frame, app, rows[0], open);
        draw_search_row(frame, app, rows[1], focused);
        draw_contact_list(frame, app, rows[2]);
    } else {
        draw_header_row(frame, app, inner, open);
    }
}

fn draw_header_row(frame: &mut Frame, app: &App, area: Rect, open: bool) {
    let unread = unread_total(&app.data.contacts);
    let chevron = if open { "▾" } else { "▴" };

    let chip = avatar_chip(&app.data.current_user.name, Color::Cyan);
    let left_text = " Chat";
    let unread_text = if unread > 0 {
        format!(" ({unread})")
    } else {
        String::new()
    };
    let right = format!("✉ 👥 ⚙ {chevron} ");

    let used = chip.width()
        + left_text.chars().count()
        + unread_text.chars().count()
        + right.chars().count();
    let pad = (area.width as usize).saturating_sub(used).max(1);

    let line = Line::from(vec![
        chip,
        Span::styled(left_text, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(unread_text, Style::default().fg(Color::Yellow)),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_search_row(frame: &mut Frame, app: &App, area: Rect, focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    frame.render_widget(Paragraph::new("🔍 "), chunks[0]);

    let input_area = chunks[1];
    let width = input_area.width.max(1) as usize;
    let scroll = app.chat.search.visual_scroll(width);

    let value = app.chat.search.value();
    if value.is_empty() && !focused {
        let placeholder = Span::styled("Search contacts...", Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(Line::from(placeholder)), input_area);
        return;
    }

    let input = Paragraph::new(value).scroll((0, scroll as u16));
    frame.render_widget(input, input_area);

    if focused {
        let cursor_x =
            input_area.x + (app.chat.search.visual_cursor().saturating_sub(scroll)) as u16;
        frame.set_cursor_position((
            cursor_x.min(input_area.right().saturating_sub(1)),
            input_area.y,
        ));
    }
}

fn draw_contact_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.chat.visible(&app.data.contacts);
    if visible.is_empty() {
        let empty = Paragraph::new("No contacts found.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible.iter().map(|contact| contact_item(contact)).collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.chat.list_state);
}

fn contact_item(contact: &Contact) -> ListItem<'static> {
    let dot = if contact.is_online {
        Span::styled("● ", Style::default().fg(Color::Green))
    } else {
        Span::styled("○ ", Style::default().fg(Color::DarkGray))
    };

    let mut name_line = vec![dot, Span::raw(contact.name.clone())];
    if let Some(unread) = contact.unread_count {
        if unread > 0 {
            name_line.push(Span::styled(
                format!("  ({unread})"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }

    let mut lines = vec![Line::from(name_line)];
    if let Some(message) = &contact.last_message {
        lines.push(Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    ListItem::new(lines)
}
