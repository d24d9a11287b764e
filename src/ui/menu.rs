// Post actions popup.
// Centered menu anchored to the focused post; choosing an entry only logs.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::POST_MENU_ITEMS;

pub fn draw_post_menu(frame: &mut Frame, app: &App) {
    let Some(menu) = app.feed.menu else {
        return;
    };
    let author = app
        .data
        .posts
        .get(menu.post)
        .map(|post| post.user.name.as_str())
        .unwrap_or("Post");

    let area = frame.area();

    // Centered popup sized to the four entries plus the hint row.
    let popup_width = 36;
    let popup_height = POST_MENU_ITEMS.len() as u16 + 3;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Post · {author} "));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Menu entries
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let items: Vec<ListItem> = POST_MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, (icon, label))| {
            // The last entry is destructive.
            let style = if i == POST_MENU_ITEMS.len() - 1 {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(format!("{icon} {label}"), style)))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(menu.selected));

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let instructions = Line::from(vec![
        Span::styled("↵", Style::default().fg(Color::Yellow)),
        Span::styled(" = Select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(" = Navigate  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" = Close ", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[1],
    );
}
