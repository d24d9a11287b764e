// Suggested groups rail.
// One multi-line card per suggestion; dismissed ids simply stop appearing.

use ratatui::{prelude::*, widgets::*};

use super::panel_block;
use crate::app::{App, Focus};
use crate::data::{format_count, GroupSuggestion};

pub fn draw_groups(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Groups;
    let block = panel_block("Suggested Groups", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // See All link row
            Constraint::Min(1),    // Suggestion list
        ])
        .split(inner);

    let see_all = Paragraph::new(Span::styled(
        "See All ›",
        Style::default().fg(Color::Cyan),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(see_all, rows[0]);

    let visible = app.groups.visible(&app.data.groups);
    if visible.is_empty() {
        let empty = Paragraph::new("No more group suggestions for now.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: false });
        frame.render_widget(empty, rows[1]);
        return;
    }

    let items: Vec<ListItem> = visible.iter().map(|group| group_item(group)).collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, rows[1], &mut app.groups.list_state);
}

fn group_item(group: &GroupSuggestion) -> ListItem<'static> {
    // Up to four member avatars, rendered as numbered chips.
    let avatars: String = group
        .member_avatar_urls
        .iter()
        .take(4)
        .enumerate()
        .map(|(i, _)| format!("[{}]", i + 1))
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            group.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{avatars}▁▁▁▁▁▁▁▁"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!("{} members", format_count(group.member_count)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "[ ＋ Join Group ]",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
    ];
    ListItem::new(lines)
}
