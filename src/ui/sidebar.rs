// Left navigation rail.
// Fixed rows from the nav tables; collapsible sections show a fold chevron
// and indent their children.

use ratatui::{prelude::*, widgets::*};

use super::{avatar_chip, panel_block};
use crate::app::{App, Focus};
use crate::state::{NavEntry, SidebarRow, MAIN_NAV};

pub fn draw_sidebar(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Sidebar;
    let block = panel_block("Menu", focused);

    let items: Vec<ListItem> = app
        .sidebar
        .rows()
        .into_iter()
        .map(|row| ListItem::new(row_line(app, row)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(app.sidebar.cursor()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn row_line(app: &App, row: SidebarRow) -> Line<'static> {
    match row {
        SidebarRow::Profile => Line::from(vec![
            avatar_chip(&app.data.current_user.name, Color::Cyan),
            Span::styled(
                format!(" {}", app.data.current_user.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        SidebarRow::Nav(i) => {
            // News Feed is the active destination.
            let style = if i == 0 {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            entry_line(&MAIN_NAV[i], style, "")
        }
        SidebarRow::Section(section) => {
            let chevron = if app.sidebar.is_open(section) {
                "▾"
            } else {
                "▸"
            };
            Line::from(Span::styled(
                format!("{chevron} {}", section.label().to_uppercase()),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ))
        }
        SidebarRow::Item(section, i) => {
            entry_line(&section.entries()[i], Style::default(), "  ")
        }
        SidebarRow::Settings => Line::from(Span::raw("⚙ Settings")),
    }
}

fn entry_line(entry: &NavEntry, style: Style, indent: &str) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{indent}{} {}", entry.icon, entry.label),
        style,
    )];
    if let Some(chip) = entry.chip {
        spans.push(Span::styled(
            format!("  {chip}"),
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}
