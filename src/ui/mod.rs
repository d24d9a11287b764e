// UI module for rendering the dashboard.
// Lays out the page regions and delegates each one to its widget module.

mod chat;
mod composer;
mod feed;
mod groups;
mod header;
mod menu;
mod sidebar;
mod stories;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Focus};
use crate::state::TILE_HEIGHT;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header bar
            Constraint::Min(1),    // Page body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    header::draw_header(frame, app, chunks[0]);
    draw_body(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Popups render on top of the page.
    if app.feed.menu.is_some() {
        menu::draw_post_menu(frame, app);
    }
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Lay out the three page columns and the floating chat widget.
fn draw_body(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26), // Left navigation
            Constraint::Min(40),    // Main column
            Constraint::Length(34), // Right rail
        ])
        .split(area);

    sidebar::draw_sidebar(frame, app, columns[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),               // Composer
            Constraint::Length(TILE_HEIGHT + 2), // Story carousel
            Constraint::Min(1),                  // Post feed
        ])
        .split(columns[1]);

    composer::draw_composer(frame, app, main[0]);
    stories::draw_stories(frame, app, main[1]);
    feed::draw_feed(frame, app, main[2]);

    groups::draw_groups(frame, app, columns[2]);

    // The chat widget floats over the bottom-right corner of the body.
    chat::draw_chat(frame, app, area);
}

/// Bordered block for a page region, highlighted while focused.
pub(crate) fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {title} "))
}

/// Initials chip like "[OM]".
pub(crate) fn avatar_chip(name: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!("[{}]", crate::data::initials(name)),
        Style::default().fg(color),
    )
}

/// Draw the status bar with focus-specific keybinding hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![Span::styled(
        format!(" {} ", app.focus.title()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    let pairs: &[(&str, &str)] = match app.focus {
        Focus::Sidebar => &[
            (" ↑↓ ", "Move"),
            (" ↵ ", "Toggle/Open"),
            (" Tab ", "Panel"),
            (" ? ", "Help"),
            (" q ", "Quit"),
        ],
        Focus::Composer => &[
            (" type ", "Write"),
            (" ^u ", "Clear"),
            (" Tab ", "Panel"),
        ],
        Focus::Stories => &[
            (" ←→ ", "Scroll"),
            (" Tab ", "Panel"),
            (" ? ", "Help"),
            (" q ", "Quit"),
        ],
        Focus::Feed => &[
            (" ↑↓ ", "Select"),
            (" Space ", "Like"),
            (" m ", "Menu"),
            (" Tab ", "Panel"),
            (" q ", "Quit"),
        ],
        Focus::Groups => &[
            (" ↑↓ ", "Select"),
            (" x ", "Dismiss"),
            (" Tab ", "Panel"),
            (" ? ", "Help"),
            (" q ", "Quit"),
        ],
        Focus::Chat if app.chat.is_open() => &[
            (" type ", "Search"),
            (" ↑↓ ", "Select"),
            (" ↵ ", "Collapse"),
            (" Esc ", "Clear"),
            (" Tab ", "Panel"),
        ],
        Focus::Chat => &[
            (" ↵ ", "Expand"),
            (" Tab ", "Panel"),
            (" ? ", "Help"),
            (" q ", "Quit"),
        ],
    };

    for (key, action) in pairs {
        hints.push(Span::raw(*key));
        hints.push(Span::styled(*action, Style::default().fg(Color::DarkGray)));
        hints.push(Span::raw(" "));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 56;
    let popup_height = 21;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |s: &'static str| Span::styled(s, Style::default().fg(Color::Cyan));

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            key("  Tab/Shift-Tab "),
            Span::raw("Cycle panel focus"),
        ]),
        Line::from(vec![
            key("  ↑/↓ or j/k    "),
            Span::raw("Move within the focused panel"),
        ]),
        Line::from(vec![
            key("  ←/→ or h/l    "),
            Span::raw("Scroll the story carousel"),
        ]),
        Line::from(vec![
            key("  Enter         "),
            Span::raw("Activate row / fold chat widget"),
        ]),
        Line::from(vec![
            key("  Space         "),
            Span::raw("Like post / toggle sidebar section"),
        ]),
        Line::from(vec![
            key("  m             "),
            Span::raw("Open post actions menu"),
        ]),
        Line::from(vec![
            key("  x or Delete   "),
            Span::raw("Dismiss selected group suggestion"),
        ]),
        Line::from(vec![
            key("  Ctrl-U        "),
            Span::raw("Clear the focused text input"),
        ]),
        Line::from(vec![
            key("  Esc           "),
            Span::raw("Close popup / clear chat search"),
        ]),
        Line::from(vec![
            key("  ?             "),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![key("  q             "), Span::raw("Quit")]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "While typing in the composer or chat search, ",
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled("q", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("and ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(
                " insert text instead of acting.",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
