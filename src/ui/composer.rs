// Post composer card.
// One editable input line between two rows of decorative actions. The typed
// text survives focus changes; nothing is ever submitted.

use ratatui::{prelude::*, widgets::*};

use super::{avatar_chip, panel_block};
use crate::app::{App, Focus};

pub fn draw_composer(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Composer;
    let block = panel_block("Create Post", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Composer tabs
            Constraint::Length(1), // Input line
            Constraint::Length(1), // Action row
        ])
        .split(inner);

    let tabs = Line::from(vec![
        Span::styled("✏ Make Post", Style::default().fg(Color::Cyan)),
        Span::styled("   🖼 Photo/Video Album", Style::default().fg(Color::DarkGray)),
        Span::styled("   🎥 Live Video", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(tabs), rows[0]);

    draw_input_line(frame, app, rows[1], focused);

    let actions = Line::from(vec![
        Span::styled("🖼 Photo/Video", Style::default().fg(Color::Green)),
        Span::styled("   👥 Tag Friends", Style::default().fg(Color::Blue)),
        Span::styled("   😊 Feeling/Activity", Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(actions), rows[2]);
}

fn draw_input_line(frame: &mut Frame, app: &App, area: Rect, focused: bool) {
    let chip = avatar_chip(&app.data.current_user.name, Color::Cyan);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(chip.width() as u16 + 1),
            Constraint::Min(1),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(chip)), chunks[0]);

    let input_area = chunks[1];
    let width = input_area.width.max(1) as usize;
    let scroll = app.composer.visual_scroll(width);

    if app.composer.value().is_empty() && !focused {
        let placeholder = Span::styled(
            format!(
                "What's on your mind, {}?",
                app.data.current_user.short_name()
            ),
            Style::default().fg(Color::DarkGray),
        );
        frame.render_widget(Paragraph::new(Line::from(placeholder)), input_area);
        return;
    }

    let input = Paragraph::new(app.composer.value()).scroll((0, scroll as u16));
    frame.render_widget(input, input_area);

    if focused {
        let cursor_x =
            input_area.x + (app.composer.visual_cursor().saturating_sub(scroll)) as u16;
        frame.set_cursor_position((
            cursor_x.min(input_area.right().saturating_sub(1)),
            input_area.y,
        ));
    }
}
