// Story carousel.
// A leading "Add to Story" tile followed by one tile per story, drawn at a
// horizontal offset owned by CarouselScroll. Tiles at the edges are clipped;
// chevrons mark directions with more content.

use ratatui::{prelude::*, widgets::*};

use super::{avatar_chip, panel_block};
use crate::app::{App, Focus};
use crate::data::Story;
use crate::state::{TILE_GAP, TILE_HEIGHT, TILE_WIDTH};

pub fn draw_stories(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Stories;
    let block = panel_block("Stories", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Measure the strip so paging clamps against what actually fits.
    let tile_count = app.data.stories.len() as u16 + 1;
    let content_width = tile_count * (TILE_WIDTH + TILE_GAP) - TILE_GAP;
    app.stories.set_extent(content_width, inner.width);

    let offset = app.stories.offset();
    draw_tile(frame, inner, 0, offset, |frame, rect| {
        draw_add_tile(frame, rect);
    });
    for (i, story) in app.data.stories.iter().enumerate() {
        draw_tile(frame, inner, i as u16 + 1, offset, |frame, rect| {
            draw_story_tile(frame, rect, story);
        });
    }

    let chevron_y = inner.y + inner.height / 2;
    if app.stories.can_scroll_left() {
        let rect = Rect::new(inner.x, chevron_y, 1, 1);
        frame.render_widget(chevron("‹"), rect);
    }
    if app.stories.can_scroll_right() {
        let rect = Rect::new(inner.right() - 1, chevron_y, 1, 1);
        frame.render_widget(chevron("›"), rect);
    }
}

fn chevron(glyph: &str) -> Paragraph<'_> {
    Paragraph::new(glyph).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// Place tile `index` of the strip, clipping it to the viewport. Tiles
/// scrolled fully out of view are skipped.
fn draw_tile(
    frame: &mut Frame,
    viewport: Rect,
    index: u16,
    offset: u16,
    render: impl FnOnce(&mut Frame, Rect),
) {
    let virtual_x = i32::from(index) * i32::from(TILE_WIDTH + TILE_GAP) - i32::from(offset);
    let x0 = i32::from(viewport.x) + virtual_x;
    let x1 = x0 + i32::from(TILE_WIDTH);

    let left = x0.max(i32::from(viewport.x));
    let right = x1.min(i32::from(viewport.right()));
    if right <= left {
        return;
    }

    let rect = Rect::new(
        left as u16,
        viewport.y,
        (right - left) as u16,
        TILE_HEIGHT.min(viewport.height),
    );
    render(frame, rect);
}

fn draw_add_tile(frame: &mut Frame, rect: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "➕",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(""),
        Line::from(""),
        Line::from("Add to Story").alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn draw_story_tile(frame: &mut Frame, rect: Rect, story: &Story) {
    // Unviewed stories get the highlighted ring.
    let (border, name_style) = if story.is_viewed {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            Style::default().fg(Color::Cyan),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };

    let block = Block::default().borders(Borders::ALL).border_style(border);

    let name: String = story.user_name.chars().take(12).collect();
    let lines = vec![
        Line::from(avatar_chip(&story.user_name, Color::Yellow)),
        Line::from(""),
        Line::from(""),
        Line::from(""),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(name, name_style)).alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
