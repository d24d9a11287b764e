// Post feed.
// Cards stack vertically inside the feed panel and scroll at card
// granularity: scroll_top is the first rendered card, and the selection is
// kept on screen before drawing.

use ratatui::{prelude::*, widgets::*};

use super::panel_block;
use crate::app::{App, Focus};
use crate::data::{Media, Post};
use crate::state::{FeedState, LikeCounter};

pub fn draw_feed(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Feed;
    let block = panel_block("News Feed", focused);
    let inner = block.inner(area);

    if app.data.posts.is_empty() {
        let empty = Paragraph::new("No posts to show.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let heights: Vec<u16> = app
        .data
        .posts
        .iter()
        .zip(&app.feed.likes)
        .map(|(post, like)| post_height(post, like, inner.width))
        .collect();
    ensure_selected_visible(&mut app.feed, &heights, inner.height);

    let mut y = inner.y;
    for i in app.feed.scroll_top..app.data.posts.len() {
        if y >= inner.bottom() {
            break;
        }
        let height = heights[i].min(inner.bottom() - y);
        let rect = Rect::new(inner.x, y, inner.width, height);
        draw_post_card(
            frame,
            rect,
            &app.data.posts[i],
            &app.feed.likes[i],
            focused && i == app.feed.selected,
        );
        y += heights[i];
    }
}

/// Rows one card occupies at the given panel width, borders included.
fn post_height(post: &Post, like: &LikeCounter, width: u16) -> u16 {
    let text_width = width.saturating_sub(2).max(1) as usize;
    let mut rows = 2; // author and meta lines
    if let Some(content) = &post.content {
        rows += textwrap::wrap(content, text_width).len() as u16;
    }
    if post.media().is_some() {
        rows += 1;
    }
    if stats_line(post, like).is_some() {
        rows += 1;
    }
    rows += 1; // action row
    rows + 2 // borders
}

/// Advance scroll_top until the selected card fits inside the viewport.
fn ensure_selected_visible(feed: &mut FeedState, heights: &[u16], viewport: u16) {
    if feed.selected < feed.scroll_top {
        feed.scroll_top = feed.selected;
        return;
    }
    while feed.scroll_top < feed.selected {
        let used: u32 = heights[feed.scroll_top..=feed.selected]
            .iter()
            .map(|h| u32::from(*h))
            .sum();
        if used <= u32::from(viewport) {
            break;
        }
        feed.scroll_top += 1;
    }
}

fn draw_post_card(frame: &mut Frame, rect: Rect, post: &Post, like: &LikeCounter, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let text_width = rect.width.saturating_sub(2).max(1) as usize;

    let mut lines = Vec::new();

    let mut header = vec![
        super::avatar_chip(&post.user.name, Color::Yellow),
        Span::styled(
            format!(" {}", post.user.name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(location) = &post.location {
        header.push(Span::styled(
            format!(" is in 📍 {location}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(header));

    lines.push(Line::from(Span::styled(
        format!("{} · 🌐", post.timestamp),
        Style::default().fg(Color::DarkGray),
    )));

    if let Some(content) = &post.content {
        for wrapped in textwrap::wrap(content, text_width) {
            lines.push(Line::from(wrapped.into_owned()));
        }
    }

    match post.media() {
        Some(Media::Photo(url)) => lines.push(Line::from(vec![
            Span::raw("🖼 "),
            Span::styled(url.to_string(), Style::default().fg(Color::DarkGray)),
        ])),
        Some(Media::Map(url)) => lines.push(Line::from(vec![
            Span::raw("🗺 "),
            Span::styled(url.to_string(), Style::default().fg(Color::DarkGray)),
        ])),
        None => {}
    }

    if let Some(stats) = stats_line(post, like) {
        lines.push(stats_row(stats, text_width));
    }

    let like_style = if like.is_liked() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(vec![
        Span::styled("👍 Like", like_style),
        Span::styled("    💬 Comment", Style::default().fg(Color::DarkGray)),
        Span::styled("    ↪ Share", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

/// Left and right halves of the engagement row, or None when every count
/// is zero and the row is omitted.
fn stats_line(post: &Post, like: &LikeCounter) -> Option<(String, String)> {
    let likes = like.displayed();
    let comments = post.stats.comments;
    let shares = post.stats.shares;
    if likes == 0 && comments == 0 && shares == 0 {
        return None;
    }

    let left = if likes > 0 {
        format!("{likes} Likes")
    } else {
        String::new()
    };

    let mut right_parts = Vec::new();
    if comments > 0 {
        right_parts.push(format!("{comments} Comments"));
    }
    if shares > 0 {
        right_parts.push(format!("{shares} Shares"));
    }
    Some((left, right_parts.join("  ")))
}

fn stats_row((left, right): (String, String), width: usize) -> Line<'static> {
    let pad = width
        .saturating_sub(left.chars().count() + right.chars().count())
        .max(1);
    Line::from(vec![
        Span::styled(left, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(Color::DarkGray)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PageData;

    #[test]
    fn test_post_height_counts_rows() {
        let data = PageData::sample();
        let like = LikeCounter::new(0);

        // post4: text only, one content line at a generous width.
        // author + meta + content + stats + actions + borders.
        let height = post_height(&data.posts[3], &LikeCounter::new(189), 200);
        assert_eq!(height, 7);

        // post2 adds a media line.
        let height = post_height(&data.posts[1], &LikeCounter::new(567), 200);
        assert_eq!(height, 8);

        // A bare post with no content, media, or engagement.
        let bare = Post {
            content: None,
            image_url: None,
            map_image_url: None,
            stats: crate::data::PostStats {
                likes: 0,
                comments: 0,
                shares: 0,
            },
            ..data.posts[3].clone()
        };
        assert_eq!(post_height(&bare, &like, 200), 5);
    }

    #[test]
    fn test_stats_row_appears_after_first_like() {
        let data = PageData::sample();
        let bare = Post {
            content: None,
            image_url: None,
            map_image_url: None,
            stats: crate::data::PostStats {
                likes: 0,
                comments: 0,
                shares: 0,
            },
            ..data.posts[3].clone()
        };

        let mut like = LikeCounter::new(0);
        assert!(stats_line(&bare, &like).is_none());

        like.toggle();
        let (left, right) = stats_line(&bare, &like).unwrap();
        assert_eq!(left, "1 Likes");
        assert!(right.is_empty());
    }

    #[test]
    fn test_scroll_keeps_selection_visible() {
        let data = PageData::sample();
        let mut feed = FeedState::new(&data.posts);
        let heights = vec![7, 8, 8, 7, 8];

        // Selecting the last card scrolls past the first few.
        feed.selected = 4;
        ensure_selected_visible(&mut feed, &heights, 16);
        assert_eq!(feed.scroll_top, 3);

        // Moving back up pulls the window with it.
        feed.selected = 0;
        ensure_selected_visible(&mut feed, &heights, 16);
        assert_eq!(feed.scroll_top, 0);
    }
}
