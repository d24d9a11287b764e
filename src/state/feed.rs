// Feed state: per-post like toggles, card selection, and the overflow menu.

use super::like::LikeCounter;
use crate::data::Post;

/// Entries in a post's overflow menu, as (glyph, label).
pub const POST_MENU_ITEMS: [(&str, &str); 4] = [
    ("🔖", "Save post"),
    ("🔔", "Turn on notifications"),
    ("🚩", "Report post"),
    ("✖", "Hide post"),
];

/// An open overflow menu, anchored to one post.
#[derive(Debug, Clone, Copy)]
pub struct PostMenu {
    pub post: usize,
    pub selected: usize,
}

/// Selection, scroll position, and like state for the post feed.
#[derive(Debug)]
pub struct FeedState {
    pub likes: Vec<LikeCounter>,
    pub selected: usize,
    /// Index of the first card currently rendered.
    pub scroll_top: usize,
    pub menu: Option<PostMenu>,
}

impl FeedState {
    pub fn new(posts: &[Post]) -> Self {
        Self {
            likes: posts
                .iter()
                .map(|post| LikeCounter::new(post.stats.likes))
                .collect(),
            selected: 0,
            scroll_top: 0,
            menu: None,
        }
    }

    pub fn len(&self) -> usize {
        self.likes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.likes.is_empty()
    }

    pub fn select_next(&mut self) {
        if self.likes.is_empty() {
            return;
        }
        self.selected = if self.selected + 1 >= self.likes.len() {
            0
        } else {
            self.selected + 1
        };
    }

    pub fn select_prev(&mut self) {
        if self.likes.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.likes.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// Toggle the like on the selected post. Returns the new state.
    pub fn like_selected(&mut self) -> Option<bool> {
        self.likes.get_mut(self.selected).map(LikeCounter::toggle)
    }

    /// Open the overflow menu for the selected post.
    pub fn open_menu(&mut self) {
        if !self.likes.is_empty() {
            self.menu = Some(PostMenu {
                post: self.selected,
                selected: 0,
            });
        }
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    pub fn menu_next(&mut self) {
        if let Some(menu) = &mut self.menu {
            menu.selected = (menu.selected + 1) % POST_MENU_ITEMS.len();
        }
    }

    pub fn menu_prev(&mut self) {
        if let Some(menu) = &mut self.menu {
            menu.selected = if menu.selected == 0 {
                POST_MENU_ITEMS.len() - 1
            } else {
                menu.selected - 1
            };
        }
    }

    /// Confirm the highlighted menu entry, closing the menu. Returns the
    /// post index and the entry label.
    pub fn menu_choose(&mut self) -> Option<(usize, &'static str)> {
        self.menu
            .take()
            .map(|menu| (menu.post, POST_MENU_ITEMS[menu.selected].1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PageData;

    fn feed() -> FeedState {
        FeedState::new(&PageData::sample().posts)
    }

    #[test]
    fn test_likes_seed_from_stats() {
        let feed = feed();
        assert_eq!(feed.len(), 5);
        assert_eq!(feed.likes[0].displayed(), 152);
        assert_eq!(feed.likes[1].displayed(), 567);
    }

    #[test]
    fn test_like_only_touches_selected_post() {
        let mut feed = feed();
        feed.selected = 1;

        assert_eq!(feed.like_selected(), Some(true));
        assert_eq!(feed.likes[1].displayed(), 568);
        assert_eq!(feed.likes[0].displayed(), 152);

        assert_eq!(feed.like_selected(), Some(false));
        assert_eq!(feed.likes[1].displayed(), 567);
    }

    #[test]
    fn test_selection_wraps() {
        let mut feed = feed();
        feed.select_prev();
        assert_eq!(feed.selected, 4);
        feed.select_next();
        assert_eq!(feed.selected, 0);
    }

    #[test]
    fn test_menu_cycle_and_choose() {
        let mut feed = feed();
        feed.selected = 2;
        feed.open_menu();

        feed.menu_prev();
        let (post, label) = feed.menu_choose().unwrap();
        assert_eq!(post, 2);
        assert_eq!(label, "Hide post");
        assert!(feed.menu.is_none());
    }

    #[test]
    fn test_empty_feed_has_no_menu() {
        let mut feed = FeedState::new(&[]);
        feed.open_menu();
        assert!(feed.menu.is_none());
        assert_eq!(feed.like_selected(), None);
    }
}
