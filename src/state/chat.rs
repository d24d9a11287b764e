// Floating chat widget state.
// The header row is always present; the search box and contact list only
// exist while the body is expanded. Collapsing clears the search so the
// widget reopens showing everyone.

use ratatui::widgets::ListState;
use tui_input::{Input, InputRequest};

use super::filter::filter_by_name;
use super::toggle::Toggle;
use crate::data::Contact;

/// State for the chat widget: fold, search query, and contact selection.
#[derive(Debug)]
pub struct ChatPanel {
    pub body: Toggle,
    pub search: Input,
    pub list_state: ListState,
}

impl ChatPanel {
    /// The widget starts expanded.
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            body: Toggle::new(true),
            search: Input::default(),
            list_state,
        }
    }

    pub fn is_open(&self) -> bool {
        self.body.is_open()
    }

    /// Fold or unfold the body. Collapsing resets the search and selection.
    pub fn toggle_body(&mut self) -> bool {
        let open = self.body.toggle();
        if !open {
            self.search.reset();
            self.list_state.select(Some(0));
        }
        open
    }

    pub fn query(&self) -> &str {
        self.search.value()
    }

    /// Contacts matching the current query, in data order.
    pub fn visible<'a>(&self, contacts: &'a [Contact]) -> Vec<&'a Contact> {
        filter_by_name(contacts, self.query())
    }

    /// Apply an edit to the search box. When the query text changes the
    /// selection snaps back to the top of the filtered list.
    pub fn handle_search(&mut self, req: InputRequest) -> bool {
        match self.search.handle(req) {
            Some(change) if change.value => {
                self.list_state.select(Some(0));
                true
            }
            _ => false,
        }
    }

    /// Empty the search box without folding the widget.
    pub fn clear_search(&mut self) {
        self.search.reset();
        self.list_state.select(Some(0));
    }

    pub fn select_next(&mut self, visible_len: usize) {
        if visible_len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < visible_len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_prev(&mut self, visible_len: usize) {
        if visible_len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => visible_len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Total unread messages across all contacts, shown on the header row.
pub fn unread_total(contacts: &[Contact]) -> u32 {
    contacts
        .iter()
        .filter_map(|contact| contact.unread_count)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PageData;

    #[test]
    fn test_starts_open_with_full_list() {
        let data = PageData::sample();
        let chat = ChatPanel::new();
        assert!(chat.is_open());
        assert_eq!(chat.visible(&data.contacts).len(), 6);
    }

    #[test]
    fn test_typed_query_filters() {
        let data = PageData::sample();
        let mut chat = ChatPanel::new();
        for ch in "ALI".chars() {
            chat.handle_search(InputRequest::InsertChar(ch));
        }

        let visible = chat.visible(&data.contacts);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");

        chat.handle_search(InputRequest::DeletePrevChar);
        chat.handle_search(InputRequest::DeletePrevChar);
        chat.handle_search(InputRequest::DeletePrevChar);
        assert_eq!(chat.visible(&data.contacts).len(), 6);
    }

    #[test]
    fn test_query_change_resets_selection() {
        let data = PageData::sample();
        let mut chat = ChatPanel::new();
        chat.select_next(6);
        chat.select_next(6);
        assert_eq!(chat.list_state.selected(), Some(2));

        assert!(chat.handle_search(InputRequest::InsertChar('d')));
        assert_eq!(chat.list_state.selected(), Some(0));

        // Cursor-only movements leave the selection alone.
        chat.select_next(chat.visible(&data.contacts).len());
        let before = chat.list_state.selected();
        assert!(!chat.handle_search(InputRequest::GoToStart));
        assert_eq!(chat.list_state.selected(), before);
    }

    #[test]
    fn test_collapse_clears_search() {
        let data = PageData::sample();
        let mut chat = ChatPanel::new();
        for ch in "fiona".chars() {
            chat.handle_search(InputRequest::InsertChar(ch));
        }
        assert_eq!(chat.visible(&data.contacts).len(), 1);

        assert!(!chat.toggle_body());
        assert_eq!(chat.query(), "");

        // Reopening shows the unfiltered list again.
        assert!(chat.toggle_body());
        assert_eq!(chat.visible(&data.contacts).len(), 6);
    }

    #[test]
    fn test_unread_total() {
        let data = PageData::sample();
        assert_eq!(unread_total(&data.contacts), 3);
        assert_eq!(unread_total(&[]), 0);
    }
}
