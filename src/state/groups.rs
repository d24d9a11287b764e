// Suggested-groups panel state.
// Wraps a DismissedSet with list selection over whatever is still visible.

use ratatui::widgets::ListState;

use super::dismiss::DismissedSet;
use crate::data::GroupSuggestion;

/// Selection plus dismissals for the suggested-groups panel.
#[derive(Debug)]
pub struct GroupsPanel {
    dismissed: DismissedSet,
    pub list_state: ListState,
}

impl GroupsPanel {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            dismissed: DismissedSet::new(),
            list_state,
        }
    }

    /// Suggestions not yet dismissed, in data order.
    pub fn visible<'a>(&self, groups: &'a [GroupSuggestion]) -> Vec<&'a GroupSuggestion> {
        self.dismissed.visible(groups, |group| group.id.as_str())
    }

    pub fn dismissed_count(&self) -> usize {
        self.dismissed.len()
    }

    pub fn select_next(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.list_state.select(None);
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
            self.list_state.select(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => visible_len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Dismiss the selected suggestion and keep the selection on the nearest
    /// remaining one. Returns the dismissed id.
    pub fn dismiss_selected(&mut self, groups: &[GroupSuggestion]) -> Option<String> {
        let visible = self.visible(groups);
        let i = self.list_state.selected()?;
        let group = visible.get(i)?;
        let id = group.id.clone();
        self.dismissed.dismiss(&id);

        let remaining = visible.len() - 1;
        if remaining == 0 {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(i.min(remaining - 1)));
        }
        Some(id)
    }

    /// Dismiss by id directly. Returns false when already dismissed.
    pub fn dismiss(&mut self, id: &str) -> bool {
        self.dismissed.dismiss(id)
    }
}

impl Default for GroupsPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PageData;

    #[test]
    fn test_dismiss_middle_keeps_order() {
        let data = PageData::sample();
        let mut panel = GroupsPanel::new();
        panel.select_next(3);

        let id = panel.dismiss_selected(&data.groups).unwrap();
        assert_eq!(id, "2");

        let names: Vec<&str> = panel
            .visible(&data.groups)
            .iter()
            .map(|group| group.name.as_str())
            .collect();
        assert_eq!(names, vec!["Mad Men (MADdicts)", "Rust Developers Hub"]);

        // The same id again is a no-op.
        assert!(!panel.dismiss("2"));
        assert_eq!(panel.visible(&data.groups).len(), 2);
    }

    #[test]
    fn test_dismiss_last_moves_selection_back() {
        let data = PageData::sample();
        let mut panel = GroupsPanel::new();
        panel.select_prev(3);
        assert_eq!(panel.list_state.selected(), Some(2));

        let id = panel.dismiss_selected(&data.groups).unwrap();
        assert_eq!(id, "3");
        assert_eq!(panel.list_state.selected(), Some(1));
    }

    #[test]
    fn test_dismiss_all_clears_selection() {
        let data = PageData::sample();
        let mut panel = GroupsPanel::new();

        for _ in 0..3 {
            panel.dismiss_selected(&data.groups);
        }
        assert!(panel.visible(&data.groups).is_empty());
        assert_eq!(panel.list_state.selected(), None);
        assert_eq!(panel.dismissed_count(), 3);

        // Nothing left to dismiss.
        assert_eq!(panel.dismiss_selected(&data.groups), None);
    }

    #[test]
    fn test_selection_wraps_over_visible() {
        let data = PageData::sample();
        let mut panel = GroupsPanel::new();
        panel.dismiss("1");

        let len = panel.visible(&data.groups).len();
        assert_eq!(len, 2);
        panel.select_next(len);
        panel.select_next(len);
        assert_eq!(panel.list_state.selected(), Some(0));
    }
}
