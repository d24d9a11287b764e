// Dismissed-item tracking.
// Dismissal is permanent for the life of the app and idempotent; items are
// hidden by id rather than removed from the source data.

use std::collections::HashSet;

/// Set of dismissed item ids.
#[derive(Debug, Default)]
pub struct DismissedSet {
    ids: HashSet<String>,
}

impl DismissedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dismiss an id. Returns false when it was already dismissed, so a
    /// repeated dismissal never double-counts.
    pub fn dismiss(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Items not yet dismissed, in their original order. `key` extracts the
    /// id from an item.
    pub fn visible<'a, T>(&self, items: &'a [T], key: impl Fn(&T) -> &str) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| !self.ids.contains(key(item)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut dismissed = DismissedSet::new();
        assert!(dismissed.dismiss("2"));
        assert!(!dismissed.dismiss("2"));
        assert_eq!(dismissed.len(), 1);
    }

    #[test]
    fn test_visible_preserves_order() {
        let items = vec![
            ("1", "one"),
            ("2", "two"),
            ("3", "three"),
        ];
        let mut dismissed = DismissedSet::new();
        dismissed.dismiss("2");
        dismissed.dismiss("2");

        let visible = dismissed.visible(&items, |item| item.0);
        let ids: Vec<&str> = visible.iter().map(|item| item.0).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_unknown_id_hides_nothing() {
        let items = vec![("1", "one")];
        let mut dismissed = DismissedSet::new();
        dismissed.dismiss("99");

        assert_eq!(dismissed.visible(&items, |item| item.0).len(), 1);
    }

    #[test]
    fn test_all_dismissed_yields_empty() {
        let items = vec![("1", "one"), ("2", "two")];
        let mut dismissed = DismissedSet::new();
        dismissed.dismiss("1");
        dismissed.dismiss("2");

        assert!(dismissed.visible(&items, |item| item.0).is_empty());
    }
}
