// Boolean open/closed state for collapsible panels and sections.

/// Two-state toggle. Each instance is independent; flipping one never
/// affects another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    open: bool,
}

impl Toggle {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the state and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn set(&mut self, open: bool) {
        self.open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involutive() {
        let mut toggle = Toggle::new(true);
        assert!(toggle.is_open());
        assert!(!toggle.toggle());
        assert!(toggle.toggle());
        assert!(toggle.is_open());
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut shortcuts = Toggle::new(true);
        let mut create = Toggle::new(false);

        shortcuts.toggle();
        assert!(!shortcuts.is_open());
        assert!(!create.is_open());

        create.toggle();
        assert!(create.is_open());
        assert!(!shortcuts.is_open());
    }
}
