// Left navigation state.
// The nav entries are fixed tables; the mutable parts are the cursor and the
// open/closed state of the three collapsible sections.

use super::toggle::Toggle;

/// One navigation entry: glyph, label, and an optional count chip.
#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    pub icon: &'static str,
    pub label: &'static str,
    pub chip: Option<&'static str>,
}

const fn entry(icon: &'static str, label: &'static str) -> NavEntry {
    NavEntry {
        icon,
        label,
        chip: None,
    }
}

const fn entry_chip(icon: &'static str, label: &'static str, chip: &'static str) -> NavEntry {
    NavEntry {
        icon,
        label,
        chip: Some(chip),
    }
}

pub const MAIN_NAV: [NavEntry; 4] = [
    entry("📰", "News Feed"),
    entry("💬", "Messenger"),
    entry_chip("📺", "Watch", "9+"),
    entry("🏪", "Marketplace"),
];

pub const SHORTCUTS: [NavEntry; 2] = [
    entry("🎮", "FarmVille 2"),
    entry("🎮", "Your Favorite Game"),
];

pub const EXPLORE: [NavEntry; 5] = [
    entry_chip("📅", "Events", "12"),
    entry("🚩", "Pages"),
    entry_chip("👥", "Groups", "3 new"),
    entry("📋", "Friend Lists"),
    entry("🤝", "Fundraisers"),
];

pub const CREATE: [NavEntry; 5] = [
    entry("📢", "Ad"),
    entry("📄", "Page"),
    entry("👥", "Group"),
    entry("📅", "Event"),
    entry("💝", "Fundraiser"),
];

/// The three collapsible sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Shortcuts,
    Explore,
    Create,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Shortcuts => "Shortcuts",
            Section::Explore => "Explore",
            Section::Create => "Create",
        }
    }

    pub fn entries(&self) -> &'static [NavEntry] {
        match self {
            Section::Shortcuts => &SHORTCUTS,
            Section::Explore => &EXPLORE,
            Section::Create => &CREATE,
        }
    }
}

/// One selectable row in the rendered sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    /// The signed-in user's profile link.
    Profile,
    /// Index into MAIN_NAV.
    Nav(usize),
    /// A collapsible section header.
    Section(Section),
    /// Index into a section's entries.
    Item(Section, usize),
    Settings,
}

/// Result of activating the row under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    Toggled { section: Section, open: bool },
    Activated(&'static str),
    Profile,
}

/// Cursor plus section fold state for the sidebar.
#[derive(Debug)]
pub struct SidebarState {
    pub shortcuts: Toggle,
    pub explore: Toggle,
    pub create: Toggle,
    cursor: usize,
}

impl SidebarState {
    /// Shortcuts and Explore start open; Create starts closed since its
    /// entries are secondary actions.
    pub fn new() -> Self {
        Self {
            shortcuts: Toggle::new(true),
            explore: Toggle::new(true),
            create: Toggle::new(false),
            cursor: 0,
        }
    }

    pub fn is_open(&self, section: Section) -> bool {
        self.section_toggle(section).is_open()
    }

    fn section_toggle(&self, section: Section) -> &Toggle {
        match section {
            Section::Shortcuts => &self.shortcuts,
            Section::Explore => &self.explore,
            Section::Create => &self.create,
        }
    }

    fn section_toggle_mut(&mut self, section: Section) -> &mut Toggle {
        match section {
            Section::Shortcuts => &mut self.shortcuts,
            Section::Explore => &mut self.explore,
            Section::Create => &mut self.create,
        }
    }

    /// All rows currently visible, top to bottom. Collapsed sections
    /// contribute only their header row.
    pub fn rows(&self) -> Vec<SidebarRow> {
        let mut rows = vec![SidebarRow::Profile];
        rows.extend((0..MAIN_NAV.len()).map(SidebarRow::Nav));
        for section in [Section::Shortcuts, Section::Explore, Section::Create] {
            rows.push(SidebarRow::Section(section));
            if self.is_open(section) {
                rows.extend((0..section.entries().len()).map(|i| SidebarRow::Item(section, i)));
            }
        }
        rows.push(SidebarRow::Settings);
        rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The row under the cursor.
    pub fn cursor_row(&self) -> SidebarRow {
        let rows = self.rows();
        rows[self.cursor.min(rows.len() - 1)]
    }

    pub fn move_down(&mut self) {
        let len = self.rows().len();
        self.cursor = if self.cursor + 1 >= len {
            0
        } else {
            self.cursor + 1
        };
    }

    pub fn move_up(&mut self) {
        let len = self.rows().len();
        self.cursor = if self.cursor == 0 {
            len - 1
        } else {
            self.cursor - 1
        };
    }

    /// Act on the row under the cursor: section headers fold, everything
    /// else reports an activation.
    pub fn activate(&mut self) -> SidebarAction {
        match self.cursor_row() {
            SidebarRow::Profile => SidebarAction::Profile,
            SidebarRow::Nav(i) => SidebarAction::Activated(MAIN_NAV[i].label),
            SidebarRow::Section(section) => {
                let open = self.section_toggle_mut(section).toggle();
                let len = self.rows().len();
                self.cursor = self.cursor.min(len - 1);
                SidebarAction::Toggled { section, open }
            }
            SidebarRow::Item(section, i) => SidebarAction::Activated(section.entries()[i].label),
            SidebarRow::Settings => SidebarAction::Activated("Settings"),
        }
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_count(state: &SidebarState) -> usize {
        state.rows().len()
    }

    #[test]
    fn test_default_fold_state() {
        let state = SidebarState::new();
        assert!(state.is_open(Section::Shortcuts));
        assert!(state.is_open(Section::Explore));
        assert!(!state.is_open(Section::Create));

        // Profile + 4 nav + (1+2) shortcuts + (1+5) explore + 1 create
        // header + settings.
        assert_eq!(row_count(&state), 16);
        let rows = state.rows();
        assert_eq!(rows[0], SidebarRow::Profile);
        assert_eq!(*rows.last().unwrap(), SidebarRow::Settings);
        assert!(!rows
            .iter()
            .any(|row| matches!(row, SidebarRow::Item(Section::Create, _))));
    }

    #[test]
    fn test_toggle_create_reveals_entries() {
        let mut state = SidebarState::new();
        // Walk down to the Create header.
        while state.cursor_row() != SidebarRow::Section(Section::Create) {
            state.move_down();
        }

        let action = state.activate();
        assert_eq!(
            action,
            SidebarAction::Toggled {
                section: Section::Create,
                open: true
            }
        );
        assert_eq!(row_count(&state), 21);

        // Other sections are untouched.
        assert!(state.is_open(Section::Shortcuts));
        assert!(state.is_open(Section::Explore));

        let action = state.activate();
        assert_eq!(
            action,
            SidebarAction::Toggled {
                section: Section::Create,
                open: false
            }
        );
        assert_eq!(row_count(&state), 16);
    }

    #[test]
    fn test_collapse_shortcuts_keeps_cursor_valid() {
        let mut state = SidebarState::new();
        while state.cursor_row() != SidebarRow::Section(Section::Shortcuts) {
            state.move_down();
        }
        state.activate();
        assert_eq!(state.cursor_row(), SidebarRow::Section(Section::Shortcuts));
        assert_eq!(row_count(&state), 14);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut state = SidebarState::new();
        state.move_up();
        assert_eq!(state.cursor_row(), SidebarRow::Settings);
        state.move_down();
        assert_eq!(state.cursor_row(), SidebarRow::Profile);
    }

    #[test]
    fn test_activate_entries() {
        let mut state = SidebarState::new();
        assert_eq!(state.activate(), SidebarAction::Profile);

        state.move_down();
        assert_eq!(state.activate(), SidebarAction::Activated("News Feed"));

        while state.cursor_row() != SidebarRow::Item(Section::Explore, 2) {
            state.move_down();
        }
        assert_eq!(state.activate(), SidebarAction::Activated("Groups"));
    }
}
