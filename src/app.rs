// App state and main event loop.
// Owns every panel's state and routes keyboard input to whichever panel has
// focus; popups and text inputs take keys before global bindings.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};
use ratatui::prelude::*;
use tui_input::{Input, InputRequest};

use crate::data::PageData;
use crate::state::{
    CarouselScroll, ChatPanel, FeedState, GroupsPanel, SidebarAction, SidebarState,
};
use crate::ui;

/// Page region that currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    Composer,
    Stories,
    #[default]
    Feed,
    Groups,
    Chat,
}

impl Focus {
    pub fn title(&self) -> &'static str {
        match self {
            Focus::Sidebar => "Sidebar",
            Focus::Composer => "Composer",
            Focus::Stories => "Stories",
            Focus::Feed => "Feed",
            Focus::Groups => "Groups",
            Focus::Chat => "Chat",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Focus::Sidebar => Focus::Composer,
            Focus::Composer => Focus::Stories,
            Focus::Stories => Focus::Feed,
            Focus::Feed => Focus::Groups,
            Focus::Groups => Focus::Chat,
            Focus::Chat => Focus::Sidebar,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Sidebar => Focus::Chat,
            Focus::Composer => Focus::Sidebar,
            Focus::Stories => Focus::Composer,
            Focus::Feed => Focus::Stories,
            Focus::Groups => Focus::Feed,
            Focus::Chat => Focus::Groups,
        }
    }

    /// True while keys should edit a text input rather than trigger
    /// bindings like `q` and `?`.
    fn captures_text(&self, chat_open: bool) -> bool {
        match self {
            Focus::Composer => true,
            Focus::Chat => chat_open,
            _ => false,
        }
    }
}

/// Main application state.
pub struct App {
    pub data: PageData,
    pub focus: Focus,
    pub sidebar: SidebarState,
    pub composer: Input,
    pub stories: CarouselScroll,
    pub feed: FeedState,
    pub groups: GroupsPanel,
    pub chat: ChatPanel,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(data: PageData) -> Self {
        let feed = FeedState::new(&data.posts);
        Self {
            data,
            focus: Focus::default(),
            sidebar: SidebarState::new(),
            composer: Input::default(),
            stories: CarouselScroll::new(),
            feed,
            groups: GroupsPanel::new(),
            chat: ChatPanel::new(),
            show_help: false,
            should_quit: false,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
            self.stories.tick();
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }
        if self.feed.menu.is_some() {
            self.handle_menu_key(key);
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            _ => {}
        }

        // Text inputs see printable keys first so bindings never steal
        // typed characters.
        if !self.focus.captures_text(self.chat.is_open()) {
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                    return;
                }
                _ => {}
            }
        }

        match self.focus {
            Focus::Sidebar => self.handle_sidebar_key(key),
            Focus::Composer => self.handle_composer_key(key),
            Focus::Stories => self.handle_stories_key(key),
            Focus::Feed => self.handle_feed_key(key),
            Focus::Groups => self.handle_groups_key(key),
            Focus::Chat => self.handle_chat_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => self.feed.close_menu(),
            KeyCode::Up | KeyCode::Char('k') => self.feed.menu_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.feed.menu_next(),
            KeyCode::Enter => {
                if let Some((post, action)) = self.feed.menu_choose() {
                    let id = &self.data.posts[post].id;
                    info!("post action '{action}' on {id}");
                }
            }
            _ => {}
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.sidebar.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.sidebar.move_down(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.sidebar.activate() {
                SidebarAction::Toggled { section, open } => {
                    info!(
                        "sidebar section {} {}",
                        section.label(),
                        if open { "expanded" } else { "collapsed" }
                    );
                }
                SidebarAction::Activated(label) => info!("sidebar entry opened: {label}"),
                SidebarAction::Profile => {
                    info!("profile opened: {}", self.data.current_user.name);
                }
            },
            _ => {}
        }
    }

    fn handle_composer_key(&mut self, key: KeyEvent) {
        if let Some(req) = edit_request(key) {
            if self.composer.handle(req).is_some() {
                debug!("composer draft: {} chars", self.composer.value().len());
            }
        }
    }

    fn handle_stories_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.stories.page_left();
                debug!("stories paged left");
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.stories.page_right();
                debug!("stories paged right");
            }
            _ => {}
        }
    }

    fn handle_feed_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.feed.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.feed.select_next(),
            KeyCode::Char(' ') => {
                if let Some(liked) = self.feed.like_selected() {
                    let post = &self.data.posts[self.feed.selected];
                    info!(
                        "{} {} ({} likes shown)",
                        if liked { "liked" } else { "unliked" },
                        post.id,
                        self.feed.likes[self.feed.selected].displayed()
                    );
                }
            }
            KeyCode::Char('m') => self.feed.open_menu(),
            _ => {}
        }
    }

    fn handle_groups_key(&mut self, key: KeyEvent) {
        let visible_len = self.groups.visible(&self.data.groups).len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.groups.select_prev(visible_len),
            KeyCode::Down | KeyCode::Char('j') => self.groups.select_next(visible_len),
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(id) = self.groups.dismiss_selected(&self.data.groups) {
                    info!("dismissed group suggestion {id}");
                }
            }
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        if !self.chat.is_open() {
            if key.code == KeyCode::Enter {
                self.chat.toggle_body();
                info!("chat widget expanded");
            }
            return;
        }

        match key.code {
            KeyCode::Enter => {
                self.chat.toggle_body();
                info!("chat widget collapsed");
            }
            KeyCode::Esc => {
                if !self.chat.query().is_empty() {
                    self.chat.clear_search();
                    debug!("chat search cleared");
                }
            }
            KeyCode::Up => {
                let len = self.chat.visible(&self.data.contacts).len();
                self.chat.select_prev(len);
            }
            KeyCode::Down => {
                let len = self.chat.visible(&self.data.contacts).len();
                self.chat.select_next(len);
            }
            _ => {
                if let Some(req) = edit_request(key) {
                    if self.chat.handle_search(req) {
                        debug!("chat search: {:?}", self.chat.query());
                    }
                }
            }
        }
    }
}

/// Map a key press onto a text-input edit, if it is one.
fn edit_request(key: KeyEvent) -> Option<InputRequest> {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputRequest::DeleteLine)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputRequest::InsertChar(c))
        }
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}
