// State management module.
// Holds the interactive state behind each dashboard region; rendering reads
// these, key handling mutates them.

#![allow(dead_code)]

pub mod carousel;
pub mod chat;
pub mod dismiss;
pub mod feed;
pub mod filter;
pub mod groups;
pub mod like;
pub mod sidebar;
pub mod toggle;

pub use carousel::{CarouselScroll, PAGE_STEP, TILE_GAP, TILE_HEIGHT, TILE_WIDTH};
pub use chat::{unread_total, ChatPanel};
pub use dismiss::DismissedSet;
pub use feed::{FeedState, PostMenu, POST_MENU_ITEMS};
pub use filter::{filter_by_name, name_matches};
pub use groups::GroupsPanel;
pub use like::LikeCounter;
pub use sidebar::{NavEntry, Section, SidebarAction, SidebarRow, SidebarState, MAIN_NAV};
pub use toggle::Toggle;
