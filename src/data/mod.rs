// Data model for the dashboard.
// All page content is plain data handed to the app at startup; nothing in
// this module talks to a network.

mod load;
mod sample;
mod types;

pub use types::{
    format_count, initials, Contact, CurrentUser, GroupSuggestion, Media, PageData, Post,
    PostStats, PostUser, Story,
};
