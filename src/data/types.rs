// Page data types.
// Defines the fixed entities rendered by the dashboard: contacts, stories,
// group suggestions, posts, and the signed-in user.

use serde::{Deserialize, Serialize};

use crate::error::{FeedDeckError, Result};

/// A chat contact shown in the floating chat widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
    pub is_online: bool,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub unread_count: Option<u32>,
}

/// A story tile in the horizontal carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub user_name: String,
    pub user_avatar_url: String,
    pub story_image_url: String,
    #[serde(default)]
    pub is_viewed: bool,
}

/// A group suggestion in the right-hand panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSuggestion {
    pub id: String,
    pub name: String,
    pub member_count: u32,
    pub banner_image_url: String,
    /// Ordered member avatars; display truncates to the first four.
    #[serde(default)]
    pub member_avatar_urls: Vec<String>,
}

/// Author block on a post card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostUser {
    pub name: String,
    pub avatar_url: String,
}

/// Static engagement counts seeded into a post card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PostStats {
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
}

/// A feed post. `timestamp` is an opaque display string, never parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub user: PostUser,
    pub timestamp: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub map_image_url: Option<String>,
    pub stats: PostStats,
}

/// Media attachment resolved for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media<'a> {
    Photo(&'a str),
    Map(&'a str),
}

impl Post {
    /// The single media item to render. A post shows at most one even when
    /// both fields are set; the photo wins over the map.
    pub fn media(&self) -> Option<Media<'_>> {
        if let Some(url) = &self.image_url {
            Some(Media::Photo(url))
        } else {
            self.map_image_url.as_deref().map(Media::Map)
        }
    }
}

/// The signed-in user, passed down through composition and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub avatar_url: String,
    #[serde(default)]
    pub first_name: Option<String>,
}

impl CurrentUser {
    /// Short name for greetings; falls back to the first word of the name.
    pub fn short_name(&self) -> &str {
        match &self.first_name {
            Some(first) => first,
            None => self.name.split_whitespace().next().unwrap_or(&self.name),
        }
    }
}

/// Everything the page renders, supplied to the app at startup.
/// An explicit argument rather than a module-level singleton so the same
/// components can later be driven by a real data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageData {
    pub current_user: CurrentUser,
    pub contacts: Vec<Contact>,
    pub stories: Vec<Story>,
    pub groups: Vec<GroupSuggestion>,
    pub posts: Vec<Post>,
}

impl PageData {
    /// Check that ids are unique within each list.
    pub fn validate(&self) -> Result<()> {
        check_unique_ids("contact", self.contacts.iter().map(|c| c.id.as_str()))?;
        check_unique_ids("story", self.stories.iter().map(|s| s.id.as_str()))?;
        check_unique_ids("group", self.groups.iter().map(|g| g.id.as_str()))?;
        check_unique_ids("post", self.posts.iter().map(|p| p.id.as_str()))?;
        Ok(())
    }
}

fn check_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FeedDeckError::Data(format!("duplicate {kind} id: {id}")));
        }
    }
    Ok(())
}

/// Initials for an avatar chip, e.g. "Olenna Mason" -> "OM".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Thousands-separated count, e.g. 6195 -> "6,195".
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_media(image: Option<&str>, map: Option<&str>) -> Post {
        Post {
            id: "p".to_string(),
            user: PostUser {
                name: "Test User".to_string(),
                avatar_url: String::new(),
            },
            timestamp: "now".to_string(),
            location: None,
            content: None,
            image_url: image.map(String::from),
            map_image_url: map.map(String::from),
            stats: PostStats {
                likes: 0,
                comments: 0,
                shares: 0,
            },
        }
    }

    #[test]
    fn test_media_prefers_photo() {
        let post = post_with_media(Some("photo.png"), Some("map.png"));
        assert_eq!(post.media(), Some(Media::Photo("photo.png")));

        let post = post_with_media(None, Some("map.png"));
        assert_eq!(post.media(), Some(Media::Map("map.png")));

        let post = post_with_media(None, None);
        assert_eq!(post.media(), None);
    }

    #[test]
    fn test_short_name_fallback() {
        let user = CurrentUser {
            name: "Olenna Mason".to_string(),
            avatar_url: String::new(),
            first_name: None,
        };
        assert_eq!(user.short_name(), "Olenna");

        let user = CurrentUser {
            first_name: Some("Lenna".to_string()),
            ..user
        };
        assert_eq!(user.short_name(), "Lenna");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Olenna Mason"), "OM");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("TechLead Tom"), "TT");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(6195), "6,195");
        assert_eq!(format_count(12050), "12,050");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
