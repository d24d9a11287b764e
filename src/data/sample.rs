// Built-in sample dataset.
// Used when no --data file is given, and as the fixture for tests.

use super::types::{
    Contact, CurrentUser, GroupSuggestion, PageData, Post, PostStats, PostUser, Story,
};

impl PageData {
    /// The bundled demo dataset.
    pub fn sample() -> Self {
        PageData {
            current_user: CurrentUser {
                name: "Olenna Mason".to_string(),
                avatar_url: "https://via.placeholder.com/40x40.png?text=OM".to_string(),
                first_name: Some("Olenna".to_string()),
            },
            contacts: sample_contacts(),
            stories: sample_stories(),
            groups: sample_groups(),
            posts: sample_posts(),
        }
    }
}

fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: "1".to_string(),
            name: "Alice Wonderland".to_string(),
            avatar_url: "https://via.placeholder.com/32x32.png?text=AW".to_string(),
            is_online: true,
            last_message: Some("Hey, how are you?".to_string()),
            unread_count: Some(2),
        },
        Contact {
            id: "2".to_string(),
            name: "Bob The Builder".to_string(),
            avatar_url: "https://via.placeholder.com/32x32.png?text=BB".to_string(),
            is_online: true,
            last_message: Some("Can we fix it?".to_string()),
            unread_count: None,
        },
        Contact {
            id: "3".to_string(),
            name: "Charlie Chaplin".to_string(),
            avatar_url: "https://via.placeholder.com/32x32.png?text=CC".to_string(),
            is_online: false,
            last_message: Some("A day without laughter...".to_string()),
            unread_count: None,
        },
        Contact {
            id: "4".to_string(),
            name: "Diana Prince".to_string(),
            avatar_url: "https://via.placeholder.com/32x32.png?text=DP".to_string(),
            is_online: true,
            last_message: None,
            unread_count: Some(1),
        },
        Contact {
            id: "5".to_string(),
            name: "Edward Scissorhands".to_string(),
            avatar_url: "https://via.placeholder.com/32x32.png?text=ES".to_string(),
            is_online: false,
            last_message: None,
            unread_count: None,
        },
        Contact {
            id: "6".to_string(),
            name: "Fiona Gallagher".to_string(),
            avatar_url: "https://via.placeholder.com/32x32.png?text=FG".to_string(),
            is_online: true,
            last_message: Some("Running late!".to_string()),
            unread_count: None,
        },
    ]
}

fn sample_stories() -> Vec<Story> {
    vec![
        Story {
            id: "1".to_string(),
            user_name: "Jane Doe".to_string(),
            user_avatar_url: "https://via.placeholder.com/40x40.png?text=JD".to_string(),
            story_image_url: "https://via.placeholder.com/110x200.png?text=Story1".to_string(),
            is_viewed: false,
        },
        Story {
            id: "2".to_string(),
            user_name: "John Smith".to_string(),
            user_avatar_url: "https://via.placeholder.com/40x40.png?text=JS".to_string(),
            story_image_url: "https://via.placeholder.com/110x200.png?text=Story2".to_string(),
            is_viewed: false,
        },
        Story {
            id: "3".to_string(),
            user_name: "Alice Green".to_string(),
            user_avatar_url: "https://via.placeholder.com/40x40.png?text=AG".to_string(),
            story_image_url: "https://via.placeholder.com/110x200.png?text=Story3".to_string(),
            is_viewed: true,
        },
        Story {
            id: "4".to_string(),
            user_name: "Bob White".to_string(),
            user_avatar_url: "https://via.placeholder.com/40x40.png?text=BW".to_string(),
            story_image_url: "https://via.placeholder.com/110x200.png?text=Story4".to_string(),
            is_viewed: false,
        },
        Story {
            id: "5".to_string(),
            user_name: "Carol Black".to_string(),
            user_avatar_url: "https://via.placeholder.com/40x40.png?text=CB".to_string(),
            story_image_url: "https://via.placeholder.com/110x200.png?text=Story5".to_string(),
            is_viewed: true,
        },
        Story {
            id: "6".to_string(),
            user_name: "Dave Brown".to_string(),
            user_avatar_url: "https://via.placeholder.com/40x40.png?text=DB".to_string(),
            story_image_url: "https://via.placeholder.com/110x200.png?text=Story6".to_string(),
            is_viewed: false,
        },
    ]
}

fn sample_groups() -> Vec<GroupSuggestion> {
    vec![
        GroupSuggestion {
            id: "1".to_string(),
            name: "Mad Men (MADdicts)".to_string(),
            member_count: 6195,
            banner_image_url: "https://via.placeholder.com/280x100.png?text=MadMen".to_string(),
            member_avatar_urls: vec![
                "https://via.placeholder.com/24x24.png?text=M1".to_string(),
                "https://via.placeholder.com/24x24.png?text=M2".to_string(),
                "https://via.placeholder.com/24x24.png?text=M3".to_string(),
                "https://via.placeholder.com/24x24.png?text=M4".to_string(),
            ],
        },
        GroupSuggestion {
            id: "2".to_string(),
            name: "Dexter Morgan Fans".to_string(),
            member_count: 6984,
            banner_image_url: "https://via.placeholder.com/280x100.png?text=Dexter".to_string(),
            member_avatar_urls: vec![
                "https://via.placeholder.com/24x24.png?text=D1".to_string(),
                "https://via.placeholder.com/24x24.png?text=D2".to_string(),
                "https://via.placeholder.com/24x24.png?text=D3".to_string(),
            ],
        },
        GroupSuggestion {
            id: "3".to_string(),
            name: "Rust Developers Hub".to_string(),
            member_count: 12050,
            banner_image_url: "https://via.placeholder.com/280x100.png?text=Rust".to_string(),
            member_avatar_urls: vec![
                "https://via.placeholder.com/24x24.png?text=R1".to_string(),
                "https://via.placeholder.com/24x24.png?text=R2".to_string(),
                "https://via.placeholder.com/24x24.png?text=R3".to_string(),
                "https://via.placeholder.com/24x24.png?text=R4".to_string(),
                "https://via.placeholder.com/24x24.png?text=R5".to_string(),
            ],
        },
    ]
}

fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: "post1".to_string(),
            user: PostUser {
                name: "Julia Fillory".to_string(),
                avatar_url: "https://via.placeholder.com/40x40.png?text=JF".to_string(),
            },
            timestamp: "2 hrs ago".to_string(),
            location: Some("Raleigh, North Carolina".to_string()),
            content: Some("Checking out some new stores downtown!".to_string()),
            image_url: None,
            map_image_url: Some("https://via.placeholder.com/600x300.png?text=Map".to_string()),
            stats: PostStats {
                likes: 152,
                comments: 18,
                shares: 7,
            },
        },
        Post {
            id: "post2".to_string(),
            user: PostUser {
                name: "Alex Chen".to_string(),
                avatar_url: "https://via.placeholder.com/40x40.png?text=AC".to_string(),
            },
            timestamp: "5 hrs ago".to_string(),
            location: None,
            content: Some(
                "Just adopted this little guy! Everyone, meet Whiskers. 🐱".to_string(),
            ),
            image_url: Some("https://via.placeholder.com/600x400.png?text=Kitten".to_string()),
            map_image_url: None,
            stats: PostStats {
                likes: 567,
                comments: 123,
                shares: 45,
            },
        },
        Post {
            id: "post3".to_string(),
            user: PostUser {
                name: "Maria Rodriguez".to_string(),
                avatar_url: "https://via.placeholder.com/40x40.png?text=MR".to_string(),
            },
            timestamp: "1 day ago".to_string(),
            location: None,
            content: Some(
                "Sunrise over the Grand Canyon. Absolutely breathtaking. No filter needed!"
                    .to_string(),
            ),
            image_url: Some("https://via.placeholder.com/600x400.png?text=Canyon".to_string()),
            map_image_url: None,
            stats: PostStats {
                likes: 320,
                comments: 45,
                shares: 22,
            },
        },
        Post {
            id: "post4".to_string(),
            user: PostUser {
                name: "TechLead Tom".to_string(),
                avatar_url: "https://via.placeholder.com/40x40.png?text=TT".to_string(),
            },
            timestamp: "2 days ago".to_string(),
            location: None,
            content: Some(
                "Hot take: code reviews should focus on architecture and correctness, \
                 not formatting nitpicks. That's what linters are for. Discuss."
                    .to_string(),
            ),
            image_url: None,
            map_image_url: None,
            stats: PostStats {
                likes: 189,
                comments: 33,
                shares: 15,
            },
        },
        Post {
            id: "post5".to_string(),
            user: PostUser {
                name: "Creative Corner".to_string(),
                avatar_url: "https://via.placeholder.com/40x40.png?text=CC".to_string(),
            },
            timestamp: "Jan 15 at 10:00 AM".to_string(),
            location: None,
            content: Some(
                "Our weekly art challenge theme is: REFLECTIONS. Submit your pieces by Friday!"
                    .to_string(),
            ),
            image_url: Some("https://via.placeholder.com/600x400.png?text=Art".to_string()),
            map_image_url: None,
            stats: PostStats {
                likes: 412,
                comments: 67,
                shares: 30,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_is_valid() {
        let data = PageData::sample();
        data.validate().unwrap();
        assert_eq!(data.contacts.len(), 6);
        assert_eq!(data.stories.len(), 6);
        assert_eq!(data.groups.len(), 3);
        assert_eq!(data.posts.len(), 5);
    }

    #[test]
    fn test_sample_post_media_kinds() {
        let data = PageData::sample();
        // post1 carries only a map, post4 no media at all.
        assert!(data.posts[0].image_url.is_none());
        assert!(data.posts[0].map_image_url.is_some());
        assert!(data.posts[3].media().is_none());
    }
}
