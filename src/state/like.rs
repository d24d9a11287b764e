// Per-post like state.
// The displayed count is derived from the seeded stat plus the viewer's own
// like, so toggling can never drift the count.

/// Like toggle for a single post.
#[derive(Debug, Clone, Copy)]
pub struct LikeCounter {
    base: u32,
    liked: bool,
}

impl LikeCounter {
    /// Start from the post's seeded like count, unliked.
    pub fn new(base: u32) -> Self {
        Self { base, liked: false }
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    /// Flip the viewer's like and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.liked = !self.liked;
        self.liked
    }

    /// Count to display: the seeded count plus one while liked.
    pub fn displayed(&self) -> u32 {
        self.base + self.liked as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adjusts_displayed_count() {
        let mut like = LikeCounter::new(152);
        assert_eq!(like.displayed(), 152);

        assert!(like.toggle());
        assert_eq!(like.displayed(), 153);

        assert!(!like.toggle());
        assert_eq!(like.displayed(), 152);
    }

    #[test]
    fn test_repeated_toggles_never_drift() {
        let mut like = LikeCounter::new(567);
        for _ in 0..101 {
            like.toggle();
        }
        assert!(like.is_liked());
        assert_eq!(like.displayed(), 568);

        like.toggle();
        assert_eq!(like.displayed(), 567);
    }

    #[test]
    fn test_zero_base() {
        let mut like = LikeCounter::new(0);
        like.toggle();
        assert_eq!(like.displayed(), 1);
        like.toggle();
        assert_eq!(like.displayed(), 0);
    }
}
