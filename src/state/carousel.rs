// Horizontal scroll state for the story carousel.
// Paging moves a target offset one fixed step at a time; the rendered offset
// eases toward the target on each tick, so a key press mid-animation simply
// retargets the glide instead of queueing.

/// Width of one story tile in cells.
pub const TILE_WIDTH: u16 = 14;
/// Height of the carousel row in cells.
pub const TILE_HEIGHT: u16 = 9;
/// Gap between adjacent tiles.
pub const TILE_GAP: u16 = 1;
/// One paging step: two tiles plus their gaps.
pub const PAGE_STEP: u16 = 2 * (TILE_WIDTH + TILE_GAP);

/// Scroll position of the carousel strip.
#[derive(Debug, Default)]
pub struct CarouselScroll {
    offset: u16,
    target: u16,
    max_offset: u16,
}

impl CarouselScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset currently rendered.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Record the strip and viewport widths measured during layout. Both the
    /// target and the rendered offset are re-clamped, so a resize can never
    /// leave the strip stuck past its end.
    pub fn set_extent(&mut self, content_width: u16, viewport_width: u16) {
        self.max_offset = content_width.saturating_sub(viewport_width);
        self.target = self.target.min(self.max_offset);
        self.offset = self.offset.min(self.max_offset);
    }

    /// Page toward the start. At the start already, this is a no-op.
    pub fn page_left(&mut self) {
        self.target = self.target.saturating_sub(PAGE_STEP);
    }

    /// Page toward the end, clamped to the last fully scrolled position.
    pub fn page_right(&mut self) {
        self.target = (self.target + PAGE_STEP).min(self.max_offset);
    }

    /// Advance the glide one frame. Returns true while still moving.
    pub fn tick(&mut self) -> bool {
        if self.offset == self.target {
            return false;
        }
        let delta = self.offset.abs_diff(self.target);
        let step = (delta / 3).max(1);
        if self.offset < self.target {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        true
    }

    pub fn is_settled(&self) -> bool {
        self.offset == self.target
    }

    pub fn can_scroll_left(&self) -> bool {
        self.offset > 0
    }

    pub fn can_scroll_right(&self) -> bool {
        self.offset < self.max_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(scroll: &mut CarouselScroll) -> u32 {
        let mut frames = 0;
        while scroll.tick() {
            frames += 1;
            assert!(frames < 1_000, "glide failed to converge");
        }
        frames
    }

    #[test]
    fn test_page_right_moves_one_step() {
        let mut scroll = CarouselScroll::new();
        scroll.set_extent(90, 40);

        scroll.page_right();
        settle(&mut scroll);
        assert_eq!(scroll.offset(), PAGE_STEP);
    }

    #[test]
    fn test_clamps_at_both_ends() {
        let mut scroll = CarouselScroll::new();
        scroll.set_extent(90, 40); // max_offset = 50

        scroll.page_left();
        settle(&mut scroll);
        assert_eq!(scroll.offset(), 0);

        for _ in 0..10 {
            scroll.page_right();
        }
        settle(&mut scroll);
        assert_eq!(scroll.offset(), 50);

        scroll.page_right();
        settle(&mut scroll);
        assert_eq!(scroll.offset(), 50);
    }

    #[test]
    fn test_no_overflow_when_content_fits() {
        let mut scroll = CarouselScroll::new();
        scroll.set_extent(30, 40);

        scroll.page_right();
        settle(&mut scroll);
        assert_eq!(scroll.offset(), 0);
        assert!(!scroll.can_scroll_left());
        assert!(!scroll.can_scroll_right());
    }

    #[test]
    fn test_retarget_mid_glide_wins() {
        let mut scroll = CarouselScroll::new();
        scroll.set_extent(200, 40);

        scroll.page_right();
        scroll.tick();
        scroll.tick();
        assert!(!scroll.is_settled());

        // Reversing mid-glide glides back from wherever the strip is now.
        scroll.page_left();
        settle(&mut scroll);
        assert_eq!(scroll.offset(), 0);

        // Pressing twice quickly lands two steps out, not one.
        scroll.page_right();
        scroll.tick();
        scroll.page_right();
        settle(&mut scroll);
        assert_eq!(scroll.offset(), 2 * PAGE_STEP);
    }

    #[test]
    fn test_glide_eases_out() {
        let mut scroll = CarouselScroll::new();
        scroll.set_extent(200, 40);
        scroll.page_right();

        let mut last = scroll.offset();
        let mut steps = Vec::new();
        while scroll.tick() {
            steps.push(scroll.offset() - last);
            last = scroll.offset();
        }
        // Strictly decelerating until the final 1-cell steps.
        for pair in steps.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        assert_eq!(last, PAGE_STEP);
    }

    #[test]
    fn test_shrinking_extent_reclamps() {
        let mut scroll = CarouselScroll::new();
        scroll.set_extent(200, 40);
        for _ in 0..5 {
            scroll.page_right();
        }
        settle(&mut scroll);
        assert_eq!(scroll.offset(), 150);

        // Viewport grew; the old offset would overshoot the new end.
        scroll.set_extent(200, 120);
        assert_eq!(scroll.offset(), 80);
        assert!(scroll.is_settled());
    }
}
