use std::time::Duration;

/// How long each review stays on screen while autoplay is on.
pub const AUTOPLAY_PERIOD: Duration = Duration::from_secs(5);

/// Index cycling for the review carousel.
///
/// Autoplay advances with `tick`; any manual move turns it off for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    autoplay: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            autoplay: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    /// Autoplay step. Does nothing once the user has taken over.
    pub fn tick(&mut self) {
        if self.autoplay && self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn next(&mut self) {
        self.autoplay = false;
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        self.autoplay = false;
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a dot. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        self.autoplay = false;
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_wraps_around() {
        let mut c = Carousel::new(3);
        c.tick();
        c.tick();
        assert_eq!(c.index(), 2);
        c.tick();
        assert_eq!(c.index(), 0);
        assert!(c.is_autoplay());
    }

    #[test]
    fn test_prev_from_first_goes_to_last() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.index(), 3);
        assert!(!c.is_autoplay());
    }

    #[test]
    fn test_manual_navigation_stops_autoplay() {
        let mut c = Carousel::new(2);
        c.next();
        assert_eq!(c.index(), 1);
        c.tick();
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut c = Carousel::new(2);
        c.select(1);
        assert_eq!(c.index(), 1);
        c.select(5);
        assert_eq!(c.index(), 1);
        assert!(!c.is_autoplay());
    }

    #[test]
    fn test_empty_carousel_never_moves() {
        let mut c = Carousel::new(0);
        assert!(c.is_empty());
        c.tick();
        c.next();
        c.prev();
        c.select(0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_single_review_stays_put() {
        let mut c = Carousel::new(1);
        c.tick();
        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
    }
}
