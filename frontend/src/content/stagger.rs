/// Per-item transition delay for a list: `base + index * step` milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(base_ms: u32, step_ms: u32) -> Self {
        Self { base_ms, step_ms }
    }

    pub fn delay(&self, index: usize) -> u32 {
        self.base_ms + index as u32 * self.step_ms
    }
}

pub const STAT_CARDS: Stagger = Stagger::new(200, 200);
pub const INTERNATIONAL_MATCHES: Stagger = Stagger::new(600, 100);
pub const IPL_MATCHES: Stagger = Stagger::new(800, 100);
pub const TIMELINE_EVENTS: Stagger = Stagger::new(200, 150);
pub const GALLERY_IMAGES: Stagger = Stagger::new(200, 100);
pub const NEWS_CARDS: Stagger = Stagger::new(200, 200);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn news_cards_step_by_200() {
        assert_eq!(NEWS_CARDS.delay(0), 200);
        assert_eq!(NEWS_CARDS.delay(1), 400);
        assert_eq!(NEWS_CARDS.delay(2), 600);
    }

    #[test]
    fn gallery_images_step_by_100() {
        assert_eq!(GALLERY_IMAGES.delay(0), 200);
        assert_eq!(GALLERY_IMAGES.delay(3), 500);
        assert_eq!(GALLERY_IMAGES.delay(5), 700);
    }

    #[test]
    fn timeline_events_step_by_150() {
        assert_eq!(TIMELINE_EVENTS.delay(0), 200);
        assert_eq!(TIMELINE_EVENTS.delay(1), 350);
        assert_eq!(TIMELINE_EVENTS.delay(7), 1250);
    }

    #[test]
    fn stat_cards_and_match_lists() {
        let cards: Vec<_> = (0..4).map(|i| STAT_CARDS.delay(i)).collect();
        assert_eq!(cards, [200, 400, 600, 800]);
        assert_eq!(INTERNATIONAL_MATCHES.delay(2), 800);
        assert_eq!(IPL_MATCHES.delay(0), 800);
        assert_eq!(IPL_MATCHES.delay(2), 1000);
    }
}
