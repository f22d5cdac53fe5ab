//! Detail Sidebar State
//!
//! The single detail panel opened from map pins. It owns its own image
//! carousel, independent of every card carousel.

use leptos_deck::Carousel;

use crate::models::Item;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarState {
    record: Option<Item>,
    carousel: Carousel,
}

impl SidebarState {
    /// Show `item`, replacing any previous record and rewinding the images
    pub fn open(&mut self, item: Item) {
        self.carousel = Carousel::new(item.images.len());
        self.record = Some(item);
    }

    pub fn close(&mut self) {
        self.record = None;
    }

    pub fn is_open(&self) -> bool {
        self.record.is_some()
    }

    pub fn record(&self) -> Option<&Item> {
        self.record.as_ref()
    }

    pub fn carousel(&self) -> Carousel {
        self.carousel
    }

    pub fn next_image(&mut self) {
        self.carousel.next();
    }

    pub fn prev_image(&mut self) {
        self.carousel.prev();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, images: &[&str]) -> Item {
        Item::new(name).with_images(images)
    }

    #[test]
    fn test_open_replaces_and_resets_index() {
        let mut sidebar = SidebarState::default();
        sidebar.open(record("Fushimi Inari", &["a", "b", "c"]));
        sidebar.next_image();
        sidebar.next_image();
        assert_eq!(sidebar.carousel().current(), 2);

        sidebar.open(record("Nishiki Market", &["x", "y"]));
        assert_eq!(sidebar.record().map(|r| r.name.as_str()), Some("Nishiki Market"));
        assert_eq!(sidebar.carousel().current(), 0);
        assert_eq!(sidebar.carousel().total(), 2);
    }

    #[test]
    fn test_sidebar_index_independent_of_card_carousels() {
        let mut card = Carousel::new(3);
        card.next();
        let mut sidebar = SidebarState::default();
        sidebar.open(record("Dotonbori", &["a", "b", "c"]));
        assert_eq!(sidebar.carousel().current(), 0);
        sidebar.prev_image();
        assert_eq!(sidebar.carousel().current(), 2);
        assert_eq!(card.current(), 1);
    }

    #[test]
    fn test_close() {
        let mut sidebar = SidebarState::default();
        assert!(!sidebar.is_open());
        sidebar.open(record("Osaka Castle", &[]));
        assert!(sidebar.is_open());
        assert!(!sidebar.carousel().has_controls());
        sidebar.close();
        assert!(!sidebar.is_open());
    }
}
