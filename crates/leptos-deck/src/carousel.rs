//! Image Carousel
//!
//! Wrap-around slide index for a card or the detail sidebar.

/// Which slide of an image set is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    total: usize,
}

impl Carousel {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Dots, arrows and counter only exist for more than one slide
    pub fn has_controls(&self) -> bool {
        self.total > 1
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.current = (self.current + 1) % self.total;
        }
    }

    pub fn prev(&mut self) {
        if self.total > 0 {
            self.current = (self.current + self.total - 1) % self.total;
        }
    }

    /// Jump to `index`; out-of-range indices are ignored
    pub fn jump(&mut self, index: usize) -> bool {
        if index < self.total {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Counter text, e.g. `"2 / 5"`
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current + 1, self.total)
    }

    /// Transform for a slide strip where each slide is one track width
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.current * 100)
    }
}
