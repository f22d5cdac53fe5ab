//! Deck Geometry
//!
//! Card stride and centering math for a deck track.

/// Measured layout of one deck: its first card and the viewport around it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeckGeometry {
    /// Content width of a card (excluding margins)
    pub card_width: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    /// Width of the visible viewport wrapping the track
    pub container_width: f64,
}

impl DeckGeometry {
    pub fn new(card_width: f64, margin_left: f64, margin_right: f64, container_width: f64) -> Self {
        Self {
            card_width,
            margin_left,
            margin_right,
            container_width,
        }
    }

    /// Distance between the left edges of two neighbouring cards
    pub fn stride(&self) -> f64 {
        self.card_width + self.margin_left + self.margin_right
    }

    /// Shift that centers a card's content box (not its margin) in the container
    pub fn center_offset(&self) -> f64 {
        (self.container_width - self.card_width) / 2.0 - self.margin_left
    }

    /// Track offset that settles the deck on `index`
    pub fn offset_for(&self, index: usize) -> f64 {
        index as f64 * self.stride() - self.center_offset()
    }
}

/// Parse a computed CSS length such as `"12px"`; anything else counts as zero.
pub fn parse_px(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches("px")
        .parse::<f64>()
        .unwrap_or(0.0)
}
