//! Deck tuning constants

/// Net horizontal displacement (px) a drag must exceed to change cards.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Transition applied whenever a deck settles on a card.
pub const SNAP_TRANSITION: &str = "transform 0.3s ease";

/// Interactive children that never start a drag.
pub const DRAG_IGNORE_SELECTOR: &str = "button, a";

/// Class of a card element inside a deck track.
pub const CARD_SELECTOR: &str = ".scroll-card";

/// Image carousel buttons that arrow keys are forwarded to
pub const CAROUSEL_PREV_SELECTOR: &str = ".carousel-btn.prev";
pub const CAROUSEL_NEXT_SELECTOR: &str = ".carousel-btn.next";
