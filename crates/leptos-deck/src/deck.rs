//! Deck State Machine
//!
//! One `DeckState` per rendered section. The deck is either settled on
//! `current_index` or following a drag that started from it.

use crate::config::{SNAP_TRANSITION, SWIPE_THRESHOLD_PX};
use crate::geometry::DeckGeometry;

/// Identity of a registered deck
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeckId(pub u32);

/// Navigation state of a single deck
#[derive(Clone, Debug, PartialEq)]
pub struct DeckState {
    card_count: usize,
    current_index: usize,
    /// Track shift in px; the rendered transform is `translateX(-offset)`
    offset: f64,
    /// Whether the snap transition is applied (off while dragging)
    animate: bool,
    dragging: bool,
}

impl DeckState {
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            current_index: 0,
            offset: 0.0,
            animate: true,
            dragging: false,
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_animated(&self) -> bool {
        self.animate
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether card `index` carries the active flag
    pub fn is_active(&self, index: usize) -> bool {
        self.card_count > 0 && index == self.current_index
    }

    pub fn has_prev(&self) -> bool {
        self.current_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.card_count
    }

    /// Settle on `target`, clamped into the deck.
    ///
    /// Without geometry (track not laid out) only the index moves; the
    /// offset is recomputed on the next call that has geometry.
    pub fn go_to_card(&mut self, target: isize, geometry: Option<&DeckGeometry>) {
        if self.card_count == 0 {
            return;
        }
        let last = (self.card_count - 1) as isize;
        self.current_index = target.clamp(0, last) as usize;
        if let Some(geometry) = geometry {
            self.offset = geometry.offset_for(self.current_index);
        }
        self.animate = true;
        self.dragging = false;
    }

    /// Move by `delta` cards from the current one
    pub fn step(&mut self, delta: isize, geometry: Option<&DeckGeometry>) {
        let target = self.current_index as isize + delta;
        self.go_to_card(target, geometry);
    }

    /// Recompute the offset for the current card, e.g. after a resize
    pub fn reflow(&mut self, geometry: Option<&DeckGeometry>) {
        self.go_to_card(self.current_index as isize, geometry);
    }

    fn begin_drag(&mut self) {
        self.animate = false;
        self.dragging = true;
    }

    fn follow_drag(&mut self, displacement: f64, geometry: Option<&DeckGeometry>) {
        if let Some(geometry) = geometry {
            self.offset = geometry.offset_for(self.current_index) - displacement;
        }
    }

    /// CSS transform for the track
    pub fn transform(&self) -> String {
        format!("translateX({}px)", -self.offset)
    }

    pub fn transition(&self) -> &'static str {
        if self.animate {
            SNAP_TRANSITION
        } else {
            "none"
        }
    }

    /// Inline style for the track element
    pub fn style(&self) -> String {
        format!("transform: {}; transition: {};", self.transform(), self.transition())
    }
}

/// How a finished drag settles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Commit to the next card
    Advance,
    /// Commit to the previous card
    Retreat,
    /// Return to the card the drag started from
    SnapBack,
}

impl ReleaseOutcome {
    /// Decide the outcome for a net displacement. The threshold is strict.
    pub fn decide(displacement: f64, deck: &DeckState) -> Self {
        if displacement < -SWIPE_THRESHOLD_PX && deck.has_next() {
            ReleaseOutcome::Advance
        } else if displacement > SWIPE_THRESHOLD_PX && deck.has_prev() {
            ReleaseOutcome::Retreat
        } else {
            ReleaseOutcome::SnapBack
        }
    }

    pub fn delta(&self) -> isize {
        match self {
            ReleaseOutcome::Advance => 1,
            ReleaseOutcome::Retreat => -1,
            ReleaseOutcome::SnapBack => 0,
        }
    }
}

/// An in-progress drag, owned by exactly one deck
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    deck: DeckId,
    start_x: f64,
    current_x: f64,
}

impl DragSession {
    /// Start a drag on `deck` at pointer position `x`
    pub fn begin(deck: DeckId, x: f64, state: &mut DeckState) -> Self {
        state.begin_drag();
        Self {
            deck,
            start_x: x,
            current_x: x,
        }
    }

    pub fn deck(&self) -> DeckId {
        self.deck
    }

    /// Pointer displacement since the drag started (positive = rightwards)
    pub fn displacement(&self) -> f64 {
        self.current_x - self.start_x
    }

    /// Track the pointer 1:1 with no easing
    pub fn move_to(&mut self, x: f64, state: &mut DeckState, geometry: Option<&DeckGeometry>) {
        self.current_x = x;
        state.follow_drag(self.displacement(), geometry);
    }

    /// Finish the drag, settling the deck through `go_to_card`
    pub fn release(self, state: &mut DeckState, geometry: Option<&DeckGeometry>) -> ReleaseOutcome {
        let outcome = ReleaseOutcome::decide(self.displacement(), state);
        state.step(outcome.delta(), geometry);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom() -> DeckGeometry {
        DeckGeometry::new(300.0, 10.0, 10.0, 400.0)
    }

    fn active_cards(deck: &DeckState) -> Vec<usize> {
        (0..deck.card_count()).filter(|&i| deck.is_active(i)).collect()
    }

    #[test]
    fn test_new_deck_starts_at_zero() {
        let deck = DeckState::new(4);
        assert_eq!(deck.current_index(), 0);
        assert_eq!(active_cards(&deck), vec![0]);
        assert!(!deck.has_prev());
        assert!(deck.has_next());
    }

    #[test]
    fn test_exactly_one_active_card() {
        let g = geom();
        let mut deck = DeckState::new(5);
        for target in [3, -2, 9, 1, 4, 0] {
            deck.go_to_card(target, Some(&g));
            assert_eq!(active_cards(&deck), vec![deck.current_index()]);
        }
    }

    #[test]
    fn test_go_to_card_clamps_any_target() {
        let g = geom();
        let mut deck = DeckState::new(3);
        deck.go_to_card(-7, Some(&g));
        assert_eq!(deck.current_index(), 0);
        deck.go_to_card(42, Some(&g));
        assert_eq!(deck.current_index(), 2);
        deck.go_to_card(isize::MIN, Some(&g));
        assert_eq!(deck.current_index(), 0);
        deck.go_to_card(isize::MAX, Some(&g));
        assert_eq!(deck.current_index(), 2);
    }

    #[test]
    fn test_go_to_card_is_idempotent() {
        let g = geom();
        let mut once = DeckState::new(4);
        once.go_to_card(2, Some(&g));
        let mut twice = DeckState::new(4);
        twice.go_to_card(2, Some(&g));
        twice.go_to_card(2, Some(&g));
        assert_eq!(once, twice);
        assert_eq!(twice.offset(), 600.0);
    }

    #[test]
    fn test_go_to_card_centers_target() {
        let mut deck = DeckState::new(3);
        deck.go_to_card(1, Some(&geom()));
        // 1 * 320 - 40
        assert_eq!(deck.offset(), 280.0);
        assert_eq!(deck.transform(), "translateX(-280px)");
        assert_eq!(deck.transition(), SNAP_TRANSITION);
        assert!(deck.has_prev());
        assert!(deck.has_next());
    }

    #[test]
    fn test_boundary_arrows() {
        let g = geom();
        let mut deck = DeckState::new(2);
        deck.step(-1, Some(&g));
        assert_eq!(deck.current_index(), 0);
        deck.step(1, Some(&g));
        assert!(!deck.has_next());
        deck.step(1, Some(&g));
        assert_eq!(deck.current_index(), 1);
    }

    #[test]
    fn test_empty_deck_is_noop() {
        let mut deck = DeckState::new(0);
        deck.go_to_card(3, Some(&geom()));
        assert_eq!(deck.current_index(), 0);
        assert_eq!(deck.offset(), 0.0);
        assert!(active_cards(&deck).is_empty());
        assert!(!deck.has_next());
    }

    #[test]
    fn test_go_to_without_geometry_keeps_offset() {
        let mut deck = DeckState::new(3);
        deck.go_to_card(0, Some(&geom()));
        deck.go_to_card(2, None);
        assert_eq!(deck.current_index(), 2);
        assert_eq!(deck.offset(), -40.0);
        deck.reflow(Some(&geom()));
        assert_eq!(deck.offset(), 600.0);
    }

    #[test]
    fn test_drag_tracks_pointer_without_transition() {
        let g = geom();
        let mut deck = DeckState::new(3);
        deck.go_to_card(1, Some(&g));
        let mut session = DragSession::begin(DeckId(1), 500.0, &mut deck);
        assert!(deck.is_dragging());
        assert_eq!(deck.transition(), "none");

        session.move_to(470.0, &mut deck, Some(&g));
        assert_eq!(session.displacement(), -30.0);
        assert_eq!(deck.offset(), 310.0);
        assert_eq!(deck.transition(), "none");
        assert_eq!(deck.current_index(), 1);
    }

    #[test]
    fn test_release_threshold_is_strict() {
        let g = geom();
        for (dx, expected) in [
            (-50.0, 1),
            (50.0, 1),
            (-50.5, 2),
            (50.5, 0),
            (0.0, 1),
        ] {
            let mut deck = DeckState::new(3);
            deck.go_to_card(1, Some(&g));
            let mut session = DragSession::begin(DeckId(0), 200.0, &mut deck);
            session.move_to(200.0 + dx, &mut deck, Some(&g));
            session.release(&mut deck, Some(&g));
            assert_eq!(deck.current_index(), expected, "displacement {}", dx);
            assert!(deck.is_animated());
            assert!(!deck.is_dragging());
        }
    }

    #[test]
    fn test_release_at_edges_snaps_back() {
        let g = geom();
        let mut deck = DeckState::new(2);
        deck.go_to_card(0, Some(&g));
        let mut session = DragSession::begin(DeckId(0), 100.0, &mut deck);
        session.move_to(400.0, &mut deck, Some(&g));
        assert_eq!(session.release(&mut deck, Some(&g)), ReleaseOutcome::SnapBack);
        assert_eq!(deck.current_index(), 0);
        assert_eq!(deck.offset(), -40.0);

        deck.go_to_card(1, Some(&g));
        let mut session = DragSession::begin(DeckId(0), 400.0, &mut deck);
        session.move_to(100.0, &mut deck, Some(&g));
        assert_eq!(session.release(&mut deck, Some(&g)), ReleaseOutcome::SnapBack);
        assert_eq!(deck.current_index(), 1);
    }

    #[test]
    fn test_release_outcomes() {
        let g = geom();
        let mut deck = DeckState::new(3);
        deck.go_to_card(1, Some(&g));
        let mut session = DragSession::begin(DeckId(0), 300.0, &mut deck);
        session.move_to(200.0, &mut deck, Some(&g));
        assert_eq!(session.release(&mut deck, Some(&g)), ReleaseOutcome::Advance);
        assert_eq!(deck.current_index(), 2);

        let mut session = DragSession::begin(DeckId(0), 100.0, &mut deck);
        session.move_to(180.0, &mut deck, Some(&g));
        assert_eq!(session.release(&mut deck, Some(&g)), ReleaseOutcome::Retreat);
        assert_eq!(deck.current_index(), 1);
    }
}
