//! Deck Registry
//!
//! All mounted decks keyed by identity, plus the single drag session that
//! owns pointer-move and pointer-up events.

use std::collections::HashMap;

use crate::deck::{DeckId, DeckState, DragSession, ReleaseOutcome};
use crate::geometry::DeckGeometry;

#[derive(Clone, Debug, Default)]
pub struct DeckRegistry {
    decks: HashMap<DeckId, DeckState>,
    session: Option<DragSession>,
    next_id: u32,
}

impl DeckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly rendered deck, starting at card 0
    pub fn register(&mut self, card_count: usize) -> DeckId {
        let id = DeckId(self.next_id);
        self.next_id += 1;
        self.decks.insert(id, DeckState::new(card_count));
        id
    }

    /// Drop a deck; a drag it owned is discarded with it
    pub fn unregister(&mut self, id: DeckId) {
        self.decks.remove(&id);
        if self.session.map(|s| s.deck()) == Some(id) {
            self.session = None;
        }
    }

    pub fn deck(&self, id: DeckId) -> Option<&DeckState> {
        self.decks.get(&id)
    }

    pub fn ids(&self) -> Vec<DeckId> {
        let mut ids: Vec<_> = self.decks.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Deck currently owning the drag, if any
    pub fn active_deck(&self) -> Option<DeckId> {
        self.session.map(|s| s.deck())
    }

    pub fn go_to(&mut self, id: DeckId, target: isize, geometry: Option<&DeckGeometry>) {
        if let Some(deck) = self.decks.get_mut(&id) {
            deck.go_to_card(target, geometry);
        }
    }

    pub fn step(&mut self, id: DeckId, delta: isize, geometry: Option<&DeckGeometry>) {
        if let Some(deck) = self.decks.get_mut(&id) {
            deck.step(delta, geometry);
        }
    }

    /// Re-center one deck on its current card
    pub fn reflow(&mut self, id: DeckId, geometry: Option<&DeckGeometry>) {
        if let Some(deck) = self.decks.get_mut(&id) {
            deck.reflow(geometry);
        }
    }

    /// Start a drag on `id`, installing the session. Empty decks never drag.
    /// A session left over on another deck is dropped and that deck settles
    /// back on its current card.
    pub fn start_drag(&mut self, id: DeckId, x: f64, previous: Option<&DeckGeometry>) -> bool {
        if !self.decks.get(&id).is_some_and(|d| d.card_count() > 0) {
            return false;
        }
        if let Some(stale) = self.session.take() {
            if stale.deck() != id {
                self.reflow(stale.deck(), previous);
            }
        }
        match self.decks.get_mut(&id) {
            Some(deck) => {
                self.session = Some(DragSession::begin(id, x, deck));
                true
            }
            None => false,
        }
    }

    /// Feed a pointer position to the deck owning the session
    pub fn drag_to(&mut self, x: f64, geometry: Option<&DeckGeometry>) -> Option<DeckId> {
        let session = self.session.as_mut()?;
        let deck = self.decks.get_mut(&session.deck())?;
        session.move_to(x, deck, geometry);
        Some(session.deck())
    }

    /// Take the session and settle its deck. Without a session this is a no-op.
    pub fn release(&mut self, geometry: Option<&DeckGeometry>) -> Option<(DeckId, ReleaseOutcome)> {
        let session = self.session.take()?;
        let deck = self.decks.get_mut(&session.deck())?;
        Some((session.deck(), session.release(deck, geometry)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom() -> DeckGeometry {
        DeckGeometry::new(300.0, 10.0, 10.0, 400.0)
    }

    #[test]
    fn test_register_assigns_distinct_ids() {
        let mut reg = DeckRegistry::new();
        let a = reg.register(3);
        let b = reg.register(5);
        assert_ne!(a, b);
        assert_eq!(reg.ids(), vec![a, b]);
        assert_eq!(reg.deck(b).map(|d| d.card_count()), Some(5));
    }

    #[test]
    fn test_stray_release_is_noop() {
        let mut reg = DeckRegistry::new();
        let a = reg.register(3);
        reg.go_to(a, 1, Some(&geom()));
        let before = reg.deck(a).cloned();
        assert_eq!(reg.release(Some(&geom())), None);
        assert_eq!(reg.drag_to(10.0, Some(&geom())), None);
        assert_eq!(reg.deck(a).cloned(), before);
    }

    #[test]
    fn test_release_goes_to_deck_that_started_drag() {
        let g = geom();
        let mut reg = DeckRegistry::new();
        let a = reg.register(3);
        let b = reg.register(3);
        assert!(reg.start_drag(a, 400.0, None));
        assert_eq!(reg.active_deck(), Some(a));

        assert_eq!(reg.drag_to(300.0, Some(&g)), Some(a));
        assert_eq!(reg.release(Some(&g)), Some((a, ReleaseOutcome::Advance)));

        assert_eq!(reg.deck(a).map(|d| d.current_index()), Some(1));
        assert_eq!(reg.deck(b).map(|d| d.current_index()), Some(0));
        assert_eq!(reg.active_deck(), None);
    }

    #[test]
    fn test_session_cleared_after_release() {
        let g = geom();
        let mut reg = DeckRegistry::new();
        let a = reg.register(2);
        reg.start_drag(a, 0.0, None);
        reg.release(Some(&g));
        assert_eq!(reg.release(Some(&g)), None);
    }

    #[test]
    fn test_empty_deck_never_drags() {
        let mut reg = DeckRegistry::new();
        let a = reg.register(0);
        assert!(!reg.start_drag(a, 0.0, None));
        assert_eq!(reg.active_deck(), None);
    }

    #[test]
    fn test_unregister_discards_owned_session() {
        let mut reg = DeckRegistry::new();
        let a = reg.register(2);
        reg.start_drag(a, 0.0, None);
        reg.unregister(a);
        assert!(reg.is_empty());
        assert_eq!(reg.active_deck(), None);
        assert_eq!(reg.release(None), None);
    }

    #[test]
    fn test_new_drag_settles_stale_session() {
        let g = geom();
        let mut reg = DeckRegistry::new();
        let a = reg.register(3);
        let b = reg.register(3);
        reg.start_drag(a, 400.0, None);
        reg.drag_to(380.0, Some(&g));
        assert!(reg.start_drag(b, 100.0, Some(&g)));

        let stale = reg.deck(a).cloned().unwrap();
        assert!(!stale.is_dragging());
        assert!(stale.is_animated());
        assert_eq!(stale.offset(), g.offset_for(0));
        assert_eq!(reg.active_deck(), Some(b));
    }

    #[test]
    fn test_reflow_keeps_index() {
        let mut reg = DeckRegistry::new();
        let a = reg.register(4);
        reg.go_to(a, 2, Some(&geom()));
        let wider = DeckGeometry::new(300.0, 10.0, 10.0, 800.0);
        reg.reflow(a, Some(&wider));
        let deck = reg.deck(a).cloned().unwrap();
        assert_eq!(deck.current_index(), 2);
        // 2 * 320 - ((800 - 300) / 2 - 10)
        assert_eq!(deck.offset(), 400.0);
    }
}
