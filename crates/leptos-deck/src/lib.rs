//! Leptos Deck Utilities
//!
//! Swipeable card decks and image carousels for Leptos.
//! Pure state machines live in submodules; this file binds them to DOM events.
//! A drag moves the deck 1:1 with the pointer and settles on release using a
//! fixed swipe threshold.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub mod carousel;
pub mod config;
pub mod deck;
pub mod geometry;
pub mod registry;

pub use carousel::Carousel;
pub use deck::{DeckId, DeckState, DragSession, ReleaseOutcome};
pub use geometry::DeckGeometry;
pub use registry::DeckRegistry;

use config::{CARD_SELECTOR, DRAG_IGNORE_SELECTOR};

/// Attribute tying a rendered track element to its `DeckId`
pub const DECK_ATTR: &str = "data-deck";

/// Registry handle shared by every deck on the page
#[derive(Clone, Copy)]
pub struct DeckContext {
    registry: RwSignal<DeckRegistry>,
}

pub fn create_deck_context() -> DeckContext {
    DeckContext {
        registry: RwSignal::new(DeckRegistry::new()),
    }
}

impl DeckContext {
    /// Register a deck of `card_count` cards rendered at this point
    pub fn register(&self, card_count: usize) -> DeckId {
        let id = self.registry.write().register(card_count);
        log::debug!("registered deck {:?} with {} cards", id, card_count);
        id
    }

    pub fn unregister(&self, id: DeckId) {
        self.registry.try_update(|r| r.unregister(id));
    }

    /// Reactive view of one deck; only changes when that deck changes
    pub fn deck(&self, id: DeckId) -> Memo<Option<DeckState>> {
        let registry = self.registry;
        Memo::new(move |_| registry.with(|r| r.deck(id).cloned()))
    }

    pub fn go_to(&self, id: DeckId, target: isize) {
        let geometry = deck_geometry(id);
        self.registry.update(|r| r.go_to(id, target, geometry.as_ref()));
    }

    pub fn step(&self, id: DeckId, delta: isize) {
        let geometry = deck_geometry(id);
        self.registry.update(|r| r.step(id, delta, geometry.as_ref()));
    }

    /// Re-center every deck on its current card
    pub fn reflow_all(&self) {
        let ids = self.registry.with_untracked(|r| r.ids());
        let measured: Vec<_> = ids.into_iter().map(|id| (id, deck_geometry(id))).collect();
        self.registry.update(|r| {
            for (id, geometry) in &measured {
                r.reflow(*id, geometry.as_ref());
            }
        });
    }

    /// Center a new deck once the browser has laid it out
    pub fn settle_after_paint(&self, id: DeckId) {
        let ctx = *self;
        let cb = Closure::once_into_js(move || ctx.go_to(id, 0));
        if let Some(win) = web_sys::window() {
            let _ = win.request_animation_frame(cb.unchecked_ref());
        }
    }

    /// Re-center every deck after the next layout, e.g. when a hidden tab is shown
    pub fn reflow_after_paint(&self) {
        let ctx = *self;
        let cb = Closure::once_into_js(move || ctx.reflow_all());
        if let Some(win) = web_sys::window() {
            let _ = win.request_animation_frame(cb.unchecked_ref());
        }
    }

    pub fn active_deck(&self) -> Option<DeckId> {
        self.registry.with_untracked(|r| r.active_deck())
    }

    pub fn begin_drag(&self, id: DeckId, x: f64) -> bool {
        let previous = self.active_deck().filter(|p| *p != id).and_then(deck_geometry);
        self.registry
            .try_update(|r| r.start_drag(id, x, previous.as_ref()))
            .unwrap_or(false)
    }

    pub fn drag_to(&self, x: f64) {
        let Some(id) = self.active_deck() else { return };
        let geometry = deck_geometry(id);
        self.registry.update(|r| {
            r.drag_to(x, geometry.as_ref());
        });
    }

    /// Finish the live drag, if there is one
    pub fn release(&self) {
        let Some(id) = self.active_deck() else { return };
        let geometry = deck_geometry(id);
        if let Some(Some((id, outcome))) = self.registry.try_update(|r| r.release(geometry.as_ref())) {
            log::debug!("deck {:?} released: {:?}", id, outcome);
        }
    }
}

// ========================
// DOM helpers
// ========================

fn track_element(id: DeckId) -> Option<web_sys::HtmlElement> {
    let doc = web_sys::window()?.document()?;
    let selector = format!("[{}=\"{}\"]", DECK_ATTR, id.0);
    doc.query_selector(&selector).ok()??.dyn_into().ok()
}

fn deck_geometry(id: DeckId) -> Option<DeckGeometry> {
    let geometry = track_element(id).and_then(|track| measure_track(&track));
    if geometry.is_none() {
        log::debug!("deck {:?} has no layout yet", id);
    }
    geometry
}

/// Measure a track from its first card and the track's parent viewport.
/// Returns `None` while the track is not laid out (e.g. inside a hidden tab).
pub fn measure_track(track: &web_sys::HtmlElement) -> Option<DeckGeometry> {
    let card: web_sys::HtmlElement = track.query_selector(CARD_SELECTOR).ok()??.dyn_into().ok()?;
    let container: web_sys::HtmlElement = track.parent_element()?.dyn_into().ok()?;
    let card_width = card.offset_width() as f64;
    if card_width <= 0.0 {
        return None;
    }
    let style = web_sys::window()?.get_computed_style(&card).ok()??;
    let margin = |prop: &str| geometry::parse_px(&style.get_property_value(prop).unwrap_or_default());
    Some(DeckGeometry::new(
        card_width,
        margin("margin-left"),
        margin("margin-right"),
        container.offset_width() as f64,
    ))
}

fn first_touch_x(ev: &web_sys::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_x() as f64)
}

// ========================
// Event handler factories
// ========================

/// Create mousedown handler for a deck track
/// Starts a drag unless the press landed on a button or link
pub fn make_on_mousedown(ctx: DeckContext, id: DeckId) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            if target.closest(DRAG_IGNORE_SELECTOR).ok().flatten().is_some() {
                return;
            }
        }
        if ctx.begin_drag(id, ev.client_x() as f64) {
            ev.prevent_default();
        }
    }
}

pub fn make_on_touchstart(ctx: DeckContext, id: DeckId) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            ctx.begin_drag(id, x);
        }
    }
}

pub fn make_on_touchmove(ctx: DeckContext, id: DeckId) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if ctx.active_deck() != Some(id) {
            return;
        }
        if let Some(x) = first_touch_x(&ev) {
            ctx.drag_to(x);
        }
    }
}

/// Also used for touchcancel
pub fn make_on_touchend(ctx: DeckContext, id: DeckId) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |_ev: web_sys::TouchEvent| {
        if ctx.active_deck() == Some(id) {
            ctx.release();
        }
    }
}

// ========================
// Global bindings
// ========================

/// Bind document mousemove/mouseup so a drag keeps tracking outside its deck
pub fn bind_global_pointer(ctx: DeckContext) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        ctx.drag_to(ev.client_x() as f64);
    });
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        ctx.release();
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

/// Keep decks centered when the viewport changes size
pub fn bind_resize(ctx: DeckContext) {
    let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        ctx.reflow_all();
    });
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}

/// Forward ArrowLeft/ArrowRight to the image carousel of the focused card
pub fn bind_card_keys() {
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        forward_arrow_key(&ev);
    });
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_keydown.forget();
}

fn forward_arrow_key(ev: &web_sys::KeyboardEvent) -> Option<()> {
    let selector = match ev.key().as_str() {
        "ArrowLeft" => config::CAROUSEL_PREV_SELECTOR,
        "ArrowRight" => config::CAROUSEL_NEXT_SELECTOR,
        _ => return None,
    };
    let focused = web_sys::window()?.document()?.active_element()?;
    let card = focused.closest(CARD_SELECTOR).ok()??;
    let button: web_sys::HtmlElement = card.query_selector(selector).ok()??.dyn_into().ok()?;
    button.click();
    Some(())
}

/// Bind every document/window listener the decks need. Call once per page.
pub fn bind_deck_events(ctx: DeckContext) {
    bind_global_pointer(ctx);
    bind_resize(ctx);
    bind_card_keys();
}
