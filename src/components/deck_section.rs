//! Deck Section Component
//!
//! A titled, swipeable deck of cards with dot and arrow navigation.

use leptos::prelude::*;
use leptos_deck::{make_on_mousedown, make_on_touchend, make_on_touchmove, make_on_touchstart, DeckContext};

use crate::components::ScrollCard;
use crate::models::Item;
use crate::section::SectionModel;

/// Section deck. Renders nothing for an empty list.
#[component]
pub fn DeckSection(#[prop(into)] title: String, items: Vec<Item>) -> impl IntoView {
    SectionModel::build(&title, &items).map(|section| view! { <Deck section=section /> })
}

#[component]
fn Deck(section: SectionModel) -> impl IntoView {
    let decks = expect_context::<DeckContext>();
    let card_count = section.card_count();
    let count_label = section.count_label();

    let id = decks.register(card_count);
    on_cleanup(move || decks.unregister(id));
    decks.settle_after_paint(id);

    let deck = decks.deck(id);
    let is_active = move |i: usize| deck.with(|d| d.as_ref().is_some_and(|d| d.is_active(i)));
    let has_prev = move || deck.with(|d| d.as_ref().is_some_and(|d| d.has_prev()));
    let has_next = move || deck.with(|d| d.as_ref().is_some_and(|d| d.has_next()));
    let dragging = move || deck.with(|d| d.as_ref().is_some_and(|d| d.is_dragging()));

    let cards = section
        .cards
        .into_iter()
        .map(|card| {
            let i = card.index;
            view! { <ScrollCard card=card active=Signal::derive(move || is_active(i)) /> }
        })
        .collect_view();

    let dots = (0..card_count)
        .map(|i| {
            view! {
                <button
                    class=move || if is_active(i) { "deck-dot active" } else { "deck-dot" }
                    data-index=i.to_string()
                    aria-label=format!("Card {}", i + 1)
                    on:click=move |_| decks.go_to(id, i as isize)
                ></button>
            }
        })
        .collect_view();

    let on_touchend = make_on_touchend(decks, id);

    view! {
        <div class="accordion-section-header">
            <span class="accordion-section-title">{section.title}</span>
            <span class="accordion-section-count">{count_label}</span>
        </div>
        <div class="deck-container">
            // data-deck must match leptos_deck::DECK_ATTR
            <div
                class=move || if dragging() { "horizontal-scroll dragging" } else { "horizontal-scroll" }
                style=move || deck.with(|d| d.as_ref().map(|d| d.style()).unwrap_or_default())
                data-deck=id.0.to_string()
                data-current=move || deck.with(|d| d.as_ref().map(|d| d.current_index()).unwrap_or(0)).to_string()
                on:mousedown=make_on_mousedown(decks, id)
                on:touchstart=make_on_touchstart(decks, id)
                on:touchmove=make_on_touchmove(decks, id)
                on:touchend=on_touchend
                on:touchcancel=on_touchend
            >
                {cards}
            </div>
        </div>
        <div class="deck-nav">
            <button
                class="deck-arrow prev"
                aria-label="Previous card"
                disabled=move || !has_prev()
                on:click=move |_| decks.step(id, -1)
            >
                "‹"
            </button>
            <div class="deck-dots">{dots}</div>
            <button
                class="deck-arrow next"
                aria-label="Next card"
                disabled=move || !has_next()
                on:click=move |_| decks.step(id, 1)
            >
                "›"
            </button>
        </div>
    }
}
