//! City Tab Bar Component
//!
//! Tab bar for switching between cities.

use leptos::prelude::*;
use leptos_deck::DeckContext;

use crate::config::NARROW_VIEWPORT_PX;
use crate::store::{store_select_city, use_guide_store, GuideStateStoreFields};

fn is_narrow_viewport() -> bool {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .is_some_and(|w| w <= NARROW_VIEWPORT_PX)
}

/// Bring the city content to the top on small screens
fn scroll_content_into_view() {
    let Ok(Some(content)) = document().query_selector(".content-area") else { return };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    content.scroll_into_view_with_scroll_into_view_options(&options);
}

/// City Tab Bar component
///
/// # Arguments
/// * `cities` - `(id, label)` pairs in tab order
#[component]
pub fn CityTabBar(cities: Vec<(String, String)>) -> impl IntoView {
    let store = use_guide_store();
    let decks = expect_context::<DeckContext>();

    let tabs = cities
        .into_iter()
        .map(|(id, label)| {
            let tab_id = id.clone();
            let is_active = move || store.active_city().with(|c| *c == tab_id);
            let city_id = id.clone();
            let on_click = move |_| {
                store_select_city(&store, &city_id);
                // decks in the newly shown panel were measured while hidden
                decks.reflow_after_paint();
                if is_narrow_viewport() {
                    scroll_content_into_view();
                }
            };

            view! {
                <button
                    class=move || if is_active() { "city-tab active" } else { "city-tab" }
                    data-city=id
                    on:click=on_click
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="city-nav">
            <div class="city-tabs">{tabs}</div>
        </nav>
    }
}
