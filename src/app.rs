//! Travel Guide App
//!
//! City tabs over per-city panels, with the shared detail sidebar.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CityPanel, CityTabBar, DetailSidebar};
use crate::data::{load_guide, theme_class};
use crate::store::{GuideState, GuideStateStoreFields};

/// Swap the body theme class to the active city's
fn apply_body_theme(active_city: &str, city_ids: &[String]) {
    let Some(body) = document().body() else { return };
    let classes = body.class_list();
    for id in city_ids {
        let _ = classes.remove_1(&theme_class(id));
    }
    let _ = classes.add_1(&theme_class(active_city));
}

#[component]
pub fn App() -> impl IntoView {
    let guide = match load_guide() {
        Ok(guide) => guide,
        Err(err) => {
            log::error!("{}", err);
            return view! { <div class="guide-error">{err.to_string()}</div> }.into_any();
        }
    };

    let default_city = guide.default_city().map(|c| c.id.clone()).unwrap_or_default();
    let store = Store::new(GuideState::new(&default_city));
    provide_context(store);

    let decks = leptos_deck::create_deck_context();
    provide_context(decks);
    leptos_deck::bind_deck_events(decks);

    let city_ids: Vec<String> = guide.cities.iter().map(|c| c.id.clone()).collect();
    Effect::new(move |_| {
        let active = store.active_city().get();
        apply_body_theme(&active, &city_ids);
    });

    let tabs: Vec<(String, String)> = guide.cities.iter().map(|c| (c.id.clone(), c.label.clone())).collect();
    let panels = guide
        .cities
        .into_iter()
        .map(|city| view! { <CityPanel city=city /> })
        .collect_view();

    view! {
        <CityTabBar cities=tabs />
        <main class="content-area">{panels}</main>
        <DetailSidebar />
    }
    .into_any()
}
