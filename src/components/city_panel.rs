//! City Panel Component
//!
//! One city's content: map, legend and a deck per section. Panels for
//! inactive cities stay mounted and are hidden by class.

use leptos::prelude::*;

use crate::components::{CityMap, DeckSection};
use crate::data::City;
use crate::store::{use_guide_store, GuideStateStoreFields};

#[component]
pub fn CityPanel(city: City) -> impl IntoView {
    let store = use_guide_store();
    let panel_id = city.id.clone();
    let active_id = city.id.clone();
    let is_active = move || store.active_city().with(|c| *c == active_id);

    let sections = city
        .sections
        .iter()
        .map(|section| {
            view! {
                <div class="accordion-section" id=format!("{}-{}", city.id, section.id)>
                    <DeckSection title=section.title.clone() items=section.items.clone() />
                </div>
            }
        })
        .collect_view();

    view! {
        <section class=move || if is_active() { "city-content active" } else { "city-content" } id=panel_id>
            <CityMap city=city />
            {sections}
        </section>
    }
}
