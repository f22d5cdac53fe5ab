//! City Map Component
//!
//! Leaflet map container plus legend. Pins open the detail sidebar.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::MapLegend;
use crate::config::MAP_INIT_DELAY_MS;
use crate::data::City;
use crate::map::{init_city_map, legend_entries, map_container_id};
use crate::models::Item;
use crate::store::{store_open_sidebar, use_guide_store};

#[component]
pub fn CityMap(city: City) -> impl IntoView {
    let store = use_guide_store();
    let container_id = map_container_id(&city.id);
    let entries = legend_entries(&city);

    // Leaflet needs a sized container, so wait until after mount
    Effect::new(move |initialized: Option<bool>| {
        if initialized.is_none() {
            let city = city.clone();
            Timeout::new(MAP_INIT_DELAY_MS, move || {
                let on_select = move |item: Item| store_open_sidebar(&store, item);
                if let Err(err) = init_city_map(&city, on_select) {
                    log::warn!("{}", err);
                }
            })
            .forget();
        }
        true
    });

    view! {
        <div class="city-map-panel">
            <div class="city-map" id=container_id></div>
            <MapLegend entries=entries />
        </div>
    }
}
