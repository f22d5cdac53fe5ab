//! Map Legend Component

use leptos::prelude::*;

use crate::map::LegendEntry;

#[component]
pub fn MapLegend(entries: Vec<LegendEntry>) -> impl IntoView {
    view! {
        <div class="map-legend">
            <div class="legend-items">
                {entries
                    .into_iter()
                    .map(|entry| view! {
                        <span class="legend-item">
                            <span
                                class=if entry.large { "legend-dot legend-dot-large" } else { "legend-dot" }
                                style=format!("background-color: {}", entry.color)
                            ></span>
                            {entry.label}
                        </span>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
