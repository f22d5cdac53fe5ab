//! City Maps
//!
//! Leaflet bindings and pin/legend derivation. Leaflet is loaded as the
//! global `L`; the only thing the page needs back from a pin is a click
//! that opens the detail sidebar.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::category::{self, ACCOMMODATION};
use crate::config::*;
use crate::data::City;
use crate::error::{GuideError, GuideResult};
use crate::models::Item;

#[wasm_bindgen]
extern "C" {
    type LeafletMap;
    type Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = circleMarker)]
    fn circle_marker(latlng: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = bindTooltip)]
    fn bind_tooltip(this: &Layer, content: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(method)]
    fn on(this: &Layer, event: &str, handler: &js_sys::Function) -> Layer;
}

// ========================
// Leaflet option structs
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    scroll_wheel_zoom: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions {
    attribution: &'static str,
    subdomains: &'static str,
    max_zoom: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TooltipOptions {
    permanent: bool,
    direction: &'static str,
    class_name: &'static str,
}

/// Circle marker style
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    pub fn activity(category: Option<&str>) -> Self {
        Self {
            radius: ACTIVITY_MARKER_RADIUS,
            fill_color: category::color_for(category),
            color: MARKER_OUTLINE,
            weight: ACTIVITY_MARKER_WEIGHT,
            opacity: 1.0,
            fill_opacity: ACTIVITY_MARKER_FILL_OPACITY,
        }
    }

    pub fn stay() -> Self {
        Self {
            radius: STAY_MARKER_RADIUS,
            fill_color: category::color_for(Some(ACCOMMODATION)),
            color: MARKER_OUTLINE,
            weight: STAY_MARKER_WEIGHT,
            opacity: 1.0,
            fill_opacity: STAY_MARKER_FILL_OPACITY,
        }
    }
}

// ========================
// Pins and legend
// ========================

/// A record placed on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub lat: f64,
    pub lng: f64,
    pub style: MarkerStyle,
    pub item: Item,
}

/// Activities first, then accommodations drawn above them. Records without
/// coordinates are skipped.
pub fn city_pins(city: &City) -> Vec<Pin> {
    let activities = city
        .activities()
        .map(|item| (item, MarkerStyle::activity(item.category.as_deref())));
    let stays = city.accommodations.iter().map(|item| (item, MarkerStyle::stay()));
    activities
        .chain(stays)
        .filter_map(|(item, style)| {
            item.coords.map(|c| Pin {
                lat: c.lat,
                lng: c.lng,
                style,
                item: item.clone(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
    /// Accommodation uses the larger dot
    pub large: bool,
}

/// Categories of mapped activities in first-seen order, Accommodation first
pub fn legend_entries(city: &City) -> Vec<LegendEntry> {
    let mut used: Vec<&str> = Vec::new();
    for item in city.activities().filter(|i| i.coords.is_some()) {
        if let Some(category) = item.category.as_deref() {
            if !used.contains(&category) {
                used.push(category);
            }
        }
    }
    let has_stays = !city.accommodations.is_empty() || used.contains(&ACCOMMODATION);

    let mut entries = Vec::with_capacity(used.len() + 1);
    if has_stays {
        entries.push(LegendEntry {
            label: ACCOMMODATION.to_string(),
            color: category::color_for(Some(ACCOMMODATION)),
            large: true,
        });
    }
    entries.extend(used.into_iter().filter(|c| *c != ACCOMMODATION).map(|c| LegendEntry {
        label: c.to_string(),
        color: category::color_for(Some(c)),
        large: false,
    }));
    entries
}

// ========================
// Map creation
// ========================

pub fn map_container_id(city_id: &str) -> String {
    format!("{}-map", city_id)
}

fn leaflet_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("L")).unwrap_or(false)
}

fn to_js<T: Serialize>(value: &T) -> GuideResult<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| GuideError::Map(e.to_string()))
}

/// Create the Leaflet map for `city` and add its pins.
/// `on_select` receives the full record when a pin is clicked.
pub fn init_city_map<F>(city: &City, on_select: F) -> GuideResult<()>
where
    F: Fn(Item) + Clone + 'static,
{
    if !leaflet_loaded() {
        return Err(GuideError::Map("Leaflet is not loaded".to_string()));
    }

    let container = map_container_id(&city.id);
    let map = leaflet_map(&container, &to_js(&MapOptions { scroll_wheel_zoom: false })?)
        .map_err(|e| GuideError::Map(format!("{}: {:?}", container, e)))?;
    map.set_view(&to_js(&[city.center.lat, city.center.lng])?, city.zoom);

    let tiles = TileOptions {
        attribution: MAP_TILE_ATTRIBUTION,
        subdomains: MAP_TILE_SUBDOMAINS,
        max_zoom: MAP_MAX_ZOOM,
    };
    tile_layer(MAP_TILE_URL, &to_js(&tiles)?).add_to(&map);

    let tooltip = to_js(&TooltipOptions {
        permanent: false,
        direction: "top",
        class_name: "map-tooltip",
    })?;

    let pins = city_pins(city);
    for pin in &pins {
        let marker = circle_marker(&to_js(&[pin.lat, pin.lng])?, &to_js(&pin.style)?).add_to(&map);
        marker.bind_tooltip(&pin.item.name, &tooltip);

        let item = pin.item.clone();
        let on_select = on_select.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || on_select(item.clone()));
        marker.on("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    log::info!("{} map ready with {} pins", city.id, pins.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Section;
    use crate::models::Coords;

    fn pinned(name: &str, category: &str) -> Item {
        let mut item = Item::new(name);
        item.category = Some(category.to_string());
        item.coords = Some(Coords { lat: 35.0, lng: 135.0 });
        item
    }

    fn city(items: Vec<Item>, stays: Vec<Item>) -> City {
        City {
            id: "kyoto".to_string(),
            label: "Kyoto".to_string(),
            center: Coords { lat: 35.0116, lng: 135.7681 },
            zoom: 12,
            sections: vec![Section {
                id: "daytime".to_string(),
                title: "Things to Do".to_string(),
                items,
            }],
            accommodations: stays,
        }
    }

    #[test]
    fn test_pins_skip_records_without_coords() {
        let stay = pinned("Kyoto Listing", ACCOMMODATION);
        let c = city(
            vec![pinned("Fushimi Inari", "Shrine"), Item::new("Somewhere")],
            vec![stay],
        );
        let pins = city_pins(&c);
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[0].style, MarkerStyle::activity(Some("Shrine")));
        assert_eq!(pins[1].style.radius, STAY_MARKER_RADIUS);
        assert_eq!(pins[1].item.name, "Kyoto Listing");
    }

    #[test]
    fn test_legend_puts_accommodation_first() {
        let c = city(
            vec![
                pinned("Nishiki", "Market"),
                pinned("Fushimi Inari", "Shrine"),
                pinned("Kiyomizu", "Shrine"),
            ],
            vec![pinned("Kyoto Listing", ACCOMMODATION)],
        );
        let labels: Vec<_> = legend_entries(&c).into_iter().map(|e| (e.label, e.large)).collect();
        assert_eq!(
            labels,
            vec![
                ("Accommodation".to_string(), true),
                ("Market".to_string(), false),
                ("Shrine".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_legend_ignores_unmapped_activities() {
        let mut unmapped = Item::new("Pontocho");
        unmapped.category = Some("Nightlife".to_string());
        let c = city(vec![unmapped], vec![]);
        assert!(legend_entries(&c).is_empty());
    }
}
