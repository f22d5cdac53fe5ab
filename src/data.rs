//! Guide Data
//!
//! Cities, their time-of-day sections and accommodations, parsed from the
//! bundled `data/guide.json`.

use serde::{Deserialize, Serialize};

use crate::error::{GuideError, GuideResult};
use crate::models::{Coords, Item};

const BUNDLED_GUIDE: &str = include_str!("../data/guide.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideData {
    pub cities: Vec<City>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Stable id used for element ids and the body theme class
    pub id: String,
    pub label: String,
    pub center: Coords,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub accommodations: Vec<Item>,
}

fn default_zoom() -> u8 {
    12
}

/// One time-of-day or theme section of a city, rendered as a deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl City {
    /// Activities across all sections, in section order
    pub fn activities(&self) -> impl Iterator<Item = &Item> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }
}

/// Body class applied while a city's tab is active
pub fn theme_class(city_id: &str) -> String {
    format!("{}-active", city_id)
}

impl GuideData {
    pub fn default_city(&self) -> Option<&City> {
        self.cities.first()
    }
}

/// Parse guide JSON
pub fn parse_guide(json: &str) -> GuideResult<GuideData> {
    let guide: GuideData = serde_json::from_str(json)?;
    if guide.cities.is_empty() {
        return Err(GuideError::Empty);
    }
    Ok(guide)
}

/// Load the guide compiled into the binary
pub fn load_guide() -> GuideResult<GuideData> {
    let guide = parse_guide(BUNDLED_GUIDE)?;
    log::info!(
        "loaded {} cities, {} activities",
        guide.cities.len(),
        guide.cities.iter().map(|c| c.activities().count()).sum::<usize>()
    );
    Ok(guide)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_guide_parses() {
        let guide = load_guide().unwrap();
        let ids: Vec<_> = guide.cities.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["tokyo", "kyoto", "osaka"]);
        assert!(guide.cities.iter().all(|c| !c.sections.is_empty()));
        assert_eq!(guide.default_city().map(|c| c.id.as_str()), Some("tokyo"));
    }

    #[test]
    fn test_empty_guide_is_error() {
        assert_eq!(parse_guide(r#"{"cities": []}"#), Err(GuideError::Empty));
    }

    #[test]
    fn test_malformed_guide_is_parse_error() {
        assert!(matches!(parse_guide("{"), Err(GuideError::Parse(_))));
    }

    #[test]
    fn test_city_defaults() {
        let json = r#"{"cities":[{"id":"nara","label":"Nara","center":{"lat":34.68,"lng":135.8}}]}"#;
        let guide = parse_guide(json).unwrap();
        let nara = &guide.cities[0];
        assert_eq!(nara.zoom, 12);
        assert!(nara.sections.is_empty());
        assert_eq!(theme_class(&nara.id), "nara-active");
        assert_eq!(nara.activities().count(), 0);
    }
}
