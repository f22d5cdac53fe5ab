//! Category Colors
//!
//! Color coding for category chips, map pins and the legend.

pub const ACCOMMODATION: &str = "Accommodation";

const DEFAULT_COLOR: &str = "#8a8580";

const COLORS: &[(&str, &str)] = &[
    (ACCOMMODATION, "#e8e4dc"),
    ("Shrine", "#c53d43"),
    ("Temple", "#c53d43"),
    ("Museum", "#6a9fb5"),
    ("Park", "#88a65e"),
    ("Art", "#9b7bc7"),
    ("Views", "#f0a030"),
    ("Food", "#e07850"),
    ("Food & Drink", "#e07850"),
    ("Market", "#e07850"),
    ("District", "#5ba3c0"),
    ("Neighborhood", "#5ba3c0"),
    ("Shopping", "#5ba3c0"),
    ("Nightlife", "#d45087"),
    ("Bar Alley", "#d45087"),
    ("Ramen", "#e07850"),
    ("Tsukemen", "#e07850"),
    ("Tonkatsu", "#e07850"),
    ("Beef", "#e07850"),
    ("Tempura", "#e07850"),
    ("Monjayaki", "#e07850"),
    ("Unagi", "#e07850"),
    ("BBQ", "#e07850"),
    ("Yakitori", "#e07850"),
    ("Street Food", "#e07850"),
    ("Fine Dining", "#e07850"),
    ("Dining District", "#e07850"),
    ("Day Trip", "#88a65e"),
    ("Nature", "#88a65e"),
    ("Craft Beer", "#f0c030"),
    ("Beer", "#f0c030"),
    ("Sake", "#f0c030"),
    ("Whiskey", "#f0c030"),
    ("Castle", "#8b7355"),
    ("Theme Park", "#9b7bc7"),
];

/// Hex color for a category; unknown or missing categories get the neutral default
pub fn color_for(category: Option<&str>) -> &'static str {
    category
        .and_then(|name| COLORS.iter().find(|(c, _)| *c == name))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_categories() {
        assert_eq!(color_for(Some("Shrine")), "#c53d43");
        assert_eq!(color_for(Some(ACCOMMODATION)), "#e8e4dc");
        assert_eq!(color_for(Some("Karaoke")), DEFAULT_COLOR);
        assert_eq!(color_for(None), DEFAULT_COLOR);
    }
}
