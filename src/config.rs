//! Page Constants
//!
//! Tuning values for the guide page. Deck/drag tuning lives in
//! `leptos_deck::config`.

/// Approximate USD per JPY (roughly 150 JPY = 1 USD)
pub const YEN_TO_USD_RATE: f64 = 0.0067;

/// Viewport width (px) at or below which a tab switch scrolls content into view
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

/// Delay before creating maps so their containers have a size
pub const MAP_INIT_DELAY_MS: u32 = 100;

pub const MAP_TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
pub const MAP_TILE_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";
pub const MAP_TILE_SUBDOMAINS: &str = "abcd";
pub const MAP_MAX_ZOOM: u8 = 19;

/// Marker outline shared by every pin
pub const MARKER_OUTLINE: &str = "#1a1918";

/// Activity pins
pub const ACTIVITY_MARKER_RADIUS: f64 = 6.0;
pub const ACTIVITY_MARKER_WEIGHT: f64 = 2.0;
pub const ACTIVITY_MARKER_FILL_OPACITY: f64 = 0.4;

/// Accommodation pins are drawn larger
pub const STAY_MARKER_RADIUS: f64 = 9.0;
pub const STAY_MARKER_WEIGHT: f64 = 3.0;
pub const STAY_MARKER_FILL_OPACITY: f64 = 0.5;
