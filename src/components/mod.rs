//! UI Components
//!
//! Leptos components for the guide page.

mod city_map;
mod city_panel;
mod city_tab_bar;
mod deck_section;
mod detail_sidebar;
mod map_legend;
mod scroll_card;

pub use city_map::CityMap;
pub use city_panel::CityPanel;
pub use city_tab_bar::CityTabBar;
pub use deck_section::DeckSection;
pub use detail_sidebar::DetailSidebar;
pub use map_legend::MapLegend;
pub use scroll_card::ScrollCard;
