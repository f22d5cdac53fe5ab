//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;
use crate::sidebar::SidebarState;

/// Page-level state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct GuideState {
    /// Id of the city whose tab is showing
    pub active_city: String,
    /// The one detail sidebar
    pub sidebar: SidebarState,
}

impl GuideState {
    pub fn new(default_city: &str) -> Self {
        Self {
            active_city: default_city.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type GuideStore = Store<GuideState>;

/// Get the guide store from context
pub fn use_guide_store() -> GuideStore {
    expect_context::<GuideStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_select_city(store: &GuideStore, city_id: &str) {
    *store.active_city().write() = city_id.to_string();
}

/// Sidebar-open entry point used by map markers
pub fn store_open_sidebar(store: &GuideStore, item: Item) {
    log::debug!("opening sidebar for {}", item.name);
    store.sidebar().write().open(item);
}

pub fn store_close_sidebar(store: &GuideStore) {
    if store.sidebar().with_untracked(|s| s.is_open()) {
        store.sidebar().write().close();
    }
}
