//! Detail Sidebar Component
//!
//! Full-height panel opened from map pins. Only one exists on the page.

use leptos::ev;
use leptos::prelude::*;

use crate::card::CardModel;
use crate::category;
use crate::models::Item;
use crate::store::{store_close_sidebar, use_guide_store, GuideStateStoreFields};

/// Lock or release page scrolling behind the sidebar
fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().body() else { return };
    let value = if locked { "hidden" } else { "" };
    if body.style().set_property("overflow", value).is_err() {
        log::warn!("could not set body overflow");
    }
}

#[component]
pub fn DetailSidebar() -> impl IntoView {
    let store = use_guide_store();
    let sidebar = store.sidebar();
    let is_open = move || sidebar.with(|s| s.is_open());
    let record = Memo::new(move |_| sidebar.with(|s| s.record().cloned()));

    Effect::new(move |_| set_body_scroll_locked(is_open()));

    let on_escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            store_close_sidebar(&store);
        }
    });
    on_cleanup(move || on_escape.remove());

    view! {
        <div
            id="sidebar-overlay"
            class=move || if is_open() { "sidebar-overlay active" } else { "sidebar-overlay" }
            on:click=move |_| store_close_sidebar(&store)
        ></div>
        <aside
            id="activity-sidebar"
            class=move || if is_open() { "activity-sidebar active" } else { "activity-sidebar" }
        >
            <button class="sidebar-close" aria-label="Close" on:click=move |_| store_close_sidebar(&store)>
                "×"
            </button>
            <div class="sidebar-content">
                {move || record.get().map(|item| view! { <SidebarBody item=item /> })}
            </div>
        </aside>
    }
}

#[component]
fn SidebarBody(item: Item) -> impl IntoView {
    let store = use_guide_store();
    let sidebar = store.sidebar();
    let carousel = move || sidebar.with(|s| s.carousel());

    let card = CardModel::from_item(&item, 0);
    let price_class = if card.price.as_ref().is_some_and(|p| p.free) {
        "sidebar-price free"
    } else {
        "sidebar-price"
    };
    let category_color = category::color_for(item.category.as_deref());
    let image_count = item.images.len();

    let images = (image_count > 0).then(|| {
        let imgs = item
            .images
            .iter()
            .enumerate()
            .map(|(i, src)| {
                view! {
                    <img
                        src=src.clone()
                        alt=item.name.clone()
                        class=move || if carousel().is_active(i) { "active" } else { "" }
                    />
                }
            })
            .collect_view();

        view! {
            <div class="sidebar-images">
                {imgs}
                {(image_count > 1).then(|| view! {
                    <div class="sidebar-image-nav">
                        <button class="sidebar-img-btn prev" on:click=move |_| sidebar.update(|s| s.prev_image())>
                            "‹"
                        </button>
                        <span class="sidebar-img-counter">{move || carousel().counter_text()}</span>
                        <button class="sidebar-img-btn next" on:click=move |_| sidebar.update(|s| s.next_image())>
                            "›"
                        </button>
                    </div>
                })}
            </div>
        }
    });

    view! {
        {images}
        <div class="sidebar-body">
            {card.category.map(|c| view! {
                <span class="sidebar-category" style=format!("background-color: {}", category_color)>{c}</span>
            })}
            <h3 class="sidebar-title">{card.title}</h3>
            {card.price.map(|p| view! {
                <span class=price_class>
                    {p.text}
                    {p.usd.map(|usd| view! { <span class="price-usd">{usd}</span> })}
                </span>
            })}
            <p class="sidebar-summary">{card.summary}</p>
            <p class="sidebar-description">{card.description}</p>
            <div class="sidebar-meta">
                {card
                    .meta
                    .into_iter()
                    .map(|(kind, text)| view! {
                        <div class="meta-item"><span class="icon">{kind.icon()}</span>" "{text}</div>
                    })
                    .collect_view()}
                {item.rating.map(|rating| view! {
                    <div class="meta-item"><span class="icon">"★"</span>" "{rating}</div>
                })}
            </div>
            {card.url.map(|href| view! {
                <a href=href target="_blank" rel="noopener" class="sidebar-link">"Learn more →"</a>
            })}
        </div>
    }
}
