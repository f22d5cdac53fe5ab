//! Scroll Card Component
//!
//! One card of a deck with its own image carousel and collapsible details.

use leptos::prelude::*;
use leptos_deck::Carousel;

use crate::card::CardModel;

/// Card with a self-contained image carousel
///
/// # Arguments
/// * `card` - Everything the card shows
/// * `active` - Whether the owning deck is settled on this card
#[component]
pub fn ScrollCard(card: CardModel, #[prop(into)] active: Signal<bool>) -> impl IntoView {
    let price_class = card.price_class();
    let controls = card.has_carousel_controls();
    let CardModel {
        index,
        title,
        category,
        slides,
        image_count,
        price,
        summary,
        description,
        meta,
        url,
    } = card;

    let (carousel, set_carousel) = signal(Carousel::new(image_count));
    let (expanded, set_expanded) = signal(false);

    let slides_view = slides
        .into_iter()
        .enumerate()
        .map(|(i, slide)| {
            view! { <div class=slide.class() style=slide.style() data-index=i.to_string()></div> }
        })
        .collect_view();

    let controls_view = controls.then(|| {
        let dots = (0..image_count)
            .map(|i| {
                view! {
                    <button
                        class=move || if carousel.get().is_active(i) { "carousel-dot active" } else { "carousel-dot" }
                        data-index=i.to_string()
                        aria-label=format!("Image {}", i + 1)
                        on:click=move |_| {
                            set_carousel.update(|c| {
                                c.jump(i);
                            });
                        }
                    ></button>
                }
            })
            .collect_view();

        view! {
            <button
                class="carousel-btn prev"
                aria-label="Previous image"
                on:click=move |ev| {
                    ev.prevent_default();
                    set_carousel.update(|c| c.prev());
                }
            >
                "‹"
            </button>
            <button
                class="carousel-btn next"
                aria-label="Next image"
                on:click=move |ev| {
                    ev.prevent_default();
                    set_carousel.update(|c| c.next());
                }
            >
                "›"
            </button>
            <div class="carousel-dots">{dots}</div>
        }
    });

    view! {
        <div
            class=move || if active.get() { "scroll-card active" } else { "scroll-card" }
            data-card-index=index.to_string()
            tabindex="0"
        >
            <div class="card-carousel">
                {category.map(|c| view! { <span class="card-category">{c}</span> })}
                {controls.then(|| view! {
                    <span class="carousel-counter">{move || carousel.get().counter_text()}</span>
                })}

                <div
                    class="carousel-track"
                    style=move || format!("transform: {}", carousel.get().track_transform())
                    data-current=move || carousel.get().current().to_string()
                >
                    {slides_view}
                </div>

                {controls_view}
            </div>

            <div class="card-content">
                <div class="card-header">
                    <h4 class="card-title">{title}</h4>
                    {price.map(|p| view! {
                        <span class=price_class>
                            {p.text}
                            {p.usd.map(|usd| view! { <span class="price-usd">{usd}</span> })}
                        </span>
                    })}
                </div>

                <p class="card-summary">{summary}</p>

                <button
                    class=move || if expanded.get() { "description-toggle expanded" } else { "description-toggle" }
                    aria-expanded=move || expanded.get().to_string()
                    on:click=move |_| set_expanded.update(|e| *e = !*e)
                >
                    "The Details"
                </button>
                <div class=move || if expanded.get() { "description-wrapper expanded" } else { "description-wrapper" }>
                    <p class="card-description">{description}</p>
                </div>

                <div class="card-meta">
                    {meta
                        .into_iter()
                        .map(|(kind, text)| view! {
                            <span><span class="icon">{kind.icon()}</span>" "{text}</span>
                        })
                        .collect_view()}
                </div>

                {url.map(|href| view! {
                    <a href=href target="_blank" rel="noopener" class="card-link">"Learn more →"</a>
                })}
            </div>
        </div>
    }
}
