//! Card Model
//!
//! Everything a scroll card renders, derived from one item record.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::{Item, MetaKind};
use crate::price::{format_price, PriceDisplay};

/// Characters that would break out of a CSS `url('...')`
const CSS_URL_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'\\');

/// One slide of a card carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    Image(String),
    /// Shown when the record has no images
    Placeholder,
}

impl Slide {
    /// Inline style for the slide element
    pub fn style(&self) -> String {
        match self {
            Slide::Image(url) => format!("background-image: url('{}')", css_url(url)),
            Slide::Placeholder => String::new(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Slide::Image(_) => "carousel-slide",
            Slide::Placeholder => "carousel-slide no-image",
        }
    }
}

fn css_url(url: &str) -> String {
    utf8_percent_encode(url, CSS_URL_ENCODE_SET).to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    /// Position within the deck
    pub index: usize,
    pub title: String,
    pub category: Option<String>,
    pub slides: Vec<Slide>,
    /// Real images, 0 when only the placeholder is shown
    pub image_count: usize,
    pub price: Option<PriceDisplay>,
    pub summary: String,
    pub description: String,
    pub meta: Vec<(MetaKind, String)>,
    pub url: Option<String>,
}

impl CardModel {
    pub fn from_item(item: &Item, index: usize) -> Self {
        let slides = if item.images.is_empty() {
            vec![Slide::Placeholder]
        } else {
            item.images.iter().cloned().map(Slide::Image).collect()
        };
        Self {
            index,
            title: item.name.clone(),
            category: item.category.clone(),
            slides,
            image_count: item.images.len(),
            price: format_price(item.price.as_deref()),
            summary: item.summary.clone(),
            description: item.description.clone(),
            meta: item.meta(),
            url: item.url.clone(),
        }
    }

    /// Dots, arrows and counter only for more than one image
    pub fn has_carousel_controls(&self) -> bool {
        self.image_count > 1
    }

    pub fn price_class(&self) -> &'static str {
        match &self.price {
            Some(p) if p.free => "card-price free",
            _ => "card-price",
        }
    }
}
