//! Guide Models
//!
//! Records supplied by the guide data file.

use serde::{Deserialize, Serialize};

/// Map position of a record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

/// One point of interest or accommodation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    /// Free-form, may embed one or more yen amounts
    pub price: Option<String>,
    /// Display order; the first image is shown by default
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub tips: Option<String>,
    pub url: Option<String>,
    pub coords: Option<Coords>,
    /// Accommodation rating, e.g. "4.82" or "New"
    pub rating: Option<String>,
}

#[cfg(test)]
impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_images(mut self, images: &[&str]) -> Self {
        self.images = images.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_price(mut self, price: &str) -> Self {
        self.price = Some(price.to_string());
        self
    }
}

impl Item {
    /// Present annotations in display order
    pub fn meta(&self) -> Vec<(MetaKind, String)> {
        [
            (MetaKind::Location, &self.location),
            (MetaKind::Duration, &self.duration),
            (MetaKind::Tip, &self.tips),
        ]
        .into_iter()
        .filter_map(|(kind, value)| value.clone().map(|v| (kind, v)))
        .collect()
    }
}

/// Free-text annotations shown under a card or in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKind {
    Location,
    Duration,
    Tip,
}

impl MetaKind {
    pub fn icon(&self) -> &'static str {
        match self {
            MetaKind::Location => "📍",
            MetaKind::Duration => "⏱",
            MetaKind::Tip => "💡",
        }
    }
}
