//! Price Formatting
//!
//! Appends an approximate USD figure to free-form yen prices.

use regex::Regex;
use std::sync::OnceLock;

use crate::config::YEN_TO_USD_RATE;

static YEN_AMOUNT: OnceLock<Regex> = OnceLock::new();

fn yen_amount() -> &'static Regex {
    // "¥15,000-25,000": the upper bound of a range may omit the yen sign
    YEN_AMOUNT.get_or_init(|| Regex::new(r"¥([\d,]+)(?:\s*[-–]\s*¥?([\d,]+))?").expect("valid yen pattern"))
}

/// A price as shown on a card: the original text plus an optional USD estimate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDisplay {
    pub text: String,
    pub usd: Option<String>,
    /// Styled as free (green) on cards
    pub free: bool,
}

/// Format a price string. `None` when the record has no price.
pub fn format_price(price: Option<&str>) -> Option<PriceDisplay> {
    let text = price.filter(|p| !p.is_empty())?;
    Some(PriceDisplay {
        text: text.to_string(),
        usd: usd_estimate(text),
        free: is_free(text),
    })
}

/// Card styling rule: exactly "free" in any case, or containing "Free"
pub fn is_free(price: &str) -> bool {
    price.to_lowercase() == "free" || price.contains("Free")
}

/// Approximate USD text for the yen amounts in `price`.
///
/// Anything mentioning "free" gets no estimate. One amount gives `~$a`, two
/// give `~$a-b` in order, more collapse to `~$min-max`.
pub fn usd_estimate(price: &str) -> Option<String> {
    if price.to_lowercase().contains("free") {
        return None;
    }

    let usd: Vec<u64> = yen_amounts(price)
        .into_iter()
        .map(|yen| (yen as f64 * YEN_TO_USD_RATE).round() as u64)
        .collect();

    match usd.as_slice() {
        [] => None,
        [single] => Some(format!("~${}", single)),
        [low, high] => Some(format!("~${}-{}", low, high)),
        many => {
            let min = many.iter().min()?;
            let max = many.iter().max()?;
            Some(format!("~${}-{}", min, max))
        }
    }
}

/// Every yen amount in order of appearance, both ends of a range included
fn yen_amounts(price: &str) -> Vec<u64> {
    yen_amount()
        .captures_iter(price)
        .flat_map(|caps| [caps.get(1), caps.get(2)])
        .flatten()
        .filter_map(|m| {
            let digits: String = m.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
            digits.parse::<u64>().ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_amount() {
        assert_eq!(usd_estimate("¥500").as_deref(), Some("~$3"));
    }

    #[test]
    fn test_range() {
        assert_eq!(usd_estimate("¥15,000-25,000").as_deref(), Some("~$101-168"));
    }

    #[test]
    fn test_range_with_trailing_text() {
        assert_eq!(usd_estimate("¥2,000-4,000 for a full graze").as_deref(), Some("~$13-27"));
    }

    #[test]
    fn test_range_with_both_signs() {
        assert_eq!(usd_estimate("¥1,000 - ¥2,000").as_deref(), Some("~$7-13"));
    }

    #[test]
    fn test_free_has_no_estimate() {
        assert_eq!(usd_estimate("Free"), None);
        assert_eq!(usd_estimate("Free (tower ¥900)"), None);
        assert_eq!(usd_estimate("Admission free"), None);
    }

    #[test]
    fn test_three_amounts_collapse_to_min_max() {
        assert_eq!(usd_estimate("¥3,000 / ¥500 / ¥1,500").as_deref(), Some("~$3-20"));
    }

    #[test]
    fn test_non_matching_passes_through() {
        assert_eq!(usd_estimate("Varies by restaurant"), None);
        let display = format_price(Some("Varies by restaurant")).unwrap();
        assert_eq!(display.text, "Varies by restaurant");
        assert_eq!(display.usd, None);
        assert!(!display.free);
    }

    #[test]
    fn test_format_price_absent() {
        assert_eq!(format_price(None), None);
        assert_eq!(format_price(Some("")), None);
    }

    #[test]
    fn test_free_flag() {
        assert!(format_price(Some("FREE")).unwrap().free);
        assert!(format_price(Some("Free to walk")).unwrap().free);
        assert!(!format_price(Some("free-ish ¥100")).unwrap().free);
        assert!(!format_price(Some("¥600")).unwrap().free);
    }
}
