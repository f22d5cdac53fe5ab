//! Section Model
//!
//! A titled deck of cards built from a section's records.

use crate::card::CardModel;
use crate::models::Item;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionModel {
    pub title: String,
    pub cards: Vec<CardModel>,
}

impl SectionModel {
    /// Build a section. An empty list builds nothing.
    pub fn build(title: &str, items: &[Item]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            cards: items
                .iter()
                .enumerate()
                .map(|(i, item)| CardModel::from_item(item, i))
                .collect(),
        })
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Header count, e.g. "3 options"
    pub fn count_label(&self) -> String {
        format!("{} options", self.cards.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_section_builds_nothing() {
        assert_eq!(SectionModel::build("Morning", &[]), None);
    }

    #[test]
    fn test_cards_keep_order_and_index() {
        let items = vec![Item::new("A"), Item::new("B"), Item::new("C")];
        let section = SectionModel::build("Food", &items).unwrap();
        assert_eq!(section.card_count(), 3);
        assert_eq!(section.count_label(), "3 options");
        let titles: Vec<_> = section.cards.iter().map(|c| (c.index, c.title.as_str())).collect();
        assert_eq!(titles, vec![(0, "A"), (1, "B"), (2, "C")]);
    }
}
