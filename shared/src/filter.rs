//! Category filter shared by every section page.
//!
//! A section renders one control per [`CategoryToken`]; clicking a control
//! makes it the single active one and keeps only the cards whose token
//! matches (or all of them for the wildcard).

use crate::{article::ArticleListItem, category::CategoryToken};

static WILDCARD: CategoryToken = CategoryToken::All;

/// Anything that can be shown or hidden by a category filter.
pub trait Categorized {
    /// The item's own `data-category` value, if any.
    fn category_token(&self) -> Option<&str>;
}

impl Categorized for ArticleListItem {
    fn category_token(&self) -> Option<&str> {
        let token = self.category_token.as_str();
        (!token.is_empty()).then_some(token)
    }
}

impl<T: Categorized + ?Sized> Categorized for &T {
    fn category_token(&self) -> Option<&str> {
        (**self).category_token()
    }
}

/// The controls of one filter bar and which of them is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    controls: Vec<CategoryToken>,
    active: usize,
}

impl CategoryFilter {
    /// Start with the wildcard control active, or the first control when
    /// there is no wildcard.
    pub fn new(controls: Vec<CategoryToken>) -> Self {
        let active = controls.iter().position(CategoryToken::is_all).unwrap_or(0);
        Self {
            controls,
            active,
        }
    }

    /// Filter bar for a set of cards: `all` followed by every distinct card
    /// token in order of first appearance.
    pub fn for_items<T: Categorized>(items: &[T]) -> Self {
        Self::new(controls_for(items))
    }

    /// Controls in display order.
    pub fn controls(&self) -> &[CategoryToken] {
        &self.controls
    }

    /// Index of the active control.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Token of the active control; the wildcard when there are no controls.
    pub fn active(&self) -> &CategoryToken {
        self.controls.get(self.active).unwrap_or(&WILDCARD)
    }

    /// Whether the control at `index` carries the active marker.
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active && index < self.controls.len()
    }

    /// Handle a click on the control at `index`. Out-of-range clicks change
    /// nothing and return `None`.
    pub fn select(&mut self, index: usize) -> Option<&CategoryToken> {
        let token = self.controls.get(index)?;
        self.active = index;
        tracing::debug!(category = %token, "category filter selected");
        Some(token)
    }

    /// Visibility of each item under the active control.
    pub fn visibility<T: Categorized>(&self, items: &[T]) -> Vec<bool> {
        let active = self.active();
        items.iter().map(|item| active.matches(item.category_token())).collect()
    }
}

/// `all` followed by the distinct tokens of `items` in first-seen order.
pub fn controls_for<T: Categorized>(items: &[T]) -> Vec<CategoryToken> {
    let mut controls = vec![CategoryToken::All];
    let tokens = items
        .iter()
        .filter_map(|item| item.category_token())
        .filter_map(CategoryToken::parse);
    for token in tokens {
        if !controls.contains(&token) {
            controls.push(token);
        }
    }
    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Card(Option<&'static str>);

    impl Categorized for Card {
        fn category_token(&self) -> Option<&str> {
            self.0
        }
    }

    fn cards() -> Vec<Card> {
        vec![
            Card(Some("politics")),
            Card(Some("economy")),
            Card(None),
            Card(Some("politics")),
            Card(Some("sports")),
        ]
    }

    #[test]
    fn controls_are_deduplicated_in_order() {
        let filter = CategoryFilter::for_items(&cards());
        let labels: Vec<_> = filter.controls().iter().map(CategoryToken::as_str).collect();
        assert_eq!(labels, ["all", "politics", "economy", "sports"]);
        assert_eq!(filter.active_index(), 0);
    }

    #[test]
    fn every_selection_shows_exactly_the_matching_cards() {
        let items = cards();
        let mut filter = CategoryFilter::for_items(&items);
        for index in 0..filter.controls().len() {
            let token = filter.select(index).cloned().unwrap();
            let visible = filter.visibility(&items);
            for (card, shown) in items.iter().zip(&visible) {
                let expected = token.is_all() || card.0 == Some(token.as_str());
                assert_eq!(*shown, expected, "token {token}, card {card:?}");
            }
            let active: Vec<_> =
                (0..filter.controls().len()).filter(|&i| filter.is_active(i)).collect();
            assert_eq!(active, [index]);
        }
    }

    #[test]
    fn untagged_card_only_visible_under_all() {
        let items = cards();
        let mut filter = CategoryFilter::for_items(&items);
        assert!(filter.visibility(&items)[2]);
        filter.select(2);
        assert_eq!(filter.active().as_str(), "economy");
        assert_eq!(filter.visibility(&items), [false, true, false, false, false]);
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let mut filter = CategoryFilter::for_items(&cards());
        filter.select(1);
        assert!(filter.select(42).is_none());
        assert_eq!(filter.active_index(), 1);
    }

    #[test]
    fn card_labels_become_slug_controls() {
        let items = [Card(Some("Editor's Choice")), Card(Some("editor-s-choice")), Card(Some("ALL"))];
        let filter = CategoryFilter::for_items(&items);
        let labels: Vec<_> = filter.controls().iter().map(CategoryToken::as_str).collect();
        assert_eq!(labels, ["all", "editor-s-choice"]);
        let mut filter = filter;
        filter.select(1);
        assert_eq!(filter.visibility(&items), [true, true, false]);
    }

    #[test]
    fn first_control_active_without_wildcard() {
        let filter = CategoryFilter::new(vec![
            CategoryToken::Named("asia".to_string()),
            CategoryToken::Named("europe".to_string()),
        ]);
        assert_eq!(filter.active().as_str(), "asia");
    }
}
