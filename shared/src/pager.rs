//! "Load more" pager.
//!
//! The pager always counts against the *currently filtered* card list.
//! [`SelectionPager`] ties a pager to the filter selection it was built for,
//! so a new selection starts from the first batch in the very render that
//! shows it.

use std::ops::Range;

/// Batch sizes of a load-more button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerConfig {
    /// Cards shown before the first click.
    pub initial: usize,
    /// Cards revealed per click.
    pub batch: usize,
    /// How long the button shows its loading label after a click.
    pub loading_label_ms: u32,
}

impl PagerConfig {
    /// Six cards up front, three more per click.
    pub const DEFAULT: Self = Self {
        initial: 6,
        batch: 3,
        loading_label_ms: 2000,
    };
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Running count of revealed cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    config: PagerConfig,
    total: usize,
    revealed: usize,
}

impl Pager {
    /// Pager over `total` filtered cards.
    pub fn new(config: PagerConfig, total: usize) -> Self {
        Self {
            config,
            total,
            revealed: config.initial.min(total),
        }
    }

    /// Start over against a new filtered set.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.revealed = self.config.initial.min(total);
    }

    /// Reveal the next batch. Returns how many cards became visible.
    pub fn load_more(&mut self) -> usize {
        let before = self.revealed;
        self.revealed = before.saturating_add(self.config.batch.max(1)).min(self.total);
        let added = self.revealed - before;
        tracing::debug!(added, revealed = self.revealed, total = self.total, "pager advanced");
        added
    }

    /// Cards currently revealed.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Size of the filtered set.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Cards still hidden by the pager.
    pub fn remaining(&self) -> usize {
        self.total - self.revealed
    }

    /// True once every filtered card is visible; the button hides itself.
    pub fn is_exhausted(&self) -> bool {
        self.revealed >= self.total
    }

    /// Positions, within the filtered list, of the cards the pager shows.
    pub fn visible_range(&self) -> Range<usize> {
        0..self.revealed
    }

    /// The configuration this pager was built with.
    pub fn config(&self) -> PagerConfig {
        self.config
    }
}

/// A [`Pager`] remembered together with the filter selection and card count
/// it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPager {
    selection: String,
    pager: Pager,
}

impl SelectionPager {
    /// Fresh pager for `selection` over `total` cards.
    pub fn new(config: PagerConfig, selection: impl Into<String>, total: usize) -> Self {
        Self {
            selection: selection.into(),
            pager: Pager::new(config, total),
        }
    }

    /// The pager to render for `selection` over `total` cards. A stored pager
    /// built for another selection or count is replaced by a fresh one.
    pub fn current(&self, selection: &str, total: usize) -> Pager {
        if self.selection == selection && self.pager.total() == total {
            self.pager
        } else {
            Pager::new(self.pager.config(), total)
        }
    }

    /// Reveal the next batch of [`SelectionPager::current`]. `None` when
    /// nothing is left to reveal.
    pub fn advance(&self, selection: &str, total: usize) -> Option<Self> {
        let mut pager = self.current(selection, total);
        (pager.load_more() > 0).then(|| Self {
            selection: selection.to_string(),
            pager,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_batches_and_label_duration() {
        let config = PagerConfig::default();
        assert_eq!((config.initial, config.batch), (6, 3));
        assert_eq!(config.loading_label_ms, 2000);
    }

    #[test]
    fn reveals_in_batches_until_exhausted() {
        let mut pager = Pager::new(PagerConfig::DEFAULT, 13);
        assert_eq!(pager.revealed(), 6);
        assert!(!pager.is_exhausted());
        assert_eq!(pager.load_more(), 3);
        assert_eq!(pager.load_more(), 3);
        assert_eq!(pager.remaining(), 1);
        assert_eq!(pager.load_more(), 1);
        assert!(pager.is_exhausted());
        assert_eq!(pager.load_more(), 0);
        assert_eq!(pager.revealed(), 13);
    }

    #[test]
    fn small_sets_start_exhausted() {
        let pager = Pager::new(PagerConfig::DEFAULT, 4);
        assert_eq!(pager.revealed(), 4);
        assert!(pager.is_exhausted());

        let empty = Pager::new(PagerConfig::DEFAULT, 0);
        assert!(empty.is_exhausted());
        assert_eq!(empty.visible_range(), 0..0);
    }

    #[test]
    fn reset_follows_the_filtered_set() {
        let mut pager = Pager::new(PagerConfig::DEFAULT, 20);
        pager.load_more();
        pager.load_more();
        assert_eq!(pager.revealed(), 12);

        pager.reset(8);
        assert_eq!(pager.revealed(), 6);
        assert_eq!(pager.remaining(), 2);
        pager.load_more();
        assert!(pager.is_exhausted());
        assert_eq!(pager.revealed(), 8);

        pager.reset(3);
        assert_eq!(pager.revealed(), 3);
        assert!(pager.is_exhausted());
    }

    #[test]
    fn never_reveals_more_than_exist() {
        for total in 0..25 {
            let mut pager = Pager::new(PagerConfig::DEFAULT, total);
            for _ in 0..10 {
                pager.load_more();
                assert!(pager.revealed() <= total);
                assert_eq!(pager.is_exhausted(), pager.revealed() == total);
            }
        }
    }

    #[test]
    fn new_selection_renders_from_the_first_batch() {
        let mut stored = SelectionPager::new(PagerConfig::DEFAULT, "all", 20);
        for _ in 0..2 {
            stored = stored.advance("all", 20).unwrap();
        }
        assert_eq!(stored.current("all", 20).revealed(), 12);

        // First render under the narrower selection already respects it.
        let narrowed = stored.current("politics", 8);
        assert_eq!(narrowed.revealed(), 6);
        assert_eq!(narrowed.total(), 8);
        assert!(!narrowed.is_exhausted());

        let stored = stored.advance("politics", 8).unwrap();
        assert_eq!(stored.current("politics", 8).revealed(), 8);
        assert!(stored.advance("politics", 8).is_none());

        // Same size, different selection: still starts over.
        assert_eq!(stored.current("health", 8).revealed(), 6);
    }
}
