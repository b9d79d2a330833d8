//! Per-section page configuration.
//!
//! Every section page shares one layout (filter bar, card grid, optional
//! pager, newsletter box); only the values below differ between them.

use crate::{newsletter::DEFAULT_THANKS, pager::PagerConfig};

/// CSS `display` value a visible card receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDisplay {
    /// `display: flex`, horizontal cards.
    Flex,
    /// `display: block`, stacked cards.
    Block,
}

impl CardDisplay {
    /// The CSS keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Flex => "flex",
            Self::Block => "block",
        }
    }
}

/// Static description of one section page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionConfig {
    /// Route segment and `Article::section` value.
    pub slug: &'static str,
    /// Page heading.
    pub title: &'static str,
    /// Line under the heading.
    pub tagline: &'static str,
    /// Id of the card grid element.
    pub container_id: &'static str,
    /// Class every card in the grid carries.
    pub card_class: &'static str,
    /// Display value of visible cards.
    pub display: CardDisplay,
    /// Newsletter confirmation text.
    pub newsletter_thanks: &'static str,
    /// Load-more pager, for sections that have one.
    pub pager: Option<PagerConfig>,
}

/// Front page; lists every article and always pages.
pub const HOME: SectionConfig = SectionConfig {
    slug: "home",
    title: "EDEN Newspaper",
    tagline: "News from the South-West region and beyond",
    container_id: "home-articles",
    card_class: "article-card",
    display: CardDisplay::Flex,
    newsletter_thanks: DEFAULT_THANKS,
    pager: Some(PagerConfig::DEFAULT),
};

/// The eight section pages in navigation order.
pub const SECTIONS: &[SectionConfig] = &[
    SectionConfig {
        slug: "news",
        title: "News",
        tagline: "Breaking stories and daily reporting",
        container_id: "news-articles",
        card_class: "article-card",
        display: CardDisplay::Flex,
        newsletter_thanks: "Thank you for subscribing! You will receive breaking news alerts.",
        pager: Some(PagerConfig::DEFAULT),
    },
    SectionConfig {
        slug: "business",
        title: "Business",
        tagline: "Markets, enterprise and the regional economy",
        container_id: "business-articles",
        card_class: "article-card",
        display: CardDisplay::Flex,
        newsletter_thanks: "Thank you for subscribing! You will receive daily business insights.",
        pager: None,
    },
    SectionConfig {
        slug: "africa",
        title: "Africa",
        tagline: "Across the continent",
        container_id: "africa-articles",
        card_class: "africa-card",
        display: CardDisplay::Block,
        newsletter_thanks: "Thank you for subscribing to our Africa newsletter!",
        pager: None,
    },
    SectionConfig {
        slug: "america",
        title: "America",
        tagline: "North and South America",
        container_id: "america-articles",
        card_class: "america-card",
        display: CardDisplay::Block,
        newsletter_thanks: "Thank you for subscribing to our America newsletter!",
        pager: None,
    },
    SectionConfig {
        slug: "asia",
        title: "Asia",
        tagline: "Asian news and developments",
        container_id: "asia-articles",
        card_class: "asia-card",
        display: CardDisplay::Block,
        newsletter_thanks: "Thank you for subscribing to our Asia newsletter! You will receive \
                            updates on Asian news and developments.",
        pager: None,
    },
    SectionConfig {
        slug: "europe",
        title: "Europe",
        tagline: "Politics and society across Europe",
        container_id: "europe-articles",
        card_class: "europe-card",
        display: CardDisplay::Block,
        newsletter_thanks: "Thank you for subscribing to our Europe newsletter!",
        pager: None,
    },
    SectionConfig {
        slug: "international",
        title: "International",
        tagline: "World affairs and diplomacy",
        container_id: "international-articles",
        card_class: "international-card",
        display: CardDisplay::Block,
        newsletter_thanks: "Thank you for subscribing to our International newsletter!",
        pager: None,
    },
    SectionConfig {
        slug: "society",
        title: "Society",
        tagline: "Culture, community and everyday life",
        container_id: "society-articles",
        card_class: "society-card",
        display: CardDisplay::Block,
        newsletter_thanks: "Thank you for subscribing to our Society newsletter!",
        pager: None,
    },
];

/// Look a section up by its route segment, case-insensitively.
pub fn find(slug: &str) -> Option<&'static SectionConfig> {
    let slug = slug.trim();
    SECTIONS.iter().find(|section| section.slug.eq_ignore_ascii_case(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = SECTIONS.iter().map(|s| s.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SECTIONS.len());
        assert!(!slugs.contains(&HOME.slug));
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find(" Asia ").map(|s| s.card_class), Some("asia-card"));
        assert!(find("weather").is_none());
    }

    #[test]
    fn only_news_pages_among_sections() {
        let paged: Vec<_> = SECTIONS.iter().filter(|s| s.pager.is_some()).map(|s| s.slug).collect();
        assert_eq!(paged, ["news"]);
        assert_eq!(find("business").map(|s| s.display), Some(CardDisplay::Flex));
        assert_eq!(find("europe").map(|s| s.display.as_css()), Some("block"));
    }
}
