//! Header news ticker.

use crate::{article::Article, catalog::ArticleDatabase};

/// Separator rendered between ticker headlines.
pub const SEPARATOR: &str = " • ";

/// Characters of a headline used to find the matching article.
pub const MATCH_PREFIX_CHARS: usize = 20;

/// Breaking-news toast lifetime before it starts sliding out.
pub const NOTIFICATION_DISMISS_MS: u32 = 5_000;

/// Length of the slide-out animation.
pub const NOTIFICATION_SLIDE_OUT_MS: u32 = 500;

/// Items followed by a copy of themselves, so the CSS marquee wraps without
/// a gap.
pub fn loop_items<T: Clone>(items: &[T]) -> Vec<T> {
    let mut looped = Vec::with_capacity(items.len() * 2);
    looped.extend_from_slice(items);
    looped.extend_from_slice(items);
    looped
}

/// Clickable text of a ticker item without its separator.
pub fn normalize_headline(text: &str) -> String {
    text.replacen(SEPARATOR, "", 1).trim().to_string()
}

/// The article a clicked headline refers to: the last record whose title
/// contains the first [`MATCH_PREFIX_CHARS`] characters of the headline.
pub fn find_by_headline<'a>(db: &'a ArticleDatabase, headline: &str) -> Option<&'a Article> {
    let headline = normalize_headline(headline);
    if headline.is_empty() {
        return None;
    }
    let key: String = headline.chars().take(MATCH_PREFIX_CHARS).collect();
    let found = db.iter().filter(|article| article.title.contains(&key)).last();
    tracing::debug!(%key, matched = found.is_some(), "ticker headline lookup");
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, title: &str) -> Article {
        Article {
            id: id.to_string(),
            category: "NEWS".to_string(),
            title: title.to_string(),
            author: "Desk".to_string(),
            date: "January 2, 2026".to_string(),
            content: String::new(),
            section: None,
            summary: None,
            image: None,
        }
    }

    #[test]
    fn loop_doubles_items() {
        assert_eq!(loop_items(&[1, 2, 3]), [1, 2, 3, 1, 2, 3]);
        assert!(loop_items::<u8>(&[]).is_empty());
    }

    #[test]
    fn separator_is_stripped() {
        assert_eq!(normalize_headline(" • Fuel prices drop "), "Fuel prices drop");
        assert_eq!(normalize_headline("Fuel prices drop • "), "Fuel prices drop");
    }

    #[test]
    fn matches_on_prefix_and_prefers_last() {
        let db = ArticleDatabase::from_articles(vec![
            article("a", "New Road Project Connects Remote Communities"),
            article("b", "Update: New Road Project Connects Remote Communities Again"),
            article("c", "Cocoa Harvest Breaks Records"),
        ])
        .unwrap();
        let found = find_by_headline(&db, " • New Road Project Connects Everyone");
        assert_eq!(found.map(|a| a.id.as_str()), Some("b"));
        assert!(find_by_headline(&db, "Volcano alert on Mount Cameroon").is_none());
        assert!(find_by_headline(&db, SEPARATOR).is_none());
    }

    #[test]
    fn prefix_counts_characters_not_bytes() {
        let db = ArticleDatabase::from_articles(vec![article("f", "Fête de la Musique à Douala ce soir")])
            .unwrap();
        assert!(find_by_headline(&db, "Fête de la Musique à Douala: programme").is_some());
    }
}
