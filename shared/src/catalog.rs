//! The article database: an immutable id → record map built once per page
//! view and handed to whatever renders the modal.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{
    article::{Article, ArticleListItem},
    error::{Error, Result},
};

const BUNDLED_CATALOG: &str = include_str!("../assets/articles.json");

#[derive(Deserialize)]
struct CatalogDocument {
    articles: Vec<Article>,
}

/// Read-only article lookup. Records keep the order of the source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleDatabase {
    articles: Vec<Article>,
    index: HashMap<String, usize>,
}

impl ArticleDatabase {
    /// Build from records, rejecting blank and duplicate ids.
    pub fn from_articles(articles: Vec<Article>) -> Result<Self> {
        let mut index = HashMap::with_capacity(articles.len());
        for (position, article) in articles.iter().enumerate() {
            if article.id.trim().is_empty() {
                return Err(Error::EmptyArticleId {
                    index: position,
                });
            }
            if index.insert(article.id.clone(), position).is_some() {
                return Err(Error::DuplicateArticleId(article.id.clone()));
            }
        }
        tracing::debug!(count = articles.len(), "article catalog built");
        Ok(Self {
            articles,
            index,
        })
    }

    /// Parse a `{"articles": [...]}` document.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_articles(document.articles)
    }

    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Look a record up by id.
    pub fn get(&self, id: &str) -> Option<&Article> {
        let found = self.index.get(id).map(|&position| &self.articles[position]);
        if found.is_none() {
            tracing::debug!(id, "article id not in catalog");
        }
        found
    }

    /// Whether `id` is known.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Exact headline lookup.
    pub fn find_by_title(&self, title: &str) -> Option<&Article> {
        let title = title.trim();
        self.articles.iter().find(|article| article.title == title)
    }

    /// All records in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    /// Records listed as cards on the given section page.
    pub fn by_section<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a Article> + 'a {
        self.articles
            .iter()
            .filter(move |article| article.section.as_deref() == Some(section))
    }

    /// Card projections for a section page.
    pub fn cards_for_section(&self, section: &str) -> Vec<ArticleListItem> {
        self.by_section(section).map(ArticleListItem::from).collect()
    }

    /// Case-insensitive substring search over title, category, author and
    /// body. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<ArticleListItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let results: Vec<ArticleListItem> = self
            .articles
            .iter()
            .filter(|article| article.searchable_text().contains(&needle))
            .map(ArticleListItem::from)
            .collect();
        tracing::debug!(query = %needle, hits = results.len(), "catalog search");
        results
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, category: &str, title: &str, content: &str) -> Article {
        Article {
            id: id.to_string(),
            category: category.to_string(),
            title: title.to_string(),
            author: "Staff Reporter".to_string(),
            date: "January 5, 2026".to_string(),
            content: content.to_string(),
            section: Some("news".to_string()),
            summary: None,
            image: None,
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = ArticleDatabase::from_articles(vec![
            article("doc-1", "DOCUMENTARY", "One", ""),
            article("doc-1", "DOCUMENTARY", "Two", ""),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateArticleId(id) if id == "doc-1"));
    }

    #[test]
    fn rejects_blank_ids() {
        let err = ArticleDatabase::from_articles(vec![article("  ", "NEWS", "t", "")]).unwrap_err();
        assert!(matches!(
            err,
            Error::EmptyArticleId {
                index: 0
            }
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = ArticleDatabase::from_json("{\"articles\": 3}").unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(_)));
    }

    #[test]
    fn lookup_and_order() {
        let db = ArticleDatabase::from_articles(vec![
            article("b", "NEWS", "Second", ""),
            article("a", "NEWS", "First", ""),
        ])
        .unwrap();
        assert_eq!(db.get("a").map(|a| a.title.as_str()), Some("First"));
        assert!(db.get("missing").is_none());
        let ids: Vec<_> = db.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let db = ArticleDatabase::from_articles(vec![
            article("n1", "NEWS", "Road Project Opens", "<p>Highway to Kumba</p>"),
            article("b1", "BUSINESS", "Cocoa Prices", "<p>Exporters gain</p>"),
        ])
        .unwrap();
        let hits = db.search("  KUMBA ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "n1");
        assert_eq!(db.search("staff reporter").len(), 2);
        assert!(db.search("   ").is_empty());
        assert!(db.search("volcano").is_empty());
    }

    #[test]
    fn section_cards_follow_document_order() {
        let mut other = article("x", "SPORTS", "Derby", "");
        other.section = Some("society".to_string());
        let db = ArticleDatabase::from_articles(vec![
            article("n1", "NEWS", "A", ""),
            other,
            article("n2", "POLITICS", "B", ""),
        ])
        .unwrap();
        let cards = db.cards_for_section("news");
        let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["n1", "n2"]);
        assert_eq!(cards[1].category_token, "politics");
    }
}
