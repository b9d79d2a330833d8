//! Article records: the full catalog entry and its list-view projection.

use serde::{Deserialize, Serialize};

use crate::category;

/// Full article record as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique key, e.g. `column-1`.
    pub id: String,
    /// Display label such as `COLUMN` or `EDITOR'S CHOICE`.
    pub category: String,
    /// Headline.
    pub title: String,
    /// Byline without the leading "By".
    pub author: String,
    /// Human readable publication date.
    pub date: String,
    /// Pre-rendered HTML body.
    pub content: String,
    /// Section page that lists this article as a card.
    #[serde(default)]
    pub section: Option<String>,
    /// Card excerpt.
    #[serde(default)]
    pub summary: Option<String>,
    /// Image URL; falls back to the category image.
    #[serde(default)]
    pub image: Option<String>,
}

impl Article {
    /// Filter token of this article's category.
    pub fn category_token(&self) -> String {
        category::slugify(&self.category)
    }

    /// Image URL shown on the card and in the modal.
    pub fn image_url(&self) -> &str {
        self.image
            .as_deref()
            .unwrap_or_else(|| category::default_image(&self.category))
    }

    /// Lowercased text the search box matches against.
    pub(crate) fn searchable_text(&self) -> String {
        format!("{} {} {} {}", self.title, self.category, self.author, self.content).to_lowercase()
    }
}

// 列表项（精简版），卡片与搜索结果共用
/// Card-sized projection of an [`Article`], without the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleListItem {
    /// Article id used to open the modal.
    pub id: String,
    /// Display category label.
    pub category: String,
    /// Filter token derived from the category.
    pub category_token: String,
    /// Headline.
    pub title: String,
    /// Byline.
    pub author: String,
    /// Publication date.
    pub date: String,
    /// Card excerpt, empty when the record has none.
    pub summary: String,
    /// Resolved image URL.
    pub image: String,
}

impl From<&Article> for ArticleListItem {
    fn from(a: &Article) -> Self {
        ArticleListItem {
            id: a.id.clone(),
            category: a.category.clone(),
            category_token: a.category_token(),
            title: a.title.clone(),
            author: a.author.clone(),
            date: a.date.clone(),
            summary: a.summary.clone().unwrap_or_default(),
            image: a.image_url().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Article {
        Article {
            id: "choice-1".to_string(),
            category: "EDITOR'S CHOICE".to_string(),
            title: "Limbe Waterfront Reborn".to_string(),
            author: "Editorial Board".to_string(),
            date: "December 28, 2025".to_string(),
            content: "<p>Body</p>".to_string(),
            section: None,
            summary: None,
            image: None,
        }
    }

    #[test]
    fn list_item_uses_category_image_when_missing() {
        let item = ArticleListItem::from(&sample());
        assert_eq!(item.category_token, "editor-s-choice");
        assert_eq!(item.image, category::default_image("EDITOR'S CHOICE"));
        assert!(item.summary.is_empty());
    }

    #[test]
    fn explicit_image_wins() {
        let mut article = sample();
        article.image = Some("https://example.com/a.jpg".to_string());
        assert_eq!(article.image_url(), "https://example.com/a.jpg");
    }
}
