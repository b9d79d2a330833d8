//! Article modal state machine: `Closed -> Open -> Closed`.
//!
//! While open the page behind it must not scroll; [`ModalState::scroll_locked`]
//! is what the frontend mirrors onto `body.style.overflow`.

use crate::{
    article::{Article, ArticleListItem},
    catalog::ArticleDatabase,
    category,
};

/// Ways the reader can dismiss the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The `×` control.
    CloseButton,
    /// A click on the backdrop outside the content box.
    OutsideClick,
    /// The Escape key.
    Escape,
}

/// Where a click on the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRegion {
    /// The overlay around the content box.
    Backdrop,
    /// Anywhere inside the content box.
    Content,
}

impl ClickRegion {
    /// Classify a click by whether its target is the overlay element itself.
    pub fn of_target(target_is_overlay: bool) -> Self {
        if target_is_overlay {
            Self::Backdrop
        } else {
            Self::Content
        }
    }
}

/// Values written into the fixed modal slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSlots {
    /// Article id, absent for fallback content.
    pub id: Option<String>,
    /// `modalImage` source.
    pub image: String,
    /// `modalCategory` text.
    pub category: String,
    /// `modalTitle` text.
    pub title: String,
    /// `modalAuthor` text, without the "By" prefix.
    pub author: Option<String>,
    /// `modalDate` text.
    pub date: String,
    /// `modalContent` HTML.
    pub body: String,
}

impl From<&Article> for ArticleSlots {
    fn from(article: &Article) -> Self {
        Self {
            id: Some(article.id.clone()),
            image: article.image_url().to_string(),
            category: article.category.clone(),
            title: article.title.clone(),
            author: Some(article.author.clone()),
            date: article.date.clone(),
            body: article.content.clone(),
        }
    }
}

/// What a card (or ticker item) shows about itself, used when the modal is
/// opened from the card rather than from a catalog id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSnapshot {
    /// Image source on the card.
    pub image: Option<String>,
    /// Category label on the card.
    pub category: String,
    /// Headline on the card.
    pub title: String,
    /// Meta line on the card (date or byline).
    pub meta: String,
}

/// Current modal contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalView {
    /// A single article.
    Article(ArticleSlots),
    /// Header search results.
    SearchResults {
        /// Query as typed.
        query: String,
        /// Matching articles.
        results: Vec<ArticleListItem>,
    },
}

/// Open/closed state of the shared modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    view: Option<ModalView>,
}

impl ModalState {
    /// A closed modal.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Open the article `id`. Unknown ids leave the state untouched.
    pub fn open(&mut self, db: &ArticleDatabase, id: &str) -> bool {
        match db.get(id) {
            Some(article) => {
                tracing::debug!(id, "modal opened");
                self.view = Some(ModalView::Article(ArticleSlots::from(article)));
                true
            },
            None => false,
        }
    }

    /// Open from a card. A catalog record with the same headline supplies the
    /// body; otherwise the card's own fields are shown over generic text.
    pub fn open_with_fallback(&mut self, db: &ArticleDatabase, snapshot: &CardSnapshot) {
        let slots = match db.find_by_title(&snapshot.title) {
            Some(article) => ArticleSlots::from(article),
            None => ArticleSlots {
                id: None,
                image: snapshot
                    .image
                    .clone()
                    .unwrap_or_else(|| category::default_image(&snapshot.category).to_string()),
                category: snapshot.category.clone(),
                title: snapshot.title.clone(),
                author: None,
                date: snapshot.meta.clone(),
                body: fallback_content(&snapshot.category),
            },
        };
        tracing::debug!(title = %slots.title, fallback = slots.id.is_none(), "modal opened");
        self.view = Some(ModalView::Article(slots));
    }

    /// Show search results. An empty result list keeps the modal as it was
    /// and returns `false` so the caller can tell the reader.
    pub fn show_search_results(&mut self, query: &str, results: Vec<ArticleListItem>) -> bool {
        if results.is_empty() {
            return false;
        }
        self.view = Some(ModalView::SearchResults {
            query: query.trim().to_string(),
            results,
        });
        true
    }

    /// Apply a close trigger. Returns whether the modal was open.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        let was_open = self.view.take().is_some();
        if was_open {
            tracing::debug!(?trigger, "modal closed");
        }
        was_open
    }

    /// Handle a click on the overlay. Only a backdrop click closes; clicks
    /// inside the content box leave the modal as it is.
    pub fn click(&mut self, region: ClickRegion) -> bool {
        match region {
            ClickRegion::Backdrop => self.close(CloseTrigger::OutsideClick),
            ClickRegion::Content => false,
        }
    }

    /// Whether the modal is visible.
    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    /// Whether background scrolling must be suspended.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Current contents, `None` while closed.
    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }
}

/// Generic body for articles that have no stored text.
pub fn fallback_content(category: &str) -> String {
    let topic = category.trim().to_lowercase();
    format!(
        r#"<p>This comprehensive article explores the latest developments in {topic} and their impact on our community. Our detailed coverage provides in-depth analysis and insights into this important topic.</p>
<h3>Background and Context</h3>
<p>The current situation represents a significant development that affects various aspects of our society. Understanding the full scope of this issue requires examining multiple perspectives and considering long-term implications.</p>
<h3>Key Developments</h3>
<p>Recent events have brought this topic to the forefront of public discussion. Stakeholders from various sectors are actively engaged in addressing the challenges and opportunities presented by these changes.</p>
<h3>Community Impact</h3>
<p>The implications for our local community are substantial and multifaceted. From economic considerations to social dynamics, these developments will shape our future in meaningful ways.</p>
<h3>Looking Ahead</h3>
<p>As we move forward, continued monitoring and adaptive strategies will be essential. The coming months will be crucial in determining the ultimate trajectory of these important developments.</p>
<p><em>For more detailed coverage and updates, stay tuned to EDEN Newspaper.</em></p>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> ArticleDatabase {
        ArticleDatabase::from_articles(vec![Article {
            id: "interview-1".to_string(),
            category: "INTERVIEW".to_string(),
            title: "A Conversation with the Mayor of Buea".to_string(),
            author: "Grace Ekwe".to_string(),
            date: "December 20, 2025".to_string(),
            content: "<p>Q&amp;A</p>".to_string(),
            section: None,
            summary: None,
            image: None,
        }])
        .unwrap()
    }

    #[test]
    fn known_id_populates_every_slot() {
        let mut modal = ModalState::closed();
        assert!(modal.open(&db(), "interview-1"));
        assert!(modal.is_open());
        assert!(modal.scroll_locked());
        let Some(ModalView::Article(slots)) = modal.view() else {
            panic!("expected article view");
        };
        assert_eq!(slots.id.as_deref(), Some("interview-1"));
        assert_eq!(slots.category, "INTERVIEW");
        assert_eq!(slots.title, "A Conversation with the Mayor of Buea");
        assert_eq!(slots.author.as_deref(), Some("Grace Ekwe"));
        assert_eq!(slots.date, "December 20, 2025");
        assert_eq!(slots.body, "<p>Q&amp;A</p>");
        assert_eq!(slots.image, category::default_image("INTERVIEW"));
    }

    #[test]
    fn unknown_id_stays_closed() {
        let mut modal = ModalState::closed();
        assert!(!modal.open(&db(), "interview-99"));
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn every_trigger_closes_and_unlocks_scroll() {
        for trigger in [CloseTrigger::CloseButton, CloseTrigger::OutsideClick, CloseTrigger::Escape] {
            let mut modal = ModalState::closed();
            modal.open(&db(), "interview-1");
            assert!(modal.close(trigger));
            assert!(!modal.is_open());
            assert!(!modal.scroll_locked());
            assert!(!modal.close(trigger));
        }
    }

    #[test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let mut modal = ModalState::closed();
        modal.open(&db(), "interview-1");

        assert!(!modal.click(ClickRegion::of_target(false)));
        assert!(modal.is_open());
        assert!(modal.scroll_locked());

        assert!(modal.click(ClickRegion::of_target(true)));
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());

        assert!(!modal.click(ClickRegion::Backdrop));
    }

    #[test]
    fn snapshot_without_record_gets_fallback_text() {
        let mut modal = ModalState::closed();
        modal.open_with_fallback(
            &db(),
            &CardSnapshot {
                image: None,
                category: "SPORTS".to_string(),
                title: "Lions Win Derby".to_string(),
                meta: "Breaking this hour".to_string(),
            },
        );
        let Some(ModalView::Article(slots)) = modal.view() else {
            panic!("expected article view");
        };
        assert!(slots.id.is_none());
        assert_eq!(slots.date, "Breaking this hour");
        assert!(slots.body.contains("latest developments in sports"));
        assert_eq!(slots.image, category::default_image("SPORTS"));
    }

    #[test]
    fn snapshot_with_matching_title_uses_record() {
        let mut modal = ModalState::closed();
        modal.open_with_fallback(
            &db(),
            &CardSnapshot {
                title: " A Conversation with the Mayor of Buea ".to_string(),
                ..CardSnapshot::default()
            },
        );
        let Some(ModalView::Article(slots)) = modal.view() else {
            panic!("expected article view");
        };
        assert_eq!(slots.id.as_deref(), Some("interview-1"));
    }

    #[test]
    fn empty_search_keeps_modal_closed() {
        let mut modal = ModalState::closed();
        assert!(!modal.show_search_results("volcano", Vec::new()));
        assert!(!modal.is_open());

        let hits = db().search("mayor");
        assert!(modal.show_search_results(" mayor ", hits));
        assert!(matches!(
            modal.view(),
            Some(ModalView::SearchResults { query, results }) if query == "mayor" && results.len() == 1
        ));
    }
}
