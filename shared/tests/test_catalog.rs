//! Integration tests for the article catalog, filters, pager and modal.

use eden_shared::{
    filter::CategoryFilter,
    modal::{ModalState, ModalView},
    pager::SelectionPager,
    sections::{self, SECTIONS},
    ticker, ArticleDatabase, CategoryToken,
};

fn bundled() -> ArticleDatabase {
    ArticleDatabase::bundled().expect("bundled catalog parses")
}

#[test]
fn bundled_catalog_has_cards_for_every_section() {
    let db = bundled();
    for section in SECTIONS {
        assert!(
            !db.cards_for_section(section.slug).is_empty(),
            "section {} has no cards",
            section.slug
        );
    }
}

#[test]
fn every_article_references_a_known_section() {
    let db = bundled();
    for article in db.iter() {
        if let Some(section) = article.section.as_deref() {
            assert!(sections::find(section).is_some(), "{} -> {section}", article.id);
        }
        assert!(!article.content.trim().is_empty(), "{} has no body", article.id);
    }
}

#[test]
fn read_more_ids_open_the_modal() {
    let db = bundled();
    let mut modal = ModalState::closed();
    for id in ["column-1", "doc-1", "interview-1", "choice-1", "opinion-1", "travel-1"] {
        assert!(modal.open(&db, id), "{id} should open");
        let Some(ModalView::Article(slots)) = modal.view() else {
            panic!("expected article view for {id}");
        };
        assert_eq!(slots.id.as_deref(), Some(id));
        assert!(!slots.title.is_empty());
        assert!(!slots.date.is_empty());
    }
    assert!(!ModalState::closed().open(&db, "column-404"));
}

#[test]
fn news_section_filter_and_pager_cooperate() {
    let db = bundled();
    let cards = db.cards_for_section("news");
    let config = sections::find("news").and_then(|s| s.pager).expect("news pages");
    let mut filter = CategoryFilter::for_items(&cards);
    assert!(cards.len() > config.initial, "news needs more than one page of cards");

    let mut stored = SelectionPager::new(config, "all", cards.len());
    assert_eq!(stored.current("all", cards.len()).visible_range(), 0..config.initial);
    while let Some(next) = stored.advance("all", cards.len()) {
        stored = next;
    }
    assert_eq!(stored.current("all", cards.len()).revealed(), cards.len());

    let politics = CategoryToken::parse("Politics").expect("named token");
    let index = filter
        .controls()
        .iter()
        .position(|token| *token == politics)
        .expect("politics control");
    filter.select(index);

    let matches = filter.visibility(&cards);
    let shown: Vec<_> = cards.iter().zip(&matches).filter(|(_, m)| **m).map(|(c, _)| c).collect();
    assert!(shown.iter().all(|card| card.category_token == "politics"));

    let pager = stored.current(filter.active().as_str(), shown.len());
    assert!(pager.revealed() <= shown.len());
    assert_eq!(pager.revealed(), config.initial.min(shown.len()));
    assert_eq!(pager.is_exhausted(), pager.revealed() == shown.len());
}

#[test]
fn ticker_headlines_resolve_to_articles() {
    let db = bundled();
    let found = ticker::find_by_headline(&db, "New Road Project Connects Remote Communities • ");
    assert_eq!(found.map(|a| a.id.as_str()), Some("news-2"));
}
