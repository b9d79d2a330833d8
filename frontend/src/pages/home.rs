use std::rc::Rc;

use eden_shared::{category, sections::HOME};
use yew::prelude::*;

use crate::{
    components::{newsletter::Newsletter, section_feed::SectionFeed},
    hooks::use_scroll_to_top,
    i18n::current::section_page as t,
    modal_context::{use_modal, ModalAction},
    models::{use_catalog, Article, ArticleListItem, CardSnapshot},
};

/// Teasers printed on the front page without a catalog record behind them;
/// they open the modal with generic copy for their category.
const EDITORIAL_TEASERS: &[(&str, &str, &str)] = &[
    ("EDITOR'S CHOICE", "The Quiet Revival of Buea's Craft Markets", "This week"),
    ("TRAVEL", "Weekend Escapes Along the Atlantic Coast", "Coming soon"),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();
    let catalog = use_catalog();
    let modal = use_modal();

    let cards = use_memo(catalog.clone(), |catalog| {
        catalog
            .iter()
            .filter(|article| article.section.is_some())
            .map(ArticleListItem::from)
            .collect::<Vec<_>>()
    });

    let features = use_memo(catalog.clone(), |catalog| {
        let mut snapshots: Vec<CardSnapshot> = catalog
            .iter()
            .filter(|article| article.section.is_none())
            .map(feature_snapshot)
            .collect();
        snapshots.extend(EDITORIAL_TEASERS.iter().map(|(label, title, meta)| CardSnapshot {
            image: Some(category::default_image(label).to_string()),
            category: label.to_string(),
            title: title.to_string(),
            meta: meta.to_string(),
        }));
        snapshots
    });

    html! {
        <main class="home-page">
            <section class="page-hero">
                <h1>{ HOME.title }</h1>
                <p>{ HOME.tagline }</p>
            </section>
            <div class="page-layout">
                <SectionFeed config={HOME} cards={Rc::clone(&cards)} />
                <aside class="sidebar">
                    <h2>{ t::SIDEBAR_TITLE }</h2>
                    <ul class="feature-list">
                        { for features.iter().map(|snapshot| {
                            let onclick = {
                                let modal = modal.clone();
                                let snapshot = snapshot.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    if let Some(modal) = modal.as_ref() {
                                        modal.dispatch(ModalAction::OpenSnapshot(snapshot.clone()));
                                    }
                                })
                            };
                            html! {
                                <li key={snapshot.title.clone()} class="feature-item">
                                    <span class="category">{ &snapshot.category }</span>
                                    <a href="#" class="feature-link" {onclick}>{ &snapshot.title }</a>
                                    <span class="meta">{ &snapshot.meta }</span>
                                </li>
                            }
                        }) }
                    </ul>
                    <Newsletter thanks={HOME.newsletter_thanks} />
                </aside>
            </div>
        </main>
    }
}

fn feature_snapshot(article: &Article) -> CardSnapshot {
    CardSnapshot {
        image: Some(article.image_url().to_string()),
        category: article.category.clone(),
        title: article.title.clone(),
        meta: article.date.clone(),
    }
}
