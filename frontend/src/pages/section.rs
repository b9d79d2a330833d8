use eden_shared::sections;
use yew::prelude::*;

use crate::{
    components::{newsletter::Newsletter, section_feed::SectionFeed},
    hooks::use_scroll_to_top,
    models::use_catalog,
    pages::not_found::NotFoundPage,
};

#[derive(Properties, Clone, PartialEq)]
pub struct SectionPageProps {
    pub slug: String,
}

#[function_component(SectionPage)]
pub fn section_page(props: &SectionPageProps) -> Html {
    use_scroll_to_top();
    let catalog = use_catalog();
    let config = sections::find(&props.slug);

    let cards = use_memo((catalog, config.map(|c| c.slug)), |(catalog, slug)| {
        slug.map(|slug| catalog.cards_for_section(slug)).unwrap_or_default()
    });

    let Some(config) = config else {
        return html! { <NotFoundPage /> };
    };

    html! {
        <main class={classes!("section-page", format!("section-{}", config.slug))}>
            <section class="page-hero">
                <h1>{ config.title }</h1>
                <p>{ config.tagline }</p>
            </section>
            <div class="page-layout">
                // Keyed so switching sections starts from a fresh filter and pager.
                <SectionFeed key={config.slug} config={*config} cards={cards.clone()} />
                <aside class="sidebar">
                    <Newsletter thanks={config.newsletter_thanks} />
                </aside>
            </div>
        </main>
    }
}
