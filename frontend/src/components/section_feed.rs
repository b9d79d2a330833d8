use std::rc::Rc;

use eden_shared::{filter::CategoryFilter, SectionConfig};
use yew::prelude::*;

use crate::{
    components::{
        article_card::ArticleCard, category_filter::CategoryFilterBar,
        load_more::LoadMoreButton,
    },
    hooks::use_pager,
    i18n::current::section_page as t,
    models::ArticleListItem,
};

#[derive(Properties, PartialEq)]
pub struct SectionFeedProps {
    pub config: SectionConfig,
    pub cards: Rc<Vec<ArticleListItem>>,
}

/// Filter bar, card grid and (when configured) the load-more button of one
/// section. A card is shown when it matches the active control and, for
/// paged sections, falls inside the revealed part of the filtered set.
#[function_component(SectionFeed)]
pub fn section_feed(props: &SectionFeedProps) -> Html {
    let config = props.config;
    let filter = {
        let cards = props.cards.clone();
        use_state(move || CategoryFilter::for_items(cards.as_slice()))
    };

    let matches = filter.visibility(props.cards.as_slice());
    let filtered_total = matches.iter().filter(|visible| **visible).count();
    let pager_handle = use_pager(
        config.pager.unwrap_or_default(),
        filtered_total,
        filter.active().to_string(),
    );
    let pager = pager_handle.pager();

    let on_select = {
        let filter = filter.clone();
        Callback::from(move |index: usize| {
            let mut next = (*filter).clone();
            if next.select(index).is_some() && next != *filter {
                filter.set(next);
            }
        })
    };

    let on_load = Callback::from(move |_| pager_handle.load_more());

    if props.cards.is_empty() {
        return html! { <p class="section-empty">{ t::EMPTY }</p> };
    }

    let mut ordinal = 0usize;
    let cards = props.cards.iter().zip(matches).enumerate().map(|(index, (card, matched))| {
        let visible =
            matched && (config.pager.is_none() || pager.visible_range().contains(&ordinal));
        if matched {
            ordinal += 1;
        }
        html! {
            <ArticleCard
                key={card.id.clone()}
                article={card.clone()}
                {index}
                {visible}
                display={config.display}
                card_class={AttrValue::Static(config.card_class)}
            />
        }
    });

    html! {
        <section class="section-feed">
            <CategoryFilterBar filter={(*filter).clone()} {on_select} />
            <div id={config.container_id} class="articles-grid">
                { for cards }
            </div>
            {
                if config.pager.is_some() {
                    html! {
                        <LoadMoreButton
                            exhausted={pager.is_exhausted()}
                            {on_load}
                            loading_label_ms={pager.config().loading_label_ms}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
