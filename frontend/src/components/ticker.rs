use eden_shared::ticker::{find_by_headline, loop_items, normalize_headline, SEPARATOR};
use yew::prelude::*;

use crate::{
    components::ticker_notification::TickerNotification,
    i18n::current::ticker as t,
    modal_context::{use_modal, ModalAction},
    models::use_catalog,
};

const CATALOG_HEADLINES: usize = 5;

/// Headlines that only exist in the ticker; clicking them raises the
/// breaking-news toast instead of the modal.
const WIRE_HEADLINES: &[&str] = &[
    "Heavy rainfall expected along the coast this weekend",
    "Buea city council extends market hours for the festive season",
];

#[function_component(NewsTicker)]
pub fn news_ticker() -> Html {
    let catalog = use_catalog();
    let modal = use_modal();
    let paused = use_state(|| false);
    let notification = use_state(|| None::<String>);

    let headlines = use_memo(catalog.clone(), |catalog| {
        let mut items: Vec<String> = catalog
            .by_section("news")
            .take(CATALOG_HEADLINES)
            .map(|article| article.title.clone())
            .collect();
        items.extend(WIRE_HEADLINES.iter().map(|headline| headline.to_string()));
        loop_items(&items)
    });

    let on_item_click = {
        let catalog = catalog.clone();
        let notification = notification.clone();
        Callback::from(move |text: String| {
            let headline = normalize_headline(&text);
            match (find_by_headline(&catalog, &headline), modal.as_ref()) {
                (Some(article), Some(modal)) => {
                    modal.dispatch(ModalAction::OpenArticle(article.id.clone()))
                },
                _ => notification.set(Some(headline)),
            }
        })
    };

    let pause = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let resume = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };
    let close_notification = {
        let notification = notification.clone();
        Callback::from(move |_| notification.set(None))
    };

    html! {
        <>
            <div class="header-news-ticker" aria-label={t::ARIA} onmouseenter={pause} onmouseleave={resume}>
                <span class="ticker-label">{ t::LABEL }</span>
                <div class={classes!("ticker-content", (*paused).then_some("paused"))}>
                    { for headlines.iter().enumerate().map(|(index, headline)| {
                        let text = format!("{headline}{SEPARATOR}");
                        let onclick = {
                            let on_item_click = on_item_click.clone();
                            let text = text.clone();
                            Callback::from(move |_: MouseEvent| on_item_click.emit(text.clone()))
                        };
                        html! {
                            <span key={index} class="ticker-item" {onclick}>{ text }</span>
                        }
                    }) }
                </div>
            </div>
            {
                if let Some(headline) = (*notification).clone() {
                    html! {
                        <TickerNotification headline={headline} on_close={close_notification} />
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
