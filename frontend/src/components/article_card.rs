use eden_shared::sections::CardDisplay;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::{
    hooks::use_reveal_on_scroll,
    i18n::current::common as t,
    modal_context::{use_modal, ModalAction},
    models::ArticleListItem,
};

const PRESS_ANIMATION_MS: u32 = 150;

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: ArticleListItem,
    /// Position in the grid, drives the staggered entrance.
    pub index: usize,
    pub visible: bool,
    #[prop_or(CardDisplay::Flex)]
    pub display: CardDisplay,
    #[prop_or(AttrValue::Static("article-card"))]
    pub card_class: AttrValue,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let node = use_node_ref();
    let pressed = use_state(|| false);
    let press_timer = use_mut_ref(|| None::<Timeout>);
    let modal = use_modal();
    use_reveal_on_scroll(node.clone());

    let open = {
        let modal = modal.clone();
        let id = article.id.clone();
        Callback::from(move |_| {
            if let Some(modal) = modal.as_ref() {
                modal.dispatch(ModalAction::OpenArticle(id.clone()));
            }
        })
    };

    let onclick = {
        let open = open.clone();
        let pressed = pressed.clone();
        let press_timer = press_timer.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            pressed.set(true);
            let pressed = pressed.clone();
            *press_timer.borrow_mut() =
                Some(Timeout::new(PRESS_ANIMATION_MS, move || pressed.set(false)));
            open.emit(());
        })
    };

    let on_read_more = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        e.stop_propagation();
        open.emit(());
    });

    let style = format!(
        "display: {}; animation-delay: {:.1}s;",
        if props.visible { props.display.as_css() } else { "none" },
        props.index as f64 * 0.1
    );

    html! {
        <article
            ref={node}
            class={classes!(props.card_class.to_string(), (*pressed).then_some("pressed"))}
            data-category={article.category_token.clone()}
            data-article-id={article.id.clone()}
            {style}
            {onclick}
        >
            <img src={article.image.clone()} alt={article.title.clone()} loading="lazy" />
            <div class="article-card-body">
                <span class="category">{ &article.category }</span>
                <h3>{ &article.title }</h3>
                <div class="meta">
                    { crate::i18n::fill_two(crate::i18n::current::modal::META_TEMPLATE, &article.author, &article.date) }
                </div>
                {
                    if article.summary.is_empty() {
                        html! {}
                    } else {
                        html! { <p class="article-excerpt">{ &article.summary }</p> }
                    }
                }
                <a
                    href="#"
                    class="read-more"
                    data-article-id={article.id.clone()}
                    onclick={on_read_more}
                >
                    { t::READ_MORE }
                </a>
            </div>
        </article>
    }
}
