use eden_shared::modal::{ClickRegion, CloseTrigger, ModalView};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use yew::prelude::*;

use crate::{
    components::article_body::ArticleBody,
    hooks::{use_body_scroll_lock, use_escape_key},
    i18n::{
        current::{common as common_text, modal as t},
        fill_one, fill_two,
    },
    modal_context::{use_modal, ModalAction, ModalContext},
    models::{ArticleListItem, ArticleSlots},
    utils,
};

/// The shared article modal. Renders nothing useful until a card, ticker
/// item or search opens it through the modal context.
#[function_component(ArticleModal)]
pub fn article_modal() -> Html {
    let modal = use_modal();
    let overlay_ref = use_node_ref();
    let is_open = modal.as_ref().map(|ctx| ctx.modal.is_open()).unwrap_or(false);
    let scroll_locked = modal.as_ref().map(|ctx| ctx.modal.scroll_locked()).unwrap_or(false);

    let close_with = {
        let modal = modal.clone();
        move |trigger: CloseTrigger| {
            let modal = modal.clone();
            Callback::from(move |_| {
                if let Some(modal) = modal.as_ref() {
                    modal.dispatch(ModalAction::Close(trigger));
                }
            })
        }
    };

    use_body_scroll_lock(scroll_locked);
    use_escape_key(is_open, close_with(CloseTrigger::Escape));

    let Some(modal) = modal else {
        return Html::default();
    };

    // Yew delegates events to the app root, so `current_target` is never the
    // overlay; compare the target against the overlay node instead.
    let on_backdrop_click = {
        let modal = modal.clone();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            let overlay = overlay_ref.cast::<Element>();
            let on_overlay = matches!((target, overlay), (Some(t), Some(o)) if t == o);
            modal.dispatch(ModalAction::Click(ClickRegion::of_target(on_overlay)));
        })
    };

    let stop_content_bubble = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_close_click = {
        let close = close_with(CloseTrigger::CloseButton);
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let body = match modal.modal.view() {
        Some(ModalView::Article(slots)) => render_article(slots),
        Some(ModalView::SearchResults {
            query,
            results,
        }) => render_search_results(&modal, query, results),
        None => html! {},
    };

    html! {
        <div
            ref={overlay_ref}
            id="articleModal"
            class="modal"
            style={if is_open { "display: block;" } else { "display: none;" }}
            aria-hidden={(!is_open).to_string()}
            onclick={on_backdrop_click}
        >
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                onclick={stop_content_bubble}
            >
                <button
                    type="button"
                    class="close-modal"
                    aria-label={t::CLOSE_ARIA}
                    onclick={on_close_click}
                >
                    {"×"}
                </button>
                { body }
            </div>
        </div>
    }
}

fn render_article(slots: &ArticleSlots) -> Html {
    let on_share = {
        let title = slots.title.clone();
        Callback::from(move |_: MouseEvent| share_article(&title))
    };
    let on_bookmark = {
        let title = slots.title.clone();
        Callback::from(move |_: MouseEvent| utils::alert(&fill_one(t::BOOKMARKED_TEMPLATE, &title)))
    };
    let on_print = Callback::from(|_: MouseEvent| {
        if let Some(win) = web_sys::window() {
            let _ = win.print();
        }
    });

    html! {
        <article class="modal-article">
            <img id="modalImage" src={slots.image.clone()} alt={slots.title.clone()} />
            <div class="modal-header">
                <span id="modalCategory" class="modal-category">{ &slots.category }</span>
                <h1 id="modalTitle" class="modal-title">{ &slots.title }</h1>
                <div class="modal-meta">
                    {
                        if let Some(author) = slots.author.as_ref() {
                            html! {
                                <span id="modalAuthor" class="modal-author">
                                    { fill_one(common_text::BY_AUTHOR_TEMPLATE, author) }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <span id="modalDate" class="modal-date">{ &slots.date }</span>
                </div>
            </div>
            <ArticleBody
                id={AttrValue::Static("modalContent")}
                class={classes!("modal-body")}
                html={AttrValue::from(slots.body.clone())}
            />
            <div class="modal-actions">
                <button type="button" class="share-btn" onclick={on_share}>{ t::SHARE }</button>
                <button type="button" class="bookmark-btn" onclick={on_bookmark}>{ t::BOOKMARK }</button>
                <button type="button" class="print-btn" onclick={on_print}>{ t::PRINT }</button>
            </div>
        </article>
    }
}

fn render_search_results(modal: &ModalContext, query: &str, results: &[ArticleListItem]) -> Html {
    html! {
        <div class="search-results">
            <h2>{ fill_one(t::SEARCH_TITLE_TEMPLATE, query) }</h2>
            <p>{ fill_one(t::SEARCH_COUNT_TEMPLATE, results.len()) }</p>
            { for results.iter().map(|result| {
                let onclick = {
                    let modal = modal.clone();
                    let id = result.id.clone();
                    Callback::from(move |_: MouseEvent| {
                        modal.dispatch(ModalAction::OpenArticle(id.clone()))
                    })
                };
                html! {
                    <div key={result.id.clone()} class="search-result-item" {onclick}>
                        <img src={result.image.clone()} alt={result.title.clone()} />
                        <div>
                            <span class="category">{ &result.category }</span>
                            <h3>{ &result.title }</h3>
                            <div class="meta">{ fill_two(t::META_TEMPLATE, &result.author, &result.date) }</div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

/// Web Share API when available, otherwise copy "title - url" to the
/// clipboard.
fn share_article(title: &str) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let navigator: JsValue = win.navigator().into();
    let url = utils::current_url();

    let share_fn = js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    if let Some(share) = share_fn {
        let data = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title));
        let _ = js_sys::Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(&url));
        let _ = share.call1(&navigator, &data);
        return;
    }

    let Some(clipboard) = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined())
    else {
        return;
    };
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    let Some(write_text) = write_text else {
        return;
    };
    let text = JsValue::from_str(&format!("{title} - {url}"));
    let Ok(promise) = write_text
        .call1(&clipboard, &text)
        .and_then(|value| value.dyn_into::<js_sys::Promise>())
    else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => utils::alert(t::LINK_COPIED),
            Err(err) => web_sys::console::error_1(&err),
        }
    });
}
