use eden_shared::SECTIONS;
use web_sys::HtmlInputElement;
use yew::{events::InputEvent, prelude::*};
use yew_router::prelude::*;

use crate::{
    components::ticker::NewsTicker,
    config::{self, MOBILE_BREAKPOINT_PX, SITE_NAME},
    i18n::{current::header as t, fill_one},
    modal_context::{use_modal, ModalAction},
    models::use_catalog,
    router::Route,
    utils,
};

#[function_component(Header)]
pub fn header() -> Html {
    let catalog = use_catalog();
    let modal = use_modal();
    let menu_open = use_state(|| false);
    let search_query = use_state(String::new);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    // Nav links collapse the mobile menu after navigating.
    let on_nav_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            if utils::viewport_width() <= MOBILE_BREAKPOINT_PX {
                menu_open.set(false);
            }
        })
    };

    let on_search_input = {
        let search_query = search_query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search_query.set(target.value());
            }
        })
    };

    let run_search = {
        let search_query = search_query.clone();
        Callback::from(move |_: ()| {
            let query = search_query.trim();
            if query.is_empty() {
                utils::alert(t::SEARCH_EMPTY);
                return;
            }
            let results = catalog.search(query);
            if results.is_empty() {
                utils::alert(&fill_one(t::SEARCH_NO_RESULTS_TEMPLATE, query));
                return;
            }
            if let Some(modal) = modal.as_ref() {
                modal.dispatch(ModalAction::ShowSearchResults {
                    query: query.to_string(),
                    results,
                });
            }
        })
    };

    let on_search_click = {
        let run_search = run_search.clone();
        Callback::from(move |_: MouseEvent| run_search.emit(()))
    };

    let on_search_keypress = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            run_search.emit(());
        }
    });

    let logo_src = config::asset_path("images/logo.png");

    html! {
        <header class="site-header">
            <div class="header-top">
                <Link<Route> to={Route::Home} classes="logo">
                    <img src={logo_src} alt={SITE_NAME} />
                    <div class="logo-text">
                        <span class="logo-title">{ SITE_NAME }</span>
                        <span class="logo-tagline">{ t::TAGLINE }</span>
                    </div>
                </Link<Route>>

                <div class="search-box">
                    <input
                        type="text"
                        placeholder={t::SEARCH_PLACEHOLDER}
                        value={(*search_query).clone()}
                        oninput={on_search_input}
                        onkeypress={on_search_keypress}
                    />
                    <button type="button" class="search-btn" onclick={on_search_click}>
                        { t::SEARCH_BUTTON }
                    </button>
                </div>

                <button
                    type="button"
                    class={classes!("hamburger", (*menu_open).then_some("active"))}
                    aria-label={t::OPEN_MENU_ARIA}
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <nav
                class={classes!("main-nav", (*menu_open).then_some("active"))}
                aria-label={t::NAV_MAIN_ARIA}
            >
                <ul>
                    <li onclick={on_nav_click.clone()}>
                        <Link<Route> to={Route::Home}>{ t::NAV_HOME }</Link<Route>>
                    </li>
                    { for SECTIONS.iter().map(|section| html! {
                        <li key={section.slug} onclick={on_nav_click.clone()}>
                            <Link<Route> to={Route::Section { slug: section.slug.to_string() }}>
                                { section.title }
                            </Link<Route>>
                        </li>
                    }) }
                </ul>
            </nav>

            <NewsTicker />
        </header>
    }
}
