//! EDEN Newspaper single-page frontend.

mod components;
mod config;
pub mod hooks;
mod i18n;
mod modal_context;
mod models;
mod pages;
mod router;
mod utils;

use std::rc::Rc;

use yew::prelude::*;

use crate::{models::CatalogContext, modal_context::ModalProvider};

#[function_component(App)]
fn app() -> Html {
    let catalog: CatalogContext = use_memo((), |_| models::load_catalog());

    html! {
        <ContextProvider<CatalogContext> context={catalog.clone()}>
            <ModalProvider catalog={Rc::clone(&catalog)}>
                <router::AppRouter />
            </ModalProvider>
        </ContextProvider<CatalogContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
