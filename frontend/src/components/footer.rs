use eden_shared::SECTIONS;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{config::SITE_NAME, i18n::current::footer as t, router::Route};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <h3>{ SITE_NAME }</h3>
                <p>{ crate::i18n::current::header::TAGLINE }</p>
            </div>
            <nav class="footer-sections" aria-label={t::SECTIONS_ARIA}>
                { for SECTIONS.iter().map(|section| html! {
                    <Link<Route> key={section.slug} to={Route::Section { slug: section.slug.to_string() }}>
                        { section.title }
                    </Link<Route>>
                }) }
            </nav>
            <p class="footer-copyright">{ t::COPYRIGHT }</p>
        </footer>
    }
}
