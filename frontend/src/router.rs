use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        article_modal::ArticleModal, footer::Footer, header::Header,
        reading_progress::ReadingProgress, scroll_to_top_button::ScrollToTopButton,
    },
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "gh-pages"))]
    #[at("/")]
    Home,
    #[cfg(feature = "gh-pages")]
    #[at("/eden/")]
    Home,

    #[cfg(not(feature = "gh-pages"))]
    #[at("/section/:slug")]
    Section { slug: String },
    #[cfg(feature = "gh-pages")]
    #[at("/eden/section/:slug")]
    Section { slug: String },

    #[not_found]
    #[cfg(not(feature = "gh-pages"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "gh-pages")]
    #[at("/eden/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Section {
            slug,
        } => {
            html! { <pages::section::SectionPage slug={slug} /> }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <ReadingProgress />
            <div class="site">
                <Header />
                <div class="site-content">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
            <ArticleModal />
            <ScrollToTopButton />
        </BrowserRouter>
    }
}

