use web_sys::window;
use yew::prelude::*;

use crate::{
    config::SCROLL_TO_TOP_THRESHOLD_PX,
    hooks::{scroll_window_to_top, use_window_scroll},
    i18n::current::scroll_to_top as t,
};

#[function_component(ScrollToTopButton)]
pub fn scroll_to_top_button() -> Html {
    let show = use_state(|| false);

    {
        let show = show.clone();
        use_window_scroll(Callback::from(move |_| {
            let scroll_y = window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0);
            show.set(scroll_y > SCROLL_TO_TOP_THRESHOLD_PX);
        }));
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_window_to_top();
    });

    if *show {
        html! {
            <button class="scroll-to-top" {onclick} aria-label={t::TOOLTIP} title={t::TOOLTIP}>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <polyline points="18 15 12 9 6 15"></polyline>
                </svg>
            </button>
        }
    } else {
        html! {}
    }
}
