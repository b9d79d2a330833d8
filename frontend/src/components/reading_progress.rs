use yew::prelude::*;

use crate::{hooks::use_window_scroll, utils::page_scroll_percent};

/// Thin bar across the top of the viewport tracking how far the page has
/// been scrolled.
#[function_component(ReadingProgress)]
pub fn reading_progress() -> Html {
    let percent = use_state_eq(|| 0.0_f64);

    {
        let percent = percent.clone();
        use_window_scroll(Callback::from(move |_| percent.set(page_scroll_percent())));
    }

    html! {
        <div class="reading-progress" style={format!("width: {:.2}%;", *percent)} aria-hidden="true" />
    }
}
