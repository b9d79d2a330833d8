use eden_shared::PagerConfig;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::i18n::current::load_more as t;

#[derive(Properties, PartialEq)]
pub struct LoadMoreButtonProps {
    /// Hide the button once every filtered card is shown.
    pub exhausted: bool,
    pub on_load: Callback<()>,
    #[prop_or(PagerConfig::DEFAULT.loading_label_ms)]
    pub loading_label_ms: u32,
}

#[function_component(LoadMoreButton)]
pub fn load_more_button(props: &LoadMoreButtonProps) -> Html {
    let loading = use_state(|| false);
    let timer = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let loading = loading.clone();
        let timer = timer.clone();
        let on_load = props.on_load.clone();
        let delay = props.loading_label_ms;
        Callback::from(move |_| {
            on_load.emit(());
            if delay == 0 {
                return;
            }
            loading.set(true);
            let loading = loading.clone();
            *timer.borrow_mut() = Some(Timeout::new(delay, move || loading.set(false)));
        })
    };

    if props.exhausted {
        return Html::default();
    }

    html! {
        <div class="load-more">
            <button
                id="load-more-btn"
                type="button"
                class={classes!("load-more-btn", (*loading).then_some("loading"))}
                {onclick}
            >
                { if *loading { t::LOADING } else { t::IDLE } }
            </button>
        </div>
    }
}
