use eden_shared::ticker::{NOTIFICATION_DISMISS_MS, NOTIFICATION_SLIDE_OUT_MS};
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::ticker as t;

#[derive(Properties, PartialEq)]
pub struct TickerNotificationProps {
    pub headline: AttrValue,
    pub on_close: Callback<()>,
}

/// "Breaking News" toast for ticker headlines without an article. Slides out
/// on its own after a few seconds, or closes at once when clicked.
#[function_component(TickerNotification)]
pub fn ticker_notification(props: &TickerNotificationProps) -> Html {
    let leaving = use_state(|| false);

    let auto_timeout = {
        let leaving = leaving.clone();
        use_timeout(move || leaving.set(true), NOTIFICATION_DISMISS_MS)
    };

    // A new headline replaces the toast's content and restarts the timer.
    {
        let leaving = leaving.clone();
        let auto_timeout = auto_timeout.clone();
        use_effect_with(props.headline.clone(), move |_| {
            leaving.set(false);
            auto_timeout.reset();
        });
    }

    {
        let on_close = props.on_close.clone();
        use_effect_with(*leaving, move |leaving| {
            let timer = leaving
                .then(|| Timeout::new(NOTIFICATION_SLIDE_OUT_MS, move || on_close.emit(())));
            move || drop(timer)
        });
    }

    let dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    html! {
        <div
            class={classes!("ticker-notification", (*leaving).then_some("slide-out"))}
            role="alert"
            aria-live="assertive"
            onclick={dismiss.clone()}
        >
            <div class="notification-content">
                <span class="notification-icon" aria-hidden="true">{"📰"}</span>
                <div class="notification-text">
                    <strong>{ t::NOTIFICATION_TITLE }</strong>
                    <br />
                    { props.headline.clone() }
                </div>
                <button
                    type="button"
                    class="notification-close"
                    aria-label={t::NOTIFICATION_CLOSE_ARIA}
                    onclick={dismiss}
                >
                    {"×"}
                </button>
            </div>
        </div>
    }
}
