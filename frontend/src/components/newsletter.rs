use eden_shared::{subscribe, SubscribeOutcome};
use web_sys::HtmlInputElement;
use yew::{events::InputEvent, prelude::*};

use crate::i18n::current::newsletter as t;

#[derive(Properties, PartialEq)]
pub struct NewsletterProps {
    /// Confirmation text of the current section.
    pub thanks: AttrValue,
}

#[function_component(Newsletter)]
pub fn newsletter(props: &NewsletterProps) -> Html {
    let email = use_state(String::new);
    let outcome = use_state(|| None::<SubscribeOutcome>);

    let oninput = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(target.value());
            }
        })
    };

    let submit = {
        let email = email.clone();
        let outcome = outcome.clone();
        let thanks = props.thanks.clone();
        Callback::from(move |_: ()| {
            let result = subscribe(&email, &thanks);
            if result.clears_input() {
                email.set(String::new());
            }
            outcome.set(Some(result));
        })
    };

    let onclick = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    let onkeypress = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            submit.emit(());
        }
    });

    html! {
        <section class="newsletter sidebar-section">
            <h3>{ t::TITLE }</h3>
            <p>{ t::DESCRIPTION }</p>
            <input
                type="email"
                placeholder={t::PLACEHOLDER}
                value={(*email).clone()}
                {oninput}
                {onkeypress}
            />
            <button type="button" {onclick}>{ t::SUBMIT }</button>
            {
                match outcome.as_ref() {
                    Some(result) => {
                        let class = match result {
                            SubscribeOutcome::Subscribed { .. } => "newsletter-message success",
                            SubscribeOutcome::Rejected { .. } => "newsletter-message error",
                        };
                        html! { <p {class} role="status">{ result.message() }</p> }
                    },
                    None => html! {},
                }
            }
        </section>
    }
}
