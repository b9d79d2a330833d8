use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleBodyProps {
    pub html: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Render a stored article body. The markup is cleaned with ammonia and
/// written straight into the host element, outside Yew's diffing.
#[function_component(ArticleBody)]
pub fn article_body(props: &ArticleBodyProps) -> Html {
    let host_ref = use_node_ref();

    {
        let host_ref = host_ref.clone();
        use_effect_with(props.html.clone(), move |next_html| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(&ammonia::clean(next_html.as_str()));
                host.set_scroll_top(0);
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} id={props.id.clone()} class={props.class.clone()} />
    }
}
