use eden_shared::{filter::CategoryFilter, CategoryToken};
use yew::prelude::*;

use crate::i18n::current::filter as t;

#[derive(Properties, PartialEq)]
pub struct CategoryFilterBarProps {
    pub filter: CategoryFilter,
    /// Index of the clicked control.
    pub on_select: Callback<usize>,
}

/// Row of `.category-btn` controls; exactly one carries `active`.
#[function_component(CategoryFilterBar)]
pub fn category_filter_bar(props: &CategoryFilterBarProps) -> Html {
    if props.filter.controls().len() <= 1 {
        return Html::default();
    }

    html! {
        <div class="category-filter" role="toolbar" aria-label={t::ARIA}>
            { for props.filter.controls().iter().enumerate().map(|(index, token)| {
                let active = props.filter.is_active(index);
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_| on_select.emit(index))
                };
                html! {
                    <button
                        key={token.as_str().to_string()}
                        type="button"
                        class={classes!("category-btn", active.then_some("active"))}
                        data-category={token.as_str().to_string()}
                        aria-pressed={active.to_string()}
                        {onclick}
                    >
                        { control_label(token) }
                    </button>
                }
            }) }
        </div>
    }
}

fn control_label(token: &CategoryToken) -> String {
    match token {
        CategoryToken::All => t::ALL.to_string(),
        CategoryToken::Named(name) => name
            .split('-')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
    }
}
