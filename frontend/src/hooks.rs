//! Yew hooks shared across pages: pagination, scroll handling and key bindings.

use eden_shared::{Pager, PagerConfig, SelectionPager};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, ScrollBehavior, ScrollToOptions,
};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Load-more state over the currently filtered cards.
#[derive(Clone)]
pub struct PagerHandle {
    state: UseStateHandle<SelectionPager>,
    selection: String,
    total: usize,
    pager: Pager,
}

impl PagerHandle {
    /// Pager for the selection and count of this render.
    pub fn pager(&self) -> Pager {
        self.pager
    }

    /// Reveal the next batch.
    pub fn load_more(&self) {
        if let Some(next) = self.state.advance(&self.selection, self.total) {
            self.state.set(next);
        }
    }
}

/// `selection` identifies the filter choice. Whenever it (or `total`)
/// differs from what the stored pager was built for, this render already
/// starts over from the initial batch, so "remaining" always refers to the
/// filtered set.
///
/// # Example
/// ```rust
/// use crate::hooks::use_pager;
///
/// #[function_component(Feed)]
/// fn feed() -> Html {
///     let cards = vec!["a", "b", "c"];
///     let handle = use_pager(PagerConfig::DEFAULT, cards.len(), "all".to_string());
///     let pager = handle.pager();
///     html! { <div>{ format!("{} of {}", pager.revealed(), pager.total()) }</div> }
/// }
/// ```
#[hook]
pub fn use_pager(config: PagerConfig, total: usize, selection: String) -> PagerHandle {
    let state = {
        let selection = selection.clone();
        use_state(move || SelectionPager::new(config, selection, total))
    };
    let pager = state.current(&selection, total);

    PagerHandle {
        state,
        selection,
        total,
        pager,
    }
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

/// Smoothly scroll the window back to the top-left corner.
pub fn scroll_window_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Suspend page scrolling while `locked` is true.
#[hook]
pub fn use_body_scroll_lock(locked: bool) {
    use_effect_with(locked, |locked| {
        crate::utils::set_body_overflow(if *locked { "hidden" } else { "auto" });
        let was_locked = *locked;
        move || {
            if was_locked {
                crate::utils::set_body_overflow("auto");
            }
        }
    });
}

/// Call `on_escape` when Escape is pressed, only while `active`.
#[hook]
pub fn use_escape_key(active: bool, on_escape: Callback<()>) {
    use_effect_with(active, move |active| {
        let listener = if *active {
            let listener = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    on_escape.emit(());
                }
            }) as Box<dyn FnMut(_)>);

            if let Some(doc) = window().and_then(|win| win.document()) {
                let _ = doc
                    .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
            }
            Some(listener)
        } else {
            None
        };

        move || {
            if let Some(listener) = listener {
                if let Some(doc) = window().and_then(|win| win.document()) {
                    let _ = doc.remove_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    });
}

/// Run `on_scroll` on every window scroll event (and once on mount).
#[hook]
pub fn use_window_scroll(on_scroll: Callback<()>) {
    use_effect_with((), move |_| {
        on_scroll.emit(());
        let listener = Closure::wrap(Box::new(move || on_scroll.emit(())) as Box<dyn Fn()>);

        if let Some(win) = window() {
            let _ = win.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        }

        move || {
            if let Some(win) = window() {
                let _ = win.remove_event_listener_with_callback(
                    "scroll",
                    listener.as_ref().unchecked_ref(),
                );
            }
            drop(listener);
        }
    });
}

/// Add `animate-in` to the referenced element the first time it scrolls into
/// view.
#[hook]
pub fn use_reveal_on_scroll(node: NodeRef) {
    use_effect_with(node, |node| {
        let mut handle = None;
        if let Some(element) = node.cast::<Element>() {
            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if entry.is_intersecting() {
                            let target = entry.target();
                            let _ = target.class_list().add_1("animate-in");
                            observer.unobserve(&target);
                        }
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(0.1));
            options.set_root_margin("0px 0px -50px 0px");

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            {
                Ok(observer) => {
                    observer.observe(&element);
                    handle = Some((observer, callback));
                },
                Err(_) => {
                    // No IntersectionObserver: show immediately.
                    let _ = element.class_list().add_1("animate-in");
                },
            }
        }

        move || {
            if let Some((observer, callback)) = handle {
                observer.disconnect();
                drop(callback);
            }
        }
    });
}
