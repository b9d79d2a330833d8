use std::rc::Rc;

use eden_shared::{
    modal::{CardSnapshot, ClickRegion, CloseTrigger, ModalState},
    ArticleDatabase, ArticleListItem,
};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ModalStore {
    pub catalog: Rc<ArticleDatabase>,
    pub modal: ModalState,
}

pub enum ModalAction {
    /// Open by catalog id; unknown ids are ignored.
    OpenArticle(String),
    /// Open from what a card or ticker item displays.
    OpenSnapshot(CardSnapshot),
    ShowSearchResults {
        query: String,
        results: Vec<ArticleListItem>,
    },
    Close(CloseTrigger),
    /// A click somewhere on the open overlay.
    Click(ClickRegion),
}

impl Reducible for ModalStore {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            ModalAction::OpenArticle(id) => next.modal.open(&next.catalog, &id),
            ModalAction::OpenSnapshot(snapshot) => {
                next.modal.open_with_fallback(&next.catalog, &snapshot);
                true
            },
            ModalAction::ShowSearchResults {
                query,
                results,
            } => next.modal.show_search_results(&query, results),
            ModalAction::Close(trigger) => next.modal.close(trigger),
            ModalAction::Click(region) => next.modal.click(region),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

pub type ModalContext = UseReducerHandle<ModalStore>;

#[hook]
pub fn use_modal() -> Option<ModalContext> {
    use_context::<ModalContext>()
}

#[derive(Properties, PartialEq)]
pub struct ModalProviderProps {
    pub catalog: Rc<ArticleDatabase>,
    pub children: Html,
}

#[function_component(ModalProvider)]
pub fn modal_provider(props: &ModalProviderProps) -> Html {
    let catalog = props.catalog.clone();
    let state = use_reducer(move || ModalStore {
        catalog,
        modal: ModalState::closed(),
    });
    html! {
        <ContextProvider<ModalContext> context={state}>
            {props.children.clone()}
        </ContextProvider<ModalContext>>
    }
}
