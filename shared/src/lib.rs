//! Platform-independent logic behind the EDEN Newspaper pages: the article
//! catalog, category filters, the load-more pager, newsletter validation,
//! the article modal state machine and the header ticker.
//!
//! Nothing in here touches the DOM, so the same types run inside the wasm
//! frontend and in native unit tests.

pub mod article;
pub mod catalog;
pub mod category;
pub mod error;
pub mod filter;
pub mod modal;
pub mod newsletter;
pub mod pager;
pub mod sections;
pub mod ticker;

pub use article::{Article, ArticleListItem};
pub use catalog::ArticleDatabase;
pub use category::CategoryToken;
pub use error::{Error, Result};
pub use filter::CategoryFilter;
pub use modal::{ClickRegion, CloseTrigger, ModalState, ModalView};
pub use newsletter::{subscribe, validate_email, SubscribeOutcome};
pub use pager::{Pager, PagerConfig, SelectionPager};
pub use sections::{SectionConfig, SECTIONS};
