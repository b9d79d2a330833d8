// 重新导出shared crate的数据模型
use std::rc::Rc;

pub use eden_shared::{
    modal::{ArticleSlots, CardSnapshot},
    Article, ArticleDatabase, ArticleListItem,
};
use yew::prelude::*;

/// Read-only catalog handed down the component tree.
pub type CatalogContext = Rc<ArticleDatabase>;

/// Build the compiled-in catalog. A broken catalog is logged and the site
/// renders without articles.
pub fn load_catalog() -> ArticleDatabase {
    match ArticleDatabase::bundled() {
        Ok(db) => db,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load article catalog: {}", e).into());
            ArticleDatabase::default()
        },
    }
}

#[hook]
pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>().unwrap_or_default()
}
