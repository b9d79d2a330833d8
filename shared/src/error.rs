//! Errors raised while building the article catalog.

use thiserror::Error;

/// Catalog construction errors.
#[derive(Error, Debug)]
pub enum Error {
    /// The catalog document is not valid JSON or has the wrong shape.
    #[error("invalid article catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// Two records share an id.
    #[error("duplicate article id: {0}")]
    DuplicateArticleId(String),

    /// A record has a blank id.
    #[error("article #{index} has an empty id")]
    EmptyArticleId {
        /// Position of the record in the document.
        index: usize,
    },
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;
