use thiserror::Error;

use crate::catalog::Category;

/// Errors raised while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{category} catalog has no items")]
    Empty { category: Category },

    #[error("{category} catalog contains duplicate id {id:?}")]
    DuplicateId { category: Category, id: String },

    #[error("item {id:?} has an invalid color {color:?}")]
    InvalidColor { id: String, color: String },

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by direct index manipulation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
