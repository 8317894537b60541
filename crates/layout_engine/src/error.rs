//! Error types for layout engine

use doc_model::NodePath;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Unknown page size {name:?} on page at {path}")]
    UnknownSizeName { name: String, path: NodePath },

    #[error("Invalid resolver settings: {0}")]
    InvalidSettings(String),

    #[error("Document model error: {0}")]
    DocModel(#[from] doc_model::DocModelError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
