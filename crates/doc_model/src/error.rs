//! Error types for document model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocModelError {
    #[error("Malformed document tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No node at path {0}")]
    PathNotFound(crate::NodePath),
}

pub type Result<T> = std::result::Result<T, DocModelError>;
