//! Error types for render model

use crate::Operation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Backend {backend} does not support {operation}")]
    MissingCapability { operation: Operation, backend: String },

    #[error("Backend failed during {operation}: {message}")]
    Backend { operation: Operation, message: String },
}

impl PaintError {
    /// Error for an operation `backend` does not implement
    pub fn missing<B: crate::DrawingBackend + ?Sized>(backend: &B, operation: Operation) -> Self {
        PaintError::MissingCapability {
            operation,
            backend: backend.backend_name().to_string(),
        }
    }

    /// The operation that failed
    pub fn operation(&self) -> Operation {
        match self {
            PaintError::MissingCapability { operation, .. } => *operation,
            PaintError::Backend { operation, .. } => *operation,
        }
    }
}

pub type Result<T> = std::result::Result<T, PaintError>;
