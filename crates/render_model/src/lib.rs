//! Render Model - Drawing operations and the painter facade
//!
//! This crate defines the fixed vocabulary of drawing operations that page
//! painting emits, the `DrawingBackend` trait a concrete renderer implements,
//! and the chainable `Painter` that forwards operations to a backend.

mod operation;
mod paint;
mod backend;
mod painter;
mod recorder;
mod error;

pub use operation::*;
pub use paint::*;
pub use backend::*;
pub use painter::*;
pub use recorder::*;
pub use error::*;
