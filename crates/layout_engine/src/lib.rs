//! Layout Engine - Page geometry
//!
//! This crate resolves the physical size of every page in a document tree
//! before box layout runs. Sizes can be given by name (`"A4"`), as a
//! `[width, height]` pair, as a `{width, height}` object or as a bare width.

mod paper_size;
mod size_spec;
mod settings;
mod resolver;
mod error;

pub use paper_size::*;
pub use size_spec::*;
pub use settings::*;
pub use resolver::*;
pub use error::*;
