//! Document Model - Abstract document node tree
//!
//! This crate provides the tree of tagged nodes (root, document, pages and
//! drawable content) that page geometry resolution walks and annotates.

mod node;
mod node_path;
mod page_box;
mod tree;
mod error;

pub use node::*;
pub use node_path::*;
pub use page_box::*;
pub use tree::*;
pub use error::*;
