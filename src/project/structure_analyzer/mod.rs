//! Project structure summarization
//!
//! [`TreeBuilder`] turns the walker's output into a depth-capped
//! [`DirectoryNode`](crate::project::types::DirectoryNode) tree and
//! [`TreeRenderer`] prints it.

pub mod analyzer;
pub mod renderer;

pub use analyzer::TreeBuilder;
pub use renderer::TreeRenderer;
