//! Directory tree walking logic
//!
//! `TreeWalker` performs the depth-first traversal and streams one call per
//! emitted line into a [`TreeSink`] implementation, so it carries O(depth)
//! state instead of building the tree in memory.

mod config;
mod walker;

pub use config::WalkerConfig;
pub use walker::{TreeSink, TreeWalker, WalkStats};
