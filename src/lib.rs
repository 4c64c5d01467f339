//! Arbor - export a directory tree as a connector-drawn text file

pub mod error;
pub mod ignore;
pub mod output;
pub mod tree;

pub use error::ExportError;
pub use ignore::IgnoreSet;
pub use output::TextFormatter;
pub use tree::{TreeSink, TreeWalker, WalkStats, WalkerConfig};
