//! Configuration for tree walking

use crate::ignore::IgnoreSet;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Entry names excluded from traversal and output.
    pub ignore: IgnoreSet,
    /// Descend at most this many levels below the root. `None` = unlimited.
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignore: IgnoreSet::default(),
            max_depth: None,
        }
    }
}
