//! Ignore-name configuration
//!
//! Entry names excluded from traversal and output. The built-in defaults
//! cover the usual VCS, editor, and dependency directories; user-supplied
//! names from the CLI are unioned in on top.

use std::collections::HashSet;

/// Directory names excluded by default.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "__pycache__",
    ".git",
    ".vscode",
    "node_modules",
    "venv",
    ".venv",
    ".idea",
];

/// File names excluded by default.
pub const DEFAULT_IGNORE_FILES: &[&str] = &[".DS_Store", ".gitignore"];

/// Names to exclude, fixed for the duration of one run.
///
/// Directory and file names are kept in separate sets: a directory named
/// `.gitignore` is not excluded by the file default of the same name.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    dirs: HashSet<String>,
    files: HashSet<String>,
}

impl IgnoreSet {
    /// An empty set that ignores nothing.
    pub fn empty() -> Self {
        Self {
            dirs: HashSet::new(),
            files: HashSet::new(),
        }
    }

    /// Union additional directory names into the set.
    pub fn with_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dirs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Union additional file names into the set.
    pub fn with_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(names.into_iter().map(Into::into));
        self
    }

    /// True if a directory with this name should appear in the output.
    pub fn keeps_dir(&self, name: &str) -> bool {
        !self.dirs.contains(name)
    }

    /// True if a file with this name should appear in the output.
    pub fn keeps_file(&self, name: &str) -> bool {
        !self.files.contains(name)
    }
}

impl Default for IgnoreSet {
    /// The built-in defaults.
    fn default() -> Self {
        Self::empty()
            .with_dirs(DEFAULT_IGNORE_DIRS.iter().copied())
            .with_files(DEFAULT_IGNORE_FILES.iter().copied())
    }
}
